// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use anyhow::Result;
use secrecy::Secret;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::client::builder::ClientBuilder;
use crate::client::module_context::ModuleContextInner;
use crate::client::{ConnectionState, Event, FrameHandler, ModuleLookup, SubscriptionId};
use crate::connector::{Connection, ConnectionError, ConnectionEvent, ConnectionEventHandler};
use crate::mods::AnyModule;
use crate::stomp::{Command, Frame};
use crate::util::{PinnedFuture, RequestError};
use crate::Event as ClientEvent;

#[derive(Clone)]
pub struct Client {
    pub(super) inner: Arc<ClientInner>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("state", &self.connection_state())
            .finish()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Starts connecting and resolves with the outcome of the first attempt. Regardless of that
    /// outcome the client keeps reconnecting after every failure or closure until `disconnect`
    /// is called.
    pub async fn connect(&self, token: Secret<String>) -> Result<(), ConnectionError> {
        self.inner.clone().connect(token).await
    }

    /// Stops reconnecting and closes the current connection, if any. Calling it again is a
    /// no-op.
    pub async fn disconnect(&self) {
        self.inner.disconnect().await
    }

    pub fn connection_state(&self) -> ConnectionState {
        *self.inner.context.state.borrow()
    }

    pub fn connection_state_watch(&self) -> watch::Receiver<ConnectionState> {
        self.inner.context.state.subscribe()
    }

    /// Registers `handler` for `destination`. The registration is kept across reconnects but
    /// only becomes live on the server once `resubscribe_all` is called for a connection, unless
    /// we're connected right now in which case it's subscribed immediately.
    pub fn subscribe(
        &self,
        destination: impl Into<String>,
        handler: impl Fn(&Frame) -> Result<()> + Send + Sync + 'static,
    ) -> SubscriptionId {
        let handler: FrameHandler = Arc::new(handler);
        let ctx = &self.inner.context;

        let (id, frame) = {
            let mut subscriptions = ctx.subscriptions.lock();
            let id = subscriptions.register(destination, handler);
            let frame = (self.connection_state() == ConnectionState::Connected)
                .then(|| subscriptions.activate(id, ctx.id_provider.as_ref()))
                .flatten();
            (id, frame)
        };

        if let Some(frame) = frame {
            if let Err(err) = ctx.send_frame(frame) {
                warn!("Failed to subscribe. {}", err);
            }
        }

        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let frame = self.inner.context.subscriptions.lock().unregister(id);
        let Some(frame) = frame else {
            return;
        };
        if let Err(err) = self.inner.context.send_frame(frame) {
            debug!("Could not send UNSUBSCRIBE. {}", err);
        }
    }

    /// Subscribes every registration on the current connection.
    pub fn resubscribe_all(&self) -> Result<(), RequestError> {
        let ctx = &self.inner.context;

        if ctx.connection.read().is_none() {
            return Err(RequestError::NotConnected);
        }

        let frames = ctx
            .subscriptions
            .lock()
            .activate_all(ctx.id_provider.as_ref());

        info!("Subscribing to {} destinations.", frames.len());

        for frame in frames {
            ctx.send_frame(frame)?;
        }
        Ok(())
    }

    pub fn subscribed_destinations(&self) -> Vec<String> {
        self.inner.context.subscriptions.lock().destinations()
    }

    pub fn send_json(
        &self,
        destination: &str,
        payload: &impl Serialize,
    ) -> Result<(), RequestError> {
        self.inner.context.send_json(destination, payload)
    }

    pub fn get_mod<M: AnyModule + Clone>(&self) -> M {
        self.inner.get_mod()
    }
}

pub(super) struct ClientInner {
    pub context: Arc<ModuleContextInner>,
    pub mods: Arc<ModuleLookup>,
}

impl ClientInner {
    async fn connect(self: Arc<Self>, token: Secret<String>) -> Result<(), ConnectionError> {
        self.disconnect().await;

        let (tx, rx) = oneshot::channel();
        let supervisor = tokio::spawn(self.clone().run_supervisor(token, tx));
        self.context.supervisor.lock().replace(supervisor);

        rx.await.unwrap_or_else(|_| {
            Err(ConnectionError::Generic {
                msg: "Connection attempt was cancelled".to_string(),
            })
        })
    }

    async fn disconnect(&self) {
        if let Some(supervisor) = self.context.supervisor.lock().take() {
            supervisor.abort();
        }

        let connection = self.context.connection.write().take();
        if let Some(connection) = connection {
            connection.disconnect();
        }

        self.context.subscriptions.lock().deactivate_all();
        self.set_state(ConnectionState::Disconnected, None).await;
    }

    /// Connects, waits for the connection to go away and starts over after the configured
    /// delay. Runs until aborted by `disconnect`.
    async fn run_supervisor(
        self: Arc<Self>,
        token: Secret<String>,
        first_attempt: oneshot::Sender<Result<(), ConnectionError>>,
    ) {
        let mut first_attempt = Some(first_attempt);

        loop {
            self.set_state(ConnectionState::Connecting, None).await;

            let (closed_tx, mut closed_rx) = mpsc::unbounded_channel();

            match self.establish_connection(&token, closed_tx).await {
                Ok(connection) => {
                    self.context.connection.write().replace(connection);
                    self.set_state(ConnectionState::Connected, None).await;

                    if let Some(tx) = first_attempt.take() {
                        _ = tx.send(Ok(()));
                    }

                    let error = closed_rx.recv().await.flatten();

                    self.context.connection.write().take();
                    self.context.subscriptions.lock().deactivate_all();

                    match &error {
                        Some(error) => warn!("Connection closed. {}", error),
                        None => info!("Connection closed."),
                    }
                    self.set_state(ConnectionState::Disconnected, error).await;
                }
                Err(error) => {
                    warn!("Connection attempt failed. {}", error);
                    self.set_state(ConnectionState::Failed, Some(error.clone()))
                        .await;

                    if let Some(tx) = first_attempt.take() {
                        _ = tx.send(Err(error));
                    }
                }
            }

            debug!(
                "Reconnecting in {:?}.",
                self.context.config.reconnect_delay
            );
            time::sleep(self.context.config.reconnect_delay).await;
        }
    }

    async fn establish_connection(
        self: &Arc<Self>,
        token: &Secret<String>,
        closed: mpsc::UnboundedSender<Option<ConnectionError>>,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        let inner = self.clone();

        let event_handler: ConnectionEventHandler = Box::new(move |event| {
            let inner = inner.clone();
            let closed = closed.clone();

            Box::pin(async move {
                match event {
                    ConnectionEvent::Disconnected { error } => {
                        _ = closed.send(error);
                    }
                    ConnectionEvent::Frame(frame) => inner.handle_frame(frame).await,
                }
            }) as PinnedFuture<_>
        });

        let connector = (self.context.connector_provider)();
        let config = &self.context.config;

        match time::timeout(
            config.connect_timeout,
            connector.connect(config, token, event_handler),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ConnectionError::TimedOut),
        }
    }

    async fn handle_frame(&self, frame: Frame) {
        match frame.command {
            Command::Message => {
                let handlers = self.context.subscriptions.lock().handlers_for(&frame);

                if handlers.is_empty() {
                    debug!(
                        "Ignoring MESSAGE for {} without a matching subscription.",
                        frame.destination().unwrap_or("<none>")
                    );
                }

                for (destination, handler) in handlers {
                    if let Err(err) = handler(&frame) {
                        error!("Failed to handle frame from {}. {}", destination, err);
                    }
                }
            }
            Command::Error => warn!(
                "Server reported an error. {}",
                frame.header("message").unwrap_or(&frame.body)
            ),
            command => debug!("Ignoring {} frame.", command),
        }

        self.context.dispatch_pending_events().await;
    }

    async fn set_state(&self, state: ConnectionState, error: Option<ConnectionError>) {
        let previous = self.context.state.send_replace(state);
        if previous == state {
            return;
        }

        info!("Connection state changed from {} to {}.", previous, state);

        self.context
            .schedule_event(ClientEvent::Client(Event::ConnectionStateChanged {
                state,
                error,
            }));
        self.context.dispatch_pending_events().await;
    }

    fn get_mod<M: AnyModule + Clone>(&self) -> M {
        let Some(entry) = self.mods.get(&TypeId::of::<M>()) else {
            panic!("Could not find requested module.")
        };
        let Some(m) = entry.read().as_any().downcast_ref::<M>().cloned() else {
            panic!("Module has an unexpected type.")
        };
        m
    }
}

impl TryFrom<Arc<ModuleContextInner>> for Client {
    type Error = anyhow::Error;

    fn try_from(value: Arc<ModuleContextInner>) -> std::result::Result<Self, Self::Error> {
        let mods = value.mods.upgrade().ok_or(anyhow::format_err!(
            "Used module after client was released."
        ))?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                context: value,
                mods,
            }),
        })
    }
}
