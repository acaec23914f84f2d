// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::client::builder::UndefinedConnector;
use crate::client::subscriptions::SubscriptionRegistry;
use crate::client::{ConnectionState, ConnectorProvider, EventHandler, ModuleLookup};
use crate::connector::Connection;
use crate::deps::{IDProvider, IncrementingIDProvider};
use crate::stomp::{Command, Frame};
use crate::util::{PinnedFuture, RequestError};
use crate::{Client, ConnectionConfig, Event};

#[derive(Clone)]
pub struct ModuleContext {
    pub(super) inner: Arc<ModuleContextInner>,
}

impl ModuleContext {
    /// Sends `payload` as JSON to `destination`. Nothing is queued: if there's no live
    /// connection the payload is dropped and `RequestError::NotConnected` returned.
    pub(crate) fn send_json(
        &self,
        destination: &str,
        payload: &impl Serialize,
    ) -> Result<(), RequestError> {
        self.inner.send_json(destination, payload)
    }

    pub(crate) fn schedule_event(&self, event: Event) {
        self.inner.schedule_event(event)
    }
}

pub(super) struct ModuleContextInner {
    pub config: ConnectionConfig,
    pub connector_provider: ConnectorProvider,
    pub connection: RwLock<Option<Box<dyn Connection>>>,
    pub state: watch::Sender<ConnectionState>,
    pub supervisor: Mutex<Option<JoinHandle<()>>>,
    pub subscriptions: Mutex<SubscriptionRegistry>,
    pub event_handler: EventHandler,
    pub pending_events: Mutex<VecDeque<Event>>,
    pub dispatch_lock: tokio::sync::Mutex<()>,
    pub mods: Weak<ModuleLookup>,
    pub id_provider: Box<dyn IDProvider>,
}

impl ModuleContextInner {
    pub fn send_frame(&self, frame: Frame) -> Result<(), RequestError> {
        let connection = self.connection.read();

        let Some(conn) = &*connection else {
            warn!(
                "Dropping {} frame for {} since we're not connected.",
                frame.command,
                frame.destination().unwrap_or("<none>")
            );
            return Err(RequestError::NotConnected);
        };

        conn.send_frame(frame).map_err(|err| RequestError::Generic {
            msg: err.to_string(),
        })
    }

    pub fn send_json(
        &self,
        destination: &str,
        payload: &impl Serialize,
    ) -> Result<(), RequestError> {
        let body = serde_json::to_string(payload)?;
        let frame = Frame::new(Command::Send)
            .set_header("destination", destination)
            .set_header("content-type", "application/json")
            .set_body(body);
        self.send_frame(frame)
    }

    pub fn schedule_event(&self, event: Event) {
        self.pending_events.lock().push_back(event)
    }

    /// Hands all scheduled events to the event handler, one after the other. If another task is
    /// already draining the queue it'll pick up our events as well, which also keeps handlers
    /// that schedule events themselves from deadlocking.
    pub async fn dispatch_pending_events(self: &Arc<Self>) {
        loop {
            let Ok(guard) = self.dispatch_lock.try_lock() else {
                return;
            };

            loop {
                let Some(event) = self.pending_events.lock().pop_front() else {
                    break;
                };

                let client = match Client::try_from(self.clone()) {
                    Ok(client) => client,
                    Err(err) => {
                        error!("Dropping event {:?}. {}", event, err);
                        continue;
                    }
                };

                (self.event_handler)(client, event).await;
            }

            drop(guard);

            if self.pending_events.lock().is_empty() {
                return;
            }
        }
    }
}

impl Default for ModuleContext {
    fn default() -> Self {
        ModuleContext {
            inner: Arc::new(ModuleContextInner {
                config: Default::default(),
                connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
                connection: Default::default(),
                state: watch::channel(ConnectionState::Disconnected).0,
                supervisor: Default::default(),
                subscriptions: Default::default(),
                event_handler: Box::new(|_, _| Box::pin(async {}) as PinnedFuture<_>),
                pending_events: Default::default(),
                dispatch_lock: Default::default(),
                mods: Default::default(),
                id_provider: Box::new(IncrementingIDProvider::new("sub")),
            }),
        }
    }
}
