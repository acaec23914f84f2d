// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use secrecy::Secret;
use tokio::sync::watch;

use parley_stomp::{ConnectionError, ConnectionState};

use crate::app::deps::DynAppContext;
use crate::app::event_handlers::ServerEventHandlerQueue;
use crate::app::services::{ConnectionService, ConversationsService, PresenceService};
use crate::client_builder::ClientBuilder;
use crate::domain::account::models::User;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::stomp::StompClient;
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

/// Identifies an observer added via `Client::add_observer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl From<u64> for ObserverId {
    fn from(value: u64) -> Self {
        ObserverId(value)
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub connection: ConnectionService,
    pub conversations: ConversationsService,
    pub presence: PresenceService,
    pub(crate) ctx: DynAppContext,
    pub(crate) event_dispatcher: Arc<ImmediateClientEventDispatcher>,
    pub(crate) stomp: StompClient,
    // The STOMP client only holds a weak reference to the queue.
    pub(crate) _server_event_handler_queue: Arc<ServerEventHandlerQueue>,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    /// Connects with the credentials of the configured `CredentialProvider`.
    pub async fn start(&self) -> Result<(), ConnectionError> {
        self.connection.start().await
    }

    pub async fn connect(&self, token: Secret<String>) -> Result<(), ConnectionError> {
        self.connection.connect(token).await
    }

    pub async fn disconnect(&self) {
        self.connection.disconnect().await
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection.connection_state()
    }

    pub fn connection_state_watch(&self) -> watch::Receiver<ConnectionState> {
        self.stomp.client().connection_state_watch()
    }

    pub fn current_user(&self) -> Option<User> {
        self.ctx.current_user.read().clone()
    }

    pub fn add_observer(&self, observer: Arc<dyn ClientDelegate>) -> ObserverId {
        self.event_dispatcher.add_observer(observer)
    }

    /// Returns `false` if no observer with `id` was registered.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        self.event_dispatcher.remove_observer(id)
    }
}
