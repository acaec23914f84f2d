// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use secrecy::Secret;
use tokio::sync::watch;

use crate::client::client::ClientInner;
use crate::client::module_context::ModuleContextInner;
use crate::client::subscriptions::SubscriptionRegistry;
use crate::client::{
    ConnectionState, ConnectorProvider, EventHandler, ModuleContext, ModuleLookup,
};
use crate::connector::{Connection, ConnectionError, ConnectionEventHandler, Connector};
use crate::deps::{IDProvider, IncrementingIDProvider};
use crate::mods::AnyModule;
use crate::stomp::Frame;
use crate::util::PinnedFuture;
use crate::{Client, ConnectionConfig, Event};

pub struct UndefinedConnector {}

pub struct ClientBuilder {
    config: ConnectionConfig,
    connector_provider: ConnectorProvider,
    mods: ModuleLookup,
    id_provider: Box<dyn IDProvider>,
    event_handler: EventHandler,
}

impl ClientBuilder {
    pub(super) fn new() -> Self {
        ClientBuilder {
            config: Default::default(),
            connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
            mods: Default::default(),
            id_provider: Box::new(IncrementingIDProvider::new("sub")),
            event_handler: Box::new(|_, _| Box::pin(async {}) as PinnedFuture<_>),
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.connector_provider = connector_provider;
        self
    }

    pub fn set_connection_config(mut self, config: ConnectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_event_handler<T>(
        mut self,
        handler: impl Fn(Client, Event) -> T + Send + Sync + 'static,
    ) -> Self
    where
        T: Future<Output = ()> + Send + 'static,
    {
        self.event_handler = Box::new(move |client, event| {
            let fut = handler(client, event);
            Box::pin(async move { fut.await }) as PinnedFuture<_>
        });
        self
    }

    pub fn add_mod<M: AnyModule + Clone + 'static>(mut self, m: M) -> Self {
        self.mods
            .insert(TypeId::of::<M>(), RwLock::new(Box::new(m)));
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Box::new(id_provider);
        self
    }

    pub fn build(self) -> Client {
        let mods = Arc::new(self.mods);

        // Each module's destinations become permanent registrations that route into the module.
        let mut subscriptions = SubscriptionRegistry::default();
        for (type_id, m) in mods.iter() {
            for destination in m.read().subscriptions() {
                let lookup = Arc::downgrade(&mods);
                let type_id = *type_id;
                let subscribed_destination = destination.to_string();

                subscriptions.register(
                    destination,
                    Arc::new(move |frame: &Frame| {
                        let Some(mods) = lookup.upgrade() else {
                            return Ok(());
                        };
                        let Some(m) = mods.get(&type_id) else {
                            return Ok(());
                        };
                        let result = m.read().handle_message_frame(&subscribed_destination, frame);
                        result
                    }),
                );
            }
        }

        let context_inner = Arc::new(ModuleContextInner {
            config: self.config,
            connector_provider: self.connector_provider,
            connection: Default::default(),
            state: watch::channel(ConnectionState::Disconnected).0,
            supervisor: Default::default(),
            subscriptions: parking_lot::Mutex::new(subscriptions),
            event_handler: self.event_handler,
            pending_events: Default::default(),
            dispatch_lock: Default::default(),
            mods: Arc::downgrade(&mods),
            id_provider: self.id_provider,
        });

        for m in mods.values() {
            m.write().register_with(ModuleContext {
                inner: context_inner.clone(),
            });
        }

        Client {
            inner: Arc::new(ClientInner {
                mods: mods.clone(),
                context: context_inner,
            }),
        }
    }
}

#[async_trait]
impl Connector for UndefinedConnector {
    async fn connect(
        &self,
        _config: &ConnectionConfig,
        _token: &Secret<String>,
        _event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        panic!("Client doesn't have a connector. Provide one before calling connect()")
    }
}
