// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::sync::Arc;

use parley_stomp::client::ConnectorProvider;
use parley_stomp::{mods, Client, ClientBuilder, ConnectionConfig, Event, IDProvider};

#[derive(Clone)]
pub struct StompClient {
    pub(crate) client: Arc<Client>,
}

impl StompClient {
    pub fn builder() -> StompClientBuilder {
        StompClientBuilder {
            builder: Client::builder(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

pub struct StompClientBuilder {
    builder: ClientBuilder,
}

impl StompClientBuilder {
    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.builder = self.builder.set_connector_provider(connector_provider);
        self
    }

    pub fn set_connection_config(mut self, config: ConnectionConfig) -> Self {
        self.builder = self.builder.set_connection_config(config);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.builder = self.builder.set_id_provider(id_provider);
        self
    }

    pub fn set_event_handler<T>(
        mut self,
        handler: impl Fn(Client, Event) -> T + Send + Sync + 'static,
    ) -> Self
    where
        T: Future<Output = ()> + Send + 'static,
    {
        self.builder = self.builder.set_event_handler(handler);
        self
    }

    pub fn build(self) -> StompClient {
        let client = self
            .builder
            .add_mod(mods::Chat::default())
            .add_mod(mods::Status::default())
            .build();

        StompClient {
            client: Arc::new(client),
        }
    }
}
