// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::Secret;

use parley_stomp::{ConnectionError, ConnectionState, RequestError};

use crate::domain::connection::services::ConnectionService;
use crate::infra::stomp::StompClient;

#[async_trait]
impl ConnectionService for StompClient {
    async fn connect(&self, token: Secret<String>) -> Result<(), ConnectionError> {
        self.client.connect(token).await
    }

    async fn disconnect(&self) {
        self.client.disconnect().await
    }

    fn connection_state(&self) -> ConnectionState {
        self.client.connection_state()
    }

    fn subscribe_to_topics(&self) -> Result<(), RequestError> {
        self.client.resubscribe_all()
    }
}
