// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::Secret;

use parley_stomp::{ConnectionError, ConnectionState, RequestError};

#[async_trait]
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait ConnectionService: Send + Sync {
    /// Resolves with the outcome of the first connection attempt. Reconnecting continues in
    /// the background until `disconnect` is called.
    async fn connect(&self, token: Secret<String>) -> Result<(), ConnectionError>;
    async fn disconnect(&self);

    fn connection_state(&self) -> ConnectionState;

    /// Subscribes the chat topics on the current connection. Needs to happen after every
    /// (re)connect since the server forgets subscriptions with the connection.
    fn subscribe_to_topics(&self) -> Result<(), RequestError>;
}
