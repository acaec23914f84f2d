// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

use crate::stomp::Frame;
use crate::util::PinnedFuture;
use crate::ConnectionConfig;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Timed out")]
    TimedOut,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Missing credentials")]
    MissingCredentials,
    #[error("{msg:?}")]
    Generic { msg: String },
}

/// Receives everything a live connection produces. The returned future is awaited before the
/// next frame is read, so frames reach the handler strictly in the order they arrived.
pub type ConnectionEventHandler = Box<dyn Fn(ConnectionEvent) -> PinnedFuture<()> + Send + Sync>;

#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        config: &ConnectionConfig,
        token: &Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

#[derive(Debug)]
pub enum ConnectionEvent {
    Disconnected { error: Option<ConnectionError> },
    Frame(Frame),
}

pub trait Connection: Send + Sync {
    fn send_frame(&self, frame: Frame) -> Result<()>;
    fn disconnect(&self);
}
