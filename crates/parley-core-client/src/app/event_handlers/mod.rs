// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use connection_event_handler::ConnectionEventHandler;
pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use parley_stomp::Event as StompEvent;
pub use server_event::*;
pub use user_state_event_handler::UserStateEventHandler;

use crate::ClientEvent;

mod connection_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod server_event;
mod user_state_event_handler;

/// `ServerEventHandler` is a trait representing a handler for events pushed by the server.
///
/// Implementors of this trait should provide a `handle_event` method, which takes a
/// `ServerEvent` and returns an `Option<ServerEvent>`. If the handler returns `None`, it means
/// the event has been consumed and no further processing should be done. If it returns
/// `Some(event)`, the event is not consumed and should be passed to the next handler.
#[async_trait]
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}

#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
