// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use parley_proc_macros::InjectDependencies;
use parley_stomp::ConnectionState;

use crate::app::deps::{DynClientEventDispatcher, DynConnectionService};
use crate::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventHandler};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct ConnectionEventHandler {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    connection_service: DynConnectionService,
}

#[async_trait]
impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connection(event) => self.handle_connection_event(event).await?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionEventHandler {
    async fn handle_connection_event(&self, event: ConnectionEvent) -> Result<()> {
        let (state, error) = match event {
            ConnectionEvent::Connecting => (ConnectionState::Connecting, None),
            ConnectionEvent::Connected => {
                // The server doesn't remember subscriptions across connections.
                if let Err(err) = self.connection_service.subscribe_to_topics() {
                    warn!("Failed to subscribe to topics. {}", err.to_string());
                }
                (ConnectionState::Connected, None)
            }
            ConnectionEvent::Disconnected { error } => (ConnectionState::Disconnected, error),
            ConnectionEvent::Failed { error } => (ConnectionState::Failed, error),
        };

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionStatusChanged { state, error });
        Ok(())
    }
}
