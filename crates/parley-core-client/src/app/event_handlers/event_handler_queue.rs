// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::{error, warn};

use crate::app::event_handlers::{ServerEventHandler, StompEvent};
use crate::infra::stomp::parse_stomp_event;

/// Runs every event through the handlers in order until one of them consumes it.
pub struct ServerEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn ServerEventHandler>>>,
}

impl ServerEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    pub fn set_handlers(&self, handlers: Vec<Box<dyn ServerEventHandler>>) {
        if self.handlers.set(handlers).is_err() {
            warn!("Tried to set the handlers of ServerEventHandlerQueue more than once.");
        }
    }

    pub async fn handle_event(&self, event: StompEvent) {
        let events = match parse_stomp_event(event) {
            Ok(events) => events,
            Err(err) => {
                error!("Failed to parse event. {}", err.to_string());
                return;
            }
        };

        let Some(handlers) = self.handlers.get() else {
            error!("Dropping events since no handlers were set on ServerEventHandlerQueue.");
            return;
        };

        'events: for event in events {
            let mut event = event;

            for handler in handlers.iter() {
                match handler.handle_event(event).await {
                    Ok(None) => continue 'events,
                    Ok(Some(e)) => event = e,
                    Err(err) => {
                        error!(
                            "Event handler '{}' aborted with error: {}",
                            handler.name(),
                            err.to_string()
                        );
                        continue 'events;
                    }
                }
            }

            warn!("Unhandled event {:?}", event);
        }
    }
}

impl Default for ServerEventHandlerQueue {
    fn default() -> Self {
        Self::new()
    }
}
