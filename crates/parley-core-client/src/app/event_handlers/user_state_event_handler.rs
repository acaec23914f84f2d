// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use parley_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynPresenceRepository};
use crate::app::event_handlers::{
    ServerEvent, ServerEventHandler, UserStatusEvent, UserStatusEventType,
};
use crate::domain::messaging::models::TypingNotification;
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct UserStateEventHandler {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    presence_repo: DynPresenceRepository,
}

#[async_trait]
impl ServerEventHandler for UserStateEventHandler {
    fn name(&self) -> &'static str {
        "user_state"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::UserStatus(event) => self.handle_user_status_event(event)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl UserStateEventHandler {
    fn handle_user_status_event(&self, event: UserStatusEvent) -> Result<()> {
        match event.r#type {
            UserStatusEventType::AvailabilityChanged { status } => {
                let user_id = status.user_id;
                self.presence_repo.set(status);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::PresenceChanged { user_id });
            }
            UserStatusEventType::ComposeStateChanged {
                receiver_id,
                is_typing,
            } => {
                // Typing notifications are broadcast, only those directed at us are relevant.
                if receiver_id != self.ctx.current_user_id()? {
                    debug!("Ignoring typing notification for user {}.", receiver_id);
                    return Ok(());
                }

                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ComposingUserChanged {
                        notification: TypingNotification {
                            user_id: event.user_id,
                            receiver_id,
                            is_typing,
                        },
                    });
            }
        }
        Ok(())
    }
}
