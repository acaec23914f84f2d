// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use parley_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynConversationsRepository};
use crate::app::event_handlers::{
    MessageEvent, MessageEventType, ServerErrorEvent, ServerEvent, ServerEventHandler,
};
use crate::domain::messaging::models::{Message, MessageId, Reactions};
use crate::ClientEvent;

/// Merges pushed messages, reactions and deletions into the conversations.
#[derive(InjectDependencies)]
pub struct MessagesEventHandler {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    conversations_repo: DynConversationsRepository,
    #[inject]
    ctx: DynAppContext,
}

#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(event) => self.handle_message_event(event)?,
            ServerEvent::Error(event) => self.handle_server_error(event),
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    fn handle_message_event(&self, event: MessageEvent) -> Result<()> {
        match event.r#type {
            MessageEventType::Received(message) => self.handle_received_message(message)?,
            MessageEventType::ReactionsChanged {
                message_id,
                reactions,
                ..
            } => self.handle_changed_reactions(message_id, reactions),
            MessageEventType::Deleted {
                message_id,
                deleted_by,
            } => {
                let Some(counterpart) = self.conversations_repo.delete(&message_id) else {
                    debug!("Ignoring deletion of unknown message {}.", message_id);
                    return Ok(());
                };

                info!("Message {} was deleted by {}.", message_id, deleted_by);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::MessagesDeleted {
                        counterpart,
                        message_ids: vec![message_id],
                    });
            }
        }
        Ok(())
    }

    fn handle_received_message(&self, message: Message) -> Result<()> {
        let current_user = self.ctx.current_user_id()?;
        let counterpart = message.counterpart(&current_user);
        let message_id = message.id;

        // Messages can arrive twice, e.g. after a reconnect or while history is loading.
        if !self.conversations_repo.append(&counterpart, message) {
            debug!("Ignoring duplicate message {}.", message_id);
            return Ok(());
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::MessagesAppended {
                counterpart,
                message_ids: vec![message_id],
            });
        Ok(())
    }

    fn handle_changed_reactions(&self, message_id: MessageId, reactions: Reactions) {
        let Some(counterpart) = self
            .conversations_repo
            .set_reactions(&message_id, reactions)
        else {
            debug!("Dropping reactions for unknown message {}.", message_id);
            return;
        };

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::MessagesUpdated {
                counterpart,
                message_ids: vec![message_id],
            });
    }

    fn handle_server_error(&self, event: ServerErrorEvent) {
        info!("Server reported an error: {}", event.message);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ServerError {
                message: event.message,
            });
    }
}
