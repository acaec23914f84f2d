// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::client::ModuleContext;
use crate::event::Event as ClientEvent;
use crate::mods::Module;
use crate::payload::{
    DeleteMessageRequest, Message, MessageDeleted, MessageType, ReactionRequest, ReactionUpdate,
    SendMessageRequest, TypingNotification, TypingRequest,
};
use crate::stomp::{destinations, Frame};
use crate::util::RequestError;

#[derive(Default, Clone)]
pub struct Chat {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Message(Message),
    ChatStateChanged(TypingNotification),
    ReactionsChanged(ReactionUpdate),
    MessageDeleted(MessageDeleted),
    /// A failure the server reported on the personal error queue, usually for a message we
    /// sent.
    Error {
        message: String,
    },
}

impl Module for Chat {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }

    fn subscriptions(&self) -> Vec<&'static str> {
        vec![
            destinations::QUEUE_MESSAGES,
            destinations::TOPIC_TYPING,
            destinations::TOPIC_REACTIONS,
            destinations::TOPIC_MESSAGE_DELETED,
            destinations::QUEUE_ERRORS,
        ]
    }

    fn handle_message_frame(&self, destination: &str, frame: &Frame) -> Result<()> {
        let event = match destination {
            destinations::QUEUE_MESSAGES => Event::Message(serde_json::from_str(&frame.body)?),
            destinations::TOPIC_TYPING => {
                Event::ChatStateChanged(serde_json::from_str(&frame.body)?)
            }
            destinations::TOPIC_REACTIONS => {
                Event::ReactionsChanged(serde_json::from_str(&frame.body)?)
            }
            destinations::TOPIC_MESSAGE_DELETED => {
                Event::MessageDeleted(serde_json::from_str(&frame.body)?)
            }
            destinations::QUEUE_ERRORS => Event::Error {
                message: parse_error_body(&frame.body),
            },
            _ => return Ok(()),
        };

        self.ctx.schedule_event(ClientEvent::Chat(event));
        Ok(())
    }
}

impl Chat {
    pub fn send_message(
        &self,
        receiver_id: i64,
        content: impl Into<String>,
        message_type: MessageType,
        image_url: Option<String>,
    ) -> Result<(), RequestError> {
        self.ctx.send_json(
            destinations::APP_SEND_MESSAGE,
            &SendMessageRequest {
                receiver_id,
                content: content.into(),
                message_type,
                image_url,
            },
        )
    }

    pub fn send_chat_state(&self, receiver_id: i64, is_typing: bool) -> Result<(), RequestError> {
        self.ctx.send_json(
            destinations::APP_TYPING,
            &TypingRequest {
                receiver_id,
                is_typing,
            },
        )
    }

    /// Adds the reaction if we haven't reacted with `emoji` yet, removes it otherwise. The
    /// server decides which.
    pub fn toggle_reaction(
        &self,
        message_id: i64,
        emoji: impl Into<String>,
    ) -> Result<(), RequestError> {
        self.ctx.send_json(
            destinations::APP_REACTION,
            &ReactionRequest {
                message_id,
                emoji: emoji.into(),
            },
        )
    }

    pub fn delete_message(&self, message_id: i64) -> Result<(), RequestError> {
        self.ctx.send_json(
            destinations::APP_DELETE_MESSAGE,
            &DeleteMessageRequest { message_id },
        )
    }
}

/// The error queue carries a plain string which Spring serializes as a JSON string literal.
/// Accept both forms.
fn parse_error_body(body: &str) -> String {
    serde_json::from_str::<String>(body).unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        assert_eq!(
            parse_error_body(r#""Failed to send message: Receiver not found""#),
            "Failed to send message: Receiver not found"
        );
        assert_eq!(parse_error_body("Cannot send to yourself\n"), "Cannot send to yourself");
    }
}
