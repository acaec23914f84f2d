// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::bail;
use tracing::debug;

use parley_stomp::payload;

use crate::domain::messaging::models::{Message, MessageType, ReactionAction, Reactions};

impl From<payload::MessageType> for MessageType {
    fn from(value: payload::MessageType) -> Self {
        match value {
            payload::MessageType::Text => MessageType::Text,
            payload::MessageType::Image => MessageType::Image,
        }
    }
}

impl From<MessageType> for payload::MessageType {
    fn from(value: MessageType) -> Self {
        match value {
            MessageType::Text => payload::MessageType::Text,
            MessageType::Image => payload::MessageType::Image,
        }
    }
}

impl From<payload::ReactionAction> for ReactionAction {
    fn from(value: payload::ReactionAction) -> Self {
        match value {
            payload::ReactionAction::Add => ReactionAction::Add,
            payload::ReactionAction::Remove => ReactionAction::Remove,
        }
    }
}

impl TryFrom<payload::Message> for Message {
    type Error = anyhow::Error;

    fn try_from(value: payload::Message) -> Result<Self, Self::Error> {
        let message_type = MessageType::from(value.message_type);

        let image_url = match message_type {
            MessageType::Image => {
                let Some(image_url) = value.image_url else {
                    bail!("Image message {} has no image URL", value.id)
                };
                Some(image_url)
            }
            MessageType::Text => {
                if value.image_url.is_some() {
                    debug!("Ignoring image URL of text message {}.", value.id);
                }
                None
            }
        };

        Ok(Message {
            id: value.id.into(),
            sender_id: value.sender_id.into(),
            receiver_id: value.receiver_id.into(),
            sender_display_name: value.sender_display_name,
            content: value.content,
            sent_at: value.sent_at,
            is_read: value.is_read,
            message_type,
            image_url,
            reactions: value
                .reactions
                .map(Reactions::from_iter)
                .unwrap_or_default(),
        })
    }
}
