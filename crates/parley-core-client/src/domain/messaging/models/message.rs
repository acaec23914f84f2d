// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::messaging::models::{MessageId, Reactions};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MessageType {
    #[default]
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub sender_display_name: Option<String>,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
    pub message_type: MessageType,
    /// Set for `MessageType::Image` only.
    pub image_url: Option<String>,
    pub reactions: Reactions,
}

impl Message {
    pub fn is_sent_by(&self, user_id: &UserId) -> bool {
        &self.sender_id == user_id
    }

    /// The other participant of the conversation this message belongs to, as seen by
    /// `current_user`.
    pub fn counterpart(&self, current_user: &UserId) -> UserId {
        if self.is_sent_by(current_user) {
            self.receiver_id
        } else {
            self.sender_id
        }
    }

    pub fn is_exchanged_with(&self, current_user: &UserId, counterpart: &UserId) -> bool {
        (self.sender_id == *current_user && self.receiver_id == *counterpart)
            || (self.sender_id == *counterpart && self.receiver_id == *current_user)
    }
}
