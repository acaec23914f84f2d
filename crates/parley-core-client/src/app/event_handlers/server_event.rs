// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_stomp::ConnectionError;

use crate::domain::messaging::models::{Emoji, Message, MessageId, ReactionAction, Reactions};
use crate::domain::presence::models::UserStatus;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Event related to the connection status.
    Connection(ConnectionEvent),
    /// Events that affect the status of a user within a conversation or globally.
    UserStatus(UserStatusEvent),
    /// Events about received messages and changes to them.
    Message(MessageEvent),
    /// The server rejected something we sent.
    Error(ServerErrorEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connecting,
    Connected,
    Disconnected { error: Option<ConnectionError> },
    Failed { error: Option<ConnectionError> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStatusEvent {
    pub user_id: UserId,
    pub r#type: UserStatusEventType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserStatusEventType {
    AvailabilityChanged { status: UserStatus },
    ComposeStateChanged { receiver_id: UserId, is_typing: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    pub r#type: MessageEventType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageEventType {
    Received(Message),
    /// `reactions` is the full set of reactions of the message after the change.
    ReactionsChanged {
        message_id: MessageId,
        user_id: UserId,
        user_display_name: Option<String>,
        emoji: Emoji,
        action: ReactionAction,
        reactions: Reactions,
    },
    Deleted {
        message_id: MessageId,
        deleted_by: UserId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerErrorEvent {
    pub message: String,
}

impl From<ConnectionEvent> for ServerEvent {
    fn from(value: ConnectionEvent) -> Self {
        Self::Connection(value)
    }
}

impl From<UserStatusEvent> for ServerEvent {
    fn from(value: UserStatusEvent) -> Self {
        Self::UserStatus(value)
    }
}

impl From<MessageEvent> for ServerEvent {
    fn from(value: MessageEvent) -> Self {
        Self::Message(value)
    }
}

impl From<ServerErrorEvent> for ServerEvent {
    fn from(value: ServerErrorEvent) -> Self {
        Self::Error(value)
    }
}
