// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_stomp::{ConnectionError, ConnectionState};

use crate::domain::messaging::models::{MessageId, TypingNotification};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The status of the connection has changed. `error` is set when the connection was lost
    /// or an attempt failed.
    ConnectionStatusChanged {
        state: ConnectionState,
        error: Option<ConnectionError>,
    },

    /// One or many messages were received in the conversation with `counterpart`.
    MessagesAppended {
        counterpart: UserId,
        message_ids: Vec<MessageId>,
    },

    /// One or many messages were changed, e.g. by a reaction.
    MessagesUpdated {
        counterpart: UserId,
        message_ids: Vec<MessageId>,
    },

    MessagesDeleted {
        counterpart: UserId,
        message_ids: Vec<MessageId>,
    },

    /// The history of the conversation with `counterpart` was (re)loaded.
    ConversationLoaded { counterpart: UserId },

    PresenceChanged { user_id: UserId },

    /// A user started or stopped typing a message to us.
    ComposingUserChanged { notification: TypingNotification },

    /// The server rejected something we sent.
    ServerError { message: String },
}
