// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::{Message, MessageId, Reactions};
use crate::domain::shared::models::UserId;

/// Holds the messages of each conversation, keyed by the counterpart's id. No two messages in
/// the repository share an id.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait ConversationsRepository: Send + Sync {
    /// Returns a snapshot of the conversation with `counterpart` or an empty list if there is
    /// none.
    fn get(&self, counterpart: &UserId) -> Vec<Message>;

    /// Returns the ids of all counterparts we hold a conversation with.
    fn counterparts(&self) -> Vec<UserId>;

    /// Makes `messages` the full content of the conversation with `counterpart`. Messages are
    /// ordered by `sent_at`, ties are broken by id. Repeated ids are dropped.
    fn replace(&self, counterpart: &UserId, messages: Vec<Message>);

    /// Appends `message` unless a message with the same id is held already. Returns `true` if
    /// the message was appended.
    fn append(&self, counterpart: &UserId, message: Message) -> bool;

    /// Replaces the reactions of the message with `message_id`, wherever it is. Returns the
    /// counterpart of the affected conversation or `None` if the message isn't held.
    fn set_reactions(&self, message_id: &MessageId, reactions: Reactions) -> Option<UserId>;

    /// Removes the message with `message_id`. Returns the counterpart of the affected
    /// conversation or `None` if the message isn't held.
    fn delete(&self, message_id: &MessageId) -> Option<UserId>;

    fn remove(&self, counterpart: &UserId);

    fn clear(&self);
}
