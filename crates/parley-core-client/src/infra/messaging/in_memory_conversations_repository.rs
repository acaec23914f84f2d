// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::domain::messaging::models::{Message, MessageId, Reactions};
use crate::domain::messaging::repos::ConversationsRepository;
use crate::domain::shared::models::UserId;

pub struct InMemoryConversationsRepository {
    conversations: RwLock<IndexMap<UserId, Vec<Message>>>,
}

impl InMemoryConversationsRepository {
    pub fn new() -> Self {
        Self {
            conversations: Default::default(),
        }
    }
}

impl Default for InMemoryConversationsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationsRepository for InMemoryConversationsRepository {
    fn get(&self, counterpart: &UserId) -> Vec<Message> {
        self.conversations
            .read()
            .get(counterpart)
            .cloned()
            .unwrap_or_default()
    }

    fn counterparts(&self) -> Vec<UserId> {
        self.conversations.read().keys().copied().collect()
    }

    fn replace(&self, counterpart: &UserId, mut messages: Vec<Message>) {
        messages.sort_by(|lhs, rhs| (lhs.sent_at, lhs.id).cmp(&(rhs.sent_at, rhs.id)));

        let mut seen_ids = HashSet::with_capacity(messages.len());
        messages.retain(|message| seen_ids.insert(message.id));

        self.conversations.write().insert(*counterpart, messages);
    }

    fn append(&self, counterpart: &UserId, message: Message) -> bool {
        let mut conversations = self.conversations.write();
        let messages = conversations.entry(*counterpart).or_default();

        if messages.iter().any(|m| m.id == message.id) {
            return false;
        }

        messages.push(message);
        true
    }

    fn set_reactions(&self, message_id: &MessageId, reactions: Reactions) -> Option<UserId> {
        let mut conversations = self.conversations.write();

        for (counterpart, messages) in conversations.iter_mut() {
            if let Some(message) = messages.iter_mut().find(|m| &m.id == message_id) {
                message.reactions = reactions;
                return Some(*counterpart);
            }
        }

        None
    }

    fn delete(&self, message_id: &MessageId) -> Option<UserId> {
        let mut conversations = self.conversations.write();

        for (counterpart, messages) in conversations.iter_mut() {
            if let Some(idx) = messages.iter().position(|m| &m.id == message_id) {
                messages.remove(idx);
                return Some(*counterpart);
            }
        }

        None
    }

    fn remove(&self, counterpart: &UserId) {
        self.conversations.write().shift_remove(counterpart);
    }

    fn clear(&self) {
        self.conversations.write().clear();
    }
}
