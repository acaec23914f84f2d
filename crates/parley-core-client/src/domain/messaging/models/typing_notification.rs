// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

/// Ephemeral. Forwarded to observers, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingNotification {
    pub user_id: UserId,
    pub receiver_id: UserId,
    pub is_typing: bool,
}
