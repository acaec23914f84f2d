// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use parley_stomp::RequestError;

use crate::domain::messaging::models::{Emoji, MessageId, SendMessageRequest};
use crate::domain::shared::models::UserId;

/// Outbound chat actions. None of these expect a response, their effect is observed through the
/// events the server pushes afterwards.
#[async_trait]
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait MessagingService: Send + Sync {
    async fn send_message(&self, request: SendMessageRequest) -> Result<(), RequestError>;
    async fn send_typing(&self, receiver_id: &UserId, is_typing: bool)
        -> Result<(), RequestError>;
    async fn toggle_reaction(
        &self,
        message_id: &MessageId,
        emoji: &Emoji,
    ) -> Result<(), RequestError>;
    async fn delete_message(&self, message_id: &MessageId) -> Result<(), RequestError>;
}
