// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use parley_stomp::{mods, payload, RequestError};

use crate::domain::messaging::models::{Emoji, MessageId, SendMessageRequest};
use crate::domain::messaging::services::MessagingService;
use crate::domain::shared::models::UserId;
use crate::infra::stomp::StompClient;

#[async_trait]
impl MessagingService for StompClient {
    async fn send_message(&self, request: SendMessageRequest) -> Result<(), RequestError> {
        let chat = self.client.get_mod::<mods::Chat>();
        chat.send_message(
            request.receiver_id.into_inner(),
            request.content,
            payload::MessageType::from(request.message_type),
            request.image_url,
        )
    }

    async fn send_typing(
        &self,
        receiver_id: &UserId,
        is_typing: bool,
    ) -> Result<(), RequestError> {
        let chat = self.client.get_mod::<mods::Chat>();
        chat.send_chat_state(receiver_id.into_inner(), is_typing)
    }

    async fn toggle_reaction(
        &self,
        message_id: &MessageId,
        emoji: &Emoji,
    ) -> Result<(), RequestError> {
        let chat = self.client.get_mod::<mods::Chat>();
        chat.toggle_reaction(message_id.into_inner(), emoji.as_ref())
    }

    async fn delete_message(&self, message_id: &MessageId) -> Result<(), RequestError> {
        let chat = self.client.get_mod::<mods::Chat>();
        chat.delete_message(message_id.into_inner())
    }
}
