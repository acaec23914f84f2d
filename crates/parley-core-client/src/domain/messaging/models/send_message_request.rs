// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::MessageType;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub receiver_id: UserId,
    pub content: String,
    pub message_type: MessageType,
    pub image_url: Option<String>,
}
