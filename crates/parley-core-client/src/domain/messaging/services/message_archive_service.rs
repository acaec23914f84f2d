// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::UserId;

/// Loads the message history of a conversation, usually over HTTP.
#[async_trait]
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait MessageArchiveService: Send + Sync {
    async fn load_messages(&self, counterpart: &UserId) -> Result<Vec<Message>>;
}
