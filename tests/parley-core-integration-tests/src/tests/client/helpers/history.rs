// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{format_err, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

use parley_core_client::dtos::{Message, UserId};
use parley_core_client::MessageArchiveService;

/// Serves canned histories. Conversations without one fail to load.
#[derive(Clone, Default)]
pub struct StubMessageArchive {
    histories: Arc<Mutex<HashMap<UserId, Vec<Message>>>>,
}

impl StubMessageArchive {
    pub fn set_history(&self, counterpart: UserId, messages: Vec<Message>) {
        self.histories.lock().insert(counterpart, messages);
    }
}

#[async_trait]
impl MessageArchiveService for StubMessageArchive {
    async fn load_messages(&self, counterpart: &UserId) -> Result<Vec<Message>> {
        self.histories
            .lock()
            .get(counterpart)
            .cloned()
            .ok_or_else(|| format_err!("HTTP 404 for conversation with {counterpart}"))
    }
}
