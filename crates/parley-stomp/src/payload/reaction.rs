// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReactionAction {
    Add,
    Remove,
}

/// Broadcast after somebody toggled a reaction. `reaction_counts` is the complete set of
/// reactions of the message after the change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionUpdate {
    pub message_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user_display_name: Option<String>,
    pub emoji: String,
    pub action: ReactionAction,
    #[serde(default)]
    pub reaction_counts: IndexMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    pub message_id: i64,
    pub emoji: String,
}
