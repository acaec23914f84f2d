// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::messaging::models::Emoji;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionAction {
    Add,
    Remove,
}

/// Reaction counts per emoji in the order the server reported them. Emojis with a count of
/// zero are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reactions(IndexMap<Emoji, u32>);

impl Reactions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn count(&self, emoji: &str) -> u32 {
        self.0.get(emoji).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Emoji, u32)> {
        self.0.iter().map(|(emoji, count)| (emoji, *count))
    }
}

impl<E: Into<Emoji>> FromIterator<(E, u32)> for Reactions {
    fn from_iter<T: IntoIterator<Item = (E, u32)>>(iter: T) -> Self {
        Reactions(
            iter.into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(emoji, count)| (emoji.into(), count))
                .collect(),
        )
    }
}
