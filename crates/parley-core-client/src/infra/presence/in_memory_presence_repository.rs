// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::presence::models::UserStatus;
use crate::domain::presence::repos::PresenceRepository;
use crate::domain::shared::models::UserId;

#[derive(Default)]
pub struct InMemoryPresenceRepository {
    statuses: RwLock<HashMap<UserId, UserStatus>>,
}

impl InMemoryPresenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresenceRepository for InMemoryPresenceRepository {
    fn get(&self, user_id: &UserId) -> Option<UserStatus> {
        self.statuses.read().get(user_id).cloned()
    }

    fn set(&self, status: UserStatus) {
        self.statuses.write().insert(status.user_id, status);
    }

    fn clear(&self) {
        self.statuses.write().clear()
    }
}
