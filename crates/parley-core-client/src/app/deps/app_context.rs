// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use parking_lot::RwLock;

use crate::domain::account::models::User;
use crate::domain::shared::models::UserId;

#[derive(Default)]
pub struct AppContext {
    pub current_user: RwLock<Option<User>>,
}

impl AppContext {
    pub fn current_user_id(&self) -> Result<UserId> {
        self.current_user
            .read()
            .as_ref()
            .map(|user| user.id)
            .ok_or(anyhow::anyhow!(
                "Failed to read the user's id since the client is not connected."
            ))
    }

    pub fn set_current_user(&self, user: Option<User>) {
        *self.current_user.write() = user
    }
}
