// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::presence::models::Availability;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatus {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub availability: Availability,
    pub last_seen: Option<DateTime<Utc>>,
}

impl UserStatus {
    pub fn is_online(&self) -> bool {
        self.availability == Availability::Online
    }
}
