// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::presence::models::UserStatus;
use crate::domain::shared::models::UserId;

/// The last known status per user. There's no ordering information in status updates, so the
/// last one set wins.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait PresenceRepository: Send + Sync {
    fn get(&self, user_id: &UserId) -> Option<UserStatus>;
    fn set(&self, status: UserStatus);
    fn clear(&self);
}
