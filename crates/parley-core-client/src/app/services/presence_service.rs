// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_proc_macros::InjectDependencies;

use crate::app::deps::DynPresenceRepository;
use crate::domain::presence::models::UserStatus;
use crate::domain::shared::models::UserId;

#[derive(InjectDependencies)]
pub struct PresenceService {
    #[inject]
    presence_repo: DynPresenceRepository,
}

impl PresenceService {
    /// Users we haven't heard of are offline.
    pub fn is_online(&self, user_id: &UserId) -> bool {
        self.presence_repo
            .get(user_id)
            .map(|status| status.is_online())
            .unwrap_or(false)
    }

    pub fn status(&self, user_id: &UserId) -> Option<UserStatus> {
        self.presence_repo.get(user_id)
    }
}
