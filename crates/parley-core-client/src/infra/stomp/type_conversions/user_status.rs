// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_stomp::payload;

use crate::domain::presence::models::{Availability, UserStatus};

impl From<payload::Availability> for Availability {
    fn from(value: payload::Availability) -> Self {
        match value {
            payload::Availability::Online => Availability::Online,
            payload::Availability::Offline => Availability::Offline,
        }
    }
}

impl From<payload::UserStatus> for UserStatus {
    fn from(value: payload::UserStatus) -> Self {
        UserStatus {
            user_id: value.user_id.into(),
            display_name: value.display_name,
            availability: value.status.into(),
            last_seen: value.last_seen,
        }
    }
}
