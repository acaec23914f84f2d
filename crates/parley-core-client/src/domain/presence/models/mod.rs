// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use availability::Availability;
pub use user_status::UserStatus;

mod availability;
mod user_status;
