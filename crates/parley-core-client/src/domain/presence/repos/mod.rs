// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presence_repository::PresenceRepository;

mod presence_repository;

#[cfg(any(test, feature = "test"))]
pub mod mocks {
    pub use super::presence_repository::MockPresenceRepository;
}
