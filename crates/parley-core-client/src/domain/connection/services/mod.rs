// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_service::ConnectionService;

mod connection_service;

#[cfg(any(test, feature = "test"))]
pub mod mocks {
    pub use super::connection_service::MockConnectionService;
}
