// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use credential_provider::CredentialProvider;

mod credential_provider;

#[cfg(any(test, feature = "test"))]
pub mod mocks {
    pub use super::credential_provider::MockCredentialProvider;
}
