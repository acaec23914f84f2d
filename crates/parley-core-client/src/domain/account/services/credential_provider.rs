// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;

use crate::domain::account::models::User;

/// Knows who's logged in. Authentication itself happens elsewhere.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait CredentialProvider: Send + Sync {
    /// The bearer token to authenticate the connection with.
    fn token(&self) -> Option<Secret<String>>;
    fn current_user(&self) -> Option<User>;
}
