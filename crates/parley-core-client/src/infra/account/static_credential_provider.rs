// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use secrecy::{ExposeSecret, Secret};

use crate::domain::account::models::User;
use crate::domain::account::services::CredentialProvider;

/// Credentials obtained elsewhere, e.g. by logging in over HTTP or from the environment.
pub struct StaticCredentialProvider {
    credentials: RwLock<Option<(Secret<String>, User)>>,
}

impl StaticCredentialProvider {
    pub fn new(token: Secret<String>, user: User) -> Self {
        Self {
            credentials: RwLock::new(Some((token, user))),
        }
    }

    pub fn empty() -> Self {
        Self {
            credentials: Default::default(),
        }
    }

    pub fn set_credentials(&self, credentials: Option<(Secret<String>, User)>) {
        *self.credentials.write() = credentials
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn token(&self) -> Option<Secret<String>> {
        self.credentials
            .read()
            .as_ref()
            .map(|(token, _)| Secret::new(token.expose_secret().clone()))
    }

    fn current_user(&self) -> Option<User> {
        self.credentials
            .read()
            .as_ref()
            .map(|(_, user)| user.clone())
    }
}
