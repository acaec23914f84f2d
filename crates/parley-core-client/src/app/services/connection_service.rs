// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;
use tracing::{info, warn};

use parley_proc_macros::InjectDependencies;
use parley_stomp::{ConnectionError, ConnectionState};

use crate::app::deps::{
    DynAppContext, DynConnectionService, DynConversationsRepository, DynCredentialProvider,
    DynPresenceRepository,
};

#[derive(InjectDependencies)]
pub struct ConnectionService {
    #[inject]
    connection_service: DynConnectionService,
    #[inject]
    conversations_repo: DynConversationsRepository,
    #[inject]
    credential_provider: DynCredentialProvider,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    presence_repo: DynPresenceRepository,
}

impl ConnectionService {
    /// Connects with the token of the credential provider.
    pub async fn start(&self) -> Result<(), ConnectionError> {
        let Some(token) = self.credential_provider.token() else {
            warn!("Not connecting since there is no token.");
            return Err(ConnectionError::MissingCredentials);
        };
        self.connect(token).await
    }

    /// Resolves with the outcome of the first attempt. Failed attempts and dropped
    /// connections are retried until `disconnect` is called.
    pub async fn connect(&self, token: Secret<String>) -> Result<(), ConnectionError> {
        let Some(user) = self.credential_provider.current_user() else {
            warn!("Not connecting since there is no logged-in user.");
            return Err(ConnectionError::MissingCredentials);
        };

        info!("Connecting as user {}…", user.id);
        self.ctx.set_current_user(Some(user));
        self.connection_service.connect(token).await
    }

    /// Ends the session. Conversations and presence are discarded.
    pub async fn disconnect(&self) {
        self.connection_service.disconnect().await;
        self.conversations_repo.clear();
        self.presence_repo.clear();
        self.ctx.set_current_user(None);
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection_service.connection_state()
    }
}
