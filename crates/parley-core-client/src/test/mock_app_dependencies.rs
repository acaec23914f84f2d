// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use derivative::Derivative;
use parking_lot::RwLock;

use crate::app::deps::{AppContext, AppDependencies};
use crate::app::event_handlers::MockClientEventDispatcherTrait;
use crate::domain::account::models::User;
use crate::domain::account::services::mocks::MockCredentialProvider;
use crate::domain::connection::services::mocks::MockConnectionService;
use crate::domain::messaging::repos::mocks::MockConversationsRepository;
use crate::domain::messaging::services::mocks::{MockMessageArchiveService, MockMessagingService};
use crate::domain::presence::repos::mocks::MockPresenceRepository;
use crate::domain::shared::models::UserId;
use crate::domain::uploads::services::mocks::MockImageUploadService;

pub fn mock_reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 9, 6, 0, 0, 0).unwrap()
}

pub fn mock_account_id() -> UserId {
    UserId::from(1)
}

pub fn mock_user() -> User {
    User {
        id: mock_account_id(),
        display_name: "Jane Doe".to_string(),
    }
}

#[derive(Derivative)]
#[derivative(Default)]
pub struct MockAppDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub connection_service: MockConnectionService,
    pub conversations_repo: MockConversationsRepository,
    pub credential_provider: MockCredentialProvider,
    #[derivative(Default(value = "AppContext { current_user: RwLock::new(Some(mock_user())) }"))]
    pub ctx: AppContext,
    pub image_upload_service: MockImageUploadService,
    pub message_archive_service: MockMessageArchiveService,
    pub messaging_service: MockMessagingService,
    pub presence_repo: MockPresenceRepository,
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            client_event_dispatcher: Arc::new(mock.client_event_dispatcher),
            connection_service: Arc::new(mock.connection_service),
            conversations_repo: Arc::new(mock.conversations_repo),
            credential_provider: Arc::new(mock.credential_provider),
            ctx: Arc::new(mock.ctx),
            image_upload_service: Arc::new(mock.image_upload_service),
            message_archive_service: Arc::new(mock.message_archive_service),
            messaging_service: Arc::new(mock.messaging_service),
            presence_repo: Arc::new(mock.presence_repo),
        }
    }
}
