// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::account::services::CredentialProvider;
use crate::domain::connection::services::ConnectionService;
use crate::domain::messaging::repos::ConversationsRepository;
use crate::domain::messaging::services::{MessageArchiveService, MessagingService};
use crate::domain::presence::repos::PresenceRepository;
use crate::domain::uploads::services::ImageUploadService;

pub type DynAppContext = Arc<AppContext>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynConnectionService = Arc<dyn ConnectionService>;
pub type DynConversationsRepository = Arc<dyn ConversationsRepository>;
pub type DynCredentialProvider = Arc<dyn CredentialProvider>;
pub type DynImageUploadService = Arc<dyn ImageUploadService>;
pub type DynMessageArchiveService = Arc<dyn MessageArchiveService>;
pub type DynMessagingService = Arc<dyn MessagingService>;
pub type DynPresenceRepository = Arc<dyn PresenceRepository>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connection_service: DynConnectionService,
    pub conversations_repo: DynConversationsRepository,
    pub credential_provider: DynCredentialProvider,
    pub ctx: DynAppContext,
    pub image_upload_service: DynImageUploadService,
    pub message_archive_service: DynMessageArchiveService,
    pub messaging_service: DynMessagingService,
    pub presence_repo: DynPresenceRepository,
}
