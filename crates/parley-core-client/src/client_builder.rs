// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use secrecy::Secret;
use url::Url;

use parley_stomp::client::ConnectorProvider;
use parley_stomp::{ConnectionConfig, IDProvider};

use crate::app::deps::{
    AppContext, AppDependencies, DynCredentialProvider, DynImageUploadService,
    DynMessageArchiveService,
};
use crate::app::event_handlers::{
    ConnectionEventHandler, MessagesEventHandler, ServerEventHandlerQueue, UserStateEventHandler,
};
use crate::app::services::{ConnectionService, ConversationsService, PresenceService};
use crate::client::ClientInner;
use crate::domain::account::models::User;
use crate::domain::account::services::CredentialProvider;
use crate::domain::messaging::models::Message;
use crate::domain::messaging::services::MessageArchiveService;
use crate::domain::shared::models::UserId;
use crate::domain::uploads::models::UploadFile;
use crate::domain::uploads::services::ImageUploadService;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::messaging::InMemoryConversationsRepository;
use crate::infra::presence::InMemoryPresenceRepository;
use crate::infra::stomp::{StompClient, StompClientBuilder};
use crate::{Client, ClientDelegate};

pub struct UndefinedCredentialProvider;
pub struct UndefinedMessageArchiveService;
pub struct UndefinedImageUploadService;

pub struct ClientBuilder {
    builder: StompClientBuilder,
    credential_provider: DynCredentialProvider,
    delegate: Option<Box<dyn ClientDelegate>>,
    image_upload_service: DynImageUploadService,
    message_archive_service: DynMessageArchiveService,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            builder: StompClient::builder(),
            credential_provider: Arc::new(UndefinedCredentialProvider),
            delegate: None,
            image_upload_service: Arc::new(UndefinedImageUploadService),
            message_archive_service: Arc::new(UndefinedMessageArchiveService),
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.builder = self.builder.set_connector_provider(connector_provider);
        self
    }

    pub fn set_connection_config(mut self, config: ConnectionConfig) -> Self {
        self.builder = self.builder.set_connection_config(config);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.builder = self.builder.set_id_provider(id_provider);
        self
    }

    pub fn set_credential_provider<C: CredentialProvider + 'static>(
        mut self,
        credential_provider: C,
    ) -> Self {
        self.credential_provider = Arc::new(credential_provider);
        self
    }

    pub fn set_message_archive_service<S: MessageArchiveService + 'static>(
        mut self,
        message_archive_service: S,
    ) -> Self {
        self.message_archive_service = Arc::new(message_archive_service);
        self
    }

    pub fn set_image_upload_service<S: ImageUploadService + 'static>(
        mut self,
        image_upload_service: S,
    ) -> Self {
        self.image_upload_service = Arc::new(image_upload_service);
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn build(self) -> Client {
        let server_event_handler_queue = Arc::new(ServerEventHandlerQueue::new());

        let stomp_client = {
            let handler_queue = Arc::downgrade(&server_event_handler_queue);
            self.builder.set_event_handler(move |_, event| {
                let handler_queue = handler_queue.clone();
                async move {
                    if let Some(handler_queue) = handler_queue.upgrade() {
                        handler_queue.handle_event(event).await
                    }
                }
            })
        }
        .build();

        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));
        let stomp = Arc::new(stomp_client.clone());

        let dependencies = AppDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            connection_service: stomp.clone(),
            conversations_repo: Arc::new(InMemoryConversationsRepository::new()),
            credential_provider: self.credential_provider,
            ctx: Arc::new(AppContext::default()),
            image_upload_service: self.image_upload_service,
            message_archive_service: self.message_archive_service,
            messaging_service: stomp,
            presence_repo: Arc::new(InMemoryPresenceRepository::new()),
        };

        server_event_handler_queue.set_handlers(vec![
            Box::new(ConnectionEventHandler::from(&dependencies)),
            Box::new(UserStateEventHandler::from(&dependencies)),
            Box::new(MessagesEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            connection: ConnectionService::from(&dependencies),
            conversations: ConversationsService::from(&dependencies),
            presence: PresenceService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            event_dispatcher: event_dispatcher.clone(),
            stomp: stomp_client,
            _server_event_handler_queue: server_event_handler_queue,
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}

impl CredentialProvider for UndefinedCredentialProvider {
    fn token(&self) -> Option<Secret<String>> {
        None
    }

    fn current_user(&self) -> Option<User> {
        None
    }
}

#[async_trait]
impl MessageArchiveService for UndefinedMessageArchiveService {
    async fn load_messages(&self, counterpart: &UserId) -> Result<Vec<Message>> {
        bail!("Cannot load messages with {counterpart} since no MessageArchiveService is set.")
    }
}

#[async_trait]
impl ImageUploadService for UndefinedImageUploadService {
    async fn upload_image(&self, file: UploadFile) -> Result<Url> {
        bail!(
            "Cannot upload {} since no ImageUploadService is set.",
            file.file_name
        )
    }
}
