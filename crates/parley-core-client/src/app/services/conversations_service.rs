// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use parley_proc_macros::InjectDependencies;
use parley_stomp::RequestError;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConversationsRepository, DynImageUploadService,
    DynMessageArchiveService, DynMessagingService,
};
use crate::domain::messaging::models::{
    Emoji, Message, MessageId, MessageType, SendMessageRequest,
};
use crate::domain::shared::models::UserId;
use crate::domain::uploads::models::UploadFile;
use crate::ClientEvent;

#[derive(Error, Debug)]
pub enum SendMessageError {
    #[error("A text message must not be empty.")]
    EmptyContent,
    #[error("An image message needs an image URL.")]
    MissingImageUrl,
    #[error("You cannot send messages to yourself.")]
    SelfRecipient,
    #[error("Failed to upload image. {0}")]
    Upload(anyhow::Error),
    #[error(transparent)]
    Request(#[from] RequestError),
}

#[derive(InjectDependencies)]
pub struct ConversationsService {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    conversations_repo: DynConversationsRepository,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    image_upload_service: DynImageUploadService,
    #[inject]
    message_archive_service: DynMessageArchiveService,
    #[inject]
    messaging_service: DynMessagingService,
}

impl ConversationsService {
    /// Loads the history of the conversation with `counterpart` and makes it the conversation's
    /// full content. Messages the archive returns for other conversations are skipped. If
    /// loading fails the conversation is emptied and the error returned. The connection is not
    /// affected either way.
    pub async fn open_conversation(&self, counterpart: &UserId) -> Result<Vec<Message>> {
        info!("Loading history with user {}…", counterpart);

        let result = self.message_archive_service.load_messages(counterpart).await;

        let messages = match &result {
            Ok(messages) => {
                let current_user = self.ctx.current_user_id().ok();
                messages
                    .iter()
                    .filter(|message| {
                        let Some(current_user) = &current_user else {
                            return true;
                        };
                        if message.is_exchanged_with(current_user, counterpart) {
                            return true;
                        }
                        warn!(
                            "Skipping message {} in history with {}. It belongs to another conversation.",
                            message.id, counterpart
                        );
                        false
                    })
                    .cloned()
                    .collect()
            }
            Err(err) => {
                error!("Failed to load history with {}. {}", counterpart, err);
                vec![]
            }
        };

        self.conversations_repo.replace(counterpart, messages);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationLoaded {
                counterpart: *counterpart,
            });

        result?;
        Ok(self.conversations_repo.get(counterpart))
    }

    /// Drops the conversation from memory. Live events keep arriving since the connection is
    /// shared by all conversations.
    pub fn close_conversation(&self, counterpart: &UserId) {
        self.conversations_repo.remove(counterpart)
    }

    pub fn messages(&self, counterpart: &UserId) -> Vec<Message> {
        self.conversations_repo.get(counterpart)
    }

    pub fn conversations(&self) -> Vec<UserId> {
        self.conversations_repo.counterparts()
    }

    /// Validates and sends a message. The message shows up in the conversation once the
    /// server pushes it back to us.
    pub async fn send_message(
        &self,
        receiver_id: &UserId,
        content: impl Into<String>,
        message_type: MessageType,
        image_url: Option<String>,
    ) -> Result<(), SendMessageError> {
        self.validate_receiver(receiver_id)?;

        let content = content.into().trim().to_string();

        let image_url = match message_type {
            MessageType::Text => {
                if content.is_empty() {
                    return Err(SendMessageError::EmptyContent);
                }
                None
            }
            MessageType::Image => {
                let Some(image_url) = image_url.filter(|url| !url.trim().is_empty()) else {
                    return Err(SendMessageError::MissingImageUrl);
                };
                Some(image_url)
            }
        };

        self.messaging_service
            .send_message(SendMessageRequest {
                receiver_id: *receiver_id,
                content,
                message_type,
                image_url,
            })
            .await?;
        Ok(())
    }

    /// Uploads `file` and sends it as an image message with an optional caption.
    pub async fn send_image(
        &self,
        receiver_id: &UserId,
        file: UploadFile,
        caption: Option<String>,
    ) -> Result<(), SendMessageError> {
        self.validate_receiver(receiver_id)?;

        let url = self
            .image_upload_service
            .upload_image(file)
            .await
            .map_err(SendMessageError::Upload)?;

        self.send_message(
            receiver_id,
            caption.unwrap_or_default(),
            MessageType::Image,
            Some(url.to_string()),
        )
        .await
    }

    /// Fire and forget. Failures are not reported.
    pub async fn send_typing(&self, receiver_id: &UserId, is_typing: bool) {
        if let Err(err) = self
            .messaging_service
            .send_typing(receiver_id, is_typing)
            .await
        {
            debug!("Could not send typing notification. {}", err);
        }
    }

    pub async fn toggle_reaction(
        &self,
        message_id: &MessageId,
        emoji: &Emoji,
    ) -> Result<(), RequestError> {
        self.messaging_service
            .toggle_reaction(message_id, emoji)
            .await
    }

    pub async fn delete_message(&self, message_id: &MessageId) -> Result<(), RequestError> {
        self.messaging_service.delete_message(message_id).await
    }
}

impl ConversationsService {
    fn validate_receiver(&self, receiver_id: &UserId) -> Result<(), SendMessageError> {
        // Without a user we were never connected.
        let current_user = self
            .ctx
            .current_user_id()
            .map_err(|_| SendMessageError::Request(RequestError::NotConnected))?;

        if current_user == *receiver_id {
            return Err(SendMessageError::SelfRecipient);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate;
    use url::Url;

    use crate::test::{MessageBuilder, MockAppDependencies};

    use super::*;

    #[tokio::test]
    async fn test_open_conversation_replaces_content() -> Result<()> {
        let mut deps = MockAppDependencies::default();
        let history = vec![
            MessageBuilder::new(1).set_sender(2).build(),
            MessageBuilder::new(2).set_sender(1).set_receiver(2).build(),
        ];

        {
            let history = history.clone();
            deps.message_archive_service
                .expect_load_messages()
                .once()
                .with(predicate::eq(UserId::from(2)))
                .return_once(|_| Box::pin(async { Ok(history) }));
        }
        deps.conversations_repo
            .expect_replace()
            .once()
            .with(predicate::eq(UserId::from(2)), predicate::eq(history.clone()))
            .return_once(|_, _| ());
        {
            let history = history.clone();
            deps.conversations_repo
                .expect_get()
                .once()
                .return_once(|_| history);
        }
        deps.client_event_dispatcher
            .expect_dispatch_event()
            .once()
            .with(predicate::eq(ClientEvent::ConversationLoaded {
                counterpart: UserId::from(2),
            }))
            .return_once(|_| ());

        let service = ConversationsService::from(&deps.into_deps());
        assert_eq!(service.open_conversation(&UserId::from(2)).await?, history);

        Ok(())
    }

    #[tokio::test]
    async fn test_open_conversation_skips_foreign_messages() -> Result<()> {
        let mut deps = MockAppDependencies::default();
        let own = MessageBuilder::new(1).set_sender(2).build();
        let foreign = MessageBuilder::new(2).set_sender(3).build();

        {
            let history = vec![own.clone(), foreign];
            deps.message_archive_service
                .expect_load_messages()
                .once()
                .return_once(|_| Box::pin(async { Ok(history) }));
        }
        deps.conversations_repo
            .expect_replace()
            .once()
            .with(predicate::eq(UserId::from(2)), predicate::eq(vec![own.clone()]))
            .return_once(|_, _| ());
        {
            let own = own.clone();
            deps.conversations_repo
                .expect_get()
                .once()
                .return_once(|_| vec![own]);
        }
        deps.client_event_dispatcher
            .expect_dispatch_event()
            .once()
            .return_once(|_| ());

        let service = ConversationsService::from(&deps.into_deps());
        assert_eq!(service.open_conversation(&UserId::from(2)).await?, vec![own]);

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_history_leaves_empty_conversation() -> Result<()> {
        let mut deps = MockAppDependencies::default();

        deps.message_archive_service
            .expect_load_messages()
            .once()
            .return_once(|_| Box::pin(async { Err(anyhow::anyhow!("HTTP 500")) }));
        deps.conversations_repo
            .expect_replace()
            .once()
            .with(predicate::eq(UserId::from(2)), predicate::eq(Vec::<Message>::new()))
            .return_once(|_, _| ());
        deps.client_event_dispatcher
            .expect_dispatch_event()
            .once()
            .return_once(|_| ());

        let service = ConversationsService::from(&deps.into_deps());
        assert!(service.open_conversation(&UserId::from(2)).await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_sends_trimmed_text() -> Result<()> {
        let mut deps = MockAppDependencies::default();

        deps.messaging_service
            .expect_send_message()
            .once()
            .with(predicate::eq(SendMessageRequest {
                receiver_id: UserId::from(2),
                content: "Hello".to_string(),
                message_type: MessageType::Text,
                image_url: None,
            }))
            .return_once(|_| Box::pin(async { Ok(()) }));

        let service = ConversationsService::from(&deps.into_deps());
        service
            .send_message(&UserId::from(2), "  Hello \n", MessageType::Text, None)
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_invalid_messages() {
        let mut deps = MockAppDependencies::default();
        deps.messaging_service.expect_send_message().never();

        let service = ConversationsService::from(&deps.into_deps());

        assert!(matches!(
            service
                .send_message(&UserId::from(2), "   ", MessageType::Text, None)
                .await,
            Err(SendMessageError::EmptyContent)
        ));
        assert!(matches!(
            service
                .send_message(&UserId::from(2), "", MessageType::Image, None)
                .await,
            Err(SendMessageError::MissingImageUrl)
        ));
        assert!(matches!(
            service
                .send_message(&UserId::from(1), "Hi", MessageType::Text, None)
                .await,
            Err(SendMessageError::SelfRecipient)
        ));
    }

    #[tokio::test]
    async fn test_reports_send_while_disconnected() {
        let mut deps = MockAppDependencies::default();

        deps.messaging_service
            .expect_send_message()
            .once()
            .return_once(|_| Box::pin(async { Err(RequestError::NotConnected) }));

        let service = ConversationsService::from(&deps.into_deps());

        assert!(matches!(
            service
                .send_message(&UserId::from(2), "Hi", MessageType::Text, None)
                .await,
            Err(SendMessageError::Request(RequestError::NotConnected))
        ));
    }

    #[tokio::test]
    async fn test_ignores_typing_failures() {
        let mut deps = MockAppDependencies::default();

        deps.messaging_service
            .expect_send_typing()
            .once()
            .with(predicate::eq(UserId::from(2)), predicate::eq(true))
            .return_once(|_, _| Box::pin(async { Err(RequestError::NotConnected) }));

        let service = ConversationsService::from(&deps.into_deps());
        service.send_typing(&UserId::from(2), true).await;
    }

    #[tokio::test]
    async fn test_uploads_image_before_sending() -> Result<()> {
        let mut deps = MockAppDependencies::default();
        let url = Url::parse("https://files.example.org/cat.png")?;

        deps.image_upload_service
            .expect_upload_image()
            .once()
            .return_once(move |_| Box::pin(async move { Ok(url) }));
        deps.messaging_service
            .expect_send_message()
            .once()
            .with(predicate::eq(SendMessageRequest {
                receiver_id: UserId::from(2),
                content: "My cat".to_string(),
                message_type: MessageType::Image,
                image_url: Some("https://files.example.org/cat.png".to_string()),
            }))
            .return_once(|_| Box::pin(async { Ok(()) }));

        let service = ConversationsService::from(&deps.into_deps());
        service
            .send_image(
                &UserId::from(2),
                UploadFile {
                    file_name: "cat.png".to_string(),
                    media_type: "image/png".to_string(),
                    data: vec![1, 2, 3],
                },
                Some("My cat".to_string()),
            )
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_send() {
        let mut deps = MockAppDependencies::default();

        deps.image_upload_service
            .expect_upload_image()
            .once()
            .return_once(|_| Box::pin(async { Err(anyhow::anyhow!("File too large")) }));
        deps.messaging_service.expect_send_message().never();

        let service = ConversationsService::from(&deps.into_deps());
        let result = service
            .send_image(
                &UserId::from(2),
                UploadFile {
                    file_name: "cat.png".to_string(),
                    media_type: "image/png".to_string(),
                    data: vec![],
                },
                None,
            )
            .await;

        assert!(matches!(result, Err(SendMessageError::Upload(_))));
    }
}
