// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use parley_core_client::dtos::{Emoji, MessageId, MessageType, TypingNotification, UserId};
use parley_core_client::test::MessageBuilder;
use parley_core_client::{ClientEvent, RequestError, SendMessageError};
use parley_stomp::destinations;

use super::helpers::TestClient;

fn message_ids(client: &TestClient, counterpart: i64) -> Vec<i64> {
    client
        .conversations
        .messages(&UserId::from(counterpart))
        .into_iter()
        .map(|message| message.id.into_inner())
        .collect()
}

#[tokio::test]
async fn test_live_messages_are_deduplicated_against_history() -> Result<()> {
    let client = TestClient::connected().await?;

    client.archive.set_history(
        UserId::from(2),
        vec![
            MessageBuilder::new(2).set_sender(1).set_receiver(2).build(),
            MessageBuilder::new(1).build(),
        ],
    );

    let history = client.conversations.open_conversation(&UserId::from(2)).await?;
    assert_eq!(history.len(), 2);

    // Message 2 arrives again through the live queue, e.g. after a reconnect.
    client.receive_message_json(2, 1, 2).await;
    client.receive_message_json(3, 2, 1).await;
    client.receive_message_json(3, 2, 1).await;

    assert_eq!(message_ids(&client, 2), vec![1, 2, 3]);
    assert_eq!(
        client.take_events(),
        vec![
            ClientEvent::ConversationLoaded {
                counterpart: UserId::from(2)
            },
            ClientEvent::MessagesAppended {
                counterpart: UserId::from(2),
                message_ids: vec![MessageId::from(3)]
            },
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_failed_history_load_leaves_connection_up() -> Result<()> {
    let client = TestClient::connected().await?;

    assert!(client
        .conversations
        .open_conversation(&UserId::from(5))
        .await
        .is_err());
    assert_eq!(client.conversations.conversations(), vec![UserId::from(5)]);
    assert!(client.conversations.messages(&UserId::from(5)).is_empty());

    // Live messages still arrive.
    client.receive_message_json(10, 5, 1).await;
    assert_eq!(message_ids(&client, 5), vec![10]);

    client.conversations.close_conversation(&UserId::from(5));
    assert!(client.conversations.conversations().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_reactions_and_deletions() -> Result<()> {
    let client = TestClient::connected().await?;

    client.receive_message_json(1, 2, 1).await;
    client.receive_message_json(2, 1, 3).await;
    client.take_events();

    client
        .connection
        .receive_message(
            destinations::TOPIC_REACTIONS,
            json!({
                "messageId": 2,
                "userId": 3,
                "userDisplayName": "Bob",
                "emoji": "👍",
                "action": "ADD",
                "reactionCounts": {"👍": 1, "🎉": 0}
            })
            .to_string(),
        )
        .await;

    let messages = client.conversations.messages(&UserId::from(3));
    assert_eq!(messages[0].reactions.count("👍"), 1);
    assert_eq!(messages[0].reactions.len(), 1);

    client
        .connection
        .receive_message(
            destinations::TOPIC_MESSAGE_DELETED,
            json!({"messageId": 2, "deletedBy": 1, "action": "DELETE"}).to_string(),
        )
        .await;

    // A reaction for a message that's gone is dropped.
    client
        .connection
        .receive_message(
            destinations::TOPIC_REACTIONS,
            json!({
                "messageId": 2,
                "userId": 3,
                "emoji": "👍",
                "action": "REMOVE",
                "reactionCounts": {}
            })
            .to_string(),
        )
        .await;

    assert!(client.conversations.messages(&UserId::from(3)).is_empty());
    assert_eq!(message_ids(&client, 2), vec![1]);
    assert_eq!(
        client.take_events(),
        vec![
            ClientEvent::MessagesUpdated {
                counterpart: UserId::from(3),
                message_ids: vec![MessageId::from(2)]
            },
            ClientEvent::MessagesDeleted {
                counterpart: UserId::from(3),
                message_ids: vec![MessageId::from(2)]
            },
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_malformed_payloads_are_dropped() -> Result<()> {
    let client = TestClient::connected().await?;

    client
        .connection
        .receive_message(destinations::QUEUE_MESSAGES, "{ not json")
        .await;
    client
        .connection
        .receive_message(
            destinations::QUEUE_MESSAGES,
            json!({
                "id": 4,
                "senderId": 2,
                "receiverId": 1,
                "content": "",
                "sentAt": "2024-03-01T10:00:00Z",
                "messageType": "IMAGE"
            })
            .to_string(),
        )
        .await;
    client.receive_message_json(5, 2, 1).await;

    assert_eq!(message_ids(&client, 2), vec![5]);
    assert_eq!(client.connection.connect_count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_sends_validated_messages() -> Result<()> {
    let client = TestClient::connected().await?;

    client
        .conversations
        .send_message(&UserId::from(2), "  Hello  ", MessageType::Text, None)
        .await?;
    client
        .conversations
        .send_message(
            &UserId::from(2),
            "",
            MessageType::Image,
            Some("https://example.com/cat.png".to_string()),
        )
        .await?;

    assert!(matches!(
        client
            .conversations
            .send_message(&UserId::from(2), " \n", MessageType::Text, None)
            .await,
        Err(SendMessageError::EmptyContent)
    ));
    assert!(matches!(
        client
            .conversations
            .send_message(&UserId::from(2), "Look", MessageType::Image, None)
            .await,
        Err(SendMessageError::MissingImageUrl)
    ));
    assert!(matches!(
        client
            .conversations
            .send_message(&UserId::from(1), "Me", MessageType::Text, None)
            .await,
        Err(SendMessageError::SelfRecipient)
    ));

    assert_eq!(
        client.sent_json()?,
        vec![
            (
                destinations::APP_SEND_MESSAGE.to_string(),
                json!({"receiverId": 2, "content": "Hello", "messageType": "TEXT"})
            ),
            (
                destinations::APP_SEND_MESSAGE.to_string(),
                json!({
                    "receiverId": 2,
                    "content": "",
                    "messageType": "IMAGE",
                    "imageUrl": "https://example.com/cat.png"
                })
            ),
        ]
    );

    // Nothing is added until the server echoes the message back.
    assert!(client.conversations.messages(&UserId::from(2)).is_empty());

    Ok(())
}

#[tokio::test]
async fn test_fire_and_forget_actions() -> Result<()> {
    let client = TestClient::connected().await?;

    client
        .conversations
        .send_typing(&UserId::from(2), true)
        .await;
    client
        .conversations
        .toggle_reaction(&MessageId::from(8), &Emoji::from("❤️"))
        .await?;
    client
        .conversations
        .delete_message(&MessageId::from(8))
        .await?;

    assert_eq!(
        client.sent_json()?,
        vec![
            (
                destinations::APP_TYPING.to_string(),
                json!({"receiverId": 2, "isTyping": true})
            ),
            (
                destinations::APP_REACTION.to_string(),
                json!({"messageId": 8, "emoji": "❤️"})
            ),
            (
                destinations::APP_DELETE_MESSAGE.to_string(),
                json!({"messageId": 8})
            ),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_actions_fail_while_disconnected() -> Result<()> {
    let client = TestClient::connected().await?;
    client.disconnect().await;

    assert!(matches!(
        client
            .conversations
            .send_message(&UserId::from(2), "Hello", MessageType::Text, None)
            .await,
        Err(SendMessageError::Request(RequestError::NotConnected))
    ));
    assert!(matches!(
        client
            .conversations
            .delete_message(&MessageId::from(1))
            .await,
        Err(RequestError::NotConnected)
    ));

    // Typing notifications are dropped silently.
    client
        .conversations
        .send_typing(&UserId::from(2), false)
        .await;

    assert!(client.connection.sent_payloads().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_surfaces_typing_and_server_errors() -> Result<()> {
    let client = TestClient::connected().await?;

    client
        .connection
        .receive_message(
            destinations::TOPIC_TYPING,
            json!({"userId": 2, "receiverId": 1, "isTyping": true}).to_string(),
        )
        .await;
    client
        .connection
        .receive_message(
            destinations::TOPIC_TYPING,
            json!({"userId": 2, "receiverId": 3, "isTyping": true}).to_string(),
        )
        .await;
    client
        .connection
        .receive_message(
            destinations::QUEUE_ERRORS,
            "\"Failed to send message: Receiver not found\"",
        )
        .await;

    assert_eq!(
        client.take_events(),
        vec![
            ClientEvent::ComposingUserChanged {
                notification: TypingNotification {
                    user_id: UserId::from(2),
                    receiver_id: UserId::from(1),
                    is_typing: true
                }
            },
            ClientEvent::ServerError {
                message: "Failed to send message: Receiver not found".to_string()
            },
        ]
    );

    Ok(())
}
