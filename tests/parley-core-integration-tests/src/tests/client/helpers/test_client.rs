// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use anyhow::Result;
use secrecy::Secret;
use serde_json::Value;

use parley_core_client::dtos::{User, UserId};
use parley_core_client::{Client, ClientEvent, StaticCredentialProvider};
use parley_stomp::destinations;
use parley_stomp::test::{fast_config, Connection, Connector};

use super::{RecordingDelegate, StubMessageArchive};

/// Every destination a connected client listens on, sorted.
pub const SUBSCRIBED_DESTINATIONS: [&str; 6] = [
    destinations::TOPIC_MESSAGE_DELETED,
    destinations::TOPIC_REACTIONS,
    destinations::TOPIC_TYPING,
    destinations::TOPIC_USER_STATUS,
    destinations::QUEUE_ERRORS,
    destinations::QUEUE_MESSAGES,
];

/// A client logged in as user 1 ("Jane Doe") talking to an in-memory server.
pub struct TestClient {
    client: Client,
    pub connection: Arc<Connection>,
    pub delegate: Arc<RecordingDelegate>,
    pub archive: StubMessageArchive,
}

impl TestClient {
    pub fn new() -> Self {
        Self::build(true)
    }

    pub fn without_credentials() -> Self {
        Self::build(false)
    }

    pub async fn connected() -> Result<Self> {
        let client = Self::new();
        client.start().await?;
        client.connection.reset();
        client.delegate.take_events();
        Ok(client)
    }

    fn build(with_credentials: bool) -> Self {
        let connection = Arc::new(Connection::default());
        let delegate = Arc::new(RecordingDelegate::default());
        let archive = StubMessageArchive::default();

        let credential_provider = if with_credentials {
            StaticCredentialProvider::new(
                Secret::new("secret".to_string()),
                User {
                    id: UserId::from(1),
                    display_name: "Jane Doe".to_string(),
                },
            )
        } else {
            StaticCredentialProvider::empty()
        };

        let client = Client::builder()
            .set_connection_config(fast_config())
            .set_connector_provider(Connector::provider(connection.clone()))
            .set_credential_provider(credential_provider)
            .set_message_archive_service(archive.clone())
            .build();

        client.add_observer(delegate.clone());

        TestClient {
            client,
            connection,
            delegate,
            archive,
        }
    }
}

impl TestClient {
    pub fn events(&self) -> Vec<ClientEvent> {
        self.delegate.events()
    }

    pub fn take_events(&self) -> Vec<ClientEvent> {
        self.delegate.take_events()
    }

    /// The SEND frames the client sent, with their bodies parsed as JSON.
    pub fn sent_json(&self) -> Result<Vec<(String, Value)>> {
        self.connection
            .sent_payloads()
            .into_iter()
            .map(|(destination, body)| Ok((destination, serde_json::from_str(&body)?)))
            .collect()
    }

    pub fn subscribed_destinations(&self) -> Vec<String> {
        self.connection.subscribed_destinations()
    }

    pub async fn receive_message_json(&self, id: i64, sender_id: i64, receiver_id: i64) {
        self.connection
            .receive_message(
                destinations::QUEUE_MESSAGES,
                serde_json::json!({
                    "id": id,
                    "senderId": sender_id,
                    "receiverId": receiver_id,
                    "content": format!("Message {id}"),
                    "sentAt": format!("2024-03-01T10:{:02}:00", id % 60),
                    "isRead": false
                })
                .to_string(),
            )
            .await
    }
}

impl Deref for TestClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
