// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use parley_core_client::dtos::{Availability, UserId};
use parley_core_client::ClientEvent;
use parley_stomp::destinations;

use super::helpers::TestClient;

#[tokio::test]
async fn test_tracks_presence_last_write_wins() -> Result<()> {
    let client = TestClient::connected().await?;

    assert!(!client.presence.is_online(&UserId::from(2)));

    client
        .connection
        .receive_message(
            destinations::TOPIC_USER_STATUS,
            json!({"userId": 2, "displayName": "Bob", "status": "ONLINE"}).to_string(),
        )
        .await;

    assert!(client.presence.is_online(&UserId::from(2)));

    client
        .connection
        .receive_message(
            destinations::TOPIC_USER_STATUS,
            json!({
                "userId": 2,
                "status": "OFFLINE",
                "lastSeen": "2024-03-01T18:30:00"
            })
            .to_string(),
        )
        .await;

    let status = client.presence.status(&UserId::from(2));
    assert_eq!(
        status.as_ref().map(|status| status.availability),
        Some(Availability::Offline)
    );
    assert!(status.and_then(|status| status.last_seen).is_some());
    assert!(!client.presence.is_online(&UserId::from(2)));
    assert!(!client.presence.is_online(&UserId::from(99)));

    assert_eq!(
        client.take_events(),
        vec![
            ClientEvent::PresenceChanged {
                user_id: UserId::from(2)
            },
            ClientEvent::PresenceChanged {
                user_id: UserId::from(2)
            },
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_disconnect_discards_presence() -> Result<()> {
    let client = TestClient::connected().await?;

    client
        .connection
        .receive_message(
            destinations::TOPIC_USER_STATUS,
            json!({"userId": 3, "status": "ONLINE"}).to_string(),
        )
        .await;
    assert!(client.presence.is_online(&UserId::from(3)));

    client.disconnect().await;

    assert!(client.presence.status(&UserId::from(3)).is_none());
    assert!(client.current_user().is_none());

    Ok(())
}
