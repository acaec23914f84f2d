// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use parley_core_client::dtos::UserId;
use parley_core_client::{ClientEvent, ConnectionError, ConnectionState};
use parley_stomp::test::wait_until;

use super::helpers::{TestClient, SUBSCRIBED_DESTINATIONS};

#[tokio::test]
async fn test_resubscribes_after_reconnect() -> Result<()> {
    let client = TestClient::connected().await?;
    client.receive_message_json(1, 2, 1).await;

    client
        .connection
        .simulate_disconnect(Some(ConnectionError::TimedOut))
        .await;

    wait_until(|| {
        client.connection.connect_count() == 2
            && client.subscribed_destinations() == SUBSCRIBED_DESTINATIONS
    })
    .await?;

    // Nothing received on the second connection gets lost.
    client.receive_message_json(2, 2, 1).await;
    client.receive_message_json(1, 2, 1).await;

    assert_eq!(
        client
            .conversations
            .messages(&UserId::from(2))
            .into_iter()
            .map(|message| message.id.into_inner())
            .collect::<Vec<_>>(),
        vec![1, 2]
    );

    let events = client.take_events();
    assert_eq!(
        events[1..4],
        [
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Disconnected,
                error: Some(ConnectionError::TimedOut)
            },
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Connecting,
                error: None
            },
            ClientEvent::ConnectionStatusChanged {
                state: ConnectionState::Connected,
                error: None
            },
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_retries_failed_connection_attempts() -> Result<()> {
    let client = TestClient::new();
    client.connection.fail_next_connects(2);

    assert!(matches!(
        client.start().await,
        Err(ConnectionError::Generic { .. })
    ));

    wait_until(|| {
        client.connection_state() == ConnectionState::Connected
            && client.subscribed_destinations() == SUBSCRIBED_DESTINATIONS
    })
    .await?;

    assert_eq!(client.connection.tokens().len(), 3);
    assert_eq!(client.connection.connect_count(), 1);

    let failures = client
        .events()
        .into_iter()
        .filter(|event| {
            matches!(
                event,
                ClientEvent::ConnectionStatusChanged {
                    state: ConnectionState::Failed,
                    ..
                }
            )
        })
        .count();
    assert_eq!(failures, 2);

    Ok(())
}
