// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use parley_core_client::dtos::UserId;
use parley_core_client::{ClientEvent, ConnectionError, ConnectionState};

use super::helpers::{TestClient, SUBSCRIBED_DESTINATIONS};

#[tokio::test]
async fn test_start_connects_and_subscribes_to_all_topics() -> Result<()> {
    let client = TestClient::new();

    client.start().await?;

    assert_eq!(client.connection.tokens(), vec!["secret".to_string()]);
    assert_eq!(client.connection_state(), ConnectionState::Connected);
    assert_eq!(client.subscribed_destinations(), SUBSCRIBED_DESTINATIONS);
    assert_eq!(client.current_user().map(|user| user.id), Some(UserId::from(1)));
    assert_eq!(
        client.events(),
        vec![
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
async fn test_start_without_credentials_fails() {
    let client = TestClient::without_credentials();

    assert_eq!(
        client.start().await,
        Err(ConnectionError::MissingCredentials)
    );
    assert_eq!(client.connection.connect_count(), 0);
    assert_eq!(client.connection_state(), ConnectionState::Disconnected);
    assert!(client.events().is_empty());
}

#[tokio::test]
async fn test_disconnect_is_idempotent() -> Result<()> {
    let client = TestClient::connected().await?;
    let state = client.connection_state_watch();

    client.disconnect().await;
    client.disconnect().await;

    assert_eq!(*state.borrow(), ConnectionState::Disconnected);
    assert_eq!(
        client.take_events(),
        vec![ClientEvent::ConnectionStatusChanged {
            state: ConnectionState::Disconnected,
            error: None
        }]
    );

    Ok(())
}
