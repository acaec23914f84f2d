// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;

use parley_core_client::dtos::{MessageId, UserId};
use parley_core_client::{ClientEvent, ConnectionState};

use super::helpers::{RecordingDelegate, TestClient};

#[tokio::test]
async fn test_removed_observer_stops_receiving_events() -> Result<()> {
    let client = TestClient::connected().await?;

    let staying = Arc::new(RecordingDelegate::default());
    let leaving = Arc::new(RecordingDelegate::default());

    client.add_observer(staying.clone());
    let leaving_id = client.add_observer(leaving.clone());

    assert!(client.remove_observer(leaving_id));

    client.receive_message_json(1, 2, 1).await;

    let appended = ClientEvent::MessagesAppended {
        counterpart: UserId::from(2),
        message_ids: vec![MessageId::from(1)],
    };

    assert_eq!(staying.take_events(), vec![appended.clone()]);
    assert!(leaving.events().is_empty());
    assert_eq!(client.take_events(), vec![appended]);

    // Unsubscribing touches neither the store nor the transport.
    assert_eq!(client.conversations.messages(&UserId::from(2)).len(), 1);
    assert_eq!(client.connection_state(), ConnectionState::Connected);

    assert!(!client.remove_observer(leaving_id));

    Ok(())
}
