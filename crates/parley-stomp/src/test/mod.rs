// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;

pub use connected_client::{ClientTestAdditions, ConnectedClient};
pub use connector::{Connection, Connector};

use crate::ConnectionConfig;


/// A configuration that reconnects almost immediately and doesn't exchange heart-beats.
pub fn fast_config() -> ConnectionConfig {
    ConnectionConfig {
        reconnect_delay: Duration::from_millis(10),
        heartbeat_outgoing: Duration::ZERO,
        heartbeat_incoming: Duration::ZERO,
        connect_timeout: Duration::from_secs(1),
        ..Default::default()
    }
}

/// Polls `condition` until it holds or two seconds have passed.
pub async fn wait_until(condition: impl Fn() -> bool) -> Result<()> {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);

    while !condition() {
        if tokio::time::Instant::now() >= deadline {
            anyhow::bail!("Condition not met in time");
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    Ok(())
}
