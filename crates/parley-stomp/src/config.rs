// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::stomp::HeartBeat;

pub const DEFAULT_ENDPOINT: &str = "ws://localhost:8083/ws/websocket";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectionConfig {
    pub endpoint: Url,
    /// Fixed pause between a failed or closed connection and the next attempt.
    #[serde(with = "duration_ms")]
    pub reconnect_delay: Duration,
    #[serde(with = "duration_ms")]
    pub heartbeat_outgoing: Duration,
    #[serde(with = "duration_ms")]
    pub heartbeat_incoming: Duration,
    #[serde(with = "duration_ms")]
    pub connect_timeout: Duration,
}

impl ConnectionConfig {
    pub fn heart_beat(&self) -> HeartBeat {
        HeartBeat::new(self.heartbeat_outgoing, self.heartbeat_incoming)
    }

    pub fn host(&self) -> String {
        self.endpoint.host_str().unwrap_or("localhost").to_string()
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("Default endpoint is a valid URL"),
            reconnect_delay: Duration::from_secs(5),
            heartbeat_outgoing: Duration::from_secs(4),
            heartbeat_incoming: Duration::from_secs(4),
            connect_timeout: Duration::from_secs(15),
        }
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
