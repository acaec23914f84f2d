// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use crate::util::ParseError;

/// The `heart-beat` header of a CONNECT or CONNECTED frame. `outgoing` is the smallest interval
/// at which the sender can emit heart-beats, `incoming` the interval at which it wants to receive
/// them. A zero duration means "not supported".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeartBeat {
    pub outgoing: Duration,
    pub incoming: Duration,
}

impl HeartBeat {
    pub fn new(outgoing: Duration, incoming: Duration) -> Self {
        HeartBeat { outgoing, incoming }
    }

    pub fn header_value(&self) -> String {
        format!(
            "{},{}",
            self.outgoing.as_millis(),
            self.incoming.as_millis()
        )
    }

    pub fn from_header(value: &str) -> Result<Self, ParseError> {
        let Some((outgoing, incoming)) = value.split_once(',') else {
            return Err(ParseError::Generic {
                msg: format!("Invalid heart-beat header '{value}'"),
            });
        };

        Ok(HeartBeat {
            outgoing: Duration::from_millis(outgoing.trim().parse()?),
            incoming: Duration::from_millis(incoming.trim().parse()?),
        })
    }

    /// Computes the intervals this client has to honor given what it asked for and what the
    /// server announced in its CONNECTED frame.
    pub fn negotiate(client: HeartBeat, server: HeartBeat) -> HeartBeat {
        fn pick(ours: Duration, theirs: Duration) -> Duration {
            if ours.is_zero() || theirs.is_zero() {
                return Duration::ZERO;
            }
            ours.max(theirs)
        }

        HeartBeat {
            outgoing: pick(client.outgoing, server.incoming),
            incoming: pick(client.incoming, server.outgoing),
        }
    }

    /// How long the incoming side may stay silent before the peer is considered dead.
    pub fn incoming_deadline(&self) -> Option<Duration> {
        if self.incoming.is_zero() {
            return None;
        }
        Some(self.incoming * 2)
    }
}
