// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientBuilder, ConnectionState, SubscriptionId};
pub use config::ConnectionConfig;
pub use connector::{Connection, ConnectionError, Connector};
pub use deps::{IDProvider, IncrementingIDProvider};
pub use event::Event;
pub use stomp::destinations;
pub use util::{ParseError, PinnedFuture, RequestError};

pub mod client;
mod config;
pub mod connector;
mod deps;
mod event;
pub mod mods;
pub mod payload;
pub mod stomp;
mod util;

#[cfg(any(test, feature = "test"))]
pub mod test;
