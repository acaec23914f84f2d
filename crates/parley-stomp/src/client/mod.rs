// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::collections::BTreeMap;

use parking_lot::RwLock;
use strum_macros::Display;

use crate::connector::ConnectionError;
use crate::connector::Connector;
use crate::mods::AnyModule;
use crate::util::PinnedFuture;
use crate::Event as ClientEvent;
pub use builder::ClientBuilder;
pub use client::Client;
pub(crate) use module_context::ModuleContext;
pub use subscriptions::{FrameHandler, SubscriptionId};

mod builder;
mod client;
mod module_context;
mod subscriptions;

pub type EventHandler = Box<dyn Fn(Client, ClientEvent) -> PinnedFuture<()> + Send + Sync>;

pub(super) type ModuleLookup = BTreeMap<TypeId, RwLock<Box<dyn AnyModule>>>;

pub type ConnectorProvider = Box<dyn Fn() -> Box<dyn Connector> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ConnectionStateChanged {
        state: ConnectionState,
        error: Option<ConnectionError>,
    },
}
