// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use event_parser::parse_stomp_event;
pub use stomp_client::{StompClient, StompClientBuilder};

mod connection_service;
mod event_parser;
mod messaging_service;
mod stomp_client;
mod type_conversions;
