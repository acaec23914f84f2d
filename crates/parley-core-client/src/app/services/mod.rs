// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_service::ConnectionService;
pub use conversations_service::{ConversationsService, SendMessageError};
pub use presence_service::PresenceService;

mod connection_service;
mod conversations_service;
mod presence_service;
