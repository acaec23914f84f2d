// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message::{Message, MessageType};
pub use message_id::{Emoji, MessageId};
pub use reactions::{ReactionAction, Reactions};
pub use send_message_request::SendMessageRequest;
pub use typing_notification::TypingNotification;

mod message;
mod message_id;
mod reactions;
mod send_message_request;
mod typing_notification;
