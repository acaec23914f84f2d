// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use deletion::{DeleteMessageRequest, MessageDeleted};
pub use message::{Message, MessageType, SendMessageRequest};
pub use reaction::{ReactionAction, ReactionRequest, ReactionUpdate};
pub use status::{Availability, UserStatus};
pub use typing::{TypingNotification, TypingRequest};

mod deletion;
mod message;
mod reaction;
mod status;
mod timestamp;
mod typing;
