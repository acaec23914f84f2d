// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::account::models::User;
pub use crate::domain::messaging::models::{
    Emoji, Message, MessageId, MessageType, ReactionAction, Reactions, TypingNotification,
};
pub use crate::domain::presence::models::{Availability, UserStatus};
pub use crate::domain::shared::models::UserId;
pub use crate::domain::uploads::models::UploadFile;
