// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

// Outbound application destinations
pub const APP_SEND_MESSAGE: &str = "/app/chat.sendMessage";
pub const APP_TYPING: &str = "/app/chat.typing";
pub const APP_REACTION: &str = "/app/chat.reaction";
pub const APP_DELETE_MESSAGE: &str = "/app/chat.deleteMessage";

// Inbound user queues
pub const QUEUE_MESSAGES: &str = "/user/queue/messages";
pub const QUEUE_ERRORS: &str = "/user/queue/errors";

// Inbound broadcast topics
pub const TOPIC_USER_STATUS: &str = "/topic/users/status";
pub const TOPIC_TYPING: &str = "/topic/typing";
pub const TOPIC_REACTIONS: &str = "/topic/reactions";
pub const TOPIC_MESSAGE_DELETED: &str = "/topic/messages/deleted";
