// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use parley_stomp::{
    client::Event as StompClientEvent, mods::chat::Event as StompChatEvent,
    mods::status::Event as StompStatusEvent, ConnectionState,
};

use crate::app::event_handlers::{
    ConnectionEvent, MessageEvent, MessageEventType, ServerErrorEvent, ServerEvent, StompEvent,
    UserStatusEvent, UserStatusEventType,
};
use crate::domain::messaging::models::{Message, Reactions};
use crate::domain::presence::models::UserStatus;

pub fn parse_stomp_event(event: StompEvent) -> Result<Vec<ServerEvent>> {
    let mut ctx = Context::default();

    match event {
        StompEvent::Chat(event) => parse_chat_event(&mut ctx, event)?,
        StompEvent::Client(event) => parse_client_event(&mut ctx, event),
        StompEvent::Status(event) => parse_status_event(&mut ctx, event),
    };

    Ok(ctx.events)
}

#[derive(Debug, Default)]
struct Context {
    events: Vec<ServerEvent>,
}

impl Context {
    pub fn push_event(&mut self, event: impl Into<ServerEvent>) {
        self.events.push(event.into())
    }
}

fn parse_chat_event(ctx: &mut Context, event: StompChatEvent) -> Result<()> {
    match event {
        StompChatEvent::Message(message) => ctx.push_event(MessageEvent {
            r#type: MessageEventType::Received(Message::try_from(message)?),
        }),
        StompChatEvent::ChatStateChanged(notification) => ctx.push_event(UserStatusEvent {
            user_id: notification.user_id.into(),
            r#type: UserStatusEventType::ComposeStateChanged {
                receiver_id: notification.receiver_id.into(),
                is_typing: notification.is_typing,
            },
        }),
        StompChatEvent::ReactionsChanged(update) => ctx.push_event(MessageEvent {
            r#type: MessageEventType::ReactionsChanged {
                message_id: update.message_id.into(),
                user_id: update.user_id.into(),
                user_display_name: update.user_display_name,
                emoji: update.emoji.into(),
                action: update.action.into(),
                reactions: Reactions::from_iter(update.reaction_counts),
            },
        }),
        StompChatEvent::MessageDeleted(deletion) => ctx.push_event(MessageEvent {
            r#type: MessageEventType::Deleted {
                message_id: deletion.message_id.into(),
                deleted_by: deletion.deleted_by.into(),
            },
        }),
        StompChatEvent::Error { message } => ctx.push_event(ServerErrorEvent { message }),
    }
    Ok(())
}

fn parse_client_event(ctx: &mut Context, event: StompClientEvent) {
    match event {
        StompClientEvent::ConnectionStateChanged { state, error } => {
            ctx.push_event(match state {
                ConnectionState::Disconnected => ConnectionEvent::Disconnected { error },
                ConnectionState::Connecting => ConnectionEvent::Connecting,
                ConnectionState::Connected => ConnectionEvent::Connected,
                ConnectionState::Failed => ConnectionEvent::Failed { error },
            })
        }
    }
}

fn parse_status_event(ctx: &mut Context, event: StompStatusEvent) {
    match event {
        StompStatusEvent::StatusChanged(status) => {
            let status = UserStatus::from(status);
            ctx.push_event(UserStatusEvent {
                user_id: status.user_id,
                r#type: UserStatusEventType::AvailabilityChanged { status },
            })
        }
    }
}
