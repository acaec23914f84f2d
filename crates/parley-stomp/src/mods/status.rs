// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::client::ModuleContext;
use crate::mods::Module;
use crate::payload::UserStatus;
use crate::stomp::{destinations, Frame};
use crate::Event as ClientEvent;

#[derive(Default, Clone)]
pub struct Status {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    StatusChanged(UserStatus),
}

impl Module for Status {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context;
    }

    fn subscriptions(&self) -> Vec<&'static str> {
        vec![destinations::TOPIC_USER_STATUS]
    }

    fn handle_message_frame(&self, destination: &str, frame: &Frame) -> Result<()> {
        if destination != destinations::TOPIC_USER_STATUS {
            return Ok(());
        }

        let status = serde_json::from_str::<UserStatus>(&frame.body)?;
        self.ctx
            .schedule_event(ClientEvent::Status(Event::StatusChanged(status)));
        Ok(())
    }
}
