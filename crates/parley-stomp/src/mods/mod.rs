// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::Any;

use anyhow::Result;

pub use chat::Chat;
pub use status::Status;

use crate::client::ModuleContext;
use crate::stomp::Frame;

pub mod chat;
pub mod status;

pub trait Module: Any + Send + Sync {
    fn register_with(&mut self, context: ModuleContext);

    /// The destinations this module wants to receive MESSAGE frames from.
    fn subscriptions(&self) -> Vec<&'static str> {
        vec![]
    }

    /// Called for every MESSAGE frame delivered on one of `subscriptions()`. Destinations the
    /// module doesn't know are ignored.
    fn handle_message_frame(&self, _destination: &str, _frame: &Frame) -> Result<()> {
        Ok(())
    }
}

pub trait AnyModule: Module {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Module> AnyModule for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
