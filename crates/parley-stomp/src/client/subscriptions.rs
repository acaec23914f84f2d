// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use anyhow::Result;

use crate::deps::IDProvider;
use crate::stomp::{Command, Frame};

/// Invoked once for every MESSAGE frame delivered on the subscription it was registered for.
pub type FrameHandler = Arc<dyn Fn(&Frame) -> Result<()> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// The explicit list of (destination, handler) registrations. Registrations outlive
/// connections; the STOMP subscription ids they are bound to do not and are handed out anew
/// each time the list is replayed.
#[derive(Default)]
pub(crate) struct SubscriptionRegistry {
    last_id: u64,
    registrations: Vec<Registration>,
}

struct Registration {
    id: SubscriptionId,
    destination: String,
    handler: FrameHandler,
    stomp_id: Option<String>,
}

impl SubscriptionRegistry {
    pub fn register(
        &mut self,
        destination: impl Into<String>,
        handler: FrameHandler,
    ) -> SubscriptionId {
        self.last_id += 1;
        let id = SubscriptionId(self.last_id);
        self.registrations.push(Registration {
            id,
            destination: destination.into(),
            handler,
            stomp_id: None,
        });
        id
    }

    /// Removes the registration and returns the UNSUBSCRIBE frame to send if it is currently
    /// bound to a live subscription.
    pub fn unregister(&mut self, id: SubscriptionId) -> Option<Frame> {
        let idx = self.registrations.iter().position(|r| r.id == id)?;
        let registration = self.registrations.remove(idx);
        registration
            .stomp_id
            .map(|stomp_id| Frame::new(Command::Unsubscribe).set_header("id", stomp_id))
    }

    /// Binds the registration to a new STOMP subscription and returns its SUBSCRIBE frame.
    pub fn activate(
        &mut self,
        id: SubscriptionId,
        id_provider: &dyn IDProvider,
    ) -> Option<Frame> {
        let registration = self.registrations.iter_mut().find(|r| r.id == id)?;
        Some(Self::bind(registration, id_provider))
    }

    /// Binds every registration to a new STOMP subscription. Used after each (re)connect since
    /// the server does not carry subscriptions over from a previous connection.
    pub fn activate_all(&mut self, id_provider: &dyn IDProvider) -> Vec<Frame> {
        self.registrations
            .iter_mut()
            .map(|registration| Self::bind(registration, id_provider))
            .collect()
    }

    pub fn deactivate_all(&mut self) {
        for registration in self.registrations.iter_mut() {
            registration.stomp_id = None
        }
    }

    /// Returns the handlers the frame should be delivered to along with the destination they
    /// were registered for. Frames without a `subscription` header are matched by destination.
    pub fn handlers_for(&self, frame: &Frame) -> Vec<(String, FrameHandler)> {
        let matches = |registration: &&Registration| match frame.subscription() {
            Some(subscription) => registration.stomp_id.as_deref() == Some(subscription),
            None => {
                registration.stomp_id.is_some()
                    && frame.destination() == Some(registration.destination.as_str())
            }
        };

        self.registrations
            .iter()
            .filter(matches)
            .map(|r| (r.destination.clone(), r.handler.clone()))
            .collect()
    }

    pub fn destinations(&self) -> Vec<String> {
        self.registrations
            .iter()
            .map(|r| r.destination.clone())
            .collect()
    }

    fn bind(registration: &mut Registration, id_provider: &dyn IDProvider) -> Frame {
        let stomp_id = id_provider.new_id();
        registration.stomp_id = Some(stomp_id.clone());
        Frame::new(Command::Subscribe)
            .set_header("id", stomp_id)
            .set_header("destination", registration.destination.clone())
    }
}

impl Debug for SubscriptionRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionRegistry")
            .field("destinations", &self.destinations())
            .finish()
    }
}
