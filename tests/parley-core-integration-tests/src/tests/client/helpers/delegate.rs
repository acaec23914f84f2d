// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;

use parley_core_client::{Client, ClientDelegate, ClientEvent};

/// Remembers every event the client sent, in order.
#[derive(Default)]
pub struct RecordingDelegate {
    events: Mutex<Vec<ClientEvent>>,
}

impl RecordingDelegate {
    pub fn events(&self) -> Vec<ClientEvent> {
        self.events.lock().clone()
    }

    pub fn take_events(&self) -> Vec<ClientEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl ClientDelegate for RecordingDelegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        self.events.lock().push(event)
    }
}
