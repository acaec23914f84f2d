// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::RwLock;
use tracing::warn;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::client::ClientInner;
use crate::{Client, ClientDelegate, ClientEvent, ObserverId};

/// Hands every event to all observers right away, in the order they were added.
pub struct ImmediateClientEventDispatcher {
    client_inner: OnceLock<Weak<ClientInner>>,
    observers: RwLock<Vec<(ObserverId, Arc<dyn ClientDelegate>)>>,
    last_observer_id: AtomicU64,
}

impl ImmediateClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        let dispatcher = Self {
            client_inner: Default::default(),
            observers: Default::default(),
            last_observer_id: Default::default(),
        };

        if let Some(delegate) = delegate {
            dispatcher.add_observer(Arc::from(delegate));
        }

        dispatcher
    }

    pub(crate) fn set_client_inner(&self, client_inner: Weak<ClientInner>) {
        if self.client_inner.set(client_inner).is_err() {
            warn!("Tried to set client_inner on ImmediateClientEventDispatcher more than once.");
        }
    }

    pub fn add_observer(&self, observer: Arc<dyn ClientDelegate>) -> ObserverId {
        let id = ObserverId::from(self.last_observer_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.observers.write().push((id, observer));
        id
    }

    /// Returns `false` if there was no observer with `id`.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.write();
        let count = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        observers.len() != count
    }
}

impl ClientEventDispatcherTrait for ImmediateClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        let Some(client_inner) = self.client_inner.get().and_then(Weak::upgrade) else {
            return;
        };

        // Observers may add or remove observers while handling the event.
        let observers = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect::<Vec<_>>();

        for observer in observers {
            observer.handle_event(Client::from(client_inner.clone()), event.clone());
        }
    }
}
