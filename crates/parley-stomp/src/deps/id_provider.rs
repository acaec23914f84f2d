// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use parking_lot::Mutex;

pub trait IDProvider: Send + Sync {
    fn new_id(&self) -> String;
}

/// Hands out `<prefix>-1`, `<prefix>-2`, … which is all STOMP requires of subscription ids.
pub struct IncrementingIDProvider {
    prefix: String,
    last_id: Mutex<i64>,
}

impl IncrementingIDProvider {
    pub fn new(prefix: &str) -> Self {
        IncrementingIDProvider {
            prefix: prefix.to_string(),
            last_id: Mutex::new(0),
        }
    }

    pub fn reset(&self) {
        *self.last_id.lock() = 0;
    }
}

impl IDProvider for IncrementingIDProvider {
    fn new_id(&self) -> String {
        let mut last_id = self.last_id.lock();
        *last_id += 1;
        format!("{}-{}", self.prefix, *last_id)
    }
}

impl IDProvider for Arc<dyn IDProvider> {
    fn new_id(&self) -> String {
        self.deref().new_id()
    }
}

impl IDProvider for Arc<IncrementingIDProvider> {
    fn new_id(&self) -> String {
        self.deref().new_id()
    }
}
