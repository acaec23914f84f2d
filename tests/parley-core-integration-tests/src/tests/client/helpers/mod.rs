// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use delegate::RecordingDelegate;
pub use history::StubMessageArchive;
pub use test_client::{TestClient, SUBSCRIBED_DESTINATIONS};

mod delegate;
mod history;
mod test_client;
