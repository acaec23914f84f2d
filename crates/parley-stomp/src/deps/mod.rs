// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use id_provider::{IDProvider, IncrementingIDProvider};

mod id_provider;
