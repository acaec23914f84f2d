// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use immediate_client_event_dispatcher::ImmediateClientEventDispatcher;

mod immediate_client_event_dispatcher;
