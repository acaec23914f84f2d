// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod connection;
mod helpers;
mod messaging;
mod observers;
mod presence;
mod reconnect;
