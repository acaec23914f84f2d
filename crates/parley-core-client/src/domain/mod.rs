// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod account;
pub mod connection;
pub mod messaging;
pub mod presence;
pub mod shared;
pub mod uploads;
