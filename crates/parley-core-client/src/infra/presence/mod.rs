// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_presence_repository::InMemoryPresenceRepository;

mod in_memory_presence_repository;
