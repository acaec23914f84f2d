// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_conversations_repository::InMemoryConversationsRepository;

mod in_memory_conversations_repository;
