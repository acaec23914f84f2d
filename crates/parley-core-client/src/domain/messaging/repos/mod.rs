// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversations_repository::ConversationsRepository;

mod conversations_repository;

#[cfg(any(test, feature = "test"))]
pub mod mocks {
    pub use super::conversations_repository::MockConversationsRepository;
}
