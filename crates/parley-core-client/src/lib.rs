// parley/parley-core-client
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::services::SendMessageError;
pub use client::{Client, ClientDelegate, ObserverId};
pub use client_builder::ClientBuilder;
pub use client_event::ClientEvent;
pub use domain::account::services::CredentialProvider;
pub use domain::messaging::services::MessageArchiveService;
pub use domain::uploads::services::ImageUploadService;
pub use infra::account::StaticCredentialProvider;
pub use parley_stomp::{ConnectionConfig, ConnectionError, ConnectionState, RequestError};

#[cfg(any(test, feature = "test"))]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;
pub mod dtos;

#[cfg(any(test, feature = "test"))]
pub mod domain;
#[cfg(not(any(test, feature = "test")))]
pub(crate) mod domain;

#[cfg(any(test, feature = "test"))]
pub mod infra;
#[cfg(not(any(test, feature = "test")))]
pub(crate) mod infra;
