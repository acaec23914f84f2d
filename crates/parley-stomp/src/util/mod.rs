// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;

pub use request_error::{ParseError, RequestError};

mod request_error;

pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;
