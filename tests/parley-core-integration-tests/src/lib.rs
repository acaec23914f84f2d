// parley/parley-core-integration-tests
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::Level;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        // Enable the `trace-frames` feature of parley-stomp and set this to Level::DEBUG to
        // see every frame…
        .with_max_level(Level::INFO)
        .try_init();
}

#[cfg(test)]
mod tests;
