// parley/common
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;

use anyhow::{format_err, Context, Result};
use tracing::metadata::LevelFilter;
pub use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};
use url::Url;

/// Logs to stderr. `RUST_LOG` takes precedence over `max_level`.
pub fn enable_logging(max_level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(max_level).into())
        .from_env_lossy();

    let fmt_layer = tracing_subscriber::fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    Registry::default().with(fmt_layer).init();
}

pub struct Credentials {
    pub endpoint: Option<Url>,
    pub token: String,
    pub user_id: i64,
    pub display_name: String,
}

/// Reads the credentials from `demos/.env`, falling back to the process environment.
pub fn load_credentials() -> Result<Credentials> {
    let path = env::current_dir()?.join("demos").join(".env");
    if let Err(err) = dotenvy::from_path(&path) {
        tracing::debug!("Not loading {:?}. {}", path, err);
    }

    let endpoint = env::var("PARLEY_ENDPOINT")
        .ok()
        .map(|endpoint| Url::parse(&endpoint))
        .transpose()
        .context("Invalid PARLEY_ENDPOINT")?;
    let token = env::var("PARLEY_TOKEN").map_err(|_| format_err!("Missing PARLEY_TOKEN"))?;
    let user_id = env::var("PARLEY_USER_ID")
        .map_err(|_| format_err!("Missing PARLEY_USER_ID"))?
        .parse::<i64>()
        .context("Invalid PARLEY_USER_ID")?;
    let display_name = env::var("PARLEY_DISPLAY_NAME").unwrap_or_else(|_| user_id.to_string());

    Ok(Credentials {
        endpoint,
        token,
        user_id,
        display_name,
    })
}
