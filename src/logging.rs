//! Tracing subscriber setup.
//!
//! JSON lines for production, ANSI text for development. `RUST_LOG`, when
//! present, replaces the configured level as the filter.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.log_format == "json" {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.with_ansi(true).with_target(false).try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
