//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed by value
//! into [`crate::server::run`]. Nothing reads the environment after that.
//!
//! All variables share the `GOPLAY_` prefix:
//!
//! ```bash
//! export GOPLAY_PORT="8080"
//! export GOPLAY_LOG_LEVEL="debug"
//! export GOPLAY_SHARE_URL="https://play.golang.org/share"
//! export GOPLAY_BASE_URL="https://play.golang.org/p/"
//! ```
//!
//! ## Optional Variables
//!
//! - `GOPLAY_PORT` - Listen port, `8080` or `:8080` (default: `8080`)
//! - `GOPLAY_HOST` - Bind host (default: `0.0.0.0`)
//! - `GOPLAY_LOG_LEVEL` - `debug`, `info`, `warn` or `error`; anything else means `info`
//! - `GOPLAY_LOG_FORMAT` - `text` or `json` (default: `text` at debug level, `json` otherwise)
//! - `GOPLAY_SHARE_URL` - Upstream share endpoint
//! - `GOPLAY_BASE_URL` - Viewer URL prefix the share ID is appended to
//! - `GOPLAY_MAX_CODE_BYTES` - Largest decoded code forwarded upstream (default: 65536)
//!
//! `RUST_LOG`, when set, overrides `GOPLAY_LOG_LEVEL` for filtering.

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use url::Url;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "GOPLAY_";

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_SHARE_URL: &str = "https://play.golang.org/share";
pub const DEFAULT_BASE_URL: &str = "https://play.golang.org/p/";
/// The playground's own snippet size limit.
pub const DEFAULT_MAX_CODE_BYTES: usize = 64 * 1024;

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a level name case-insensitively; unknown names fall back to `Info`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    /// Listen port as given; a leading `:` is tolerated.
    pub port: String,
    pub log_level: LogLevel,
    pub log_format: String,
    pub share_url: String,
    /// Prefix the share ID is concatenated onto, separator included.
    pub base_url: String,
    pub max_code_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            log_level: LogLevel::Info,
            log_format: "json".to_string(),
            share_url: DEFAULT_SHARE_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_code_bytes: DEFAULT_MAX_CODE_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GOPLAY_MAX_CODE_BYTES` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let host = env_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = env_var("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());

        let log_level = env_var("LOG_LEVEL")
            .map(|v| LogLevel::parse_lenient(&v))
            .unwrap_or_default();

        let log_format = env_var("LOG_FORMAT").unwrap_or_else(|| {
            if log_level == LogLevel::Debug {
                "text".to_string()
            } else {
                "json".to_string()
            }
        });

        let share_url = env_var("SHARE_URL").unwrap_or_else(|| DEFAULT_SHARE_URL.to_string());
        let base_url = env_var("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let max_code_bytes = match env_var("MAX_CODE_BYTES") {
            Some(v) => v
                .parse()
                .with_context(|| format!("{ENV_PREFIX}MAX_CODE_BYTES must be a number, got '{v}'"))?,
            None => DEFAULT_MAX_CODE_BYTES,
        };

        Ok(Self {
            host,
            port,
            log_level,
            log_format,
            share_url,
            base_url,
            max_code_bytes,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is not a valid port number
    /// - `log_format` is not `text` or `json`
    /// - `share_url` or `base_url` is not an absolute HTTP(S) URL
    /// - `max_code_bytes` is zero
    pub fn validate(&self) -> Result<()> {
        self.port_number()?;

        if self.host.trim().is_empty() {
            anyhow::bail!("{ENV_PREFIX}HOST must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "{ENV_PREFIX}LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        validate_http_url("SHARE_URL", &self.share_url)?;
        validate_http_url("BASE_URL", &self.base_url)?;

        if self.max_code_bytes == 0 {
            anyhow::bail!("{ENV_PREFIX}MAX_CODE_BYTES must be greater than 0");
        }

        Ok(())
    }

    /// Returns the listen port with any leading `:` removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the port is not a number in `0..=65535`.
    pub fn port_number(&self) -> Result<u16> {
        let port = self.port.trim().trim_start_matches(':');
        port.parse().with_context(|| {
            format!(
                "{ENV_PREFIX}PORT must be a port number, got '{}'",
                self.port
            )
        })
    }

    /// Returns the `host:port` address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error if the port is invalid.
    pub fn listen_addr(&self) -> Result<String> {
        Ok(format!("{}:{}", self.host, self.port_number()?))
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}:{}", self.host, self.port.trim_start_matches(':'));
        tracing::info!("  Share URL: {}", self.share_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Max code size: {} bytes", self.max_code_bytes);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}{key}")).ok()
}

fn validate_http_url(key: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .with_context(|| format!("{ENV_PREFIX}{key} must be an absolute URL, got '{value}'"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{ENV_PREFIX}{key} must use http or https, got '{value}'");
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects `.env` to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
