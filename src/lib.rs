//! # Playground Proxy
//!
//! A redirecting proxy for the Go Playground, built with Axum.
//!
//! `GET /?code=<percent-encoded source>` posts the source to the playground's
//! share endpoint and answers `302 Found` pointing at the shared snippet.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, errors, decoding and redirect composition
//! - **Application Layer** ([`application`]) - The share service orchestrating one request
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the upstream share service
//! - **API Layer** ([`api`]) - Handlers, query DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export GOPLAY_PORT=8080
//! cargo run
//! curl -i 'http://localhost:8080/?code=package%20main'
//! ```
//!
//! ## Configuration
//!
//! Loaded from `GOPLAY_*` environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShareService;
    pub use crate::domain::entities::{ShareRequest, ShareResult};
    pub use crate::domain::error::ShareError;
    pub use crate::domain::ports::UpstreamClient;
    pub use crate::error::AppError;
    pub use crate::infrastructure::playground::PlaygroundClient;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
