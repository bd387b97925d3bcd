//! Domain layer: entities, errors, and the pure parts of the share flow.
//!
//! # Architecture
//!
//! - [`entities`] - Request-scoped data structures
//! - [`error`] - Share failure taxonomy
//! - [`decoder`] - `code` parameter validation and percent-decoding
//! - [`redirect`] - Viewer URL composition
//! - [`ports`] - Upstream share service trait
//!
//! # Share Flow
//!
//! 1. [`decoder::decode_code`] turns the raw query value into a [`entities::ShareRequest`]
//! 2. A [`ports::UpstreamClient`] posts the decoded code and returns a [`entities::ShareResult`]
//! 3. [`redirect::compose_redirect_url`] builds the redirect target
//!
//! The orchestration lives in [`crate::application::services::ShareService`].

pub mod decoder;
pub mod entities;
pub mod error;
pub mod ports;
pub mod redirect;
