//! Core domain entities for the share round-trip.
//!
//! Both entities are request-scoped: created when a request arrives and dropped
//! with the response. Nothing is cached or persisted.
//!
//! # Entity Types
//!
//! - [`ShareRequest`] - Caller-supplied code, raw and decoded
//! - [`ShareResult`] - Trimmed identifier returned by the upstream share service

pub mod share;

pub use share::{ShareRequest, ShareResult};
