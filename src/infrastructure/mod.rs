//! Infrastructure layer for external integrations.
//!
//! Implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`playground`] - HTTP client for the upstream share service

pub mod playground;
