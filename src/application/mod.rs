//! Application layer services implementing business logic.
//!
//! Services coordinate the domain's pure steps with the ports it depends on
//! and give HTTP handlers a single call per operation.
//!
//! # Available Services
//!
//! - [`services::share_service::ShareService`] - Share code and build the redirect target

pub mod services;
