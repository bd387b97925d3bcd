//! HTTP middleware for request processing.
//!
//! Provides observability and recovery layers applied to every route.

pub mod recovery;
pub mod request_id;
pub mod tracing;
