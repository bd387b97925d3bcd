//! Traits for the external services the domain depends on.
//!
//! Infrastructure provides the concrete implementations; mock implementations
//! are auto-generated via `mockall` for unit tests.

pub mod upstream_client;

#[cfg(test)]
pub use upstream_client::MockUpstreamClient;
pub use upstream_client::UpstreamClient;
