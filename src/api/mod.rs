//! HTTP layer: translates requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Query parameter types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, request IDs and panic recovery
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
