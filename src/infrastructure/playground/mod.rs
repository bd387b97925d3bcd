//! Go Playground integration.
//!
//! Provides [`PlaygroundClient`], the production [`crate::domain::ports::UpstreamClient`].

mod client;

pub use client::{PlaygroundClient, SHARE_CONTENT_TYPE};
