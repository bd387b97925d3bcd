//! HTTP request handlers.

pub mod health;
pub mod share;

pub use health::health_handler;
pub use share::share_handler;
