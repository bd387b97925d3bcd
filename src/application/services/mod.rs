//! Business logic services for the application layer.

pub mod share_service;

pub use share_service::ShareService;
