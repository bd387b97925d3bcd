//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShareService;

/// State shared by all request handlers.
///
/// Cloned per request; everything behind it is immutable.
#[derive(Clone)]
pub struct AppState {
    pub share_service: Arc<ShareService>,
}

impl AppState {
    pub fn new(share_service: Arc<ShareService>) -> Self {
        Self { share_service }
    }
}
