//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlMappingService;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<UrlMappingService>,
    /// Where `GET /` sends visitors.
    pub root_redirect_url: String,
}

impl AppState {
    pub fn new(mapping_service: Arc<UrlMappingService>, root_redirect_url: impl Into<String>) -> Self {
        Self {
            mapping_service,
            root_redirect_url: root_redirect_url.into(),
        }
    }
}
