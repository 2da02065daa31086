//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Application state.
///
/// Cloned per request; the service itself is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    /// Prefix for generated short URLs. `None` means derive it from the `Host` header.
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<dyn LinkRepository>>,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            link_service,
            public_base_url,
        }
    }
}
