//! Application state for shared services

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::infrastructure::documents::DocumentCacheService;
use crate::infrastructure::services::CoachService;

/// Application state containing shared services
///
/// The document cache is the only shared mutable resource in the
/// process; it is owned here and injected into handlers, never reached
/// through globals.
#[derive(Clone)]
pub struct AppState {
    pub coach_service: Arc<CoachService>,
    pub document_cache: Arc<DocumentCacheService>,
    pub search_config: SearchConfig,
}

impl AppState {
    pub fn new(
        coach_service: Arc<CoachService>,
        document_cache: Arc<DocumentCacheService>,
        search_config: SearchConfig,
    ) -> Self {
        Self {
            coach_service,
            document_cache,
            search_config,
        }
    }
}
