//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the content store behind a trait object so a real content
//! service can replace the in-memory seed without touching routes.

use std::sync::Arc;

use crate::services::content::ContentStore;

/// Shared application state, injected into Axum handlers via State
/// extractor. Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
}

impl AppState {
    #[must_use]
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::content::MemoryContent;

    /// App state over the seeded in-memory store.
    #[must_use]
    pub fn memory_state() -> AppState {
        AppState::new(Arc::new(MemoryContent::with_default_site()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_state_serves_seeded_pages() {
        let state = test_helpers::memory_state();
        let pages = state.content.list_pages().await;
        assert_eq!(pages.len(), 4);
    }

    #[test]
    fn app_state_clones_share_the_store() {
        let state = test_helpers::memory_state();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.content, &cloned.content));
    }
}
