use std::sync::Arc;

use crate::{db::MovieStore, services::catalog::filters::SearchPattern};

/// Shared application state, cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
    pub search_pattern: SearchPattern,
}

impl AppState {
    /// Creates state around an already connected store
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self {
            store,
            search_pattern: SearchPattern::default(),
        }
    }

    pub fn with_search_pattern(mut self, search_pattern: SearchPattern) -> Self {
        self.search_pattern = search_pattern;
        self
    }
}
