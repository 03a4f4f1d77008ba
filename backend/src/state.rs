//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::repositories::Store;
use std::sync::Arc;

/// Shared application state
///
/// The store sits behind `Arc`, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Storage backend selected at startup
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Get a reference to the store
    #[inline]
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageBackend;
    use crate::repositories::MemoryStore;

    #[test]
    fn test_state_clone_shares_store() {
        let state = AppState::new(Arc::new(MemoryStore::new()));
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.store, &cloned.store));
        assert_eq!(cloned.store().backend(), StorageBackend::Memory);
    }
}
