//! Application state for the HR engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::InMemoryStore;

/// Shared application state.
///
/// Holds the in-memory store behind an async read/write lock so
/// handlers always see a consistent snapshot of the collections.
#[derive(Clone)]
pub struct AppState {
    /// The shared entity store.
    store: Arc<RwLock<InMemoryStore>>,
}

impl AppState {
    /// Creates a new application state owning the given store.
    pub fn new(store: InMemoryStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns the lock guarding the store.
    pub fn store(&self) -> &RwLock<InMemoryStore> {
        &self.store
    }
}
