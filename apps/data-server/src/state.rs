//! Application state.

use std::sync::Arc;

use data_store::DataStore;

use crate::config::Config;

/// Shared application state.
pub struct AppState<S: DataStore> {
    /// Server configuration.
    pub config: Config,
    /// Data store.
    pub store: S,
}

impl<S: DataStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, store: S) -> Self {
        Self { config, store }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config and store.
pub fn create_shared_state<S: DataStore>(config: Config, store: S) -> SharedState<S> {
    Arc::new(AppState::new(config, store))
}
