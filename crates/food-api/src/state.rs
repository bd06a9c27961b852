//! Shared application state for the Axum server.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::store::FoodStore;

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
///
/// Built once at startup and handed to the router; handlers never mutate
/// it, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub store: Arc<FoodStore>,
}

impl AppState {
    pub fn new(config: ApiConfig, store: FoodStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
