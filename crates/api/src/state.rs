use std::sync::Arc;

use pantry_core::services::Services;
use pantry_core::store::{CategoryStore, RecipeStore, UnitOfMeasureStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: services hold their stores behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Domain services wired to the active store.
    pub services: Services,
    /// The active recipe store, checked by the health endpoint.
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    /// Wire the services to a store implementing every store trait.
    pub fn new<S>(config: Arc<ServerConfig>, store: Arc<S>) -> Self
    where
        S: RecipeStore + UnitOfMeasureStore + CategoryStore + 'static,
    {
        Self {
            config,
            services: Services::from_store(Arc::clone(&store)),
            store,
        }
    }
}
