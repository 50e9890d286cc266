//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::SearchConfig;

/// Shared application state.
///
/// Contains the providers route search runs against and the search
/// configuration. Nothing here is mutated while serving.
pub struct AppState<P> {
    /// Geocoding, airport, ground and flight providers
    pub providers: Arc<P>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(providers: P, config: SearchConfig) -> Self {
        Self {
            providers: Arc::new(providers),
            config: Arc::new(config),
        }
    }
}

// Manual impl: cloning shares the Arcs and needs no `P: Clone`.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            providers: Arc::clone(&self.providers),
            config: Arc::clone(&self.config),
        }
    }
}
