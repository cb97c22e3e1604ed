use crate::config::Config;
use crate::store::GameStore;
use std::sync::Arc;

/// Shared application state
///
/// The store is injected as a trait handle so the router never wires itself
/// to a concrete backend.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
    pub config: Arc<Config>,
}
