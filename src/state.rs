//! Shared application state for all routes.

use crate::store::Store;
use std::sync::Arc;

/// Handle passed to every handler. The store owns its connection pool; there is no global session.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: impl Store) -> Self {
        AppState { store: Arc::new(store) }
    }
}
