//! Application state shared across handlers.

use crate::store::UserStore;

/// Application state containing shared services
#[derive(Clone, Default)]
pub struct AppState {
    /// In-memory user store
    pub store: UserStore,
}

impl AppState {
    /// Create application state with an empty store
    pub fn new() -> Self {
        Self::default()
    }
}
