//! Cart Application State
//!
//! The state owns the cart store and is shared by every request handler.

use super::store::CartStore;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
#[derive(Debug, Default)]
pub struct AppState {
    /// In-memory storage for carts, keyed by cart id.
    pub store: CartStore,
}

impl AppState {
    /// Creates a new AppState with an empty cart store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new AppState wrapped for sharing across handlers
    pub fn shared() -> SharedState {
        Arc::new(Self::new())
    }
}
