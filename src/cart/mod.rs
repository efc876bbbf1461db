//! Cart Domain Module
//!
//! This module contains all cart business logic, including:
//! - Domain models (Item, Cart, operation payloads)
//! - The in-memory cart store
//! - The `CartService` request handler
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod service;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Cart, Item};
pub use service::CartService;
pub use state::{AppState, SharedState};
pub use store::CartStore;
