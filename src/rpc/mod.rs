//! RPC Transport Module
//!
//! This module contains the JSON-RPC 2.0 binding of the cart service:
//! - Protocol models (envelopes, method capability set, error codes)
//! - Envelope helpers (success/error responses)
//! - Route handlers and method dispatch

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use error::RpcError;
pub use handlers::routes;
pub use models::CartMethod;
