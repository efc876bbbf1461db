//! Cart Service Library
//!
//! This library provides an in-memory cart service exposed over JSON-RPC
//! (and a small REST surface), together with a typed client.

// Domain modules
pub mod cart;
pub mod rpc;

// Infrastructure
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod router;
pub mod server;
mod shutdown;
