//! Errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::io;
use thiserror::Error;

/// Errors raised at the cart service boundary.
///
/// Unknown carts and items are not errors; they surface as absent carts.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The operation is part of the contract but has no handler.
    #[error("method {0} is not implemented")]
    Unimplemented(&'static str),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self {
            ServiceError::Unimplemented(_) => StatusCode::NOT_IMPLEMENTED,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Errors that stop the server from running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
