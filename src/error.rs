//! Error types for the tournament API
//!
//! Cache operations are infallible; these errors belong to the HTTP surface
//! and the external lookup.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::lookup::LookupError;

// == API Error Enum ==
/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Invalid request data
    #[error("{0}")]
    InvalidRequest(String),

    /// The lookup service does not recognise the name
    #[error("Name is not a valid Pokemon")]
    InvalidPokemon,
}

// == Lookup Error Conversion ==
/// Any lookup failure means the name cannot be registered.
impl From<LookupError> for ApiError {
    fn from(_: LookupError) -> Self {
        ApiError::InvalidPokemon
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) | ApiError::InvalidPokemon => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the API layer.
pub type Result<T> = std::result::Result<T, ApiError>;
