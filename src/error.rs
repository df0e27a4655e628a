use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

/// Custom error type for API endpoints
///
/// Every failure other than "not found" collapses to a 500 - the store has
/// almost no failure modes to distinguish, and the bare-text bodies match
/// what clients of this API already expect.
#[derive(Debug)]
pub enum ApiError {
    /// No sensor exists for the requested id
    NotFound,
    /// Request body failed JSON decoding
    Decode(serde_json::Error),
    /// Any other store failure
    Store(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
            ApiError::Decode(err) => {
                tracing::error!("failed to decode request body: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500 Internal Server Error",
                )
                    .into_response()
            }
            ApiError::Store(err) => {
                tracing::error!("store error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "500 Internal Server Error",
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(err)
    }
}
