/**
 * Error Types
 *
 * This module defines the error taxonomy used across the API surface and
 * the conversion of those errors into HTTP responses.
 *
 * # Taxonomy
 *
 * - `MissingCredentials` - login called without an identifier or secret
 * - `InvalidCredentials` - unknown identity OR wrong secret (deliberately
 *   the same error, so a caller cannot probe for account existence)
 * - `StoreUnavailable` - the relational store is absent or a query failed
 * - `TokenMissing` - no bearer token on a protected route
 * - `TokenInvalid` - expired OR forged OR malformed token (deliberately
 *   the same error; callers learn nothing about which check failed)
 * - `Validation` - request body failed shape/content validation
 * - `Conflict` - registration collided with an existing username/email
 * - `NotFound` - no identity record matched
 *
 * # Response Format
 *
 * Every error renders as a JSON envelope:
 *
 * ```json
 * { "success": false, "message": "..." }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// API-level errors, each mapping to a fixed HTTP status
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login request lacked an identifier or a secret
    #[error("identifier and password are required")]
    MissingCredentials,

    /// Unknown identity or wrong secret; the two are indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The relational store is absent/unreachable or a query failed
    #[error("service temporarily unavailable")]
    StoreUnavailable,

    /// Protected route called without a bearer token
    #[error("authentication token required")]
    TokenMissing,

    /// Token failed signature or expiry checks, or was malformed
    #[error("invalid or expired token")]
    TokenInvalid,

    /// Request body failed validation
    #[error("{0}")]
    Validation(String),

    /// Registration conflict (username or email already taken)
    #[error("{0}")]
    Conflict(String),

    /// No identity record matched the given key
    #[error("user not found")]
    NotFound,

    /// Unexpected server-side failure (hashing, signing)
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `MissingCredentials` / `Validation` - 400 Bad Request
    /// - `InvalidCredentials` / `TokenMissing` - 401 Unauthorized
    /// - `TokenInvalid` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `StoreUnavailable` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::TokenMissing => StatusCode::UNAUTHORIZED,
            Self::TokenInvalid => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::StoreUnavailable | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

/// Store-layer errors
///
/// Kept separate from `ApiError` so the store seam stays free of HTTP
/// concerns. Query failures are logged at the conversion boundary and
/// collapsed into `StoreUnavailable`; raw driver errors never reach a
/// client.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No store connection was configured or the pool is gone
    #[error("store not available")]
    Unavailable,

    /// A query against the store failed
    #[error("store query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::Unavailable => {
                tracing::error!("store not configured or unreachable");
            }
            StoreError::Query(e) => {
                tracing::error!("store query failed: {:?}", e);
            }
        }
        ApiError::StoreUnavailable
    }
}
