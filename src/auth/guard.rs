/**
 * Bearer-Token Guard
 *
 * Guard function composed before protected handlers. It extracts the
 * bearer token from the `Authorization` header, validates it, and returns
 * the caller's identity as a tagged result instead of mutating the request.
 *
 * # Error Mapping
 *
 * - Header absent or not `Bearer <token>` shaped → `TokenMissing` (401)
 * - Signature/expiry/shape failure → `TokenInvalid` (403)
 *
 * Handlers that mutate the store must use `BearerIdentity::id` as the row
 * key; a client-supplied id in the body is never trusted once a token is
 * present.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::auth::tokens::TokenKeys;
use crate::error::ApiError;
use crate::state::AppState;

/// Caller identity derived from a validated token
///
/// The numeric `id` is parsed out of the claims up front so downstream
/// code never re-parses the subject field.
#[derive(Debug, Clone)]
pub struct BearerIdentity {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Validate the bearer token in `headers` and return the caller identity
pub fn bearer_claims(headers: &HeaderMap, keys: &TokenKeys) -> Result<BearerIdentity, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing authorization header");
            ApiError::TokenMissing
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("authorization header is not bearer-shaped");
        ApiError::TokenMissing
    })?;

    let claims = keys.validate(token)?;

    // A non-numeric subject can only come from a token we did not mint
    let id = claims.sub.parse::<i64>().map_err(|_| {
        tracing::warn!("token subject is not a numeric id");
        ApiError::TokenInvalid
    })?;

    Ok(BearerIdentity {
        id,
        username: claims.username,
        email: claims.email,
    })
}

impl FromRequestParts<AppState> for BearerIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        bearer_claims(&parts.headers, &state.keys)
    }
}
