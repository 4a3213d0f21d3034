/**
 * Profile Handlers
 *
 * GET /auth/profile?id=  - public projection by numeric id or username
 * PUT /auth/profile      - display-name update for the caller's identity
 *
 * # Identity Source
 *
 * The update path takes its row key exclusively from the validated bearer
 * token. A client-supplied id in the body is ignored by construction: the
 * request type has no such field. Accepting one would let any caller
 * rewrite any other identity's name.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::auth::BearerIdentity;
use crate::error::ApiError;
use crate::handlers::types::{ProfileResponse, UpdateProfileRequest};
use crate::identity::{IdentityStore, Profile};
use crate::state::AppState;

/// Display names are capped at 100 characters
const MAX_NAME_LEN: usize = 100;

/// Query string for GET /auth/profile
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    /// Numeric id or username
    #[serde(default)]
    pub id: Option<String>,
}

/// Profile read handler
///
/// Looks the record up by numeric id when `id` parses as an integer,
/// otherwise by username.
///
/// # Errors
///
/// * `400` - `id` query parameter missing or blank
/// * `404` - no matching record
/// * `500` - store unavailable
pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let id = query
        .id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation("id query parameter is required".to_string()))?;

    let identity = match id.parse::<i64>() {
        Ok(numeric) => state.store.find_by_id(numeric).await?,
        Err(_) => state.store.find_by_username(id).await?,
    };

    let identity = identity.ok_or(ApiError::NotFound)?;

    Ok(Json(ProfileResponse {
        user: Profile::from(identity),
    }))
}

/// Profile update handler
///
/// Requires a valid bearer token; the token's numeric id is the row key.
///
/// # Errors
///
/// * `400` - name blank or longer than 100 characters
/// * `401` - token missing
/// * `403` - token invalid or expired
/// * `404` - the token's identity no longer exists
/// * `500` - store unavailable
pub async fn update_profile(
    State(state): State<AppState>,
    caller: BearerIdentity,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::Validation("name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }

    let identity = state
        .store
        .update_name(caller.id, name)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!("profile updated for id {}", identity.id);

    Ok(Json(ProfileResponse {
        user: Profile::from(identity),
    }))
}
