/**
 * Login Handler
 *
 * POST /auth/login
 *
 * Verifies the identifier/secret pair and issues a signed session token.
 *
 * # Security Notes
 *
 * - Unknown identifier and wrong secret both return 401 with the same
 *   body, preventing account enumeration
 * - The secret is never logged and never appears in a response
 */

use axum::{extract::State, response::Json};

use crate::auth::verify_credentials;
use crate::error::ApiError;
use crate::handlers::types::{AuthResponse, LoginRequest};
use crate::identity::Profile;
use crate::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400` - identifier or secret missing/blank
/// * `401` - invalid credentials (cause deliberately hidden)
/// * `500` - store unavailable or token signing failed
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("login request");

    let identity =
        verify_credentials(state.store.as_ref(), &request.identifier, &request.secret).await?;

    let token = state.keys.issue(&identity)?;

    tracing::info!("user logged in: {} (id {})", identity.username, identity.id);

    Ok(Json(AuthResponse {
        token,
        user: Profile::from(identity),
    }))
}
