/**
 * Registration Handler
 *
 * POST /auth/register
 *
 * Creates a new identity record with a bcrypt-hashed secret and issues a
 * session token so the client is logged in immediately.
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::error::ApiError;
use crate::handlers::types::{AuthResponse, RegisterRequest};
use crate::identity::{IdentityStore, NewIdentity, Profile};
use crate::state::AppState;

/// Validate a username: 3-30 chars, starts with a letter, then
/// letters/digits/underscores
fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    if !(3..=30).contains(&len) {
        return false;
    }
    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Registration handler
///
/// # Errors
///
/// * `400` - username/email/secret failed validation
/// * `409` - username or email already registered
/// * `500` - store unavailable, hashing or signing failed
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("registration request for username {}", request.username);

    if !is_valid_username(&request.username) {
        return Err(ApiError::Validation(
            "username must be 3-30 characters, start with a letter, and contain \
             only letters, numbers, and underscores"
                .to_string(),
        ));
    }
    if !request.email.contains('@') {
        return Err(ApiError::Validation("invalid email address".to_string()));
    }
    if request.secret.len() < 8 {
        return Err(ApiError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }

    if state
        .store
        .find_by_username(&request.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("username already taken".to_string()));
    }
    if state
        .store
        .find_by_login(&request.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("email already registered".to_string()));
    }

    let password_hash = hash(&request.secret, DEFAULT_COST).map_err(|e| {
        tracing::error!("failed to hash password: {:?}", e);
        ApiError::Internal
    })?;

    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(&request.username)
        .to_string();

    let identity = state
        .store
        .create(NewIdentity {
            username: request.username,
            email: request.email,
            name,
            password_hash,
        })
        .await?;

    let token = state.keys.issue(&identity)?;

    tracing::info!("user created: {} (id {})", identity.username, identity.id);

    Ok(Json(AuthResponse {
        token,
        user: Profile::from(identity),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::tokens::TokenKeys;
    use crate::identity::memory::MemoryIdentityStore;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(MemoryIdentityStore::new()),
            TokenKeys::from_secret("register-test-key"),
        )
    }

    fn request(username: &str, email: &str, secret: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            name: None,
            secret: secret.to_string(),
        }
    }

    #[test]
    fn test_username_validation() {
        assert!(is_valid_username("jane_d"));
        assert!(is_valid_username("abc"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("1jane"));
        assert!(!is_valid_username("jane doe"));
        assert!(!is_valid_username(&"x".repeat(31)));
    }

    #[tokio::test]
    async fn test_register_success_defaults_name_to_username() {
        let state = test_state();
        let response = register(
            State(state),
            Json(request("jane_d", "jane@example.com", "longenough")),
        )
        .await
        .unwrap();

        assert_eq!(response.user.name, "jane_d");
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_username_conflicts() {
        let state = test_state();
        register(
            State(state.clone()),
            Json(request("jane_d", "jane@example.com", "longenough")),
        )
        .await
        .unwrap();

        let err = register(
            State(state),
            Json(request("jane_d", "other@example.com", "longenough")),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_short_password_rejected() {
        let state = test_state();
        let err = register(
            State(state),
            Json(request("jane_d", "jane@example.com", "short")),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
