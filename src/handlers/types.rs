/**
 * Handler Types
 *
 * Request and response bodies shared across the API handlers.
 */

use serde::{Deserialize, Serialize};

use crate::identity::Profile;

/// Login request
///
/// `identifier` may be either the email address or the username.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address or username
    pub identifier: String,
    /// Plaintext secret, compared against the stored hash and discarded
    pub secret: String,
}

/// Registration request
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username (3-30 chars, letter first, letters/digits/underscore)
    pub username: String,
    /// Email address
    pub email: String,
    /// Display name; defaults to the username when omitted
    #[serde(default)]
    pub name: Option<String>,
    /// Plaintext secret (minimum 8 characters)
    pub secret: String,
}

/// Profile name update request
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name (non-blank, at most 100 characters)
    pub name: String,
}

/// Response for login and registration: a token plus the caller's profile
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed session token (7-day expiry)
    pub token: String,
    /// Public projection of the authenticated identity
    pub user: Profile,
}

/// Response carrying a single public profile
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: Profile,
}

/// Health check response; returned with 200 even when the store is down
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Store connectivity: "connected" or "unreachable"
    pub store: String,
}
