//! HTTP Handlers
//!
//! JSON API handlers. Every failure path goes through [`ApiError`], which
//! renders the `{"success": false, "message": ...}` envelope; nothing here
//! panics or propagates a raw store error to the client.
//!
//! # Endpoints
//!
//! - `POST /auth/login` - credential check, token issuance
//! - `POST /auth/register` - account creation, token issuance
//! - `GET /auth/profile?id=` - public projection by numeric id or username
//! - `PUT /auth/profile` - display-name update for the token's identity
//! - `GET /health` - liveness plus store connectivity, never 5xx
//!
//! [`ApiError`]: crate::error::ApiError

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Registration handler
pub mod register;

/// Profile read/update handlers
pub mod profile;

/// Health check handler
pub mod health;

pub use health::health;
pub use login::login;
pub use profile::{get_profile, update_profile};
pub use register::register;
pub use types::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, UpdateProfileRequest};
