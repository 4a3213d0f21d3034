/**
 * Session Tokens
 *
 * This module handles JWT issuance and validation. A token is an opaque,
 * signed, self-contained string embedding the caller's identity claims and
 * an expiry horizon; the server keeps no session table.
 *
 * # Claims
 *
 * - `sub` - numeric identity id, as a decimal string
 * - `username` - human-chosen identifier
 * - `email` - email address
 * - `iat` / `exp` - issued-at and expiry, Unix seconds; expiry is fixed at
 *   issuance + 7 days
 *
 * # Signing Key
 *
 * The key is process-wide configuration, read once at startup. When
 * `JWT_SECRET` is unset a fixed development fallback is used; this is a
 * known weak default and a warning is logged.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ApiError;
use crate::identity::Identity;

/// Token lifetime: 7 days, in seconds
pub const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Development fallback signing key, used only when `JWT_SECRET` is unset
pub const DEV_FALLBACK_SECRET: &str = "dev-secret-change-in-production";

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric identity id (decimal string)
    pub sub: String,
    /// Human-chosen identifier
    pub username: String,
    /// Email address
    pub email: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Process-wide signing key pair
///
/// Built once from the signing secret at startup and shared read-only by
/// all requests through application state.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Build key material from a shared secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token embedding the identity's claims
    ///
    /// Pure function of the claims, the current time, and the signing key.
    /// Expiry is issuance + 7 days.
    pub fn issue(&self, identity: &Identity) -> Result<String, ApiError> {
        let now = unix_now();
        let claims = Claims {
            sub: identity.id.to_string(),
            username: identity.username.clone(),
            email: identity.email.clone(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!("failed to sign token: {:?}", e);
            ApiError::Internal
        })
    }

    /// Validate a presented token and reconstruct its claims
    ///
    /// Checks signature and expiry. Every failure mode (bad signature,
    /// malformed token, expired) collapses into `TokenInvalid`; callers
    /// cannot tell an expired token from a forged one.
    pub fn validate(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::default();
        // The expiry horizon is exact: one second past exp is rejected
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            tracing::warn!("token rejected: {:?}", e);
            ApiError::TokenInvalid
        })?;
        Ok(data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
