/**
 * Credential Verifier
 *
 * Verifies a login identifier and plaintext secret against the stored
 * bcrypt hash.
 *
 * # Security Notes
 *
 * - "No such user" and "wrong password" both fail with
 *   `InvalidCredentials`, so a caller cannot probe for account existence
 * - Password comparison goes through bcrypt's verification, which is safe
 *   against timing comparison of the hash material
 * - The plaintext secret is never stored or logged
 */

use bcrypt::verify;

use crate::error::ApiError;
use crate::identity::{Identity, IdentityStore};

/// Verify a login identifier and secret against the store
///
/// The identifier matches either the email or the username column; exactly
/// one record can match since both are unique.
///
/// # Errors
///
/// * `MissingCredentials` - identifier or secret empty/blank, checked
///   before any store access
/// * `InvalidCredentials` - no matching record, or the secret does not
///   match the stored hash; the two cases are indistinguishable
/// * `StoreUnavailable` - the store is absent or the lookup failed
pub async fn verify_credentials(
    store: &dyn IdentityStore,
    identifier: &str,
    secret: &str,
) -> Result<Identity, ApiError> {
    if identifier.trim().is_empty() || secret.is_empty() {
        return Err(ApiError::MissingCredentials);
    }

    let identity = store
        .find_by_login(identifier)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login failed: unknown identifier");
            ApiError::InvalidCredentials
        })?;

    let valid = verify(secret, &identity.password_hash).map_err(|e| {
        tracing::error!("password verification error: {:?}", e);
        ApiError::Internal
    })?;

    if !valid {
        tracing::warn!("login failed: wrong password for id {}", identity.id);
        return Err(ApiError::InvalidCredentials);
    }

    Ok(identity)
}
