/**
 * Application State
 *
 * Central state container cloned into every handler. Both fields are
 * read-only after initialization and shared by all requests:
 *
 * - `store` - the identity store capability; passed explicitly so tests
 *   can substitute an in-memory fake for Postgres
 * - `keys` - the process-wide token signing key pair
 */

use std::sync::Arc;

use crate::auth::tokens::TokenKeys;
use crate::identity::IdentityStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Identity store capability
    pub store: Arc<dyn IdentityStore>,
    /// Token signing key pair
    pub keys: TokenKeys,
}

impl AppState {
    pub fn new(store: Arc<dyn IdentityStore>, keys: TokenKeys) -> Self {
        Self { store, keys }
    }
}
