//! Identity Module
//!
//! This module owns the identity record, its public projection, and the
//! store seam used to read and mutate records.
//!
//! # Module Structure
//!
//! ```text
//! identity/
//! ├── mod.rs      - Identity record and public projection
//! ├── store.rs    - IdentityStore trait and Postgres implementation
//! └── memory.rs   - In-memory store for deterministic tests
//! ```
//!
//! # Store Seam
//!
//! Handlers never touch a connection pool directly. They receive an
//! `Arc<dyn IdentityStore>` through application state, which keeps every
//! handler testable against `MemoryIdentityStore` without a database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store trait and Postgres implementation
pub mod store;

/// In-memory store used by the test suite
pub mod memory;

pub use store::{IdentityStore, PgIdentityStore};

/// Identity record as stored in the `identities` relation
///
/// Addressed interchangeably by the numeric primary key or the unique
/// human-chosen `username`. The `password_hash` is a bcrypt hash and must
/// never leave the server; responses carry [`Profile`] instead.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Identity {
    /// Numeric primary key
    pub id: i64,
    /// Unique human-chosen identifier
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Display name
    pub name: String,
    /// One-way password hash (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Public projection of an identity record
///
/// Safe to return to clients; excludes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub name: String,
}

impl From<&Identity> for Profile {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username.clone(),
            email: identity.email.clone(),
            name: identity.name.clone(),
        }
    }
}

impl From<Identity> for Profile {
    fn from(identity: Identity) -> Self {
        Profile::from(&identity)
    }
}

/// Fields needed to create a new identity record
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
}
