//! authbase
//!
//! A minimal authentication and profile-management backend: it issues
//! signed session tokens on login, validates them on protected routes, and
//! reads/updates a single user record in a relational store. A small JSON
//! API plus static page delivery for the login/dashboard client.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── auth/       - credential verification, tokens, bearer guard
//! ├── identity/   - identity record, store trait, Postgres + memory stores
//! ├── handlers/   - HTTP handlers (login, register, profile, health)
//! ├── config.rs   - environment configuration and database loading
//! ├── error.rs    - error taxonomy and response envelope
//! ├── routes.rs   - router assembly
//! └── state.rs    - shared application state
//! ```

/// Credential verification, token issue/validate, bearer guard
pub mod auth;

/// Environment configuration and database loading
pub mod config;

/// Error taxonomy and HTTP response envelope
pub mod error;

/// HTTP handlers
pub mod handlers;

/// Identity record and store implementations
pub mod identity;

/// Router assembly
pub mod routes;

/// Shared application state
pub mod state;

pub use error::{ApiError, StoreError};
pub use routes::create_router;
pub use state::AppState;
