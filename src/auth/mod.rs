//! Authentication Module
//!
//! This module holds the two halves of the authentication contract and the
//! request guard built on top of them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports
//! ├── verifier.rs   - Credential verification against the store
//! ├── tokens.rs     - JWT issue and validate
//! └── guard.rs      - Bearer-token guard and handler extractor
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: identifier + secret verified against the stored bcrypt
//!    hash, then a signed token embedding the caller's claims is issued
//! 2. **Protected call**: the bearer token is validated (signature +
//!    expiry) and the embedded claims become the caller's identity
//!
//! The server keeps no session state; the token is the session.
//!
//! # Security
//!
//! - Passwords are compared via bcrypt's constant-time verification
//! - Unknown identity and wrong secret produce the identical error
//! - Expired and forged tokens produce the identical error
//! - Tokens expire 7 days after issuance; there is no revocation path

/// Credential verification
pub mod verifier;

/// JWT token issue and validation
pub mod tokens;

/// Bearer-token guard for protected routes
pub mod guard;

pub use guard::{bearer_claims, BearerIdentity};
pub use tokens::{Claims, TokenKeys};
pub use verifier::verify_credentials;
