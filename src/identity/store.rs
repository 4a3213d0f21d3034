/**
 * Identity Store
 *
 * This module defines the store-access capability handlers depend on and
 * its Postgres implementation.
 *
 * # Availability
 *
 * The server is designed to start without a database (missing
 * `DATABASE_URL`, connection failure). `PgIdentityStore` therefore wraps an
 * `Option<PgPool>`; every operation against an absent pool fails with
 * `StoreError::Unavailable`, which the handler boundary converts to a 500.
 * The health endpoint reports the same condition without failing.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::identity::{Identity, NewIdentity};

/// Store-access capability for identity records
///
/// Passed explicitly through application state as `Arc<dyn IdentityStore>`
/// so handlers can run against an in-memory fake in tests.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Look up the record whose email OR username equals `identifier`
    ///
    /// Exactly one record matches a valid login identifier; both columns
    /// are unique.
    async fn find_by_login(&self, identifier: &str) -> Result<Option<Identity>, StoreError>;

    /// Look up a record by numeric primary key
    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, StoreError>;

    /// Look up a record by username
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, StoreError>;

    /// Insert a new record, returning it with its assigned id
    async fn create(&self, new: NewIdentity) -> Result<Identity, StoreError>;

    /// Update the display name of the record with the given id
    ///
    /// Bumps `updated_at`. Returns `None` when no row matched.
    async fn update_name(&self, id: i64, name: &str) -> Result<Option<Identity>, StoreError>;

    /// Probe store connectivity (used by the health endpoint)
    async fn ping(&self) -> bool;
}

/// Postgres-backed identity store
#[derive(Clone)]
pub struct PgIdentityStore {
    pool: Option<PgPool>,
}

impl PgIdentityStore {
    /// Wrap an optional connection pool
    ///
    /// `None` yields a store whose every operation reports
    /// `StoreError::Unavailable`.
    pub fn new(pool: Option<PgPool>) -> Self {
        Self { pool }
    }

    fn pool(&self) -> Result<&PgPool, StoreError> {
        self.pool.as_ref().ok_or(StoreError::Unavailable)
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn find_by_login(&self, identifier: &str) -> Result<Option<Identity>, StoreError> {
        let pool = self.pool()?;
        let identity = sqlx::query_as::<_, Identity>(
            r#"
            SELECT id, username, email, name, password_hash, created_at, updated_at
            FROM identities
            WHERE email = $1 OR username = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(pool)
        .await?;

        Ok(identity)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, StoreError> {
        let pool = self.pool()?;
        let identity = sqlx::query_as::<_, Identity>(
            r#"
            SELECT id, username, email, name, password_hash, created_at, updated_at
            FROM identities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(identity)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, StoreError> {
        let pool = self.pool()?;
        let identity = sqlx::query_as::<_, Identity>(
            r#"
            SELECT id, username, email, name, password_hash, created_at, updated_at
            FROM identities
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(identity)
    }

    async fn create(&self, new: NewIdentity) -> Result<Identity, StoreError> {
        let pool = self.pool()?;
        let now = Utc::now();

        let identity = sqlx::query_as::<_, Identity>(
            r#"
            INSERT INTO identities (username, email, name, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, username, email, name, password_hash, created_at, updated_at
            "#,
        )
        .bind(&new.username)
        .bind(&new.email)
        .bind(&new.name)
        .bind(&new.password_hash)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(identity)
    }

    async fn update_name(&self, id: i64, name: &str) -> Result<Option<Identity>, StoreError> {
        let pool = self.pool()?;
        let now = Utc::now();

        let identity = sqlx::query_as::<_, Identity>(
            r#"
            UPDATE identities
            SET name = $1, updated_at = $2
            WHERE id = $3
            RETURNING id, username, email, name, password_hash, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(now)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(identity)
    }

    async fn ping(&self) -> bool {
        match &self.pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_pool_is_unavailable() {
        let store = PgIdentityStore::new(None);
        let result = store.find_by_id(1).await;
        assert!(matches!(result, Err(StoreError::Unavailable)));
        assert!(!store.ping().await);
    }
}
