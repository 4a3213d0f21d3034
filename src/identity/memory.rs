/**
 * In-Memory Identity Store
 *
 * A deterministic `IdentityStore` backed by a mutex-guarded vector. Used by
 * the test suite so handlers and the full router can be exercised without a
 * running Postgres instance.
 */

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::StoreError;
use crate::identity::{Identity, IdentityStore, NewIdentity};

/// In-memory identity store
///
/// Ids are assigned sequentially starting from `next_id` (default 1), so
/// tests can seed records at known ids.
pub struct MemoryIdentityStore {
    inner: Mutex<Inner>,
}

struct Inner {
    records: Vec<Identity>,
    next_id: i64,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Seed a record at an explicit id, bypassing id assignment
    pub fn seed(&self, identity: Identity) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id = inner.next_id.max(identity.id + 1);
        inner.records.push(identity);
    }
}

impl Default for MemoryIdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn find_by_login(&self, identifier: &str) -> Result<Option<Identity>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .records
            .iter()
            .find(|r| r.email == identifier || r.username == identifier)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Identity>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.records.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.records.iter().find(|r| r.username == username).cloned())
    }

    async fn create(&self, new: NewIdentity) -> Result<Identity, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let now = Utc::now();
        let identity = Identity {
            id: inner.next_id,
            username: new.username,
            email: new.email,
            name: new.name,
            password_hash: new.password_hash,
            created_at: now,
            updated_at: now,
        };
        inner.next_id += 1;
        inner.records.push(identity.clone());
        Ok(identity)
    }

    async fn update_name(&self, id: i64, name: &str) -> Result<Option<Identity>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.name = name.to_string();
                record.updated_at = Utc::now();
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn ping(&self) -> bool {
        true
    }
}
