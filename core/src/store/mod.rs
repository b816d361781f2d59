//! Key-value store capability consumed by the session store.
//!
//! The session store coordinates state purely through this shared remote
//! store; the handle is injected at construction and lives for the whole
//! process. Implementations map transport faults to
//! [`DomainError::StoreUnavailable`] so that auth-critical paths fail
//! closed.

mod keys;

pub use keys::{KeyKind, FIELD_ACCESS_TOKEN, FIELD_REFRESH_TOKEN};

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Key-value store with millisecond-granularity expiry.
///
/// Covers plain keys and hash-shaped keys. `hash_set_all_with_expiry` must
/// apply the bulk field write and the expiry atomically; no other
/// cross-operation atomicity is provided or assumed.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a plain key. `None` when absent or expired.
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write a plain key with a TTL in milliseconds.
    async fn set_with_expiry(&self, key: &str, value: &str, ttl_ms: u64) -> DomainResult<()>;

    /// Delete a key. `false` when the key did not exist.
    async fn delete(&self, key: &str) -> DomainResult<bool>;

    /// Existence check on a plain key.
    async fn exists(&self, key: &str) -> DomainResult<bool>;

    /// Read one field of a hash key.
    async fn hash_get(&self, key: &str, field: &str) -> DomainResult<Option<String>>;

    /// Read all fields of a hash key. Empty map when the key is absent.
    async fn hash_get_all(&self, key: &str) -> DomainResult<HashMap<String, String>>;

    /// Atomically write all fields of a hash key and set its TTL in
    /// milliseconds.
    async fn hash_set_all_with_expiry(
        &self,
        key: &str,
        fields: &[(&str, &str)],
        ttl_ms: u64,
    ) -> DomainResult<()>;
}
