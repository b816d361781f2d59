//! Mock key-value stores for session and auth tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::{DomainError, DomainResult};
use crate::store::KeyValueStore;

#[derive(Clone)]
enum Value {
    Plain(String),
    Hash(HashMap<String, String>),
}

#[derive(Clone)]
struct Entry {
    value: Value,
    expires_at_ms: i64,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at_ms
    }
}

/// In-memory store with TTL semantics matching the remote store contract.
///
/// Cloning yields a handle to the same underlying map, so tests can inspect
/// state after handing a clone to a service.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn live_entry(&self, key: &str) -> Option<Entry> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.clone()),
            None => None,
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.live_entry(key).and_then(|entry| match entry.value {
            Value::Plain(value) => Some(value),
            Value::Hash(_) => None,
        }))
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl_ms: u64) -> DomainResult<()> {
        let entry = Entry {
            value: Value::Plain(value.to_string()),
            expires_at_ms: Utc::now().timestamp_millis() + ttl_ms as i64,
        };
        self.entries.lock().unwrap().insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        let live = self.live_entry(key).is_some();
        self.entries.lock().unwrap().remove(key);
        Ok(live)
    }

    async fn exists(&self, key: &str) -> DomainResult<bool> {
        Ok(self.live_entry(key).is_some())
    }

    async fn hash_get(&self, key: &str, field: &str) -> DomainResult<Option<String>> {
        Ok(self.live_entry(key).and_then(|entry| match entry.value {
            Value::Hash(fields) => fields.get(field).cloned(),
            Value::Plain(_) => None,
        }))
    }

    async fn hash_get_all(&self, key: &str) -> DomainResult<HashMap<String, String>> {
        Ok(self
            .live_entry(key)
            .and_then(|entry| match entry.value {
                Value::Hash(fields) => Some(fields),
                Value::Plain(_) => None,
            })
            .unwrap_or_default())
    }

    async fn hash_set_all_with_expiry(
        &self,
        key: &str,
        fields: &[(&str, &str)],
        ttl_ms: u64,
    ) -> DomainResult<()> {
        let map = fields
            .iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        let entry = Entry {
            value: Value::Hash(map),
            expires_at_ms: Utc::now().timestamp_millis() + ttl_ms as i64,
        };
        self.entries.lock().unwrap().insert(key.to_string(), entry);
        Ok(())
    }
}

/// Store whose every operation fails, for fail-closed coverage.
#[derive(Clone, Default)]
pub(crate) struct FailingStore;

impl FailingStore {
    fn unavailable() -> DomainError {
        DomainError::StoreUnavailable {
            message: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> DomainResult<Option<String>> {
        Err(Self::unavailable())
    }

    async fn set_with_expiry(&self, _key: &str, _value: &str, _ttl_ms: u64) -> DomainResult<()> {
        Err(Self::unavailable())
    }

    async fn delete(&self, _key: &str) -> DomainResult<bool> {
        Err(Self::unavailable())
    }

    async fn exists(&self, _key: &str) -> DomainResult<bool> {
        Err(Self::unavailable())
    }

    async fn hash_get(&self, _key: &str, _field: &str) -> DomainResult<Option<String>> {
        Err(Self::unavailable())
    }

    async fn hash_get_all(&self, _key: &str) -> DomainResult<HashMap<String, String>> {
        Err(Self::unavailable())
    }

    async fn hash_set_all_with_expiry(
        &self,
        _key: &str,
        _fields: &[(&str, &str)],
        _ttl_ms: u64,
    ) -> DomainResult<()> {
        Err(Self::unavailable())
    }
}
