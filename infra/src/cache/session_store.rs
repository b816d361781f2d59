//! Key-value store capability backed by Redis
//!
//! Adapts [`RedisClient`] to the `KeyValueStore` trait the session store
//! consumes. Every transport fault converts to
//! `DomainError::StoreUnavailable`; nothing on an auth-critical path can
//! mistake an unreachable store for a miss.

use std::collections::HashMap;

use async_trait::async_trait;

use sg_core::errors::DomainResult;
use sg_core::store::KeyValueStore;

use super::RedisClient;

#[async_trait]
impl KeyValueStore for RedisClient {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(RedisClient::get(self, key).await?)
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl_ms: u64) -> DomainResult<()> {
        Ok(self.set_px(key, value, ttl_ms).await?)
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        Ok(RedisClient::delete(self, key).await?)
    }

    async fn exists(&self, key: &str) -> DomainResult<bool> {
        Ok(RedisClient::exists(self, key).await?)
    }

    async fn hash_get(&self, key: &str, field: &str) -> DomainResult<Option<String>> {
        Ok(self.hget(key, field).await?)
    }

    async fn hash_get_all(&self, key: &str) -> DomainResult<HashMap<String, String>> {
        Ok(self.hgetall(key).await?)
    }

    async fn hash_set_all_with_expiry(
        &self,
        key: &str,
        fields: &[(&str, &str)],
        ttl_ms: u64,
    ) -> DomainResult<()> {
        let owned: Vec<(String, String)> = fields
            .iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();
        Ok(self.hset_all_px(key, &owned, ttl_ms).await?)
    }
}
