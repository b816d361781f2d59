//! Configuration management for infrastructure services
//!
//! Values are supplied through the environment (a `.env` file is honored in
//! development); nothing security-sensitive is hard-coded.

use serde::{Deserialize, Serialize};

use sg_core::services::token::TokenServiceConfig;

use crate::InfrastructureError;

/// Redis cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,
    /// Maximum number of retry attempts for operations
    pub max_retries: u32,
    /// Base delay between retries in milliseconds (exponential backoff)
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

impl CacheConfig {
    /// Loads the cache configuration from the environment.
    ///
    /// Reads `REDIS_URL`; retry settings fall back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            ..defaults
        }
    }
}

/// Loads the token service configuration from the environment.
///
/// `JWT_SECRET_BASE64` is required; `ACCESS_TOKEN_TTL_MS` and
/// `REFRESH_TOKEN_TTL_MS` fall back to the development defaults.
pub fn token_config_from_env() -> Result<TokenServiceConfig, InfrastructureError> {
    dotenvy::dotenv().ok();
    let defaults = TokenServiceConfig::default();

    let secret_base64 = std::env::var("JWT_SECRET_BASE64")
        .map_err(|_| InfrastructureError::Config("JWT_SECRET_BASE64 is not set".to_string()))?;

    Ok(TokenServiceConfig {
        secret_base64,
        access_token_ttl_ms: env_millis("ACCESS_TOKEN_TTL_MS", defaults.access_token_ttl_ms)?,
        refresh_token_ttl_ms: env_millis("REFRESH_TOKEN_TTL_MS", defaults.refresh_token_ttl_ms)?,
    })
}

fn env_millis(name: &str, default: i64) -> Result<i64, InfrastructureError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<i64>()
            .map_err(|_| InfrastructureError::Config(format!("{} is not a millisecond count", name))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_config_points_at_localhost() {
        let config = CacheConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn env_millis_rejects_non_numeric_values() {
        std::env::set_var("SG_TEST_TTL", "soon");
        assert!(env_millis("SG_TEST_TTL", 1).is_err());
        std::env::set_var("SG_TEST_TTL", "2500");
        assert_eq!(env_millis("SG_TEST_TTL", 1).unwrap(), 2500);
        std::env::remove_var("SG_TEST_TTL");
        assert_eq!(env_millis("SG_TEST_TTL", 7).unwrap(), 7);
    }
}
