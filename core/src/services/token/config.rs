//! Configuration for the token service

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Symmetric signing key, base64-encoded at rest
    pub secret_base64: String,
    /// Access token lifetime in milliseconds
    pub access_token_ttl_ms: i64,
    /// Refresh token lifetime in milliseconds
    pub refresh_token_ttl_ms: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            // base64 of "development-secret-please-change"
            secret_base64: "ZGV2ZWxvcG1lbnQtc2VjcmV0LXBsZWFzZS1jaGFuZ2U=".to_string(),
            access_token_ttl_ms: 15 * 60 * 1000,
            refresh_token_ttl_ms: 7 * 24 * 60 * 60 * 1000,
        }
    }
}
