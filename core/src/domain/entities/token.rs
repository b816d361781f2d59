//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discriminates the two halves of a token pair via the `kind` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "access")]
    Access,
    #[serde(rename = "refresh")]
    Refresh,
}

impl TokenKind {
    /// Claim value as stored in the token payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// Claims structure for the JWT payload.
///
/// An access/refresh pair issued by one login or rotation event shares an
/// identical `sid`; `jti` is unique per token instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal ID)
    pub sub: String,

    /// JWT ID (unique identifier for this token instance)
    pub jti: String,

    /// Session ID shared by the access/refresh pair
    pub sid: String,

    /// Issued at timestamp (epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (epoch seconds)
    pub exp: i64,

    /// Token kind (access or refresh)
    pub kind: TokenKind,
}

impl Claims {
    /// Creates new claims for a token of the given kind.
    ///
    /// Lifetimes are configured in milliseconds; `iat`/`exp` are carried at
    /// JWT second granularity.
    pub fn new(kind: TokenKind, principal_id: &str, sid: &str, ttl_ms: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::milliseconds(ttl_ms);

        Self {
            sub: principal_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            sid: sid.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            kind,
        }
    }

    /// Checks whether the claims have expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Expiry as epoch milliseconds.
    pub fn expiry_millis(&self) -> i64 {
        self.exp * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_shares_sid_with_distinct_jti() {
        let access = Claims::new(TokenKind::Access, "u1", "s1", 900_000);
        let refresh = Claims::new(TokenKind::Refresh, "u1", "s1", 604_800_000);

        assert_eq!(access.sid, refresh.sid);
        assert_ne!(access.jti, refresh.jti);
        assert_eq!(access.kind, TokenKind::Access);
        assert_eq!(refresh.kind, TokenKind::Refresh);
    }

    #[test]
    fn negative_ttl_is_already_expired() {
        let claims = Claims::new(TokenKind::Access, "u1", "s1", -1_000);
        assert!(claims.is_expired());
    }
}
