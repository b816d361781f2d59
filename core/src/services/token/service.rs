//! Token issuer and validator implementation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};

use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Sentinel returned by [`TokenService::expiry_millis`] for an expired
/// token, so callers can do numeric TTL arithmetic without branching on
/// error kinds.
pub(crate) const EXPIRED_SENTINEL_MILLIS: i64 = 1;

/// Issues and validates HMAC-signed access/refresh tokens.
///
/// Issuance is pure CPU work given the clock and the signing key; the
/// service performs no I/O and holds no mutable state.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Signature-only variant used where an expired token must still yield
    /// its claims (`expiry_millis`).
    validation_ignore_exp: Validation,
}

impl TokenService {
    /// Creates a new token service instance.
    ///
    /// # Arguments
    ///
    /// * `config` - Signing key and token lifetimes
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Configuration` when the
    /// base64-encoded signing key cannot be decoded. A bad key is a fatal
    /// configuration fault; issuance itself has no error path.
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        let secret = BASE64
            .decode(config.secret_base64.as_bytes())
            .map_err(|e| DomainError::Configuration {
                message: format!("signing key is not valid base64: {}", e),
            })?;

        let encoding_key = EncodingKey::from_secret(&secret);
        let decoding_key = DecodingKey::from_secret(&secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        let mut validation_ignore_exp = validation.clone();
        validation_ignore_exp.validate_exp = false;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            validation_ignore_exp,
        })
    }

    /// Issues a signed token of the given kind.
    ///
    /// Sets `iat = now`, `exp = now + ttl(kind)`, a fresh random `jti`, and
    /// the caller-supplied `sid`. Access and refresh tokens of one
    /// login/rotation event must be issued with the same `sid`.
    pub fn issue(&self, kind: TokenKind, principal_id: &str, sid: &str) -> DomainResult<String> {
        let ttl_ms = match kind {
            TokenKind::Access => self.config.access_token_ttl_ms,
            TokenKind::Refresh => self.config.refresh_token_ttl_ms,
        };
        let claims = Claims::new(kind, principal_id, sid, ttl_ms);
        self.encode_jwt(&claims)
    }

    /// Issues an access/refresh pair sharing the supplied `sid`.
    pub fn issue_pair(&self, principal_id: &str, sid: &str) -> DomainResult<(String, String)> {
        let access = self.issue(TokenKind::Access, principal_id, sid)?;
        let refresh = self.issue(TokenKind::Refresh, principal_id, sid)?;
        Ok((access, refresh))
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key).map_err(|e| DomainError::Configuration {
            message: format!("token encoding failed: {}", e),
        })
    }

    /// Checks signature and expiry, collapsing every failure into `false`.
    ///
    /// The failure kind is logged but never surfaced; callers branch only
    /// on the boolean outcome.
    pub fn is_valid(&self, token: &str) -> bool {
        match self.parse(token) {
            Ok(_) => true,
            Err(DomainError::Token(TokenError::Expired)) => {
                debug!("Token already expired");
                false
            }
            Err(e) => {
                warn!("Token validation failed: {}", e);
                false
            }
        }
    }

    /// Strict parse for callers needing claim data.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature and expiry verified
    /// * `Err(TokenError)` - `Malformed`, `BadSignature`, or `Expired`
    pub fn parse(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| Self::map_decode_error(&e).into())
    }

    /// Expiry of the token as epoch milliseconds.
    ///
    /// Returns the sentinel value `1` (interpreted as "already expired")
    /// instead of failing when the token is expired. Malformed tokens and
    /// bad signatures still fail typed.
    pub fn expiry_millis(&self, token: &str) -> DomainResult<i64> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation_ignore_exp)
            .map(|data| data.claims)
            .map_err(|e| DomainError::from(Self::map_decode_error(&e)))?;

        if claims.is_expired() {
            Ok(EXPIRED_SENTINEL_MILLIS)
        } else {
            Ok(claims.expiry_millis())
        }
    }

    /// Principal identifier carried in the `sub` claim.
    pub fn subject(&self, token: &str) -> DomainResult<String> {
        Ok(self.parse(token)?.sub)
    }

    /// Per-token unique identifier carried in the `jti` claim.
    pub fn jti(&self, token: &str) -> DomainResult<String> {
        Ok(self.parse(token)?.jti)
    }

    /// Session identifier carried in the `sid` claim.
    pub fn sid(&self, token: &str) -> DomainResult<String> {
        Ok(self.parse(token)?.sid)
    }

    /// Remaining lifetime of the token in milliseconds, negative once
    /// expired. Fails like `parse` for anything other than expiry.
    pub fn remaining_millis(&self, token: &str) -> DomainResult<i64> {
        Ok(self.expiry_millis(token)? - Utc::now().timestamp_millis())
    }

    fn map_decode_error(e: &jsonwebtoken::errors::Error) -> TokenError {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::BadSignature,
            _ => TokenError::Malformed,
        }
    }
}
