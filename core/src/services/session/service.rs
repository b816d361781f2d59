//! Session store service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::entities::session::SessionTokens;
use crate::errors::{DomainResult, SessionError};
use crate::repositories::PrincipalRepository;
use crate::services::token::TokenService;
use crate::store::{KeyKind, KeyValueStore, FIELD_ACCESS_TOKEN, FIELD_REFRESH_TOKEN};

/// Session store over the shared key-value capability.
///
/// Holds the injected store handle for the whole process lifetime. Each
/// operation is independent; concurrent callers coordinate only through the
/// store itself. Two concurrent saves for one principal race on the
/// principal pointer and the last writer wins, which is the documented
/// single-session mechanism.
pub struct SessionService<S: KeyValueStore, P: PrincipalRepository> {
    store: S,
    principals: P,
    tokens: Arc<TokenService>,
}

impl<S: KeyValueStore, P: PrincipalRepository> SessionService<S, P> {
    /// Creates a new session service instance.
    ///
    /// # Arguments
    ///
    /// * `store` - Shared key-value store handle
    /// * `principals` - Principal existence lookup
    /// * `tokens` - Token validator used to read session linkage and expiry
    pub fn new(store: S, principals: P, tokens: Arc<TokenService>) -> Self {
        Self {
            store,
            principals,
            tokens,
        }
    }

    /// Persists a freshly issued token pair and moves the principal pointer.
    ///
    /// Requires both tokens to carry the same `sid`; otherwise fails with
    /// `SessionError::Consistency` and persists nothing. The record and the
    /// pointer both get a TTL equal to the refresh token's remaining
    /// lifetime. When that lifetime is already spent the call is a silent
    /// no-op, preserving the observed upstream behavior.
    pub async fn save(
        &self,
        principal_id: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> DomainResult<()> {
        let at_sid = self.tokens.sid(access_token)?;
        let rt_sid = self.tokens.sid(refresh_token)?;
        if at_sid != rt_sid {
            warn!(principal_id, "Refusing to save token pair with mismatched session ids");
            return Err(SessionError::Consistency.into());
        }

        let remaining_ms = self.tokens.remaining_millis(refresh_token)?;
        if remaining_ms <= 0 {
            debug!(principal_id, "Refresh token already expired, skipping save");
            return Ok(());
        }
        let ttl_ms = remaining_ms as u64;

        let session_key = KeyKind::Session.key(&rt_sid);
        let fields = [
            (FIELD_ACCESS_TOKEN, access_token),
            (FIELD_REFRESH_TOKEN, refresh_token),
        ];
        self.store
            .hash_set_all_with_expiry(&session_key, &fields, ttl_ms)
            .await?;

        let pointer_key = KeyKind::PrincipalPointer.key(principal_id);
        self.store
            .set_with_expiry(&pointer_key, &rt_sid, ttl_ms)
            .await?;

        debug!(principal_id, sid = %rt_sid, ttl_ms, "Session saved");
        Ok(())
    }

    /// Resolves the principal's current session via the pointer.
    ///
    /// Returns `None` when either the pointer or the record is absent.
    pub async fn current_session(
        &self,
        principal_id: &str,
    ) -> DomainResult<Option<SessionTokens>> {
        let pointer_key = KeyKind::PrincipalPointer.key(principal_id);
        let sid = match self.store.get(&pointer_key).await? {
            Some(sid) => sid,
            None => return Ok(None),
        };

        let record = self.store.hash_get_all(&KeyKind::Session.key(&sid)).await?;
        let access_token = record.get(FIELD_ACCESS_TOKEN);
        let refresh_token = record.get(FIELD_REFRESH_TOKEN);

        match (access_token, refresh_token) {
            (Some(at), Some(rt)) => Ok(Some(SessionTokens {
                access_token: at.clone(),
                refresh_token: rt.clone(),
                sid,
            })),
            _ => Ok(None),
        }
    }

    /// Whether the supplied access token is the one stored under its own
    /// `sid`. All failures collapse to `false`.
    pub async fn has_access_token(&self, access_token: &str) -> bool {
        self.stored_token_matches(access_token, FIELD_ACCESS_TOKEN)
            .await
    }

    /// Whether the supplied refresh token is the one stored under its own
    /// `sid`. All failures collapse to `false`.
    ///
    /// This checks reachability via the token's own `sid`, not via the
    /// principal pointer: a superseded session keeps answering `true` here
    /// until its TTL lapses even though `current_session` no longer reaches
    /// it.
    pub async fn has_refresh_token(&self, refresh_token: &str) -> bool {
        self.stored_token_matches(refresh_token, FIELD_REFRESH_TOKEN)
            .await
    }

    async fn stored_token_matches(&self, token: &str, field: &str) -> bool {
        let sid = match self.tokens.sid(token) {
            Ok(sid) => sid,
            Err(e) => {
                debug!("Cannot extract sid from token: {}", e);
                return false;
            }
        };

        match self.store.hash_get(&KeyKind::Session.key(&sid), field).await {
            Ok(Some(stored)) => stored == token,
            Ok(None) => false,
            Err(e) => {
                // Fail closed: an unreachable store denies.
                warn!(sid = %sid, "Store fault during token lookup: {}", e);
                false
            }
        }
    }

    /// Deletes the principal's session record and pointer.
    ///
    /// Idempotent on missing keys.
    pub async fn delete(&self, principal_id: &str) -> DomainResult<()> {
        let pointer_key = KeyKind::PrincipalPointer.key(principal_id);
        if let Some(sid) = self.store.get(&pointer_key).await? {
            self.store.delete(&KeyKind::Session.key(&sid)).await?;
        }
        self.store.delete(&pointer_key).await?;
        debug!(principal_id, "Session deleted");
        Ok(())
    }

    /// Records a revocation marker for the session.
    ///
    /// The marker's TTL is the exact remaining lifetime of the session's
    /// stored access token (clamped to at least one millisecond), bounding
    /// blacklist growth to the token's natural lifespan. Fails with
    /// `SessionError::NotFound` when no record exists for the `sid`.
    pub async fn blacklist_sid(&self, sid: &str) -> DomainResult<()> {
        let access_token = self
            .store
            .hash_get(&KeyKind::Session.key(sid), FIELD_ACCESS_TOKEN)
            .await?
            .ok_or_else(|| SessionError::NotFound {
                target: sid.to_string(),
            })?;

        let remaining_ms = self.tokens.expiry_millis(&access_token)? - Utc::now().timestamp_millis();
        let ttl_ms = remaining_ms.max(1) as u64;

        self.store
            .set_with_expiry(&KeyKind::Blacklist.key(sid), "1", ttl_ms)
            .await?;
        debug!(sid, ttl_ms, "Session blacklisted");
        Ok(())
    }

    /// Resolves the principal's current `sid` and blacklists it.
    ///
    /// Fails with `SessionError::NotFound` when the principal has no
    /// session pointer.
    pub async fn blacklist_by_principal(&self, principal_id: &str) -> DomainResult<()> {
        let pointer_key = KeyKind::PrincipalPointer.key(principal_id);
        let sid = self
            .store
            .get(&pointer_key)
            .await?
            .ok_or_else(|| SessionError::NotFound {
                target: principal_id.to_string(),
            })?;
        self.blacklist_sid(&sid).await
    }

    /// Whether a revocation marker exists for the session.
    ///
    /// Store faults propagate typed; auth-critical callers must treat them
    /// as denial.
    pub async fn is_blacklisted(&self, sid: &str) -> DomainResult<bool> {
        self.store.exists(&KeyKind::Blacklist.key(sid)).await
    }

    /// Composite refresh-token gate: short-circuiting AND of sid
    /// extraction, signature/expiry validity, store reachability under the
    /// token's own `sid`, absence of a revocation marker, and continued
    /// existence of the principal. Every failure, including store faults,
    /// collapses to `false`.
    pub async fn is_refresh_valid(&self, refresh_token: &str) -> bool {
        let sid = match self.tokens.sid(refresh_token) {
            Ok(sid) => sid,
            Err(_) => return false,
        };

        if !self.tokens.is_valid(refresh_token) {
            return false;
        }
        if !self.has_refresh_token(refresh_token).await {
            return false;
        }
        match self.is_blacklisted(&sid).await {
            Ok(false) => {}
            Ok(true) => {
                debug!(sid = %sid, "Refresh rejected: session blacklisted");
                return false;
            }
            Err(e) => {
                warn!(sid = %sid, "Refresh rejected: blacklist check failed: {}", e);
                return false;
            }
        }

        let principal_id = match self.tokens.subject(refresh_token) {
            Ok(subject) => subject,
            Err(_) => return false,
        };
        match self.principals.exists(&principal_id).await {
            Ok(exists) => {
                if !exists {
                    debug!(principal_id, "Refresh rejected: principal no longer exists");
                }
                exists
            }
            Err(e) => {
                warn!(principal_id, "Refresh rejected: principal lookup failed: {}", e);
                false
            }
        }
    }
}
