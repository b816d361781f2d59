//! Authentication flow orchestration

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::session::SessionTokens;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PrincipalRepository;
use crate::services::session::SessionService;
use crate::services::token::TokenService;
use crate::store::KeyValueStore;

/// Orchestrates login, rotation, logout, and forced revocation.
pub struct AuthService<S: KeyValueStore, P: PrincipalRepository> {
    sessions: SessionService<S, P>,
    tokens: Arc<TokenService>,
}

impl<S: KeyValueStore, P: PrincipalRepository> AuthService<S, P> {
    /// Creates a new auth service instance.
    pub fn new(sessions: SessionService<S, P>, tokens: Arc<TokenService>) -> Self {
        Self { sessions, tokens }
    }

    /// The underlying session store, for callers needing direct
    /// predicate/blacklist access on the request path.
    pub fn sessions(&self) -> &SessionService<S, P> {
        &self.sessions
    }

    /// Establishes a new session for the principal.
    ///
    /// Mints a fresh `sid`, issues an access/refresh pair under it, and
    /// persists the pair. The principal pointer is overwritten, so any
    /// prior session stops being reachable by principal lookup.
    pub async fn login(&self, principal_id: &str) -> DomainResult<SessionTokens> {
        let sid = Uuid::new_v4().to_string();
        let (access_token, refresh_token) = self.tokens.issue_pair(principal_id, &sid)?;
        self.sessions
            .save(principal_id, &access_token, &refresh_token)
            .await?;
        info!(principal_id, sid = %sid, "Session established");
        Ok(SessionTokens {
            access_token,
            refresh_token,
            sid,
        })
    }

    /// Rotates a refresh token into a new session.
    ///
    /// Gates on `is_refresh_valid`, then mints a new `sid` and a fresh pair
    /// under it. The prior session record is neither deleted nor
    /// blacklisted by this act; it stays reachable by its own `sid` until
    /// its TTL lapses and only loses principal-pointer reachability.
    /// Rotation rotates discoverability, not validity.
    pub async fn rotate(&self, refresh_token: &str) -> DomainResult<SessionTokens> {
        if !self.sessions.is_refresh_valid(refresh_token).await {
            debug!("Rotation refused: refresh token failed validation");
            return Err(DomainError::RefreshRejected);
        }

        let principal_id = self.tokens.subject(refresh_token)?;
        let old_sid = self.tokens.sid(refresh_token)?;
        let session = self.login(&principal_id).await?;
        info!(principal_id, old_sid = %old_sid, new_sid = %session.sid, "Session rotated");
        Ok(session)
    }

    /// Ends the session the refresh token belongs to.
    ///
    /// Blacklists the token's `sid` for the remaining access-token
    /// lifetime, then deletes the session record and pointer.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        let sid = self.tokens.sid(refresh_token)?;
        let principal_id = self.tokens.subject(refresh_token)?;
        self.sessions.blacklist_sid(&sid).await?;
        self.sessions.delete(&principal_id).await?;
        info!(principal_id, sid = %sid, "Session terminated");
        Ok(())
    }

    /// Forcibly revokes the principal's current session.
    pub async fn revoke(&self, principal_id: &str) -> DomainResult<()> {
        self.sessions.blacklist_by_principal(principal_id).await?;
        self.sessions.delete(principal_id).await?;
        info!(principal_id, "Session revoked");
        Ok(())
    }
}
