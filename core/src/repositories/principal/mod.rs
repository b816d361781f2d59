//! Principal-lookup capability used during refresh validation.
//!
//! The session store does not own principal persistence; it only needs to
//! answer "does this principal still exist" before honoring a refresh
//! token. Implementations live in the infrastructure layer.

pub mod mock;

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Boolean existence lookup for principals.
#[async_trait]
pub trait PrincipalRepository: Send + Sync {
    /// Returns whether the principal is still present in the external
    /// principal store.
    ///
    /// # Arguments
    /// * `principal_id` - The authenticated subject identifier
    ///
    /// # Returns
    /// * `Ok(true)` - Principal exists
    /// * `Ok(false)` - Principal was removed
    /// * `Err(DomainError)` - Lookup failed; refresh validation must deny
    async fn exists(&self, principal_id: &str) -> DomainResult<bool>;
}
