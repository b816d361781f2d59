//! In-memory principal repository for tests and examples.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::errors::DomainResult;

use super::PrincipalRepository;

/// Mock implementation backed by a shared set of known principal ids.
///
/// Cloning yields a handle to the same underlying set, so tests can mutate
/// the population after handing a clone to a service.
#[derive(Clone, Default)]
pub struct MockPrincipalRepository {
    principals: Arc<Mutex<HashSet<String>>>,
}

impl MockPrincipalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given principals.
    pub fn with_principals<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            principals: Arc::new(Mutex::new(ids.into_iter().map(Into::into).collect())),
        }
    }

    pub fn add(&self, principal_id: &str) {
        self.principals.lock().unwrap().insert(principal_id.to_string());
    }

    pub fn remove(&self, principal_id: &str) {
        self.principals.lock().unwrap().remove(principal_id);
    }
}

#[async_trait]
impl PrincipalRepository for MockPrincipalRepository {
    async fn exists(&self, principal_id: &str) -> DomainResult<bool> {
        Ok(self.principals.lock().unwrap().contains(principal_id))
    }
}
