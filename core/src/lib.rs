//! # SessionGate Core
//!
//! Core logic for session-backed token authentication. This crate contains
//! the token issuer/validator, the session store service, the revocation
//! blacklist, repository interfaces, and error types. Storage is an injected
//! key-value capability; no I/O happens in this crate.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
pub use store::*;
