//! Domain-specific error types and error handling.

mod types;

pub use types::{SessionError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// The shared store could not be reached or answered with a fault.
    /// Auth-critical callers must treat this as denial, never as success.
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// Fatal configuration fault, e.g. an undecodable signing key.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A refresh token failed the rotation gate.
    #[error("Refresh token rejected")]
    RefreshRejected,

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

pub type DomainResult<T> = Result<T, DomainError>;
