//! Error type definitions for token parsing and session store operations.
//!
//! Validity predicates (`is_valid`, `is_refresh_valid`, `has_access_token`,
//! `has_refresh_token`) never surface these; they collapse every failure
//! into `false`. Operations that must report why propagate them typed.

use thiserror::Error;

/// Parse-time token failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token signature")]
    BadSignature,

    #[error("Malformed token")]
    Malformed,
}

/// Session store failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The access and refresh token of a pair carry different session ids.
    #[error("Access and refresh token session ids do not match")]
    Consistency,

    /// A blacklist target could not be resolved to a stored session.
    #[error("Session not found: {target}")]
    NotFound { target: String },
}
