//! # Infrastructure Layer
//!
//! Concrete implementations of the capabilities the core crate consumes:
//! the Redis-backed key-value session store and environment-driven
//! configuration loading. All transport faults surface as
//! `DomainError::StoreUnavailable`, so auth-critical callers deny instead
//! of proceeding.

use thiserror::Error;

/// Cache module - Redis client and the key-value store capability
pub mod cache;

/// Configuration module for infrastructure services
pub mod config;

/// Infrastructure-level failures.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Redis transport or protocol fault
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for sg_core::errors::DomainError {
    fn from(e: InfrastructureError) -> Self {
        match e {
            InfrastructureError::Cache(err) => sg_core::errors::DomainError::StoreUnavailable {
                message: err.to_string(),
            },
            InfrastructureError::Config(message) => {
                sg_core::errors::DomainError::Configuration { message }
            }
        }
    }
}
