//! Token service module for JWT management
//!
//! This module handles token issuance and validation:
//! - HMAC-signed access/refresh token construction with session linkage
//! - Signature and expiry verification
//! - Typed claim accessors

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
