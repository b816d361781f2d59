//! Session store module
//!
//! Tracks the current access/refresh pair per session, enforces a single
//! active session per principal through a last-write-wins pointer, and
//! records self-expiring revocation markers. All state lives in the shared
//! key-value store; reclamation is TTL-driven, no background sweep runs.

mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use service::SessionService;
