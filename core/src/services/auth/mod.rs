//! Login, rotation, and revocation orchestration
//!
//! Composes the token issuer and the session store into the flows the
//! request-handling pipeline consumes: login, refresh-token rotation,
//! logout, and forced revocation.

mod service;


pub use service::AuthService;
