//! Domain entities for session-backed token authentication.

pub mod session;
pub mod token;

pub use session::SessionTokens;
pub use token::{Claims, TokenKind};
