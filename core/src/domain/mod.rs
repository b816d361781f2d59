pub mod entities;

pub use entities::{Claims, SessionTokens, TokenKind};
