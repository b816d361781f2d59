//! Typed key builder for the shared store namespace.
//!
//! All keys live under the `auth:` prefix. Call sites never concatenate key
//! strings themselves; routing every key through [`KeyKind::key`] keeps the
//! three namespaces from colliding.

/// The kinds of keys the session store writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// `auth:sid:{sid}` - hash holding the session's token pair
    Session,
    /// `auth:principal:{principalId}` - pointer to the principal's current sid
    PrincipalPointer,
    /// `auth:blacklist:{sid}` - self-expiring revocation marker
    Blacklist,
}

impl KeyKind {
    fn prefix(self) -> &'static str {
        match self {
            KeyKind::Session => "auth:sid:",
            KeyKind::PrincipalPointer => "auth:principal:",
            KeyKind::Blacklist => "auth:blacklist:",
        }
    }

    /// Builds the store key for the given identifier.
    pub fn key(self, id: &str) -> String {
        format!("{}{}", self.prefix(), id)
    }
}

/// Hash field holding the access token inside a session record.
pub const FIELD_ACCESS_TOKEN: &str = "access_token";

/// Hash field holding the refresh token inside a session record.
pub const FIELD_REFRESH_TOKEN: &str = "refresh_token";
