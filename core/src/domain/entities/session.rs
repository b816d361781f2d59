//! Session record view returned by principal lookup.

/// The token pair currently stored for a session, together with its `sid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    /// Short-lived credential for request authentication
    pub access_token: String,
    /// Longer-lived credential used to mint new pairs
    pub refresh_token: String,
    /// Session identifier shared by the pair
    pub sid: String,
}
