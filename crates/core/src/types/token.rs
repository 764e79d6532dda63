//! The opaque cart token.

use serde::{Deserialize, Serialize};

/// Identifier of a server-side cart.
///
/// The token is minted by the commerce backend when a cart is created and is
/// stored and replayed verbatim - its internal structure is never
/// interpreted client-side, and no format validation is performed. Absence
/// of a token means "no cart yet", which is a normal state for a fresh
/// session, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartToken(String);

impl CartToken {
    /// Wrap a backend-issued token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token and return the underlying `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the token is the empty string.
    ///
    /// An empty token is treated the same as a missing one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CartToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CartToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for CartToken {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl From<CartToken> for String {
    fn from(token: CartToken) -> Self {
        token.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let token = CartToken::new("dDplYzQxNmU2Yg==");
        assert_eq!(token.as_str(), "dDplYzQxNmU2Yg==");
        assert_eq!(token.to_string(), "dDplYzQxNmU2Yg==");
    }

    #[test]
    fn test_empty_token() {
        assert!(CartToken::new("").is_empty());
        assert!(!CartToken::new("t1").is_empty());
    }

    #[test]
    fn test_token_serializes_as_plain_string() {
        let token = CartToken::new("t1");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"t1\"");
    }
}
