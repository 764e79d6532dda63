//! Session-scoped cart token storage.
//!
//! The cart token lives for the browsing session; where exactly it persists
//! (cookie, server session, memory) is the embedding application's choice.
//! The façade only sees this trait, never ambient process state.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use hofladen_core::CartToken;

/// Session-scoped storage for the cart token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// The stored token, if a cart was created this session.
    async fn get(&self) -> Option<CartToken>;

    /// Persist a token for the rest of the session.
    async fn set(&self, token: CartToken);
}

/// In-process token store.
///
/// Used directly in tests and by embeddings that keep session state in
/// memory; cookie-backed stores implement [`TokenStore`] themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    inner: Arc<Mutex<Option<CartToken>>>,
}

impl MemoryTokenStore {
    /// Create an empty store ("no cart yet").
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token.
    #[must_use]
    pub fn with_token(token: CartToken) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(token))),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Option<CartToken> {
        self.inner.lock().await.clone()
    }

    async fn set(&self, token: CartToken) {
        *self.inner.lock().await = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_has_no_token() {
        let store = MemoryTokenStore::new();
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryTokenStore::new();
        store.set(CartToken::new("t1")).await;
        assert_eq!(store.get().await, Some(CartToken::new("t1")));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryTokenStore::new();
        let clone = store.clone();
        clone.set(CartToken::new("t2")).await;
        assert_eq!(store.get().await, Some(CartToken::new("t2")));
    }
}
