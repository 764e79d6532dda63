//! Cart backend trait.
//!
//! The trait is async because every operation is a round trip to the
//! commerce backend. [`WooClient`] is the production implementation;
//! [`crate::cart::mock::MockCartBackend`] records calls for tests.

use async_trait::async_trait;

use hofladen_core::{AddToCartInput, Cart, CartToken, LineItemId, UpdateCartInput};

use crate::woo::{WooClient, WooError};

/// Remote cart operations, one method per backend round trip.
#[async_trait]
pub trait CartBackend: Send + Sync {
    /// Create a new cart and return it (token included).
    async fn create_cart(&self) -> Result<Cart, WooError>;

    /// Read a cart; `Ok(None)` means "no such cart", which is distinct from
    /// a failed read.
    async fn get_cart(&self, token: &CartToken) -> Result<Option<Cart>, WooError>;

    /// Append or increment line items.
    async fn add_to_cart(
        &self,
        token: &CartToken,
        items: Vec<AddToCartInput>,
    ) -> Result<Cart, WooError>;

    /// Remove line items by their cart-assigned ids.
    async fn remove_from_cart(
        &self,
        token: &CartToken,
        item_ids: Vec<LineItemId>,
    ) -> Result<Cart, WooError>;

    /// Set absolute quantities on existing line items.
    async fn update_cart(
        &self,
        token: &CartToken,
        items: Vec<UpdateCartInput>,
    ) -> Result<Cart, WooError>;
}

#[async_trait]
impl CartBackend for WooClient {
    async fn create_cart(&self) -> Result<Cart, WooError> {
        Self::create_cart(self).await
    }

    async fn get_cart(&self, token: &CartToken) -> Result<Option<Cart>, WooError> {
        Self::get_cart(self, token).await
    }

    async fn add_to_cart(
        &self,
        token: &CartToken,
        items: Vec<AddToCartInput>,
    ) -> Result<Cart, WooError> {
        Self::add_to_cart(self, token, items).await
    }

    async fn remove_from_cart(
        &self,
        token: &CartToken,
        item_ids: Vec<LineItemId>,
    ) -> Result<Cart, WooError> {
        Self::remove_from_cart(self, token, item_ids).await
    }

    async fn update_cart(
        &self,
        token: &CartToken,
        items: Vec<UpdateCartInput>,
    ) -> Result<Cart, WooError> {
        Self::update_cart(self, token, items).await
    }
}
