//! Mock cart backend for deterministic testing.
//!
//! Keeps a cart in memory, applies mutations to it, and records every call
//! so tests can assert exactly which operations a UI intent produced.
//! Failure scenarios are injected per operation via [`FailOn`].
//!
//! # Example
//!
//! ```
//! use hofladen_storefront::cart::CartBackend;
//! use hofladen_storefront::cart::mock::{MockCartBackend, MockOperation};
//! use hofladen_core::{AddToCartInput, ProductId};
//!
//! # tokio_test::block_on(async {
//! let backend = MockCartBackend::new();
//!
//! let cart = backend.create_cart().await.unwrap();
//! assert!(cart.items.is_empty());
//!
//! backend
//!     .add_to_cart(
//!         &cart.id,
//!         vec![AddToCartInput::new(ProductId::new("p1"), 2)],
//!     )
//!     .await
//!     .unwrap();
//!
//! let ops = backend.operations().await;
//! assert_eq!(ops.len(), 2);
//! assert!(matches!(ops[1], MockOperation::AddToCart { .. }));
//! # });
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use hofladen_core::{
    AddToCartInput, Cart, CartToken, LineItem, LineItemId, ProductRef, UpdateCartInput,
};

use crate::woo::WooError;

use super::backend::CartBackend;

/// Mock cart backend.
///
/// Thread-safe; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MockCartBackend {
    inner: Arc<Mutex<MockCartBackendInner>>,
}

#[derive(Debug, Default)]
struct MockCartBackendInner {
    /// The single cart this backend serves, if any.
    cart: Option<Cart>,
    /// Operation that should fail.
    fail_on: Option<FailOn>,
    /// Recorded calls, in order.
    operations: Vec<MockOperation>,
    /// Counter for generated line ids.
    next_line: u64,
}

/// Which operation should fail with an injected error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    CreateCart,
    GetCart,
    AddToCart,
    RemoveFromCart,
    UpdateCart,
}

/// Recorded call for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    CreateCart,
    GetCart {
        token: CartToken,
    },
    AddToCart {
        token: CartToken,
        items: Vec<AddToCartInput>,
    },
    RemoveFromCart {
        token: CartToken,
        item_ids: Vec<LineItemId>,
    },
    UpdateCart {
        token: CartToken,
        items: Vec<UpdateCartInput>,
    },
}

impl MockOperation {
    /// Whether the call was a mutation (anything but a read).
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::GetCart { .. })
    }
}

impl MockCartBackend {
    /// Create a backend with no cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that already serves the given cart.
    #[must_use]
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockCartBackendInner {
                cart: Some(cart),
                ..MockCartBackendInner::default()
            })),
        }
    }

    /// Async variant of [`Self::with_cart`] for use inside a runtime.
    pub async fn set_cart(&self, cart: Cart) {
        self.inner.lock().await.cart = Some(cart);
    }

    /// Make the given operation fail with an injected error.
    pub async fn set_fail_on(&self, fail_on: FailOn) {
        self.inner.lock().await.fail_on = Some(fail_on);
    }

    /// All recorded calls, in order.
    pub async fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().await.operations.clone()
    }

    /// Recorded mutation calls only.
    pub async fn mutations(&self) -> Vec<MockOperation> {
        self.inner
            .lock()
            .await
            .operations
            .iter()
            .filter(|op| op.is_mutation())
            .cloned()
            .collect()
    }

    /// The current cart state.
    pub async fn cart(&self) -> Option<Cart> {
        self.inner.lock().await.cart.clone()
    }
}

fn injected_failure() -> WooError {
    WooError::MissingData("injected failure")
}

impl MockCartBackendInner {
    fn cart_for(&mut self, token: &CartToken) -> Result<&mut Cart, WooError> {
        match self.cart.as_mut() {
            Some(cart) if &cart.id == token => Ok(cart),
            _ => Err(WooError::MissingData("cart")),
        }
    }
}

#[async_trait]
impl CartBackend for MockCartBackend {
    async fn create_cart(&self) -> Result<Cart, WooError> {
        let mut inner = self.inner.lock().await;
        inner.operations.push(MockOperation::CreateCart);

        if inner.fail_on == Some(FailOn::CreateCart) {
            return Err(injected_failure());
        }

        let cart = Cart {
            id: CartToken::new("mock-cart"),
            items: Vec::new(),
            checkout_url: None,
        };
        inner.cart = Some(cart.clone());
        Ok(cart)
    }

    async fn get_cart(&self, token: &CartToken) -> Result<Option<Cart>, WooError> {
        let mut inner = self.inner.lock().await;
        inner.operations.push(MockOperation::GetCart {
            token: token.clone(),
        });

        if inner.fail_on == Some(FailOn::GetCart) {
            return Err(injected_failure());
        }

        Ok(inner
            .cart
            .as_ref()
            .filter(|cart| &cart.id == token)
            .cloned())
    }

    async fn add_to_cart(
        &self,
        token: &CartToken,
        items: Vec<AddToCartInput>,
    ) -> Result<Cart, WooError> {
        let mut inner = self.inner.lock().await;
        inner.operations.push(MockOperation::AddToCart {
            token: token.clone(),
            items: items.clone(),
        });

        if inner.fail_on == Some(FailOn::AddToCart) {
            return Err(injected_failure());
        }

        for input in items {
            inner.next_line += 1;
            let line_id = LineItemId::new(format!("mock-line-{}", inner.next_line));
            let cart = inner.cart_for(token)?;

            if let Some(line) = cart
                .items
                .iter_mut()
                .find(|line| line.product.id == input.product_id)
            {
                line.quantity += input.quantity;
            } else {
                cart.items.push(LineItem {
                    id: line_id,
                    quantity: input.quantity,
                    product: ProductRef {
                        name: input.product_id.as_str().to_owned(),
                        id: input.product_id,
                    },
                });
            }
        }

        inner.cart_for(token).map(|cart| cart.clone())
    }

    async fn remove_from_cart(
        &self,
        token: &CartToken,
        item_ids: Vec<LineItemId>,
    ) -> Result<Cart, WooError> {
        let mut inner = self.inner.lock().await;
        inner.operations.push(MockOperation::RemoveFromCart {
            token: token.clone(),
            item_ids: item_ids.clone(),
        });

        if inner.fail_on == Some(FailOn::RemoveFromCart) {
            return Err(injected_failure());
        }

        let cart = inner.cart_for(token)?;
        cart.items.retain(|line| !item_ids.contains(&line.id));
        Ok(cart.clone())
    }

    async fn update_cart(
        &self,
        token: &CartToken,
        items: Vec<UpdateCartInput>,
    ) -> Result<Cart, WooError> {
        let mut inner = self.inner.lock().await;
        inner.operations.push(MockOperation::UpdateCart {
            token: token.clone(),
            items: items.clone(),
        });

        if inner.fail_on == Some(FailOn::UpdateCart) {
            return Err(injected_failure());
        }

        let cart = inner.cart_for(token)?;
        for input in items {
            if let Some(line) = cart.items.iter_mut().find(|line| line.id == input.id) {
                line.quantity = input.quantity;
            }
        }
        Ok(cart.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hofladen_core::ProductId;

    #[tokio::test]
    async fn test_create_then_get() {
        let backend = MockCartBackend::new();
        let cart = backend.create_cart().await.unwrap();

        let read = backend.get_cart(&cart.id).await.unwrap();
        assert_eq!(read, Some(cart));
    }

    #[tokio::test]
    async fn test_get_unknown_token_is_absent() {
        let backend = MockCartBackend::new();
        backend.create_cart().await.unwrap();

        let read = backend.get_cart(&CartToken::new("other")).await.unwrap();
        assert!(read.is_none());
    }

    #[tokio::test]
    async fn test_add_increments_existing_line() {
        let backend = MockCartBackend::new();
        let cart = backend.create_cart().await.unwrap();

        let p1 = ProductId::new("p1");
        backend
            .add_to_cart(&cart.id, vec![AddToCartInput::new(p1.clone(), 1)])
            .await
            .unwrap();
        let updated = backend
            .add_to_cart(&cart.id, vec![AddToCartInput::new(p1.clone(), 2)])
            .await
            .unwrap();

        assert_eq!(updated.items.len(), 1);
        assert_eq!(updated.line_for_product(&p1).unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn test_remove_and_update() {
        let backend = MockCartBackend::new();
        let cart = backend.create_cart().await.unwrap();
        let added = backend
            .add_to_cart(
                &cart.id,
                vec![
                    AddToCartInput::new(ProductId::new("p1"), 1),
                    AddToCartInput::new(ProductId::new("p2"), 1),
                ],
            )
            .await
            .unwrap();

        let p1_line = added.line_for_product(&ProductId::new("p1")).unwrap().clone();
        let p2_line = added.line_for_product(&ProductId::new("p2")).unwrap().clone();

        let after_update = backend
            .update_cart(
                &cart.id,
                vec![UpdateCartInput {
                    id: p2_line.id.clone(),
                    product_id: p2_line.product.id.clone(),
                    quantity: 7,
                }],
            )
            .await
            .unwrap();
        assert_eq!(
            after_update
                .line_for_product(&ProductId::new("p2"))
                .unwrap()
                .quantity,
            7
        );

        let after_remove = backend
            .remove_from_cart(&cart.id, vec![p1_line.id])
            .await
            .unwrap();
        assert!(after_remove.line_for_product(&ProductId::new("p1")).is_none());
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let backend = MockCartBackend::new();
        backend.set_fail_on(FailOn::CreateCart).await;

        assert!(backend.create_cart().await.is_err());
        assert_eq!(backend.operations().await.len(), 1);
    }
}
