//! Cart mutation façade.
//!
//! One method per UI intent. Each method reads the session token from the
//! injected [`TokenStore`], runs the matching backend operation(s), and on
//! success publishes [`Topic::Cart`] so cart-derived views refetch. Failures
//! come back as [`CartActionError`], whose `Display` is the short message
//! shown to the customer; the underlying cause is logged here and never
//! surfaced.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use hofladen_core::{AddToCartInput, Cart, CartToken, ProductId, UpdateCartInput};

use crate::revalidate::{InvalidationBus, Topic};

use super::backend::CartBackend;
use super::session::TokenStore;

/// User-facing failures of cart actions.
///
/// The `Display` strings are the exact messages rendered in the cart UI;
/// keep them short and free of backend detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartActionError {
    /// Adding failed, or its preconditions (token, product id) were unmet.
    #[error("Error adding item to cart")]
    AddFailed,

    /// No cart token stored for this session.
    #[error("Missing cart ID")]
    MissingCart,

    /// The cart could not be read back.
    #[error("Error fetching cart")]
    FetchFailed,

    /// No line item in the cart matches the product.
    #[error("Item not found in cart")]
    ItemNotFound,

    /// Removing the line item failed.
    #[error("Error removing item from cart")]
    RemoveFailed,

    /// The quantity edit failed.
    #[error("Error updating item quantity")]
    UpdateFailed,

    /// Creating a cart failed; the session keeps no token.
    #[error("Error creating cart")]
    CreateFailed,

    /// No usable checkout URL; the redirect fails closed.
    #[error("Error redirecting to checkout")]
    CheckoutUnavailable,
}

/// A checkout handoff: navigate the customer to `url`.
///
/// Terminal for this subsystem - no state changes and no invalidation
/// accompany it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRedirect {
    /// Validated checkout URL.
    pub url: Url,
}

/// Session-facing cart operations.
///
/// Mutations are serialized per façade instance: the quantity-edit
/// reconciliation is a read followed by a write, and holding one lock across
/// both keeps two rapid clicks in the same session from interleaving their
/// round trips. A façade is session-scoped (it owns that session's token
/// store), so the lock never spans sessions.
pub struct CartActions {
    backend: Arc<dyn CartBackend>,
    store: Arc<dyn TokenStore>,
    bus: InvalidationBus,
    mutation_lock: Mutex<()>,
}

impl CartActions {
    /// Create a façade over the given backend, token store, and bus.
    #[must_use]
    pub fn new(
        backend: Arc<dyn CartBackend>,
        store: Arc<dyn TokenStore>,
        bus: InvalidationBus,
    ) -> Self {
        Self {
            backend,
            store,
            bus,
            mutation_lock: Mutex::new(()),
        }
    }

    /// The stored token, treating an empty one as absent.
    async fn token(&self) -> Option<CartToken> {
        self.store.get().await.filter(|token| !token.is_empty())
    }

    /// Add one unit of a product to the cart.
    ///
    /// Requires an existing token and a non-empty product id; without them
    /// it fails immediately, before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`CartActionError::AddFailed`] on unmet preconditions or
    /// backend failure.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_item(&self, product_id: &ProductId) -> Result<(), CartActionError> {
        let Some(token) = self.token().await else {
            return Err(CartActionError::AddFailed);
        };
        if product_id.is_empty() {
            return Err(CartActionError::AddFailed);
        }

        let _guard = self.mutation_lock.lock().await;

        match self
            .backend
            .add_to_cart(&token, vec![AddToCartInput::new(product_id.clone(), 1)])
            .await
        {
            Ok(_) => {
                self.bus.publish(Topic::Cart);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to add item to cart");
                Err(CartActionError::AddFailed)
            }
        }
    }

    /// Remove a product's line item from the cart.
    ///
    /// The cart is read first to resolve the product to its cart-assigned
    /// line id; if no line matches, no mutation is issued.
    ///
    /// # Errors
    ///
    /// Returns [`CartActionError::MissingCart`] without a token,
    /// [`CartActionError::FetchFailed`] when the cart cannot be read,
    /// [`CartActionError::ItemNotFound`] when no line matches, and
    /// [`CartActionError::RemoveFailed`] on backend failure.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_item(&self, product_id: &ProductId) -> Result<(), CartActionError> {
        let Some(token) = self.token().await else {
            return Err(CartActionError::MissingCart);
        };

        let _guard = self.mutation_lock.lock().await;

        let cart = self.fetch_cart(&token).await?;

        let Some(line) = cart.line_for_product(product_id) else {
            return Err(CartActionError::ItemNotFound);
        };

        match self
            .backend
            .remove_from_cart(&token, vec![line.id.clone()])
            .await
        {
            Ok(_) => {
                self.bus.publish(Topic::Cart);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to remove item from cart");
                Err(CartActionError::RemoveFailed)
            }
        }
    }

    /// Set the absolute quantity for a product, reconciling against the
    /// current cart.
    ///
    /// Read the cart, find the line holding `product_id`, then:
    /// - found, quantity 0: remove the line
    /// - found, quantity > 0: update the line to the quantity
    /// - absent, quantity > 0: add the product at the quantity
    /// - absent, quantity 0: nothing to do
    ///
    /// The invalidation signal fires on every happy path, the no-op branch
    /// included, so views resync even when nothing changed server-side.
    ///
    /// # Errors
    ///
    /// Returns [`CartActionError::MissingCart`] without a token,
    /// [`CartActionError::FetchFailed`] when the cart cannot be read, and
    /// [`CartActionError::UpdateFailed`] when the resolved mutation fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn update_item_quantity(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), CartActionError> {
        let Some(token) = self.token().await else {
            return Err(CartActionError::MissingCart);
        };

        let _guard = self.mutation_lock.lock().await;

        let cart = self.fetch_cart(&token).await?;

        let outcome = match cart.line_for_product(product_id) {
            Some(line) if quantity == 0 => {
                self.backend
                    .remove_from_cart(&token, vec![line.id.clone()])
                    .await
                    .map(Some)
            }
            Some(line) => {
                self.backend
                    .update_cart(
                        &token,
                        vec![UpdateCartInput {
                            id: line.id.clone(),
                            product_id: product_id.clone(),
                            quantity,
                        }],
                    )
                    .await
                    .map(Some)
            }
            None if quantity > 0 => {
                self.backend
                    .add_to_cart(&token, vec![AddToCartInput::new(product_id.clone(), quantity)])
                    .await
                    .map(Some)
            }
            // Nothing in the cart and nothing requested
            None => Ok(None),
        };

        match outcome {
            Ok(_) => {
                self.bus.publish(Topic::Cart);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to update item quantity");
                Err(CartActionError::UpdateFailed)
            }
        }
    }

    /// Create a new cart and persist its token for the session.
    ///
    /// # Errors
    ///
    /// Returns [`CartActionError::CreateFailed`] on backend failure; the
    /// token store is left untouched in that case.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<CartToken, CartActionError> {
        match self.backend.create_cart().await {
            Ok(cart) => {
                self.store.set(cart.id.clone()).await;
                Ok(cart.id)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create cart");
                Err(CartActionError::CreateFailed)
            }
        }
    }

    /// Resolve the checkout handoff URL for the current cart.
    ///
    /// Fails closed: any missing piece (token, cart, URL) or an unparsable
    /// URL yields an error instead of a redirect to somewhere invalid.
    ///
    /// # Errors
    ///
    /// Returns [`CartActionError::CheckoutUnavailable`] in every failure
    /// case.
    #[instrument(skip(self))]
    pub async fn redirect_to_checkout(&self) -> Result<CheckoutRedirect, CartActionError> {
        let Some(token) = self.token().await else {
            return Err(CartActionError::CheckoutUnavailable);
        };

        let cart = match self.backend.get_cart(&token).await {
            Ok(Some(cart)) => cart,
            Ok(None) => return Err(CartActionError::CheckoutUnavailable),
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch cart for checkout");
                return Err(CartActionError::CheckoutUnavailable);
            }
        };

        let Some(checkout_url) = cart.checkout_url else {
            return Err(CartActionError::CheckoutUnavailable);
        };

        match Url::parse(&checkout_url) {
            Ok(url) => Ok(CheckoutRedirect { url }),
            Err(e) => {
                tracing::warn!(error = %e, url = %checkout_url, "cart carries an unparsable checkout URL");
                Err(CartActionError::CheckoutUnavailable)
            }
        }
    }

    /// Read the current cart, mapping read failures and absence to
    /// [`CartActionError::FetchFailed`].
    async fn fetch_cart(&self, token: &CartToken) -> Result<Cart, CartActionError> {
        match self.backend.get_cart(token).await {
            Ok(Some(cart)) => Ok(cart),
            Ok(None) => Err(CartActionError::FetchFailed),
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch cart");
                Err(CartActionError::FetchFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            CartActionError::AddFailed.to_string(),
            "Error adding item to cart"
        );
        assert_eq!(
            CartActionError::ItemNotFound.to_string(),
            "Item not found in cart"
        );
        assert_eq!(CartActionError::MissingCart.to_string(), "Missing cart ID");
        assert_eq!(
            CartActionError::CheckoutUnavailable.to_string(),
            "Error redirecting to checkout"
        );
    }
}
