//! Cart repository methods (not cached - mutable state).
//!
//! These translate high-level cart intents into the backend's mutations and
//! decode the returned cart snapshot. Lines are addressed by their
//! cart-assigned [`LineItemId`], never by product id; removal of an unknown
//! line and adding an unknown product are backend-defined behavior that this
//! layer does not second-guess.

use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use hofladen_core::{AddToCartInput, Cart, CartToken, LineItem, LineItemId, ProductRef, UpdateCartInput};

use super::queries;
use super::{WooClient, WooError};

// =============================================================================
// Wire Shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct GetCartData {
    cart: Option<RawCart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCartData {
    create_cart: Option<CartPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartData {
    add_to_cart: Option<CartPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveFromCartData {
    remove_from_cart: Option<CartPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCartData {
    update_cart: Option<CartPayload>,
}

#[derive(Debug, Deserialize)]
struct CartPayload {
    cart: Option<RawCart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCart {
    id: String,
    #[serde(default)]
    checkout_url: Option<String>,
    #[serde(default)]
    items: Vec<RawCartItem>,
}

#[derive(Debug, Deserialize)]
struct RawCartItem {
    id: String,
    quantity: u32,
    product: RawCartProduct,
}

#[derive(Debug, Deserialize)]
struct RawCartProduct {
    id: String,
    name: String,
}

impl From<RawCart> for Cart {
    fn from(raw: RawCart) -> Self {
        Self {
            id: CartToken::new(raw.id),
            checkout_url: raw.checkout_url,
            items: raw.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<RawCartItem> for LineItem {
    fn from(raw: RawCartItem) -> Self {
        Self {
            id: LineItemId::new(raw.id),
            quantity: raw.quantity,
            product: ProductRef {
                id: raw.product.id.into(),
                name: raw.product.name,
            },
        }
    }
}

// =============================================================================
// Cart Methods
// =============================================================================

impl WooClient {
    /// Create a new cart.
    ///
    /// On success the backend hands back a fresh cart with a token and no
    /// items; no partial state is retained on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the mutation payload
    /// carries no cart.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<Cart, WooError> {
        let data: CreateCartData = self
            .execute(queries::CREATE_CART, serde_json::Value::Null)
            .await?;

        data.create_cart
            .and_then(|payload| payload.cart)
            .map(Cart::from)
            .ok_or(WooError::MissingData("createCart.cart"))
    }

    /// Read an existing cart.
    ///
    /// An empty token short-circuits to `Ok(None)` with no request issued -
    /// "no cart yet" is a normal state, not an error. The backend answering
    /// `cart: null` is likewise `Ok(None)`. Transport and decode failures
    /// stay errors so callers can tell them apart from absence.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self, token), fields(cart_id = %token))]
    pub async fn get_cart(&self, token: &CartToken) -> Result<Option<Cart>, WooError> {
        if token.is_empty() {
            tracing::warn!("no cart token provided");
            return Ok(None);
        }

        let data: GetCartData = self
            .execute(queries::GET_CART, json!({ "cartId": token }))
            .await?;

        Ok(data.cart.map(Cart::from))
    }

    /// Append or increment line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the mutation payload
    /// carries no cart.
    #[instrument(skip(self, token, items), fields(cart_id = %token))]
    pub async fn add_to_cart(
        &self,
        token: &CartToken,
        items: Vec<AddToCartInput>,
    ) -> Result<Cart, WooError> {
        let data: AddToCartData = self
            .execute(
                queries::ADD_TO_CART,
                json!({ "cartId": token, "items": items }),
            )
            .await?;

        data.add_to_cart
            .and_then(|payload| payload.cart)
            .map(Cart::from)
            .ok_or(WooError::MissingData("addToCart.cart"))
    }

    /// Remove line items by their cart-assigned ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the mutation payload
    /// carries no cart.
    #[instrument(skip(self, token, item_ids), fields(cart_id = %token))]
    pub async fn remove_from_cart(
        &self,
        token: &CartToken,
        item_ids: Vec<LineItemId>,
    ) -> Result<Cart, WooError> {
        let data: RemoveFromCartData = self
            .execute(
                queries::REMOVE_FROM_CART,
                json!({ "cartId": token, "itemIds": item_ids }),
            )
            .await?;

        data.remove_from_cart
            .and_then(|payload| payload.cart)
            .map(Cart::from)
            .ok_or(WooError::MissingData("removeFromCart.cart"))
    }

    /// Set absolute quantities on existing line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the mutation payload
    /// carries no cart.
    #[instrument(skip(self, token, items), fields(cart_id = %token))]
    pub async fn update_cart(
        &self,
        token: &CartToken,
        items: Vec<UpdateCartInput>,
    ) -> Result<Cart, WooError> {
        let data: UpdateCartData = self
            .execute(
                queries::UPDATE_CART,
                json!({ "cartId": token, "items": items }),
            )
            .await?;

        data.update_cart
            .and_then(|payload| payload.cart)
            .map(Cart::from)
            .ok_or(WooError::MissingData("updateCart.cart"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_cart_decodes_minimal_selection() {
        // CreateCart selects only id and checkoutUrl; items must default.
        let raw: RawCart = serde_json::from_value(json!({
            "id": "t1",
            "checkoutUrl": null,
        }))
        .unwrap();

        let cart = Cart::from(raw);
        assert_eq!(cart.id, CartToken::new("t1"));
        assert!(cart.items.is_empty());
        assert!(cart.checkout_url.is_none());
    }

    #[test]
    fn test_raw_cart_decodes_items() {
        let raw: RawCart = serde_json::from_value(json!({
            "id": "t1",
            "checkoutUrl": "https://shop.example.com/checkout",
            "items": [
                {"id": "l1", "quantity": 2, "product": {"id": "p1", "name": "Apfelsaft"}},
            ],
        }))
        .unwrap();

        let cart = Cart::from(raw);
        assert_eq!(cart.items.len(), 1);
        let line = cart.items.first().unwrap();
        assert_eq!(line.id, LineItemId::new("l1"));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.product.name, "Apfelsaft");
    }

    #[test]
    fn test_raw_cart_item_requires_product() {
        let result: Result<RawCartItem, _> =
            serde_json::from_value(json!({"id": "l1", "quantity": 1}));
        assert!(result.is_err());
    }
}
