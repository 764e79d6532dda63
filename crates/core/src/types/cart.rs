//! Cart domain types.
//!
//! The cart is server-authoritative: client code never builds a [`Cart`]
//! from scratch, it only decodes one out of a backend response. `items`
//! reflects server state as of the last successful read and may be stale
//! relative to concurrent mutations from elsewhere.

use serde::{Deserialize, Serialize};

use crate::types::id::{LineItemId, ProductId};
use crate::types::token::CartToken;

/// A shopping cart as returned by the commerce backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Opaque cart token; also the cart's identifier.
    pub id: CartToken,
    /// Line items, in backend order.
    pub items: Vec<LineItem>,
    /// URL to hand the customer to for checkout, when the backend provides
    /// one.
    pub checkout_url: Option<String>,
}

impl Cart {
    /// Find the first line item whose product matches `product_id`.
    ///
    /// Product ids are assumed unique per cart, so "first" is also "only".
    #[must_use]
    pub fn line_for_product(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.product.id == product_id)
    }

    /// Total quantity across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One product-quantity entry within a cart.
///
/// Its `id` is assigned by the cart backend and is distinct from the product
/// id; removal goes by line id. Quantity is at least 1 while the item exists
/// - a quantity of 0 means removal, never a zero-quantity line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Cart-assigned line identifier.
    pub id: LineItemId,
    /// Quantity, >= 1.
    pub quantity: u32,
    /// The product this line holds.
    pub product: ProductRef,
}

/// Minimal product identity carried on a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    /// Product ID.
    pub id: ProductId,
    /// Product name for display.
    pub name: String,
}

/// Input for adding a line to a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    /// Product to add.
    pub product_id: ProductId,
    /// Quantity to add, >= 1.
    pub quantity: u32,
}

impl AddToCartInput {
    /// Build an add-item input.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Input for setting the absolute quantity of an existing cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartInput {
    /// Cart-assigned line identifier.
    pub id: LineItemId,
    /// Product held by the line.
    pub product_id: ProductId,
    /// New absolute quantity, >= 1.
    pub quantity: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: &str, product_id: &str, quantity: u32) -> LineItem {
        LineItem {
            id: LineItemId::new(id),
            quantity,
            product: ProductRef {
                id: ProductId::new(product_id),
                name: format!("Product {product_id}"),
            },
        }
    }

    #[test]
    fn test_line_for_product_finds_first_match() {
        let cart = Cart {
            id: CartToken::new("t1"),
            items: vec![line("l1", "p1", 2), line("l2", "p2", 1)],
            checkout_url: None,
        };

        let found = cart.line_for_product(&ProductId::new("p2")).unwrap();
        assert_eq!(found.id, LineItemId::new("l2"));
        assert!(cart.line_for_product(&ProductId::new("p9")).is_none());
    }

    #[test]
    fn test_total_quantity() {
        let cart = Cart {
            id: CartToken::new("t1"),
            items: vec![line("l1", "p1", 2), line("l2", "p2", 3)],
            checkout_url: None,
        };
        assert_eq!(cart.total_quantity(), 5);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_add_input_serializes_camel_case() {
        let input = AddToCartInput::new(ProductId::new("p1"), 2);
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"productId": "p1", "quantity": 2}));
    }

    #[test]
    fn test_update_input_serializes_camel_case() {
        let input = UpdateCartInput {
            id: LineItemId::new("l1"),
            product_id: ProductId::new("p1"),
            quantity: 5,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "l1", "productId": "p1", "quantity": 5})
        );
    }
}
