//! Core types for the Hofladen storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod token;

pub use cart::{AddToCartInput, Cart, LineItem, ProductRef, UpdateCartInput};
pub use catalog::{Collection, MenuItem, Page, Product, ProductSortKey, Seo};
pub use id::*;
pub use token::CartToken;
