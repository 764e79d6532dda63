//! Hofladen storefront data layer.
//!
//! Thin data-access library over a headless WooCommerce shop exposed through
//! WPGraphQL. It issues GraphQL queries and mutations over HTTP POST and
//! shapes the responses into the plain view models from `hofladen-core`;
//! page rendering, routing and caching belong to whatever sits on top.
//!
//! # Architecture
//!
//! - [`woo::WooClient`] - GraphQL executor plus catalog and cart repository
//!   methods (hand-written query documents, typed serde decode)
//! - [`cart::CartActions`] - session-facing cart mutation façade: token
//!   lifecycle, quantity-edit reconciliation, user-safe error messages
//! - [`revalidate::InvalidationBus`] - fire-and-forget "topic invalidated"
//!   notifications for cart-derived views
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use hofladen_storefront::cart::{CartActions, MemoryTokenStore};
//! use hofladen_storefront::config::StorefrontConfig;
//! use hofladen_storefront::revalidate::InvalidationBus;
//! use hofladen_storefront::woo::WooClient;
//!
//! let config = StorefrontConfig::from_env()?;
//! let client = Arc::new(WooClient::new(&config));
//! let actions = CartActions::new(
//!     client,
//!     Arc::new(MemoryTokenStore::new()),
//!     InvalidationBus::default(),
//! );
//!
//! let token = actions.create_cart().await?;
//! actions.add_item(&"cHJvZHVjdDo0Mg==".into()).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod revalidate;
pub mod woo;

pub use cart::{CartActionError, CartActions, CartBackend, MemoryTokenStore, TokenStore};
pub use revalidate::{InvalidationBus, Topic};
pub use woo::{WooClient, WooError};
