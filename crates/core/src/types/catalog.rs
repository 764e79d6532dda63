//! Catalog view models.
//!
//! Flat display shapes for products, collections, menus and static pages.
//! Prices stay backend-formatted strings; the storefront renders them
//! verbatim and never does arithmetic on them.

use serde::{Deserialize, Serialize};

use crate::types::id::{CollectionId, ProductId};

/// A product as shown in listings and grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Backend-formatted price string, absent for products without one.
    pub price: Option<String>,
    /// Primary image URL.
    pub image: Option<String>,
}

/// A product category ("collection" in storefront terms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Category ID.
    pub id: CollectionId,
    /// Display name.
    pub name: String,
    /// URL slug (absent on detail reads that don't select it).
    pub slug: Option<String>,
    /// Category description.
    pub description: Option<String>,
    /// SEO metadata.
    pub seo: Option<Seo>,
}

/// SEO metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    /// Page title for search engines.
    pub title: Option<String>,
    /// Meta description.
    pub description: Option<String>,
}

/// One entry of a navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display label.
    pub title: String,
    /// Target path or URL.
    pub path: String,
}

/// A static content page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page title.
    pub title: String,
    /// Short description (the page excerpt).
    pub description: Option<String>,
}

/// Sort keys for product queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSortKey {
    /// Sort by product name.
    #[default]
    Name,
    /// Sort by price.
    Price,
    /// Sort by relevance (for search).
    Relevance,
}
