//! Catalog read methods: products, collections, menus, pages.

use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use hofladen_core::{
    Collection, CollectionId, MenuId, MenuItem, Page, Product, ProductSortKey, Seo,
};

use super::queries;
use super::{WooClient, WooError};

/// Parameters for [`WooClient::get_products`].
#[derive(Debug, Clone)]
pub struct GetProductsParams {
    /// Full-text search term.
    pub search: Option<String>,
    /// Sort order (ascending).
    pub sort: ProductSortKey,
    /// Page size.
    pub first: i64,
}

impl Default for GetProductsParams {
    fn default() -> Self {
        Self {
            search: None,
            sort: ProductSortKey::Name,
            first: 12,
        }
    }
}

// =============================================================================
// Wire Shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct Nodes<T> {
    nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ProductsData {
    products: Option<Nodes<RawProduct>>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    id: String,
    name: String,
    slug: String,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    image: Option<RawImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImage {
    source_url: String,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: raw.id.into(),
            name: raw.name,
            slug: raw.slug,
            price: raw.price,
            image: raw.image.map(|img| img.source_url),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionsData {
    product_categories: Option<Nodes<RawCategory>>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    id: String,
    name: String,
    slug: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionData {
    product_category: Option<RawCategoryDetail>,
}

#[derive(Debug, Deserialize)]
struct RawCategoryDetail {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    seo: Option<RawSeo>,
}

#[derive(Debug, Deserialize)]
struct RawSeo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionProductsData {
    product_category: Option<RawCategoryProducts>,
}

#[derive(Debug, Deserialize)]
struct RawCategoryProducts {
    products: Option<Nodes<RawProduct>>,
}

#[derive(Debug, Deserialize)]
struct MenuData {
    menu: Option<RawMenu>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMenu {
    menu_items: Nodes<RawMenuItem>,
}

#[derive(Debug, Deserialize)]
struct RawMenuItem {
    label: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct PageData {
    page: Option<RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    title: String,
    #[serde(default)]
    description: Option<String>,
}

// =============================================================================
// Catalog Methods
// =============================================================================

impl WooClient {
    /// Search/list products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the `products` field is
    /// absent from the response.
    #[instrument(skip(self))]
    pub async fn get_products(
        &self,
        params: GetProductsParams,
    ) -> Result<Vec<Product>, WooError> {
        let data: ProductsData = self
            .execute(
                queries::GET_PRODUCTS,
                json!({
                    "searchQuery": params.search,
                    "sort": params.sort,
                    "first": params.first,
                }),
            )
            .await?;

        let connection = data.products.ok_or(WooError::MissingData("products"))?;
        Ok(connection.nodes.into_iter().map(Product::from).collect())
    }

    /// List non-empty product categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the `productCategories`
    /// field is absent from the response.
    #[instrument(skip(self))]
    pub async fn get_collections(&self) -> Result<Vec<Collection>, WooError> {
        let data: CollectionsData = self
            .execute(queries::GET_COLLECTIONS, serde_json::Value::Null)
            .await?;

        let connection = data
            .product_categories
            .ok_or(WooError::MissingData("productCategories"))?;

        Ok(connection
            .nodes
            .into_iter()
            .map(|category| Collection {
                id: CollectionId::new(category.id),
                name: category.name,
                slug: Some(category.slug),
                description: None,
                seo: None,
            })
            .collect())
    }

    /// Read a single product category by slug.
    ///
    /// Returns `Ok(None)` when no category carries the slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_collection(&self, slug: &str) -> Result<Option<Collection>, WooError> {
        let data: CollectionData = self
            .execute(queries::GET_COLLECTION, json!({ "slug": slug }))
            .await?;

        Ok(data.product_category.map(|category| Collection {
            id: CollectionId::new(category.id),
            name: category.name,
            slug: None,
            description: category.description,
            seo: category.seo.map(|seo| Seo {
                title: seo.title,
                description: seo.description,
            }),
        }))
    }

    /// Products of a category.
    ///
    /// An empty category id short-circuits to an empty list without issuing
    /// a request; an unknown category also yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or an existing category
    /// comes back without its `products` field.
    #[instrument(skip(self, collection_id), fields(collection_id = %collection_id))]
    pub async fn get_collection_products(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<Product>, WooError> {
        if collection_id.is_empty() {
            tracing::warn!("no collection id provided");
            return Ok(Vec::new());
        }

        let data: CollectionProductsData = self
            .execute(
                queries::GET_COLLECTION_PRODUCTS,
                json!({ "id": collection_id }),
            )
            .await?;

        let Some(category) = data.product_category else {
            return Ok(Vec::new());
        };

        let connection = category
            .products
            .ok_or(WooError::MissingData("productCategory.products"))?;

        Ok(connection.nodes.into_iter().map(Product::from).collect())
    }

    /// Navigation menu items.
    ///
    /// An empty menu id short-circuits to an empty list without issuing a
    /// request; an unknown menu also yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, menu_id), fields(menu_id = %menu_id))]
    pub async fn get_menu(&self, menu_id: &MenuId) -> Result<Vec<MenuItem>, WooError> {
        if menu_id.is_empty() {
            tracing::warn!("no menu id provided");
            return Ok(Vec::new());
        }

        let data: MenuData = self
            .execute(queries::GET_MENU, json!({ "id": menu_id }))
            .await?;

        let Some(menu) = data.menu else {
            return Ok(Vec::new());
        };

        Ok(menu
            .menu_items
            .nodes
            .into_iter()
            .map(|item| MenuItem {
                title: item.label,
                path: item.url,
            })
            .collect())
    }

    /// Static page by slug.
    ///
    /// Returns `Ok(None)` when no page carries the slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_page(&self, slug: &str) -> Result<Option<Page>, WooError> {
        let data: PageData = self
            .execute(queries::GET_PAGE, json!({ "slug": slug }))
            .await?;

        Ok(data.page.map(|page| Page {
            title: page.title,
            description: page.description,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_product_maps_image_to_url() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": "p1",
            "name": "Apfelsaft",
            "slug": "apfelsaft",
            "price": "3,50 €",
            "image": {"sourceUrl": "https://shop.example.com/apfelsaft.jpg"},
        }))
        .unwrap();

        let product = Product::from(raw);
        assert_eq!(
            product.image.as_deref(),
            Some("https://shop.example.com/apfelsaft.jpg")
        );
        assert_eq!(product.price.as_deref(), Some("3,50 €"));
    }

    #[test]
    fn test_raw_product_without_image_or_price() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": "p2",
            "name": "Honig",
            "slug": "honig",
        }))
        .unwrap();

        let product = Product::from(raw);
        assert!(product.image.is_none());
        assert!(product.price.is_none());
    }
}
