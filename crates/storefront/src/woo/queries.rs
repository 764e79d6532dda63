//! GraphQL documents for the WPGraphQL backend.
//!
//! Documents are hand-written; WPGraphQL exposes no schema artifact to feed
//! a codegen step, and the selections here are small enough that typed serde
//! shapes next to each method keep them honest.

/// Create a new cart.
pub const CREATE_CART: &str = r"
    mutation CreateCart {
        createCart {
            cart {
                id
                checkoutUrl
            }
        }
    }
";

/// Read a cart by its token.
pub const GET_CART: &str = r"
    query GetCart($cartId: ID!) {
        cart(id: $cartId) {
            id
            checkoutUrl
            items {
                id
                quantity
                product {
                    id
                    name
                }
            }
        }
    }
";

/// Append or increment line items.
pub const ADD_TO_CART: &str = r"
    mutation AddToCart($cartId: ID!, $items: [CartItemInput!]!) {
        addToCart(input: { cartId: $cartId, items: $items }) {
            cart {
                id
                checkoutUrl
                items {
                    id
                    quantity
                    product {
                        id
                        name
                    }
                }
            }
        }
    }
";

/// Remove line items by their cart-assigned ids.
pub const REMOVE_FROM_CART: &str = r"
    mutation RemoveFromCart($cartId: ID!, $itemIds: [ID!]!) {
        removeFromCart(input: { cartId: $cartId, itemIds: $itemIds }) {
            cart {
                id
                checkoutUrl
                items {
                    id
                    quantity
                    product {
                        id
                        name
                    }
                }
            }
        }
    }
";

/// Set absolute quantities on existing line items.
pub const UPDATE_CART: &str = r"
    mutation UpdateCart($cartId: ID!, $items: [CartItemInput!]!) {
        updateCart(input: { cartId: $cartId, items: $items }) {
            cart {
                id
                checkoutUrl
                items {
                    id
                    quantity
                    product {
                        id
                        name
                    }
                }
            }
        }
    }
";

/// Search/list products.
pub const GET_PRODUCTS: &str = r"
    query GetProducts($searchQuery: String, $sort: ProductsOrderByEnum, $first: Int) {
        products(
            where: { search: $searchQuery }
            orderBy: { field: $sort, order: ASC }
            first: $first
        ) {
            nodes {
                id
                name
                slug
                price
                image {
                    sourceUrl
                }
            }
        }
    }
";

/// List non-empty product categories.
pub const GET_COLLECTIONS: &str = r"
    query GetCollections {
        productCategories(where: { hideEmpty: true }) {
            nodes {
                id
                name
                slug
            }
        }
    }
";

/// Read a single product category by slug.
pub const GET_COLLECTION: &str = r"
    query GetCollection($slug: String!) {
        productCategory(where: { slug: $slug }) {
            id
            name
            description
            seo {
                title
                description
            }
        }
    }
";

/// Products of a category, by category id.
pub const GET_COLLECTION_PRODUCTS: &str = r"
    query GetCollectionProducts($id: ID!) {
        productCategory(id: $id) {
            products {
                nodes {
                    id
                    name
                    slug
                    price
                    image {
                        sourceUrl
                    }
                }
            }
        }
    }
";

/// Navigation menu items by menu id.
pub const GET_MENU: &str = r"
    query GetMenu($id: ID!) {
        menu(id: $id) {
            menuItems {
                nodes {
                    label
                    url
                }
            }
        }
    }
";

/// Static page by slug.
pub const GET_PAGE: &str = r"
    query GetPage($slug: String!) {
        page(where: { slug: $slug }) {
            title
            description: excerpt
        }
    }
";
