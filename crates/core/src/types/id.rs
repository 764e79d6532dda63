//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. WPGraphQL hands out
//! opaque base64-ish global IDs, so the wrapped value is a `String` that is
//! stored and replayed, never parsed.
//!
//! The cart API is the motivating case: lines are removed by their
//! cart-assigned [`LineItemId`], not by [`ProductId`], and the two must not
//! be interchangeable at compile time.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`/`From<&str>` and `From<Self> for String`
///
/// # Example
///
/// ```rust
/// # use hofladen_core::define_id;
/// define_id!(ProductId);
/// define_id!(LineItemId);
///
/// let product = ProductId::new("cHJvZHVjdDo0Mg==");
/// let line = LineItemId::new("Y2FydEl0ZW06MQ==");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = line;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::std::string::String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl ::std::convert::Into<::std::string::String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying `String`.
            #[must_use]
            pub fn into_inner(self) -> ::std::string::String {
                self.0
            }

            /// Whether the underlying string is empty.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(id: ::std::string::String) -> Self {
                Self(id)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(LineItemId);
define_id!(CollectionId);
define_id!(MenuId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        let id = ProductId::new("cHJvZHVjdDo0Mg==");
        assert_eq!(id.as_str(), "cHJvZHVjdDo0Mg==");
        assert_eq!(id.to_string(), "cHJvZHVjdDo0Mg==");
        assert_eq!(id.into_inner(), "cHJvZHVjdDo0Mg==");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = LineItemId::new("Y2FydEl0ZW06MQ==");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Y2FydEl0ZW06MQ==\"");

        let back: LineItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_is_empty() {
        assert!(MenuId::new("").is_empty());
        assert!(!MenuId::new("primary").is_empty());
    }

    #[test]
    fn test_id_from_conversions() {
        let a = CollectionId::from("kaffee");
        let b: CollectionId = String::from("kaffee").into();
        assert_eq!(a, b);
        assert_eq!(String::from(a), "kaffee");
    }
}
