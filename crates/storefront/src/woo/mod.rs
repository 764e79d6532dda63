//! WPGraphQL API client for the WooCommerce backend.
//!
//! # Architecture
//!
//! - Hand-written GraphQL documents in [`queries`], sent as HTTP POST
//!   `{query, variables}` bodies via `reqwest`
//! - Typed decode with `serde`; the `graphql_client` response envelope
//!   carries the `data`/`errors` split
//! - The backend is the source of truth - no local sync, no response cache
//!
//! Failure outcomes stay distinguishable: transport errors, non-success
//! statuses, undecodable bodies, GraphQL error arrays and missing `data`
//! fields each map to their own [`WooError`] variant, and "nothing found"
//! is `Ok(None)` / an empty `Vec`, never an error.

mod cart;
mod catalog;
mod client;

pub mod queries;

pub use catalog::GetProductsParams;
pub use client::WooClient;

use thiserror::Error;

/// Errors that can occur when talking to the WPGraphQL backend.
#[derive(Debug, Error)]
pub enum WooError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not decodable as the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQl(Vec<GraphqlError>),

    /// Response parsed but the expected field was absent.
    #[error("missing field in response: {0}")]
    MissingData(&'static str),
}

/// A GraphQL error returned by the backend.
#[derive(Debug, Clone)]
pub struct GraphqlError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphqlErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphqlErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphqlError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if let Some(loc) = e.locations.first() {
                parts.push(format!("at line {}:{}", loc.line, loc.column));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_woo_error_display() {
        let err = WooError::MissingData("cart");
        assert_eq!(err.to_string(), "missing field in response: cart");
    }

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphqlError {
                message: "Field not found".to_string(),
                locations: vec![],
                path: vec![],
            },
            GraphqlError {
                message: "Invalid ID".to_string(),
                locations: vec![],
                path: vec![],
            },
        ];
        let err = WooError::GraphQl(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Invalid ID"
        );
    }

    #[test]
    fn test_graphql_error_with_path_and_location() {
        let errors = vec![GraphqlError {
            message: String::new(),
            locations: vec![GraphqlErrorLocation { line: 5, column: 10 }],
            path: vec![
                serde_json::Value::String("cart".to_string()),
                serde_json::Value::Number(0.into()),
            ],
        }];
        let err = WooError::GraphQl(errors);
        assert_eq!(err.to_string(), "GraphQL errors: path: cart.0 at line 5:10");
    }

    #[test]
    fn test_graphql_error_no_details() {
        let errors = vec![GraphqlError {
            message: String::new(),
            locations: vec![],
            path: vec![],
        }];
        let err = WooError::GraphQl(errors);
        assert_eq!(err.to_string(), "GraphQL errors: [error 1]: (no details)");
    }

    #[test]
    fn test_graphql_error_empty_vec() {
        let err = WooError::GraphQl(vec![]);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: (no error details provided)"
        );
    }
}
