//! WPGraphQL HTTP executor.

use std::sync::Arc;

use graphql_client::Response;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::StorefrontConfig;

use super::{GraphqlError, GraphqlErrorLocation, WooError};

/// Client for the WPGraphQL endpoint of the WooCommerce backend.
///
/// Cheaply cloneable; all clones share one `reqwest::Client`. The client
/// holds no state beyond the endpoint - carts live server-side and are
/// addressed by token.
#[derive(Clone)]
pub struct WooClient {
    inner: Arc<WooClientInner>,
}

struct WooClientInner {
    client: reqwest::Client,
    endpoint: String,
}

impl WooClient {
    /// Create a new WPGraphQL client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never happen
    /// under normal circumstances as we use standard TLS configuration.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            inner: Arc::new(WooClientInner {
                client,
                endpoint: config.graphql_endpoint.clone(),
            }),
        }
    }

    /// Execute a GraphQL document against the backend.
    ///
    /// Sends `{query, variables}` as a JSON POST body. The only header the
    /// contract requires is `Content-Type: application/json`; WPGraphQL
    /// carts need no authentication.
    ///
    /// # Errors
    ///
    /// Returns `WooError::Http` on network failures, `WooError::Status` on
    /// non-success responses, `WooError::Parse` when the body does not
    /// decode, `WooError::GraphQl` when the response carries an errors
    /// array, and `WooError::MissingData` when neither data nor errors are
    /// present.
    #[instrument(skip(self, document, variables))]
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<T, WooError> {
        let body = serde_json::json!({
            "query": document,
            "variables": variables,
        });

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "WPGraphQL returned non-success status"
            );
            return Err(WooError::Status(status));
        }

        let envelope: Response<T> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse WPGraphQL response"
                );
                return Err(WooError::Parse(e));
            }
        };

        if let Some(errors) = envelope.errors
            && !errors.is_empty()
        {
            tracing::debug!(errors = ?errors, "GraphQL errors in response");

            return Err(WooError::GraphQl(
                errors.into_iter().map(convert_graphql_error).collect(),
            ));
        }

        envelope.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "WPGraphQL response has no data and no errors"
            );
            WooError::MissingData("data")
        })
    }
}

fn convert_graphql_error(e: graphql_client::Error) -> GraphqlError {
    GraphqlError {
        message: e.message,
        locations: e.locations.map_or_else(Vec::new, |locs| {
            locs.into_iter()
                .map(|l| GraphqlErrorLocation {
                    line: i64::from(l.line),
                    column: i64::from(l.column),
                })
                .collect()
        }),
        path: e.path.map_or_else(Vec::new, |p| {
            p.into_iter()
                .map(|fragment| match fragment {
                    graphql_client::PathFragment::Key(s) => serde_json::Value::String(s),
                    graphql_client::PathFragment::Index(i) => serde_json::Value::Number(i.into()),
                })
                .collect()
        }),
    }
}
