//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `WP_GRAPHQL_ENDPOINT` - WPGraphQL endpoint URL of the WordPress/
//!   WooCommerce backend (e.g., `https://shop.example.com/graphql`)
//!
//! ## Optional
//! - `WP_GRAPHQL_TIMEOUT_SECS` - HTTP request timeout in seconds
//!   (default: 30)

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront data-layer configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// WPGraphQL endpoint URL.
    pub graphql_endpoint: String,
    /// HTTP request timeout applied at client construction.
    pub request_timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let graphql_endpoint = get_required_env("WP_GRAPHQL_ENDPOINT")?;
        validate_endpoint(&graphql_endpoint, "WP_GRAPHQL_ENDPOINT")?;

        let timeout_secs = get_env_or_default(
            "WP_GRAPHQL_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("WP_GRAPHQL_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            graphql_endpoint,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that an endpoint is an absolute http(s) URL.
fn validate_endpoint(value: &str, var_name: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_accepts_https() {
        assert!(validate_endpoint("https://shop.example.com/graphql", "TEST").is_ok());
    }

    #[test]
    fn test_validate_endpoint_accepts_http() {
        assert!(validate_endpoint("http://localhost:8080/graphql", "TEST").is_ok());
    }

    #[test]
    fn test_validate_endpoint_rejects_relative() {
        let result = validate_endpoint("/graphql", "TEST");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_validate_endpoint_rejects_other_schemes() {
        let result = validate_endpoint("ftp://shop.example.com/graphql", "TEST");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("WP_GRAPHQL_ENDPOINT".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: WP_GRAPHQL_ENDPOINT"
        );
    }
}
