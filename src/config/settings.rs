//! Client configuration.
//!
//! The backend endpoint is injected into the HTTP adapter at construction;
//! nothing in the crate reads a module-level endpoint.

use std::env;

use super::constants::DEFAULT_ENDPOINT;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: String,
}

impl Config {
    /// Create a configuration pointing at an explicit backend endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `BACKEND_ENDPOINT`, falling back to the default endpoint.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let endpoint = env::var("BACKEND_ENDPOINT").unwrap_or_else(|_| {
            tracing::debug!("BACKEND_ENDPOINT not set, using default endpoint");
            DEFAULT_ENDPOINT.to_string()
        });

        Self { endpoint }
    }

    /// The configured backend endpoint, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    /// Build a full URL for a backend path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint(), path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
