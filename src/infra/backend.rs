//! HTTP client adapter for the backend REST API.
//!
//! [`BackendApi`] is the seam the submission controllers depend on;
//! [`HttpBackend`] is the reqwest implementation. The endpoint comes from an
//! injected [`Config`], never from a global.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{Config, STATUS_OK};
use crate::domain::{Credentials, Product};
use crate::errors::{ApiError, ApiResult};

#[cfg(test)]
use mockall::automock;

/// Session returned by a successful login.
///
/// The token is handed back to the caller; persisting it is not this
/// crate's concern.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub username: String,
    pub balance: i64,
}

/// Structured error body the backend sends with 4xx rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct CheckoutPayload<'a> {
    address: &'a str,
}

/// Outbound operations against the backend.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `POST /auth/register`; returns the success status code.
    async fn register(&self, credentials: &Credentials) -> ApiResult<u16>;

    /// `POST /auth/login`; returns the authenticated session.
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthSession>;

    /// `POST /cart/checkout`; returns the success status code.
    async fn checkout(&self, address: &str) -> ApiResult<u16>;

    /// `GET /products`; returns the full catalog.
    async fn list_products(&self) -> ApiResult<Vec<Product>>;
}

/// Concrete adapter backed by a shared reqwest [`Client`].
pub struct HttpBackend {
    client: Client,
    config: Config,
}

impl HttpBackend {
    /// Create an adapter for the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create an adapter reusing an existing reqwest client.
    pub fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    async fn post_json<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<(u16, String)> {
        let url = self.config.url_for(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        Ok((status, text))
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn register(&self, credentials: &Credentials) -> ApiResult<u16> {
        let (status, body) = self.post_json("auth/register", credentials).await?;
        decode_status(status, &body)
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthSession> {
        let (status, body) = self.post_json("auth/login", credentials).await?;
        decode_json(status, &body, STATUS_OK)
    }

    async fn checkout(&self, address: &str) -> ApiResult<u16> {
        let payload = CheckoutPayload { address };
        let (status, body) = self.post_json("cart/checkout", &payload).await?;
        decode_status(status, &body)
    }

    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let url = self.config.url_for("products");
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_json(status, &body, STATUS_OK)
    }
}

/// Map a 4xx response to the error taxonomy.
///
/// A rejection without a parseable `{message}` body counts as a transport
/// failure, not a structured client error.
fn decode_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => {
            tracing::warn!(status, message = %err.message, "backend rejected request");
            ApiError::client_request(status, err.message)
        }
        Err(_) => ApiError::transport(format!("status {status} with a non-JSON body")),
    }
}

/// Classify a response that carries no payload the workflow needs.
fn decode_status(status: u16, body: &str) -> ApiResult<u16> {
    if (400..500).contains(&status) {
        Err(decode_error(status, body))
    } else if status >= 500 {
        Err(ApiError::UnexpectedStatus(status))
    } else {
        Ok(status)
    }
}

/// Classify a response and deserialize its payload on the expected status.
fn decode_json<T: DeserializeOwned>(status: u16, body: &str, expected: u16) -> ApiResult<T> {
    if (400..500).contains(&status) {
        return Err(decode_error(status, body));
    }
    if status != expected {
        return Err(ApiError::UnexpectedStatus(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::transport(format!("invalid JSON body: {e}")))
}
