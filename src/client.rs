//! Top-level client handle for the Lemon Squeezy API.
//!
//! [`Client`] wraps the HTTP transport with method-named convenience calls.
//! It is the handle resource operations take; see the
//! [`Resource`](crate::rest::Resource) trait for the typed layer on top.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemonsqueezy::{ApiToken, Client, Config};
//! use lemonsqueezy::rest::Resource;
//! use lemonsqueezy::rest::resources::Subscription;
//!
//! let config = Config::builder()
//!     .api_token(ApiToken::new("token")?)
//!     .build()?;
//! let client = Client::new(&config);
//!
//! let subscription = Subscription::find(&client, "1").await?;
//! println!("{}", subscription.data.attributes.status);
//! ```

use std::collections::HashMap;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::Config;

/// Client for the Lemon Squeezy API.
///
/// Cheap to clone and safe to share across async tasks: each call is one
/// independent round trip with no shared mutable state.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP transport.
    http_client: HttpClient,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client from the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Performs a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response was obtained; any received
    /// response, whatever its status, is `Ok`.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.http_client.request(builder.build()?).await
    }

    /// Performs a POST request with a JSON:API document body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response was obtained.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build()?;
        self.http_client.request(request).await
    }

    /// Performs a PATCH request with a JSON:API document body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response was obtained.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Patch, path)
            .body(body)
            .build()?;
        self.http_client.request(request).await
    }

    /// Performs a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response was obtained.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.http_client.request(request).await
    }
}
