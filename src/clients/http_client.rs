//! HTTP client for Lemon Squeezy API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Lemon Squeezy API. The client performs exactly one
//! network round trip per call: no retries, no caching, no throttling.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::Config;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The JSON:API media type used for all request and response bodies.
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// HTTP client for making requests to the Lemon Squeezy API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including `User-Agent`, `Authorization`, and the
///   JSON:API `Accept`/`Content-Type` pair
/// - Returning the raw response for *any* received status code —
///   interpretation belongs to the resource layer
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// Each call is an independent round trip with no shared mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use lemonsqueezy::{Config, ApiToken};
/// use lemonsqueezy::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = Config::builder()
///     .api_token(ApiToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "subscriptions/1")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.lemonsqueezy.com/v1`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// Uses the configured `reqwest` client override when present; timeouts
    /// and connection pooling are whatever that client was built with.
    ///
    /// # Panics
    ///
    /// Panics if no client override is configured and the default reqwest
    /// client cannot be created. This should only happen in extremely
    /// unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &Config) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Lemon Squeezy API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), JSON_API_CONTENT_TYPE.to_string());
        default_headers.insert(
            "Content-Type".to_string(),
            JSON_API_CONTENT_TYPE.to_string(),
        );
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_token().as_ref()),
        );

        let client = config.http_client().cloned().unwrap_or_else(|| {
            reqwest::Client::builder()
                .use_rustls_tls()
                .build()
                .expect("Failed to create HTTP client")
        });

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Lemon Squeezy API.
    ///
    /// Performs exactly one attempt. Any received response — including
    /// 4xx and 5xx — is returned as an [`HttpResponse`] with its raw body
    /// and status, without interpretation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only when no usable response was obtained:
    /// - Request validation fails (`InvalidRequest`)
    /// - The network call fails — DNS, connection refused, timeout, or
    ///   cancellation (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let path = request.path.trim_start_matches('/');
        let url = format!("{}/{}", self.base_url, path);

        tracing::debug!(method = %request.http_method, %url, "dispatching request");

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        // Send request — single attempt, no retry loop
        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        // A failure while reading the body is a network error, not an
        // empty-body success
        let body = res.bytes().await?.to_vec();

        Ok(HttpResponse::new(status, res_headers, body))
    }

    /// Parses response headers into a `HashMap` with lowercased keys.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
