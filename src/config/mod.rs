//! Configuration types for the Lemon Squeezy API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Lemon Squeezy.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Config`]: The main configuration struct holding all SDK settings
//! - [`ConfigBuilder`]: A builder for constructing [`Config`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`BaseUrl`]: A validated API endpoint URL
//!
//! # Example
//!
//! ```rust
//! use lemonsqueezy::{Config, ApiToken};
//!
//! let config = Config::builder()
//!     .api_token(ApiToken::new("my-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.lemonsqueezy.com/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl};

use crate::error::ConfigError;

/// Configuration for the Lemon Squeezy API SDK.
///
/// This struct holds all configuration needed for SDK operations: the API
/// token used as a bearer credential, the base endpoint URL, and optional
/// overrides for the user agent and the underlying HTTP client.
///
/// # Thread Safety
///
/// `Config` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy::{Config, ApiToken, BaseUrl};
///
/// let config = Config::builder()
///     .api_token(ApiToken::new("my-api-token").unwrap())
///     .base_url(BaseUrl::new("https://api.lemonsqueezy.test/v1").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    api_token: ApiToken,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl Config {
    /// Creates a new builder for constructing a `Config`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lemonsqueezy::{Config, ApiToken};
    ///
    /// let config = Config::builder()
    ///     .api_token(ApiToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the underlying HTTP client override, if configured.
    ///
    /// Timeouts, proxies, and connection pooling are configured on this
    /// client; the SDK adds no policy of its own.
    #[must_use]
    pub const fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }
}

// Verify Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
};

/// Builder for constructing [`Config`] instances.
///
/// This builder provides a fluent API for configuring the SDK. The only
/// required field is `api_token`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `base_url`: the production endpoint, `https://api.lemonsqueezy.com/v1`
/// - `user_agent_prefix`: `None`
/// - `http_client`: `None` (a default client is created)
///
/// # Example
///
/// ```rust
/// use lemonsqueezy::{Config, ApiToken, BaseUrl};
///
/// let config = Config::builder()
///     .api_token(ApiToken::new("token").unwrap())
///     .base_url(BaseUrl::new("http://127.0.0.1:8080").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_token: Option<ApiToken>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl ConfigBuilder {
    /// Creates a new builder with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Overrides the API base URL.
    ///
    /// Useful for pointing the SDK at a test server.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Overrides the underlying `reqwest` client.
    ///
    /// Use this to configure timeouts, proxies, or connection pooling.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`Config`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` was not set.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(Config {
            api_token,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            http_client: self.http_client,
        })
    }
}
