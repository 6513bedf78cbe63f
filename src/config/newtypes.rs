//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Lemon Squeezy API token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `ApiToken(*****)` instead of the actual credential.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy::ApiToken;
///
/// let token = ApiToken::new("my-api-token").unwrap();
/// assert_eq!(token.as_ref(), "my-api-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated API base URL.
///
/// This newtype validates that the URL carries an http(s) scheme and
/// normalizes it by stripping trailing slashes, so request paths can be
/// appended with a single separator.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy::BaseUrl;
///
/// let url = BaseUrl::new("https://api.lemonsqueezy.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.lemonsqueezy.com/v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production Lemon Squeezy API endpoint.
    pub const PRODUCTION: &'static str = "https://api.lemonsqueezy.com/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty or does
    /// not start with `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        if !trimmed.starts_with("https://") && !trimmed.starts_with("http://") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        // Trailing-slash stripping reduces a bare scheme to "https:"
        let normalized = trimmed.trim_end_matches('/');
        if normalized == "https:" || normalized == "http:" {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(normalized.to_string()))
    }

    /// Returns the default production endpoint.
    #[must_use]
    pub fn production() -> Self {
        Self(Self::PRODUCTION.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::production()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_accepts_non_empty() {
        let token = ApiToken::new("secret-token").unwrap();
        assert_eq!(token.as_ref(), "secret-token");
    }

    #[test]
    fn test_api_token_rejects_empty() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_token_debug_is_masked() {
        let token = ApiToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "ApiToken(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_base_url_accepts_https() {
        let url = BaseUrl::new("https://api.lemonsqueezy.com/v1").unwrap();
        assert_eq!(url.as_ref(), "https://api.lemonsqueezy.com/v1");
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("https://api.lemonsqueezy.com/v1///").unwrap();
        assert_eq!(url.as_ref(), "https://api.lemonsqueezy.com/v1");
    }

    #[test]
    fn test_base_url_accepts_http_for_local_servers() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        let result = BaseUrl::new("api.lemonsqueezy.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_rejects_scheme_only() {
        for url in ["https://", "http://", "https:///"] {
            let result = BaseUrl::new(url);
            assert!(
                matches!(result, Err(ConfigError::InvalidBaseUrl { .. })),
                "expected '{url}' to be rejected"
            );
        }
    }

    #[test]
    fn test_base_url_default_is_production() {
        assert_eq!(BaseUrl::default().as_ref(), BaseUrl::PRODUCTION);
    }
}
