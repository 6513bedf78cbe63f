//! HTTP response types for the Lemon Squeezy API SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! accessing raw API response data. The transport layer never interprets
//! the payload; it hands the raw bytes and status metadata to the caller.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// Lemon Squeezy allows a fixed number of API requests per minute and
/// reports the window size and remaining allowance on every response.
/// The SDK only surfaces these values for diagnostics; it never throttles.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy::clients::RateLimit;
///
/// let limit = RateLimit { limit: 300, remaining: 299 };
/// assert_eq!(limit.limit - limit.remaining, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The maximum number of requests allowed in the current window.
    pub limit: u32,
    /// The number of requests remaining in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses rate limit information from response headers.
    ///
    /// Returns `None` unless both `x-ratelimit-limit` and
    /// `x-ratelimit-remaining` are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first_u32 = |name: &str| -> Option<u32> {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.parse().ok())
        };

        Some(Self {
            limit: first_u32("x-ratelimit-limit")?,
            remaining: first_u32("x-ratelimit-remaining")?,
        })
    }
}

/// A raw HTTP response from the Lemon Squeezy API.
///
/// Contains the response status code, headers, and unparsed body bytes.
/// Interpretation of the payload (envelope decoding, error mapping) is the
/// caller's job; this type only carries what came over the wire.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers (headers may have multiple values), keys lowercased.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw, unparsed response body.
    pub body: Vec<u8>,
    /// Rate limit information (from `X-RateLimit-*` headers).
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);
        Self {
            status,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the body as a UTF-8 string, replacing invalid sequences.
    ///
    /// Useful for diagnostics; decoding should go through the typed
    /// envelope decoder instead.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
