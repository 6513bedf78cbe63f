//! Response wrapper for resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines a
//! decoded envelope with metadata from the HTTP response: status code, rate
//! limit counters, request ID, and the raw body bytes. The wrapper
//! implements `Deref` for ergonomic access to the inner envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemonsqueezy::rest::Resource;
//! use lemonsqueezy::resources::Subscription;
//!
//! let response = Subscription::find(&client, "1").await?;
//!
//! // Envelope access via Deref
//! println!("status: {}", response.data.attributes.status);
//!
//! // Response metadata
//! assert_eq!(response.status(), 200);
//! if let Some(limit) = response.rate_limit() {
//!     println!("{} of {} requests remaining", limit.remaining, limit.limit);
//! }
//! ```

use std::ops::Deref;

use crate::clients::{HttpResponse, RateLimit};

/// A decoded resource response together with its HTTP metadata.
///
/// `T` is the decoded envelope type:
/// [`ApiResponse<A>`](crate::jsonapi::ApiResponse) for single resources,
/// [`ApiResponseList<A>`](crate::jsonapi::ApiResponseList) for collections.
///
/// Implements `Deref<Target = T>` so envelope fields can be accessed
/// directly through the wrapper.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    /// The decoded envelope.
    data: T,
    /// The HTTP status code of the response.
    status: u16,
    /// Rate limit counters from the `X-RateLimit-*` headers.
    rate_limit: Option<RateLimit>,
    /// Request ID from the `X-Request-Id` header.
    request_id: Option<String>,
    /// The raw, unparsed response body.
    raw_body: Vec<u8>,
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
};

impl<T> ResourceResponse<T> {
    /// Wraps a decoded envelope with metadata taken from the HTTP response.
    #[must_use]
    pub fn new(data: T, response: &HttpResponse) -> Self {
        Self {
            data,
            status: response.status,
            rate_limit: response.rate_limit,
            request_id: response.request_id().map(ToString::to_string),
            raw_body: response.body.clone(),
        }
    }

    /// Consumes the response and returns the decoded envelope.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the decoded envelope.
    ///
    /// In most cases `Deref` coercion makes this call unnecessary.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the HTTP status code of the response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the rate limit counters, when the headers were present.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the raw, unparsed response body.
    #[must_use]
    pub fn raw_body(&self) -> &[u8] {
        &self.raw_body
    }

    /// Maps the decoded envelope to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            status: self.status,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
            raw_body: self.raw_body,
        }
    }
}

/// Provides transparent access to the decoded envelope.
impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
