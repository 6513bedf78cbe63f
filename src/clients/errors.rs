//! Transport-level error types for the Lemon Squeezy API SDK.
//!
//! This module contains error types for the HTTP transport: request
//! validation failures and network-level failures. HTTP responses with
//! error status codes are *not* transport errors — the transport returns
//! them as [`HttpResponse`](crate::clients::HttpResponse) values and leaves
//! interpretation to the resource layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemonsqueezy::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("status: {}", response.status),
//!     Err(HttpError::Network(e)) => println!("could not reach server: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("invalid request: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before sending.
///
/// # Example
///
/// ```rust
/// use lemonsqueezy::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// println!("{}", error); // "Cannot use post without specifying data."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot use {method} with a request body.")]
    UnexpectedBody {
        /// The HTTP method that forbids a body.
        method: String,
    },
}

/// Unified error type for the HTTP transport.
///
/// A value of this type means no usable HTTP response was obtained:
/// either the request was rejected before sending, or the network call
/// itself failed (DNS, connection refused, timeout, cancellation).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error; the request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_unexpected_body() {
        let error = InvalidHttpRequestError::UnexpectedBody {
            method: "delete".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use delete with a request body.");
    }

    #[test]
    fn test_invalid_request_error_empty_path() {
        let error = InvalidHttpRequestError::EmptyPath;
        assert_eq!(error.to_string(), "Request path cannot be empty.");
    }

    #[test]
    fn test_http_error_wraps_invalid_request() {
        let error: HttpError = InvalidHttpRequestError::EmptyPath.into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _ = invalid_error;

        let http_error: &dyn std::error::Error =
            &HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath);
        let _ = http_error;
    }
}
