//! Error types for resource operations.
//!
//! Resource operations distinguish three failure kinds:
//!
//! - [`Error::Http`] — no usable response was obtained (validation or
//!   network failure)
//! - [`Error::Api`] — the API answered with a non-2xx status
//! - [`Error::Decode`] — the body of a successful response did not match
//!   the expected envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use lemonsqueezy::rest::{Resource, Error};
//! use lemonsqueezy::resources::Subscription;
//!
//! match Subscription::find(&client, "1").await {
//!     Ok(response) => println!("status: {}", response.data.attributes.status),
//!     Err(Error::Api(e)) => println!("API rejected the request: {e}"),
//!     Err(Error::Http(e)) => println!("could not reach the API: {e}"),
//!     Err(Error::Decode(e)) => println!("unexpected response shape: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{HttpError, HttpResponse, InvalidHttpRequestError};
use crate::jsonapi::DecodeError;

/// A single error object from a JSON:API error document.
///
/// All fields are strings per the JSON:API error object format
/// (`"status": "404"`), and all are optional — the API is not obliged
/// to fill every one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorObject {
    /// The HTTP status code, as a string.
    #[serde(default)]
    pub status: Option<String>,

    /// A short, human-readable summary of the problem.
    #[serde(default)]
    pub title: Option<String>,

    /// A detailed explanation specific to this occurrence.
    #[serde(default)]
    pub detail: Option<String>,
}

/// The API answered with a non-2xx status code.
///
/// Carries the parsed JSON:API error objects when the body contained a
/// well-formed error document, and always carries the raw body and the
/// `X-Request-Id` for debugging. An unparseable (or empty) error body is
/// not itself an error — `errors` is simply left empty.
#[derive(Debug, Error)]
#[error("api request failed with status {status}: {}", summarize(.errors, .body))]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,

    /// Parsed JSON:API error objects, empty when the body was not a
    /// well-formed error document.
    pub errors: Vec<ErrorObject>,

    /// The raw response body, lossily decoded as UTF-8.
    pub body: String,

    /// The `X-Request-Id` header value, if present.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from a non-2xx HTTP response.
    ///
    /// The body is parsed as a JSON:API error document on a best-effort
    /// basis; anything unparseable yields an empty `errors` list.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        #[derive(Deserialize)]
        struct ErrorDocument {
            #[serde(default)]
            errors: Vec<ErrorObject>,
        }

        let errors = serde_json::from_slice::<ErrorDocument>(&response.body)
            .map(|doc| doc.errors)
            .unwrap_or_default();

        tracing::warn!(
            status = response.status,
            request_id = ?response.request_id(),
            error_count = errors.len(),
            "api request failed"
        );

        Self {
            status: response.status,
            errors,
            body: response.text(),
            request_id: response.request_id().map(ToString::to_string),
        }
    }
}

/// Summary line for `Display`: the first error's title/detail, or a body
/// snippet when no error objects were parsed.
fn summarize(errors: &[ErrorObject], body: &str) -> String {
    if let Some(first) = errors.first() {
        match (&first.title, &first.detail) {
            (Some(title), Some(detail)) => format!("{title}: {detail}"),
            (Some(title), None) => title.clone(),
            (None, Some(detail)) => detail.clone(),
            (None, None) => body.chars().take(120).collect(),
        }
    } else if body.is_empty() {
        "empty response body".to_string()
    } else {
        body.chars().take(120).collect()
    }
}

/// Unified error type for resource operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure: request validation or network error.
    /// No HTTP response was obtained.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response carried a body that did not match the
    /// expected envelope shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<InvalidHttpRequestError> for Error {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

impl Error {
    /// Returns the `X-Request-Id` associated with this error, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api(e) => e.request_id.as_deref(),
            _ => None,
        }
    }
}

// Verify Error is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};
