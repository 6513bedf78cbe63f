//! HTTP transport for the Lemon Squeezy API.
//!
//! This module contains the low-level transport: request construction,
//! raw response access, and the client that performs a single round trip
//! per call. The transport never interprets response payloads; envelope
//! decoding and error mapping live in [`crate::rest`] and [`crate::jsonapi`].

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, JSON_API_CONTENT_TYPE, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
