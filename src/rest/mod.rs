//! Typed resource layer on top of the HTTP transport.
//!
//! This module turns raw [`HttpResponse`](crate::clients::HttpResponse)
//! values into typed results: the [`Resource`] trait runs the request
//! pipeline, [`ResourceResponse`] pairs the decoded envelope with response
//! metadata, and [`Error`] classifies failures into transport, API, and
//! decode kinds.
//!
//! Concrete resource types (subscriptions, orders, products, ...) live in
//! [`resources`].

mod errors;
mod resource;
mod response;

pub mod resources;

pub use errors::{ApiError, Error, ErrorObject};
pub use resource::{PageParams, QueryParams, Resource};
pub use response::ResourceResponse;
