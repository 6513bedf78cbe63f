//! Resource trait for typed API operations.
//!
//! This module defines the [`Resource`] trait, the contract between a typed
//! attribute struct and the API. Implementors name their JSON:API type tag
//! and URL path and gain default `find()` and `all()` methods that run the
//! full pipeline: build request, perform one round trip, check the status,
//! decode the envelope, and verify the type tag.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use lemonsqueezy::rest::{Resource, PageParams, QueryParams};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Store {
//!     pub name: String,
//!     pub slug: String,
//! }
//!
//! impl Resource for Store {
//!     const KIND: &'static str = "stores";
//!     const PATH: &'static str = "stores";
//!     type ListParams = PageParams;
//! }
//!
//! // Usage:
//! let store = Store::find(&client, "1").await?;
//! let stores = Store::all(&client, None).await?;
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::HttpResponse;
use crate::jsonapi::{self, ApiResponse, ApiResponseList};
use crate::rest::{ApiError, Error, ResourceResponse};
use crate::Client;

/// Parameters that can be rendered as JSON:API query parameters.
///
/// JSON:API uses bracketed parameter names (`page[number]`,
/// `filter[store_id]`); implementors produce the flat key/value map the
/// transport appends to the URL.
pub trait QueryParams {
    /// Renders the parameters as query key/value pairs.
    fn to_query(&self) -> HashMap<String, String>;
}

/// No parameters. For resources whose list endpoint takes only pagination,
/// use [`PageParams`] instead.
impl QueryParams for () {
    fn to_query(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

/// Page-based pagination parameters (`page[number]`, `page[size]`).
///
/// # Example
///
/// ```rust
/// use lemonsqueezy::rest::{PageParams, QueryParams};
///
/// let params = PageParams { number: Some(2), size: Some(50) };
/// let query = params.to_query();
/// assert_eq!(query.get("page[number]"), Some(&"2".to_string()));
/// assert_eq!(query.get("page[size]"), Some(&"50".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    /// The page number to fetch (1-based).
    pub number: Option<u64>,
    /// The number of records per page.
    pub size: Option<u64>,
}

impl PageParams {
    /// Inserts the pagination parameters into an existing query map.
    ///
    /// Useful for `ListParams` types that combine filters with pagination.
    pub fn apply(&self, query: &mut HashMap<String, String>) {
        if let Some(number) = self.number {
            query.insert("page[number]".to_string(), number.to_string());
        }
        if let Some(size) = self.size {
            query.insert("page[size]".to_string(), size.to_string());
        }
    }
}

impl QueryParams for PageParams {
    fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        self.apply(&mut query);
        query
    }
}

/// A typed API resource.
///
/// Implementors provide the JSON:API type tag and URL path; the trait
/// provides `find()` and `all()` plus the decode helpers that mutation
/// methods on concrete resources reuse.
///
/// # Associated Items
///
/// - `KIND`: the JSON:API type tag (e.g., `"subscriptions"`). Every decoded
///   document is checked against it.
/// - `PATH`: the URL path segment (e.g., `"subscriptions"`).
/// - `ListParams`: query parameters accepted by the list endpoint. Use
///   [`PageParams`] for plain pagination or `()` for none.
#[allow(async_fn_in_trait)]
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The JSON:API type tag for this resource.
    const KIND: &'static str;

    /// The URL path segment for this resource.
    const PATH: &'static str;

    /// Query parameters accepted by the list endpoint.
    type ListParams: QueryParams + Send + Sync;

    /// Fetches a single resource by ID.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] when no response was obtained
    /// - [`Error::Api`] when the API answered with a non-2xx status
    ///   (including 404 for an unknown ID)
    /// - [`Error::Decode`] when the body did not match the envelope or
    ///   carried the wrong type tag
    async fn find(
        client: &Client,
        id: &str,
    ) -> Result<ResourceResponse<ApiResponse<Self>>, Error> {
        let path = format!("{}/{id}", Self::PATH);
        let response = client.get(&path, None).await?;
        Self::decode_single(&response)
    }

    /// Lists resources, optionally filtered and paginated.
    ///
    /// Returns one page; pagination counters are in `meta.page` and the
    /// page URLs in `links`.
    ///
    /// # Errors
    ///
    /// Same classification as [`find`](Resource::find).
    async fn all(
        client: &Client,
        params: Option<Self::ListParams>,
    ) -> Result<ResourceResponse<ApiResponseList<Self>>, Error> {
        let query = params
            .map(|p| p.to_query())
            .filter(|q| !q.is_empty());
        let response = client.get(Self::PATH, query).await?;
        Self::decode_list(&response)
    }

    /// Interprets an HTTP response as a single-resource envelope.
    ///
    /// Non-2xx statuses become [`Error::Api`]; the type tag of a decoded
    /// document is verified against [`KIND`](Resource::KIND).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] or [`Error::Decode`] as described above.
    fn decode_single(
        response: &HttpResponse,
    ) -> Result<ResourceResponse<ApiResponse<Self>>, Error> {
        if !response.is_ok() {
            return Err(ApiError::from_response(response).into());
        }

        let envelope = jsonapi::from_slice::<Self>(&response.body)?;
        envelope.verify_kind(Self::KIND)?;
        Ok(ResourceResponse::new(envelope, response))
    }

    /// Interprets an HTTP response as a collection envelope.
    ///
    /// # Errors
    ///
    /// Same classification as [`decode_single`](Resource::decode_single).
    fn decode_list(
        response: &HttpResponse,
    ) -> Result<ResourceResponse<ApiResponseList<Self>>, Error> {
        if !response.is_ok() {
            return Err(ApiError::from_response(response).into());
        }

        let envelope = jsonapi::from_slice_list::<Self>(&response.body)?;
        envelope.verify_kind(Self::KIND)?;
        Ok(ResourceResponse::new(envelope, response))
    }
}
