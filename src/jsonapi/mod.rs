//! Generic JSON:API response envelope and decoder.
//!
//! Every Lemon Squeezy response wraps its payload in a JSON:API document:
//! spec-version metadata, top-level links, and a `data` block carrying the
//! resource's type tag, ID, attributes, relationships, and links. This
//! module provides the typed envelope ([`ApiResponse`] for single resources,
//! [`ApiResponseList`] for collections) and the decoder that parses raw
//! bytes into it.
//!
//! The decoder is stateless: decoding the same bytes twice yields
//! structurally equal values. Unknown fields are tolerated for forward
//! compatibility, but missing structural fields (`data`, `type`, `id`)
//! are an error — never silently defaulted.
//!
//! # Example
//!
//! ```rust
//! use lemonsqueezy::jsonapi;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Widget { name: String }
//!
//! let raw = br#"{
//!     "jsonapi": {"version": "1.0"},
//!     "links": {"self": "https://api.lemonsqueezy.com/v1/widgets/1"},
//!     "data": {
//!         "type": "widgets",
//!         "id": "1",
//!         "attributes": {"name": "gear"}
//!     }
//! }"#;
//!
//! let envelope = jsonapi::from_slice::<Widget>(raw).unwrap();
//! envelope.verify_kind("widgets").unwrap();
//! assert_eq!(envelope.data.attributes.name, "gear");
//! ```

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when a response body cannot be decoded into the
/// expected envelope shape.
///
/// A value of this type signals a contract mismatch between the expected
/// and actual response — distinct from transport failures and from HTTP
/// error statuses.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body was not valid JSON, or a structural field was missing.
    #[error("malformed JSON:API document: {0}")]
    Json(#[from] serde_json::Error),

    /// The resource type tag did not match the expected resource.
    ///
    /// Enforced at the decode boundary to catch API drift early.
    #[error("resource type mismatch: expected '{expected}', got '{actual}'")]
    KindMismatch {
        /// The resource type tag the caller asked for.
        expected: String,
        /// The type tag actually present in the document.
        actual: String,
    },
}

/// JSON:API spec-version metadata (`{"version": "1.0"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonApi {
    /// The JSON:API specification version.
    #[serde(default)]
    pub version: String,
}

/// Top-level document links: `self` for single resources, plus
/// pagination cursors for collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLinks {
    /// URL of the document itself.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// URL of the first page (list documents).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    /// URL of the last page (list documents).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,

    /// URL of the next page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// URL of the previous page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Links attached to a single resource or relationship: the resource's
/// own URL and the URL of the related resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    /// URL of the resource or relationship itself.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// URL of the related resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
}

/// A named reference from one resource to another, expressed as URLs
/// rather than embedded data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The link-set for this relationship.
    #[serde(default)]
    pub links: ResourceLinks,
}

/// Mapping from relation name (e.g., `"store"`, `"order-item"`) to its
/// link-set. A `BTreeMap` keeps iteration deterministic.
pub type Relationships = BTreeMap<String, Relationship>;

/// Pagination counters carried in list documents.
///
/// Served in camelCase on the wire (`currentPage`, `perPage`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// The current page number (1-based).
    pub current_page: u64,
    /// Index of the first record on this page.
    pub from: u64,
    /// The number of the last page.
    pub last_page: u64,
    /// Records per page.
    pub per_page: u64,
    /// Index of the last record on this page.
    pub to: u64,
    /// Total number of records across all pages.
    pub total: u64,
}

/// Top-level document metadata. List endpoints carry pagination counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Pagination counters, present on list documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
}

/// A single resource inside a JSON:API document.
///
/// Wraps the typed attribute payload `T` together with the resource's
/// type tag, ID, relationships, and links. The `type` and `id` fields
/// are structural: a document without them fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponseData<T> {
    /// The resource type tag (e.g., `"subscriptions"`).
    #[serde(rename = "type")]
    pub kind: String,

    /// The resource ID, unique per resource type.
    pub id: String,

    /// The typed attribute payload.
    pub attributes: T,

    /// Named links to related resources.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: Relationships,

    /// Links for this resource.
    #[serde(default)]
    pub links: ResourceLinks,
}

/// The generic JSON:API envelope for a single resource.
///
/// Immutable once constructed; one value per HTTP response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// JSON:API spec-version metadata.
    #[serde(default)]
    pub jsonapi: JsonApi,

    /// Top-level document links.
    #[serde(default)]
    pub links: DocumentLinks,

    /// The wrapped resource.
    pub data: ApiResponseData<T>,

    /// Document metadata, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// The generic JSON:API envelope for a collection of resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponseList<T> {
    /// JSON:API spec-version metadata.
    #[serde(default)]
    pub jsonapi: JsonApi,

    /// Top-level document links, including pagination cursors.
    #[serde(default)]
    pub links: DocumentLinks,

    /// The wrapped resources.
    pub data: Vec<ApiResponseData<T>>,

    /// Document metadata; list endpoints carry pagination counters here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> ApiResponse<T> {
    /// Verifies that the document's type tag matches the expected resource.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::KindMismatch`] when `data.type` differs from
    /// `expected`.
    pub fn verify_kind(&self, expected: &str) -> Result<(), DecodeError> {
        if self.data.kind == expected {
            Ok(())
        } else {
            Err(DecodeError::KindMismatch {
                expected: expected.to_string(),
                actual: self.data.kind.clone(),
            })
        }
    }
}

impl<T> ApiResponseList<T> {
    /// Verifies that every resource in the document matches the expected
    /// type tag.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::KindMismatch`] for the first mismatching item.
    pub fn verify_kind(&self, expected: &str) -> Result<(), DecodeError> {
        for item in &self.data {
            if item.kind != expected {
                return Err(DecodeError::KindMismatch {
                    expected: expected.to_string(),
                    actual: item.kind.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Decodes raw bytes into a single-resource envelope.
///
/// Fields absent from `T` are tolerated (forward compatibility); missing
/// structural fields (`data`, `type`, `id`) are an error.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] for malformed JSON or a document that
/// does not match the envelope shape.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<ApiResponse<T>, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decodes raw bytes into a collection envelope.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] for malformed JSON or a document that
/// does not match the envelope shape.
pub fn from_slice_list<T: DeserializeOwned>(
    bytes: &[u8],
) -> Result<ApiResponseList<T>, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}
