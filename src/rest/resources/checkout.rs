//! The checkout resource.
//!
//! Checkouts are custom checkout pages created via the API. Creating one
//! requires `store` and `variant` relationships alongside the attributes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::jsonapi::{ApiResponse, DecodeError};
use crate::rest::{Error, PageParams, QueryParams, Resource, ResourceResponse};
use crate::Client;

/// Attributes of a checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    /// The ID of the store this checkout belongs to.
    pub store_id: u64,
    /// The ID of the variant being sold.
    pub variant_id: u64,
    /// Custom price in cents, overriding the variant price; `None` to use
    /// the variant price.
    #[serde(default)]
    pub custom_price: Option<i64>,
    /// When the checkout expires; `None` for no expiry.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// The unique URL of the checkout page.
    pub url: String,
    /// When the checkout was created.
    pub created_at: DateTime<Utc>,
    /// When the checkout was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether this checkout was created in test mode.
    pub test_mode: bool,
}

/// Filters and pagination for listing checkouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutListParams {
    /// Only return checkouts belonging to this store.
    pub store_id: Option<u64>,
    /// Only return checkouts for this variant.
    pub variant_id: Option<u64>,
    /// Page-based pagination.
    pub page: PageParams,
}

impl QueryParams for CheckoutListParams {
    fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(store_id) = self.store_id {
            query.insert("filter[store_id]".to_string(), store_id.to_string());
        }
        if let Some(variant_id) = self.variant_id {
            query.insert("filter[variant_id]".to_string(), variant_id.to_string());
        }
        self.page.apply(&mut query);
        query
    }
}

impl Resource for Checkout {
    const KIND: &'static str = "checkouts";
    const PATH: &'static str = "checkouts";
    type ListParams = CheckoutListParams;
}

/// Attributes for creating a checkout.
///
/// Unset fields are omitted, leaving the API defaults in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckoutCreateAttributes {
    /// Custom price in cents, overriding the variant price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_price: Option<i64>,

    /// When the checkout should expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Checkout {
    /// Creates a checkout for a variant in a store.
    ///
    /// Sends a JSON:API create document with the attributes plus the
    /// required `store` and `variant` relationships.
    ///
    /// # Errors
    ///
    /// Same classification as [`Resource::find`].
    pub async fn create(
        client: &Client,
        store_id: u64,
        variant_id: u64,
        attributes: &CheckoutCreateAttributes,
    ) -> Result<ResourceResponse<ApiResponse<Self>>, Error> {
        let attributes = serde_json::to_value(attributes).map_err(DecodeError::from)?;
        let body = json!({
            "data": {
                "type": Self::KIND,
                "attributes": attributes,
                "relationships": {
                    "store": {
                        "data": {"type": "stores", "id": store_id.to_string()}
                    },
                    "variant": {
                        "data": {"type": "variants", "id": variant_id.to_string()}
                    }
                }
            }
        });

        let response = client.post(Self::PATH, body).await?;
        Self::decode_single(&response)
    }
}
