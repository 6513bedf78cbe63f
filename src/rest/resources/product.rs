//! The product resource.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{PageParams, QueryParams, Resource};

/// Attributes of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The ID of the store this product belongs to.
    pub store_id: u64,
    /// The name of the product.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// HTML description.
    #[serde(default)]
    pub description: Option<String>,
    /// The status: `draft` or `published`.
    pub status: String,
    /// The status, formatted for display.
    pub status_formatted: String,
    /// Thumbnail URL; `None` when no image was uploaded.
    #[serde(default)]
    pub thumb_url: Option<String>,
    /// Large thumbnail URL; `None` when no image was uploaded.
    #[serde(default)]
    pub large_thumb_url: Option<String>,
    /// The price of the cheapest variant, in cents.
    pub price: i64,
    /// The price, formatted for display.
    pub price_formatted: String,
    /// Lowest variant price in cents, when variants differ in price.
    #[serde(default)]
    pub from_price: Option<i64>,
    /// Highest variant price in cents, when variants differ in price.
    #[serde(default)]
    pub to_price: Option<i64>,
    /// Whether the product uses pay-what-you-want pricing.
    pub pay_what_you_want: bool,
    /// Pre-built checkout URL for this product.
    pub buy_now_url: String,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether this product was created in test mode.
    pub test_mode: bool,
}

/// Filters and pagination for listing products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Only return products belonging to this store.
    pub store_id: Option<u64>,
    /// Page-based pagination.
    pub page: PageParams,
}

impl QueryParams for ProductListParams {
    fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(store_id) = self.store_id {
            query.insert("filter[store_id]".to_string(), store_id.to_string());
        }
        self.page.apply(&mut query);
        query
    }
}

impl Resource for Product {
    const KIND: &'static str = "products";
    const PATH: &'static str = "products";
    type ListParams = ProductListParams;
}
