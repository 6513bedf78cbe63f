//! The variant resource.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{PageParams, QueryParams, Resource};

/// Attributes of a product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// The ID of the product this variant belongs to.
    pub product_id: u64,
    /// The name of the variant.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// HTML description.
    #[serde(default)]
    pub description: Option<String>,
    /// The price in cents.
    pub price: i64,
    /// Whether this variant is a subscription.
    pub is_subscription: bool,
    /// Billing interval (`day`, `week`, `month`, `year`); `None` for
    /// one-time purchases.
    #[serde(default)]
    pub interval: Option<String>,
    /// Number of intervals between renewals; `None` for one-time purchases.
    #[serde(default)]
    pub interval_count: Option<u32>,
    /// Whether the variant offers a free trial.
    pub has_free_trial: bool,
    /// Trial interval unit.
    #[serde(default)]
    pub trial_interval: Option<String>,
    /// Number of trial intervals.
    #[serde(default)]
    pub trial_interval_count: Option<u32>,
    /// Whether the variant uses pay-what-you-want pricing.
    pub pay_what_you_want: bool,
    /// Minimum price in cents for pay-what-you-want.
    pub min_price: i64,
    /// Suggested price in cents for pay-what-you-want.
    pub suggested_price: i64,
    /// The status: `pending`, `draft`, or `published`.
    pub status: String,
    /// The status, formatted for display.
    pub status_formatted: String,
    /// When the variant was created.
    pub created_at: DateTime<Utc>,
    /// When the variant was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether this variant was created in test mode.
    pub test_mode: bool,
}

/// Filters and pagination for listing variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantListParams {
    /// Only return variants belonging to this product.
    pub product_id: Option<u64>,
    /// Page-based pagination.
    pub page: PageParams,
}

impl QueryParams for VariantListParams {
    fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(product_id) = self.product_id {
            query.insert("filter[product_id]".to_string(), product_id.to_string());
        }
        self.page.apply(&mut query);
        query
    }
}

impl Resource for Variant {
    const KIND: &'static str = "variants";
    const PATH: &'static str = "variants";
    type ListParams = VariantListParams;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponse;

    const VARIANT_DOC: &str = r#"{
        "jsonapi": {"version": "1.0"},
        "links": {"self": "https://api.lemonsqueezy.com/v1/variants/1"},
        "data": {
            "type": "variants",
            "id": "1",
            "attributes": {
                "product_id": 1,
                "name": "Example Variant",
                "slug": "46beb127-9785-4j55-40k8-c6a1dcbe1c10",
                "description": null,
                "price": 999,
                "is_subscription": true,
                "interval": "month",
                "interval_count": 1,
                "has_free_trial": false,
                "trial_interval": null,
                "trial_interval_count": null,
                "pay_what_you_want": false,
                "min_price": 0,
                "suggested_price": 0,
                "status": "published",
                "status_formatted": "Published",
                "created_at": "2021-05-27T12:54:47.000000Z",
                "updated_at": "2021-07-14T11:25:24.000000Z",
                "test_mode": false
            }
        }
    }"#;

    #[test]
    fn test_decodes_subscription_variant() {
        let response = HttpResponse::new(200, HashMap::new(), VARIANT_DOC.as_bytes().to_vec());
        let decoded = Variant::decode_single(&response).unwrap();

        let variant = &decoded.data.attributes;
        assert!(variant.is_subscription);
        assert_eq!(variant.interval.as_deref(), Some("month"));
        assert_eq!(variant.interval_count, Some(1));
        assert_eq!(variant.trial_interval, None);
    }

    #[test]
    fn test_list_params_render_product_filter() {
        let params = VariantListParams {
            product_id: Some(3),
            page: PageParams {
                number: Some(1),
                size: Some(10),
            },
        };
        let query = params.to_query();

        assert_eq!(query.get("filter[product_id]"), Some(&"3".to_string()));
        assert_eq!(query.get("page[size]"), Some(&"10".to_string()));
    }
}
