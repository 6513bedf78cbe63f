//! The order resource.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{PageParams, QueryParams, Resource};

/// Attributes of an order.
///
/// Monetary amounts are integers in the smallest currency unit (cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The ID of the store this order belongs to.
    pub store_id: u64,
    /// The ID of the customer this order belongs to.
    pub customer_id: u64,
    /// A UUID identifying this order.
    pub identifier: String,
    /// Sequential order number, unique per store.
    pub order_number: u64,
    /// The full name of the customer.
    pub user_name: String,
    /// The email address of the customer.
    pub user_email: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Exchange rate from the store currency at purchase time.
    pub currency_rate: String,
    /// Subtotal in cents.
    pub subtotal: i64,
    /// Total discount in cents.
    pub discount_total: i64,
    /// Tax in cents.
    pub tax: i64,
    /// Grand total in cents.
    pub total: i64,
    /// Subtotal, formatted for display.
    pub subtotal_formatted: String,
    /// Discount total, formatted for display.
    pub discount_total_formatted: String,
    /// Tax, formatted for display.
    pub tax_formatted: String,
    /// Total, formatted for display.
    pub total_formatted: String,
    /// The status: `pending`, `failed`, `paid`, or `refunded`.
    pub status: String,
    /// The status, formatted for display.
    pub status_formatted: String,
    /// Whether the order has been refunded.
    pub refunded: bool,
    /// When the order was refunded; `None` unless refunded.
    #[serde(default)]
    pub refunded_at: Option<DateTime<Utc>>,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether this order was created in test mode.
    pub test_mode: bool,
}

/// Filters and pagination for listing orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Only return orders belonging to this store.
    pub store_id: Option<u64>,
    /// Only return orders placed by this email address.
    pub user_email: Option<String>,
    /// Page-based pagination.
    pub page: PageParams,
}

impl QueryParams for OrderListParams {
    fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(store_id) = self.store_id {
            query.insert("filter[store_id]".to_string(), store_id.to_string());
        }
        if let Some(user_email) = &self.user_email {
            query.insert("filter[user_email]".to_string(), user_email.clone());
        }
        self.page.apply(&mut query);
        query
    }
}

impl Resource for Order {
    const KIND: &'static str = "orders";
    const PATH: &'static str = "orders";
    type ListParams = OrderListParams;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponse;

    const ORDER_DOC: &str = r#"{
        "jsonapi": {"version": "1.0"},
        "links": {"self": "https://api.lemonsqueezy.com/v1/orders/1"},
        "data": {
            "type": "orders",
            "id": "1",
            "attributes": {
                "store_id": 1,
                "customer_id": 1,
                "identifier": "104e18a2-d755-4d4b-80c4-a6c1dcbe1c10",
                "order_number": 1,
                "user_name": "Darlene Daugherty",
                "user_email": "gernser@yahoo.com",
                "currency": "USD",
                "currency_rate": "1.0000",
                "subtotal": 999,
                "discount_total": 0,
                "tax": 200,
                "total": 1199,
                "subtotal_formatted": "$9.99",
                "discount_total_formatted": "$0.00",
                "tax_formatted": "$2.00",
                "total_formatted": "$11.99",
                "status": "paid",
                "status_formatted": "Paid",
                "refunded": false,
                "refunded_at": null,
                "created_at": "2021-08-17T09:45:53.000000Z",
                "updated_at": "2021-08-17T09:45:53.000000Z",
                "test_mode": false
            }
        }
    }"#;

    #[test]
    fn test_decodes_order() {
        let response = HttpResponse::new(200, HashMap::new(), ORDER_DOC.as_bytes().to_vec());
        let decoded = Order::decode_single(&response).unwrap();

        let order = &decoded.data.attributes;
        assert_eq!(order.identifier, "104e18a2-d755-4d4b-80c4-a6c1dcbe1c10");
        assert_eq!(order.total, 1199);
        assert_eq!(order.total_formatted, "$11.99");
        assert_eq!(order.status, "paid");
        assert!(!order.refunded);
        assert_eq!(order.refunded_at, None);
    }

    #[test]
    fn test_list_params_render_filters() {
        let params = OrderListParams {
            store_id: Some(1),
            user_email: Some("gernser@yahoo.com".to_string()),
            page: PageParams::default(),
        };
        let query = params.to_query();

        assert_eq!(query.get("filter[store_id]"), Some(&"1".to_string()));
        assert_eq!(
            query.get("filter[user_email]"),
            Some(&"gernser@yahoo.com".to_string())
        );
    }
}
