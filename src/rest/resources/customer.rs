//! The customer resource.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{PageParams, QueryParams, Resource};

/// Attributes of a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// The ID of the store this customer belongs to.
    pub store_id: u64,
    /// The full name of the customer.
    pub name: String,
    /// The email address of the customer.
    pub email: String,
    /// The status: `subscribed`, `unsubscribed`, `archived`, or
    /// `requires_verification`.
    pub status: String,
    /// City; `None` when unknown.
    #[serde(default)]
    pub city: Option<String>,
    /// State or region; `None` when unknown.
    #[serde(default)]
    pub region: Option<String>,
    /// ISO 3166-1 country code; `None` when unknown.
    #[serde(default)]
    pub country: Option<String>,
    /// Lifetime revenue from this customer, in cents.
    pub total_revenue_currency: i64,
    /// Monthly recurring revenue from this customer, in cents.
    pub mrr: i64,
    /// The status, formatted for display.
    pub status_formatted: String,
    /// The country, formatted for display.
    #[serde(default)]
    pub country_formatted: Option<String>,
    /// Lifetime revenue, formatted for display.
    pub total_revenue_currency_formatted: String,
    /// Monthly recurring revenue, formatted for display.
    pub mrr_formatted: String,
    /// When the customer was created.
    pub created_at: DateTime<Utc>,
    /// When the customer was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether this customer was created in test mode.
    pub test_mode: bool,
}

/// Filters and pagination for listing customers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListParams {
    /// Only return customers belonging to this store.
    pub store_id: Option<u64>,
    /// Only return customers with this email address.
    pub email: Option<String>,
    /// Page-based pagination.
    pub page: PageParams,
}

impl QueryParams for CustomerListParams {
    fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(store_id) = self.store_id {
            query.insert("filter[store_id]".to_string(), store_id.to_string());
        }
        if let Some(email) = &self.email {
            query.insert("filter[email]".to_string(), email.clone());
        }
        self.page.apply(&mut query);
        query
    }
}

impl Resource for Customer {
    const KIND: &'static str = "customers";
    const PATH: &'static str = "customers";
    type ListParams = CustomerListParams;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponse;

    const CUSTOMER_DOC: &str = r#"{
        "jsonapi": {"version": "1.0"},
        "links": {"self": "https://api.lemonsqueezy.com/v1/customers/1"},
        "data": {
            "type": "customers",
            "id": "1",
            "attributes": {
                "store_id": 1,
                "name": "Darlene Daugherty",
                "email": "gernser@yahoo.com",
                "status": "subscribed",
                "city": null,
                "region": null,
                "country": "US",
                "total_revenue_currency": 84332,
                "mrr": 1199,
                "status_formatted": "Subscribed",
                "country_formatted": "United States",
                "total_revenue_currency_formatted": "$843.32",
                "mrr_formatted": "$11.99",
                "created_at": "2021-05-24T14:40:04.000000Z",
                "updated_at": "2021-08-17T09:45:53.000000Z",
                "test_mode": false
            }
        }
    }"#;

    #[test]
    fn test_decodes_customer() {
        let response = HttpResponse::new(200, HashMap::new(), CUSTOMER_DOC.as_bytes().to_vec());
        let decoded = Customer::decode_single(&response).unwrap();

        let customer = &decoded.data.attributes;
        assert_eq!(customer.email, "gernser@yahoo.com");
        assert_eq!(customer.status, "subscribed");
        assert_eq!(customer.city, None);
        assert_eq!(customer.mrr, 1199);
    }

    #[test]
    fn test_list_params_render_email_filter() {
        let params = CustomerListParams {
            store_id: None,
            email: Some("gernser@yahoo.com".to_string()),
            page: PageParams::default(),
        };
        let query = params.to_query();

        assert_eq!(query.len(), 1);
        assert_eq!(
            query.get("filter[email]"),
            Some(&"gernser@yahoo.com".to_string())
        );
    }
}
