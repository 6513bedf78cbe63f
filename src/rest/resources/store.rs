//! The store resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{PageParams, Resource};

/// Attributes of a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// The name of the store.
    pub name: String,
    /// URL-friendly slug, used in the store URL.
    pub slug: String,
    /// The `.lemonsqueezy.com` domain of the store.
    pub domain: String,
    /// The full URL of the store.
    pub url: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// The billing plan of the store.
    pub plan: String,
    /// ISO 3166-1 country code.
    pub country: String,
    /// The country, formatted for display.
    pub country_nicename: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Total number of sales.
    pub total_sales: u64,
    /// Total revenue in cents.
    pub total_revenue: i64,
    /// Number of sales in the last thirty days.
    pub thirty_day_sales: u64,
    /// Revenue in cents over the last thirty days.
    pub thirty_day_revenue: i64,
    /// When the store was created.
    pub created_at: DateTime<Utc>,
    /// When the store was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Resource for Store {
    const KIND: &'static str = "stores";
    const PATH: &'static str = "stores";
    type ListParams = PageParams;
}
