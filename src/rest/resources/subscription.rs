//! The subscription resource.
//!
//! Subscriptions track recurring payments for a product variant. Besides
//! the standard `find`/`all` operations, subscriptions can be updated
//! (pause, unpause, change the billing anchor) and cancelled.
//!
//! # Example
//!
//! ```rust,ignore
//! use lemonsqueezy::rest::Resource;
//! use lemonsqueezy::rest::resources::Subscription;
//!
//! let response = Subscription::find(&client, "1").await?;
//! let subscription = &response.data.attributes;
//!
//! if subscription.cancelled {
//!     // ends_at is always set once a subscription is cancelled
//!     println!("ends at {}", subscription.ends_at.unwrap());
//! }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::jsonapi::{ApiResponse, DecodeError};
use crate::rest::{Error, PageParams, QueryParams, Resource, ResourceResponse};
use crate::Client;

/// Pause state of a subscription.
///
/// `mode` is either `"void"` (no invoices are issued while paused) or
/// `"free"` (the customer keeps access for free).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPause {
    /// The pause mode: `"void"` or `"free"`.
    pub mode: String,

    /// When the subscription automatically resumes, if scheduled.
    #[serde(default)]
    pub resumes_at: Option<DateTime<Utc>>,
}

/// Customer-facing URLs for a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionUrls {
    /// Pre-signed URL where the customer can update their payment method.
    pub update_payment_method: String,
}

/// Attributes of a subscription.
///
/// Nullable fields are `Option`: `pause` is `None` unless the subscription
/// is paused, `trial_ends_at` is `None` when there was no trial, and
/// `ends_at` is `None` while the subscription is active — it is always set
/// once the subscription is cancelled or expired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// The ID of the store this subscription belongs to.
    pub store_id: u64,
    /// The ID of the order that created this subscription.
    pub order_id: u64,
    /// The ID of the order item this subscription belongs to.
    pub order_item_id: u64,
    /// The ID of the subscribed product.
    pub product_id: u64,
    /// The ID of the subscribed variant.
    pub variant_id: u64,
    /// The name of the product.
    pub product_name: String,
    /// The name of the variant.
    pub variant_name: String,
    /// The full name of the customer.
    pub user_name: String,
    /// The email address of the customer.
    pub user_email: String,
    /// The status: `on_trial`, `active`, `paused`, `past_due`, `unpaid`,
    /// `cancelled`, or `expired`.
    pub status: String,
    /// The status, formatted for display.
    pub status_formatted: String,
    /// Pause state; `None` when not paused.
    #[serde(default)]
    pub pause: Option<SubscriptionPause>,
    /// Whether the subscription has been cancelled.
    pub cancelled: bool,
    /// When the trial ends; `None` when there is no trial.
    #[serde(default)]
    pub trial_ends_at: Option<DateTime<Utc>>,
    /// The day of the month on which the subscription renews (1-31).
    pub billing_anchor: u32,
    /// Customer-facing URLs.
    pub urls: SubscriptionUrls,
    /// When the next renewal is due.
    pub renews_at: DateTime<Utc>,
    /// When the subscription ends; `None` while active.
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    /// When the subscription was created.
    pub created_at: DateTime<Utc>,
    /// When the subscription was last updated.
    pub updated_at: DateTime<Utc>,
    /// Whether this subscription was created in test mode.
    pub test_mode: bool,
}

/// Filters and pagination for listing subscriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionListParams {
    /// Only return subscriptions belonging to this store.
    pub store_id: Option<u64>,
    /// Only return subscriptions belonging to this order.
    pub order_id: Option<u64>,
    /// Page-based pagination.
    pub page: PageParams,
}

impl QueryParams for SubscriptionListParams {
    fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(store_id) = self.store_id {
            query.insert("filter[store_id]".to_string(), store_id.to_string());
        }
        if let Some(order_id) = self.order_id {
            query.insert("filter[order_id]".to_string(), order_id.to_string());
        }
        self.page.apply(&mut query);
        query
    }
}

impl Resource for Subscription {
    const KIND: &'static str = "subscriptions";
    const PATH: &'static str = "subscriptions";
    type ListParams = SubscriptionListParams;
}

/// Attributes that can be changed on an existing subscription.
///
/// Unset fields are omitted from the request body, leaving the current
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionUpdateAttributes {
    /// Pause state change. `Some(Some(pause))` pauses the subscription,
    /// `Some(None)` sends an explicit `null` to unpause it, and `None`
    /// omits the field, leaving the current state untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause: Option<Option<SubscriptionPause>>,

    /// Set to `true` to cancel, `false` to resume a cancelled subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<bool>,

    /// Change the day of the month on which the subscription renews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_anchor: Option<u32>,
}

impl Subscription {
    /// Cancels a subscription.
    ///
    /// The API marks the subscription as cancelled and returns the updated
    /// document; `cancelled` will be `true` and `ends_at` set.
    ///
    /// # Errors
    ///
    /// Same classification as [`Resource::find`].
    pub async fn cancel(
        client: &Client,
        id: &str,
    ) -> Result<ResourceResponse<ApiResponse<Self>>, Error> {
        let response = client.delete(&format!("{}/{id}", Self::PATH)).await?;
        Self::decode_single(&response)
    }

    /// Updates a subscription.
    ///
    /// Sends a JSON:API update document
    /// (`{"data": {"type": "subscriptions", "id": ..., "attributes": ...}}`)
    /// carrying only the fields set in `attributes`.
    ///
    /// # Errors
    ///
    /// Same classification as [`Resource::find`].
    pub async fn update(
        client: &Client,
        id: &str,
        attributes: &SubscriptionUpdateAttributes,
    ) -> Result<ResourceResponse<ApiResponse<Self>>, Error> {
        let attributes = serde_json::to_value(attributes).map_err(DecodeError::from)?;
        let body = json!({
            "data": {
                "type": Self::KIND,
                "id": id,
                "attributes": attributes,
            }
        });

        let response = client.patch(&format!("{}/{id}", Self::PATH), body).await?;
        Self::decode_single(&response)
    }
}
