//! Typed Lemon Squeezy resources.
//!
//! Each submodule defines a resource's attribute struct, its
//! [`Resource`](crate::rest::Resource) implementation, and any
//! resource-specific operations (subscription cancel/update, checkout
//! create, the current-user endpoint).
//!
//! Attribute structs are flat field sets matching the API's wire format.
//! Nullable API fields are `Option` and serialize back as explicit `null`,
//! so a decode/encode round trip preserves the document.

mod checkout;
mod customer;
mod order;
mod product;
mod store;
mod subscription;
mod user;
mod variant;

pub use checkout::{Checkout, CheckoutCreateAttributes, CheckoutListParams};
pub use customer::{Customer, CustomerListParams};
pub use order::{Order, OrderListParams};
pub use product::{Product, ProductListParams};
pub use store::Store;
pub use subscription::{
    Subscription, SubscriptionListParams, SubscriptionPause, SubscriptionUpdateAttributes,
    SubscriptionUrls,
};
pub use user::User;
pub use variant::{Variant, VariantListParams};
