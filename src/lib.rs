//! # Lemon Squeezy API client
//!
//! An async client for the [Lemon Squeezy](https://www.lemonsqueezy.com)
//! API. The API is a JSON:API surface: every response wraps its payload in
//! a typed envelope with a resource type tag, ID, attributes, and links.
//! This crate decodes that envelope generically and exposes typed resource
//! operations on top of a thin HTTP transport.
//!
//! ## Layers
//!
//! - [`config`] — API token, base URL, and client configuration
//! - [`clients`] — the HTTP transport: one round trip per call, raw
//!   responses for any status
//! - [`jsonapi`] — the generic envelope decoder
//! - [`rest`] — the typed resource layer: the [`rest::Resource`] trait,
//!   response wrapper, and error classification
//! - [`rest::resources`] — concrete resources: subscriptions, orders,
//!   products, variants, stores, customers, checkouts, users
//!
//! ## Example
//!
//! ```rust,no_run
//! use lemonsqueezy::rest::Resource;
//! use lemonsqueezy::rest::resources::Subscription;
//! use lemonsqueezy::{ApiToken, Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::builder()
//!         .api_token(ApiToken::new(std::env::var("LEMONSQUEEZY_API_KEY")?)?)
//!         .build()?;
//!     let client = Client::new(&config);
//!
//!     let response = Subscription::find(&client, "1").await?;
//!     println!(
//!         "{} is {}",
//!         response.data.attributes.product_name,
//!         response.data.attributes.status
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Resource operations return [`rest::Error`], which separates transport
//! failures ([`clients::HttpError`]), API rejections ([`rest::ApiError`]
//! with the parsed JSON:API error objects), and contract mismatches
//! ([`jsonapi::DecodeError`]).

mod client;
pub mod clients;
pub mod config;
mod error;
pub mod jsonapi;
pub mod rest;

pub use client::Client;
pub use config::{ApiToken, BaseUrl, Config, ConfigBuilder};
pub use error::ConfigError;
