//! # Stripe Cards
//!
//! An async client for the card endpoints of the Stripe API: cards attached
//! to customers and to recipients.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StripeConfig`] and [`StripeConfigBuilder`]
//! - Validated newtypes for the API key, base URL, and version
//! - A [`CardClient`] for create, retrieve, update, delete and list
//! - A [`Cards`] facade that follows API key rotation on its configuration
//! - A pluggable [`Backend`](clients::Backend) transport, with a reqwest
//!   implementation in [`HttpClient`](clients::HttpClient)
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_cards::{ApiKey, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version("2014-08-04".parse().unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Managing Cards
//!
//! ```rust,ignore
//! use stripe_cards::{ApiKey, CardListParams, CardParams, Cards, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .build()
//!     .unwrap();
//! let cards = Cards::new(&config);
//!
//! let card = cards
//!     .create(&CardParams {
//!         customer: Some("cus_1".to_string()),
//!         number: Some("4242424242424242".to_string()),
//!         exp_month: Some(12),
//!         exp_year: Some(24),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let page = cards
//!     .list(&CardListParams {
//!         customer: Some("cus_1".to_string()),
//!         limit: Some(10),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: invalid parameters never reach the network
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: built on Tokio and reqwest

pub mod cards;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiBase, ApiKey, ApiVersion, StripeConfig, StripeConfigBuilder};
pub use error::ConfigError;

pub use cards::{
    Card, CardClient, CardDeleteParams, CardError, CardGetParams, CardList, CardListParams,
    CardParams, Cards, ParamsError,
};

pub use clients::{Backend, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Payload};
