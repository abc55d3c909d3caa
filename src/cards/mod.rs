//! Card management for customers and recipients.
//!
//! A card always belongs to exactly one owner, either a customer or a
//! recipient. The owner decides the endpoint prefix
//! (`/customers/{id}/cards` or `/recipients/{id}/cards`) and is never sent
//! in the payload.
//!
//! # Overview
//!
//! - [`CardClient`]: create, retrieve, update, delete and list cards through
//!   a [`Backend`](crate::clients::Backend)
//! - [`Cards`]: a [`CardClient`] that re-reads its key from a
//!   [`StripeConfig`](crate::StripeConfig) before each call
//! - [`CardParams`], [`CardGetParams`], [`CardListParams`],
//!   [`CardDeleteParams`]: per-operation parameters
//! - [`Card`], [`CardList`]: decoded responses
//! - [`CardError`], [`ParamsError`]: failures
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_cards::{ApiKey, CardGetParams, Cards, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .build()
//!     .unwrap();
//! let cards = Cards::new(&config);
//!
//! let card = cards
//!     .get("card_A", &CardGetParams {
//!         recipient: Some("rp_1".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} ending in {:?}", card.id, card.last4);
//! ```

mod card;
mod client;
mod errors;
mod facade;
mod params;
mod path;

pub use card::{Card, CardBrand, CardFunding, CardList, VerificationCheck};
pub use client::CardClient;
pub use errors::{CardError, ParamsError};
pub use facade::Cards;
pub use params::{
    CardDeleteParams, CardGetParams, CardListParams, CardParams, ParentRef, ParentScoped,
    CREATE_ONLY_FIELDS,
};
pub use path::{build_path, get_path, resolve, CardOperation, CardPath, CARD_PATHS};
