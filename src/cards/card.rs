//! Card entities decoded from API responses.

use serde::{Deserialize, Serialize};

use crate::clients::ResponseShape;

/// A response entity a card operation decodes.
pub trait Decoded {
    /// Name used in decode errors.
    const RESOURCE: &'static str;
    /// Shape requested from the backend.
    const SHAPE: ResponseShape;
}

/// Card network.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    #[serde(rename = "American Express")]
    AmericanExpress,
    MasterCard,
    Discover,
    #[serde(rename = "JCB")]
    Jcb,
    #[serde(rename = "Diners Club")]
    DinersClub,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardFunding {
    Credit,
    Debit,
    Prepaid,
    #[serde(other)]
    Unknown,
}

/// Result of a CVC or address verification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationCheck {
    Pass,
    Fail,
    Unavailable,
    Unchecked,
    #[serde(other)]
    Unknown,
}

/// A card attached to a customer or a recipient.
///
/// Cards only come from API responses. Every field but `id` is optional so
/// partially expanded or older-version bodies still decode.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub object: Option<String>,
    pub last4: Option<String>,
    pub brand: Option<CardBrand>,
    pub funding: Option<CardFunding>,
    pub exp_month: Option<u32>,
    pub exp_year: Option<u32>,
    pub fingerprint: Option<String>,
    pub country: Option<String>,
    pub name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub address_country: Option<String>,
    pub cvc_check: Option<VerificationCheck>,
    pub address_line1_check: Option<VerificationCheck>,
    pub address_zip_check: Option<VerificationCheck>,
    pub customer: Option<String>,
    pub recipient: Option<String>,
}

/// A page of cards.
///
/// Pagination metadata is passed through as returned; fetching further
/// pages is left to the caller (`starting_after` the last id).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CardList {
    pub object: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub has_more: bool,
    pub total_count: Option<u64>,
    /// Total reported by older API versions in place of `total_count`.
    pub count: Option<u64>,
    pub data: Vec<Card>,
}

impl Decoded for Card {
    const RESOURCE: &'static str = "Card";
    const SHAPE: ResponseShape = ResponseShape::Card;
}

impl Decoded for CardList {
    const RESOURCE: &'static str = "CardList";
    const SHAPE: ResponseShape = ResponseShape::CardList;
}

impl CardList {
    /// Returns the total number of cards the owner has, if reported.
    ///
    /// Prefers `total_count` and falls back to the legacy `count`.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        match self.total_count {
            Some(total) => Some(total),
            None => self.count,
        }
    }

    /// Returns the number of cards on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this page holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the cards on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.data.iter()
    }
}

impl IntoIterator for CardList {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardList {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
