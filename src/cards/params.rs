//! Request parameters for card operations.
//!
//! Every bundle names the card's owner through two raw fields, `customer`
//! and `recipient`, exactly one of which must be set. The owner is routed
//! into the request path; it never appears in the payload.
//!
//! Fields left as `None` (or set to an empty string or zero) are omitted
//! from the payload rather than sent empty.
//!
//! # Example
//!
//! ```rust
//! use stripe_cards::cards::{CardParams, ParentRef, ParentScoped};
//!
//! let params = CardParams {
//!     customer: Some("cus_1".to_string()),
//!     number: Some("4242424242424242".to_string()),
//!     exp_month: Some(12),
//!     exp_year: Some(24),
//!     ..Default::default()
//! };
//!
//! assert_eq!(params.validate_parent().unwrap(), ParentRef::Customer("cus_1"));
//!
//! let payload = params.to_payload(true).unwrap();
//! assert_eq!(payload.get("number"), Some("4242424242424242"));
//! assert_eq!(payload.get("exp_month"), Some("12"));
//! assert!(payload.get("customer").is_none());
//! ```

use serde::Serialize;

use crate::cards::errors::ParamsError;
use crate::clients::Payload;

/// Payload keys only sent when a card is created.
pub const CREATE_ONLY_FIELDS: &[&str] = &["card", "number", "exp_month", "exp_year", "cvc"];

/// Raw card detail keys, replaced by the token when one is given.
const RAW_DETAIL_FIELDS: &[&str] = &["number", "exp_month", "exp_year", "cvc"];

/// The validated owner of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRef<'a> {
    /// The card belongs to a customer.
    Customer(&'a str),
    /// The card belongs to a recipient.
    Recipient(&'a str),
}

impl<'a> ParentRef<'a> {
    /// Returns the path placeholder this parent fills (`customer` or `recipient`).
    #[must_use]
    pub const fn id_name(&self) -> &'static str {
        match self {
            Self::Customer(_) => "customer",
            Self::Recipient(_) => "recipient",
        }
    }

    /// Returns the parent's id.
    #[must_use]
    pub const fn id(&self) -> &'a str {
        match self {
            Self::Customer(id) | Self::Recipient(id) => id,
        }
    }
}

/// Parameters scoped to a card owner.
pub trait ParentScoped {
    /// The raw customer id, if any.
    fn customer(&self) -> Option<&str>;

    /// The raw recipient id, if any.
    fn recipient(&self) -> Option<&str>;

    /// Resolves which owner these parameters address.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::MissingParent`] if neither id is set and
    /// [`ParamsError::AmbiguousParent`] if both are. Empty strings count as
    /// unset.
    fn validate_parent(&self) -> Result<ParentRef<'_>, ParamsError> {
        let customer = self.customer().filter(|id| !id.is_empty());
        let recipient = self.recipient().filter(|id| !id.is_empty());

        match (customer, recipient) {
            (Some(customer), None) => Ok(ParentRef::Customer(customer)),
            (None, Some(recipient)) => Ok(ParentRef::Recipient(recipient)),
            (Some(customer), Some(recipient)) => Err(ParamsError::AmbiguousParent {
                customer: customer.to_string(),
                recipient: recipient.to_string(),
            }),
            (None, None) => Err(ParamsError::MissingParent),
        }
    }
}

fn encode<T: Serialize>(params: &T) -> Result<Payload, ParamsError> {
    Payload::from_serialize(params).map_err(|e| ParamsError::Encode {
        reason: e.to_string(),
    })
}

/// Parameters for creating or updating a card.
///
/// On create either `token` (a token from Stripe.js or Checkout, sent as
/// `card`) or the raw details (`number`, `exp_month`, `exp_year`, `cvc`)
/// identify the card. Those fields are ignored on update, where only the
/// holder name and address can change.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CardParams {
    #[serde(skip)]
    pub customer: Option<String>,
    #[serde(skip)]
    pub recipient: Option<String>,
    #[serde(rename = "card", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

impl CardParams {
    /// Flattens the parameters into a payload.
    ///
    /// With `full` set (create) the create-only fields are included; when a
    /// token is present it supersedes the raw card details. Without `full`
    /// (update) only mutable fields are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Encode`] if the fields cannot be serialized.
    pub fn to_payload(&self, full: bool) -> Result<Payload, ParamsError> {
        let mut payload = encode(self)?;

        let dropped: &[&str] = if !full {
            CREATE_ONLY_FIELDS
        } else if payload.contains_key("card") {
            RAW_DETAIL_FIELDS
        } else {
            &[]
        };
        for key in dropped {
            payload.remove(key);
        }

        Ok(payload)
    }
}

impl ParentScoped for CardParams {
    fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }
}

/// Parameters for retrieving a card.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CardGetParams {
    #[serde(skip)]
    pub customer: Option<String>,
    #[serde(skip)]
    pub recipient: Option<String>,
    /// Response fields to expand, sent as `expand[]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl CardGetParams {
    /// Flattens the filter fields into a payload, empty when none are set.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Encode`] if the fields cannot be serialized.
    pub fn to_payload(&self) -> Result<Payload, ParamsError> {
        encode(self)
    }
}

impl ParentScoped for CardGetParams {
    fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }
}

/// Parameters for listing an owner's cards.
///
/// `starting_after` and `ending_before` take card ids and are passed through
/// unchanged.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CardListParams {
    #[serde(skip)]
    pub customer: Option<String>,
    #[serde(skip)]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl CardListParams {
    /// Flattens the filter and paging fields into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Encode`] if the fields cannot be serialized.
    pub fn to_payload(&self) -> Result<Payload, ParamsError> {
        encode(self)
    }
}

impl ParentScoped for CardListParams {
    fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }
}

/// Parameters for deleting a card. Only the owner is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDeleteParams {
    pub customer: Option<String>,
    pub recipient: Option<String>,
}

impl ParentScoped for CardDeleteParams {
    fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }
}
