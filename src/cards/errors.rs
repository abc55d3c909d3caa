//! Error types for card operations.
//!
//! Three failure kinds are kept apart so callers can tell bad local input
//! from a remote rejection from an unparseable answer:
//!
//! - [`CardError::Params`]: the parameters, or the request built from them,
//!   were rejected locally; no request was sent
//! - [`CardError::Transport`]: the backend's [`HttpError`], unchanged
//! - [`CardError::Decode`]: the backend succeeded but the body is not the
//!   expected card shape
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_cards::cards::{CardError, ParamsError};
//!
//! match client.create(&params).await {
//!     Ok(card) => println!("Created {}", card.id),
//!     Err(CardError::Params(ParamsError::MissingParent)) => {
//!         println!("set a customer or a recipient");
//!     }
//!     Err(CardError::Transport(e)) => println!("API error: {e}"),
//!     Err(CardError::Decode { resource, source }) => {
//!         println!("unexpected {resource} body: {source}");
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// Local validation failures of card parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// Neither a customer nor a recipient was given.
    #[error("Invalid card params: either customer or recipient must be set")]
    MissingParent,

    /// Both a customer and a recipient were given.
    #[error("Invalid card params: customer '{customer}' and recipient '{recipient}' cannot both be set")]
    AmbiguousParent {
        /// The customer id that was provided.
        customer: String,
        /// The recipient id that was provided.
        recipient: String,
    },

    /// An item operation was called with an empty card id.
    #[error("Invalid card params: card id cannot be empty")]
    EmptyCardId,

    /// The parameters could not be flattened into a payload.
    #[error("Invalid card params: {reason}")]
    Encode {
        /// Why encoding failed.
        reason: String,
    },

    /// The request assembled from the parameters failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

/// Error type for card operations.
#[derive(Debug, Error)]
pub enum CardError {
    /// The parameters were rejected before any request was made.
    #[error(transparent)]
    Params(#[from] ParamsError),

    /// The backend failed; the error is passed through unchanged.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response body could not be decoded.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The entity that was expected (e.g., "Card", "CardList").
        resource: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl CardError {
    /// Returns `true` if the call was rejected locally.
    #[must_use]
    pub const fn is_params_error(&self) -> bool {
        matches!(self, Self::Params(_))
    }

    /// Returns `true` if the backend reported the failure.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the API request id, if the API answered.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Transport(e) => e.request_id(),
            _ => None,
        }
    }
}

// Verify CardError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CardError>();
};
