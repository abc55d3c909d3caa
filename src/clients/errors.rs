//! Transport error types.
//!
//! - [`HttpResponseError`]: non-2xx responses from the API
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError`]: unified error type returned by every [`Backend`](crate::clients::Backend)
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_cards::clients::HttpError;
//!
//! match backend.call(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// `message` is the remote `error.message` when the body carries one, or
/// the raw body otherwise.
///
/// # Example
///
/// ```rust
/// use stripe_cards::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 402,
///     message: "Your card was declined.".to_string(),
///     error_type: Some("card_error".to_string()),
///     error_reference: Some("req_123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "Your card was declined.");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message reported by the API.
    pub message: String,
    /// The API error type (e.g., `invalid_request_error`, `card_error`).
    pub error_type: Option<String>,
    /// Request id for error reporting (from the `Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Cannot send a request without a path.")]
    EmptyPath,

    /// A POST request was built without a payload.
    #[error("Cannot use {method} without specifying data.")]
    MissingPayload {
        /// The HTTP method that requires a payload.
        method: String,
    },

    /// A payload was attached to a method that never carries one.
    #[error("Cannot send data with {method}.")]
    PayloadNotAllowed {
        /// The HTTP method that rejects a payload.
        method: String,
    },
}

/// Unified error type for all transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the request id reported by the API, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if the API answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
