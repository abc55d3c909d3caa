//! Request values handed to a [`Backend`](crate::clients::Backend).

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::payload::Payload;
use crate::config::ApiKey;

/// HTTP methods used by the card endpoints.
///
/// The API treats updates as POST, so there is no PUT.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase wire name of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The entity a caller expects back from a request.
///
/// Backends may use the hint to skip reading bodies that will be discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    /// A single card object.
    Card,
    /// A list object wrapping cards.
    CardList,
    /// No body is decoded.
    Empty,
}

/// A request to be executed by a [`Backend`](crate::clients::Backend).
///
/// # Example
///
/// ```rust
/// use stripe_cards::ApiKey;
/// use stripe_cards::clients::{HttpMethod, HttpRequest, Payload, ResponseShape};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/customers/cus_1/cards", ApiKey::new("sk_test").unwrap())
///     .payload(Payload::new())
///     .response_shape(ResponseShape::CardList)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "/customers/cus_1/cards");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API base, starting with `/`.
    pub path: String,
    /// The key the request is authenticated with.
    pub api_key: ApiKey,
    /// Key/value data: query string for GET/DELETE, form body for POST.
    pub payload: Option<Payload>,
    /// What the caller will decode from the response.
    pub response_shape: ResponseShape,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>, api_key: ApiKey) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path, api_key)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `http_method` is `Post` but `payload` is `None`
    /// - `http_method` is `Delete` but a payload is attached
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        match (self.http_method, &self.payload) {
            (HttpMethod::Post, None) => Err(InvalidHttpRequestError::MissingPayload {
                method: self.http_method.to_string(),
            }),
            (HttpMethod::Delete, Some(_)) => Err(InvalidHttpRequestError::PayloadNotAllowed {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    api_key: ApiKey,
    payload: Option<Payload>,
    response_shape: ResponseShape,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            api_key,
            payload: None,
            response_shape: ResponseShape::Empty,
        }
    }

    /// Attaches a payload.
    #[must_use]
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attaches a payload only when one is given.
    #[must_use]
    pub fn maybe_payload(mut self, payload: Option<Payload>) -> Self {
        self.payload = payload;
        self
    }

    /// Sets the expected response shape (default: [`ResponseShape::Empty`]).
    #[must_use]
    pub const fn response_shape(mut self, shape: ResponseShape) -> Self {
        self.response_shape = shape;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            api_key: self.api_key,
            payload: self.payload,
            response_shape: self.response_shape,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("sk_test_key").unwrap()
    }

    #[test]
    fn test_http_method_display_and_wire_name() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/customers/cus_1/cards/card_1", key())
            .response_shape(ResponseShape::Card)
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert!(request.payload.is_none());
        assert_eq!(request.response_shape, ResponseShape::Card);
    }

    #[test]
    fn test_verify_requires_payload_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "/customers/cus_1/cards", key()).build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingPayload { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_rejects_payload_for_delete() {
        let result = HttpRequest::builder(HttpMethod::Delete, "/customers/cus_1/cards/card_1", key())
            .payload(Payload::new())
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::PayloadNotAllowed { method }) if method == "delete"
        ));
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "", key()).build();
        assert_eq!(result, Err(InvalidHttpRequestError::EmptyPath));
    }

    #[test]
    fn test_default_response_shape_is_empty() {
        let request = HttpRequest::builder(HttpMethod::Delete, "/recipients/rp_1/cards/card_1", key())
            .maybe_payload(None)
            .build()
            .unwrap();
        assert_eq!(request.response_shape, ResponseShape::Empty);
    }
}
