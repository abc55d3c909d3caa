//! Transport layer for the Stripe API.
//!
//! # Overview
//!
//! - [`Backend`]: the capability card clients dispatch requests through
//! - [`HttpClient`]: the reqwest-based [`Backend`]
//! - [`HttpRequest`]: a request (method, path, key, payload, expected shape)
//! - [`HttpResponse`]: a raw response from the API
//! - [`Payload`]: transport-neutral key/value request data
//! - [`HttpError`]: the error every backend returns
//!
//! # Retry Behavior
//!
//! None. Each request is attempted once and failures are returned
//! immediately.

mod backend;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod payload;

pub use backend::Backend;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, ResponseShape};
pub use http_response::HttpResponse;
pub use payload::Payload;
