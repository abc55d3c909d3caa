//! The transport capability card clients dispatch through.

use std::future::Future;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Executes requests against the API.
///
/// Implementations must return `Ok` only for successful (2xx) responses and
/// map every other outcome to an [`HttpError`]. Timeouts and cancellation are
/// the implementation's concern; callers add none.
///
/// Backends are shared between clients behind an `Arc` and called
/// concurrently, hence the `Send + Sync` bound and `Send` futures.
///
/// # Example
///
/// ```rust
/// use stripe_cards::clients::{Backend, HttpError, HttpRequest, HttpResponse};
///
/// struct Canned;
///
/// impl Backend for Canned {
///     async fn call(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::ok(serde_json::json!({"id": "card_A"})))
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// Sends `request` and returns the raw response.
    fn call(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

