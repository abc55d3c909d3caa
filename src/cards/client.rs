//! The card client: validation, routing, dispatch and decoding.

use std::sync::{Arc, PoisonError, RwLock};

use serde::de::DeserializeOwned;

use crate::cards::card::{Card, CardList, Decoded};
use crate::cards::errors::{CardError, ParamsError};
use crate::cards::params::{
    CardDeleteParams, CardGetParams, CardListParams, CardParams, ParentScoped,
};
use crate::cards::path::{resolve, CardOperation};
use crate::clients::{
    Backend, HttpClient, HttpMethod, HttpRequest, Payload, ResponseShape,
};
use crate::config::ApiKey;

/// Client for the card endpoints of customers and recipients.
///
/// A `CardClient` holds a shared [`Backend`] and the API key it
/// authenticates with. Parameters are validated locally first: a call with
/// an invalid owner or an empty card id fails with [`CardError::Params`]
/// and never reaches the backend.
///
/// # Thread Safety
///
/// `CardClient` is `Send + Sync` when its backend is. Concurrent calls
/// share the backend; the key can be swapped with
/// [`set_api_key`](Self::set_api_key) while calls are in flight, and each
/// call uses the key current when it started.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use stripe_cards::{ApiKey, CardClient, CardParams, StripeConfig};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()
///     .unwrap();
/// let client = CardClient::new(Arc::new(config.backend()), config.api_key());
///
/// let card = client
///     .create(&CardParams {
///         customer: Some("cus_1".to_string()),
///         token: Some("tok_visa".to_string()),
///         ..Default::default()
///     })
///     .await?;
/// ```
#[derive(Debug)]
pub struct CardClient<B: Backend = HttpClient> {
    backend: Arc<B>,
    api_key: RwLock<ApiKey>,
}

// Verify CardClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CardClient>();
};

impl<B: Backend> CardClient<B> {
    /// Creates a client dispatching through `backend` and authenticating with `api_key`.
    #[must_use]
    pub const fn new(backend: Arc<B>, api_key: ApiKey) -> Self {
        Self {
            backend,
            api_key: RwLock::new(api_key),
        }
    }

    /// Returns the backend requests are dispatched through.
    #[must_use]
    pub const fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Returns the key the next request will be sent with.
    #[must_use]
    pub fn api_key(&self) -> ApiKey {
        self.api_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the key used by subsequent requests.
    pub fn set_api_key(&self, key: ApiKey) {
        *self
            .api_key
            .write()
            .unwrap_or_else(PoisonError::into_inner) = key;
    }

    /// Attaches a new card to the customer or recipient named in `params`.
    ///
    /// All set fields are sent, including the card details.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Params`] if the owner is missing or ambiguous,
    /// [`CardError::Transport`] if the backend fails, and
    /// [`CardError::Decode`] if the response is not a card.
    pub async fn create(&self, params: &CardParams) -> Result<Card, CardError> {
        let operation = CardOperation::Create;
        let parent = params
            .validate_parent()
            .map_err(|e| Self::rejected(operation, e))?;
        let payload = params
            .to_payload(true)
            .map_err(|e| Self::rejected(operation, e))?;
        let (method, path) =
            resolve(operation, parent, None).map_err(|e| Self::rejected(operation, e))?;

        self.dispatch(operation, method, path, Some(payload)).await
    }

    /// Retrieves card `id` of the customer or recipient named in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Params`] if `id` is empty or the owner is
    /// missing or ambiguous, [`CardError::Transport`] if the backend fails,
    /// and [`CardError::Decode`] if the response is not a card.
    pub async fn get(&self, id: &str, params: &CardGetParams) -> Result<Card, CardError> {
        let operation = CardOperation::Retrieve;
        let parent = params
            .validate_parent()
            .map_err(|e| Self::rejected(operation, e))?;
        let (method, path) =
            resolve(operation, parent, Some(id)).map_err(|e| Self::rejected(operation, e))?;
        let payload = params
            .to_payload()
            .map_err(|e| Self::rejected(operation, e))?;
        let payload = (!payload.is_empty()).then_some(payload);

        self.dispatch(operation, method, path, payload).await
    }

    /// Updates card `id` of the customer or recipient named in `params`.
    ///
    /// Only the holder name and address fields are sent; card details set
    /// on `params` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Params`] if `id` is empty or the owner is
    /// missing or ambiguous, [`CardError::Transport`] if the backend fails,
    /// and [`CardError::Decode`] if the response is not a card.
    pub async fn update(&self, id: &str, params: &CardParams) -> Result<Card, CardError> {
        let operation = CardOperation::Update;
        let parent = params
            .validate_parent()
            .map_err(|e| Self::rejected(operation, e))?;
        let (method, path) =
            resolve(operation, parent, Some(id)).map_err(|e| Self::rejected(operation, e))?;
        let payload = params
            .to_payload(false)
            .map_err(|e| Self::rejected(operation, e))?;

        self.dispatch(operation, method, path, Some(payload)).await
    }

    /// Deletes card `id` from the customer or recipient named in `params`.
    ///
    /// No payload is sent and the response body is not decoded.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Params`] if `id` is empty or the owner is
    /// missing or ambiguous, and [`CardError::Transport`] if the backend
    /// fails.
    pub async fn delete(&self, id: &str, params: &CardDeleteParams) -> Result<(), CardError> {
        let operation = CardOperation::Delete;
        let parent = params
            .validate_parent()
            .map_err(|e| Self::rejected(operation, e))?;
        let (method, path) =
            resolve(operation, parent, Some(id)).map_err(|e| Self::rejected(operation, e))?;

        self.send(method, path, None, ResponseShape::Empty).await?;
        tracing::debug!(operation = operation.as_str(), "Card deleted");
        Ok(())
    }

    /// Lists one page of the cards of the customer or recipient named in
    /// `params`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Params`] if the owner is missing or ambiguous,
    /// [`CardError::Transport`] if the backend fails, and
    /// [`CardError::Decode`] if the response is not a list of cards.
    pub async fn list(&self, params: &CardListParams) -> Result<CardList, CardError> {
        let operation = CardOperation::List;
        let parent = params
            .validate_parent()
            .map_err(|e| Self::rejected(operation, e))?;
        let (method, path) =
            resolve(operation, parent, None).map_err(|e| Self::rejected(operation, e))?;
        let payload = params
            .to_payload()
            .map_err(|e| Self::rejected(operation, e))?;

        self.dispatch(operation, method, path, Some(payload)).await
    }

    fn rejected(operation: CardOperation, error: ParamsError) -> CardError {
        tracing::debug!(
            operation = operation.as_str(),
            "Rejected card params: {error}"
        );
        CardError::Params(error)
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: String,
        payload: Option<Payload>,
        shape: ResponseShape,
    ) -> Result<serde_json::Value, CardError> {
        let request = HttpRequest::builder(method, path, self.api_key())
            .maybe_payload(payload)
            .response_shape(shape)
            .build()
            .map_err(ParamsError::from)?;

        let response = self.backend.call(request).await?;
        Ok(response.body)
    }

    async fn dispatch<T: DeserializeOwned + Decoded>(
        &self,
        operation: CardOperation,
        method: HttpMethod,
        path: String,
        payload: Option<Payload>,
    ) -> Result<T, CardError> {
        let resource = T::RESOURCE;

        let body = self.send(method, path, payload, T::SHAPE).await?;
        let decoded = serde_json::from_value(body).map_err(|source| {
            tracing::warn!(
                operation = operation.as_str(),
                "Failed to decode {resource} response: {source}"
            );
            CardError::Decode { resource, source }
        })?;

        tracing::debug!(operation = operation.as_str(), "Card request completed");
        Ok(decoded)
    }
}
