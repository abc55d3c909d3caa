//! Convenience entry point bound to a shared configuration.

use std::sync::Arc;

use crate::cards::card::{Card, CardList};
use crate::cards::client::CardClient;
use crate::cards::errors::CardError;
use crate::cards::params::{CardDeleteParams, CardGetParams, CardListParams, CardParams};
use crate::clients::{Backend, HttpClient};
use crate::config::StripeConfig;

/// Card operations bound to a [`StripeConfig`].
///
/// Each call first copies the configuration's current API key into the
/// underlying [`CardClient`], so [`StripeConfig::rotate_api_key`] is picked
/// up by the next call.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_cards::{ApiKey, CardListParams, Cards, StripeConfig};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()
///     .unwrap();
/// let cards = Cards::new(&config);
///
/// let page = cards
///     .list(&CardListParams {
///         customer: Some("cus_1".to_string()),
///         limit: Some(10),
///         ..Default::default()
///     })
///     .await?;
///
/// config.rotate_api_key(ApiKey::new("sk_test_456").unwrap());
/// // Subsequent calls authenticate with sk_test_456.
/// ```
#[derive(Debug)]
pub struct Cards<B: Backend = HttpClient> {
    config: StripeConfig,
    client: CardClient<B>,
}

// Verify Cards is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cards>();
};

impl Cards {
    /// Creates a facade using the default HTTP backend for `config`.
    #[must_use]
    pub fn new(config: &StripeConfig) -> Self {
        Self::with_backend(config, Arc::new(config.backend()))
    }
}

impl<B: Backend> Cards<B> {
    /// Creates a facade dispatching through `backend`.
    #[must_use]
    pub fn with_backend(config: &StripeConfig, backend: Arc<B>) -> Self {
        Self {
            config: config.clone(),
            client: CardClient::new(backend, config.api_key()),
        }
    }

    /// Returns the configuration this facade reads its key from.
    #[must_use]
    pub const fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &CardClient<B> {
        &self.client
    }

    fn refresh(&self) -> &CardClient<B> {
        let key = self.config.api_key();
        if key != self.client.api_key() {
            tracing::debug!("Refreshing card client API key from configuration");
        }
        self.client.set_api_key(key);
        &self.client
    }

    /// Creates a card. See [`CardClient::create`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`CardClient::create`].
    pub async fn create(&self, params: &CardParams) -> Result<Card, CardError> {
        self.refresh().create(params).await
    }

    /// Retrieves a card. See [`CardClient::get`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`CardClient::get`].
    pub async fn get(&self, id: &str, params: &CardGetParams) -> Result<Card, CardError> {
        self.refresh().get(id, params).await
    }

    /// Updates a card. See [`CardClient::update`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`CardClient::update`].
    pub async fn update(&self, id: &str, params: &CardParams) -> Result<Card, CardError> {
        self.refresh().update(id, params).await
    }

    /// Deletes a card. See [`CardClient::delete`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`CardClient::delete`].
    pub async fn delete(&self, id: &str, params: &CardDeleteParams) -> Result<(), CardError> {
        self.refresh().delete(id, params).await
    }

    /// Lists a page of cards. See [`CardClient::list`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`CardClient::list`].
    pub async fn list(&self, params: &CardListParams) -> Result<CardList, CardError> {
        self.refresh().list(params).await
    }
}
