//! Configuration types for the Stripe cards client.
//!
//! # Overview
//!
//! - [`StripeConfig`]: shared settings (API key, base URL, version, timeout)
//! - [`StripeConfigBuilder`]: a builder for [`StripeConfig`]
//! - [`ApiKey`]: a validated secret key with masked debug output
//! - [`ApiBase`]: a validated API base URL
//! - [`ApiVersion`]: an optional `Stripe-Version` pin
//!
//! # Example
//!
//! ```rust
//! use stripe_cards::{ApiKey, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version("2014-08-04".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_key().as_ref(), "sk_test_123");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiBase, ApiKey};
pub use version::ApiVersion;

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use crate::clients::HttpClient;
use crate::error::ConfigError;

/// Default request timeout applied by [`HttpClient`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Configuration shared by every client built from it.
///
/// # Key Rotation
///
/// The API key lives behind a shared lock: [`rotate_api_key`](Self::rotate_api_key)
/// on any clone is observed by all clones. The [`Cards`](crate::cards::Cards)
/// facade re-reads the key before every call, so rotation takes effect on the
/// next request without rebuilding clients.
///
/// # Thread Safety
///
/// `StripeConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct StripeConfig {
    api_key: Arc<RwLock<ApiKey>>,
    api_base: ApiBase,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Duration,
}

impl StripeConfig {
    /// Creates a new builder for constructing a `StripeConfig`.
    #[must_use]
    pub fn builder() -> StripeConfigBuilder {
        StripeConfigBuilder::new()
    }

    /// Returns the current API key.
    #[must_use]
    pub fn api_key(&self) -> ApiKey {
        self.api_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the API key for this configuration and all of its clones.
    pub fn rotate_api_key(&self, key: ApiKey) {
        *self
            .api_key
            .write()
            .unwrap_or_else(PoisonError::into_inner) = key;
        tracing::debug!("API key rotated");
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the pinned API version, if any.
    #[must_use]
    pub const fn api_version(&self) -> Option<ApiVersion> {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout the HTTP backend enforces.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the default HTTP backend for this configuration.
    ///
    /// # Panics
    ///
    /// See [`HttpClient::new`].
    #[must_use]
    pub fn backend(&self) -> HttpClient {
        HttpClient::new(self)
    }
}

// Verify StripeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeConfig>();
};

/// Builder for [`StripeConfig`].
///
/// `api_key` is required. Defaults:
///
/// - `api_base`: `https://api.stripe.com/v1`
/// - `api_version`: `None` (account default)
/// - `user_agent_prefix`: `None`
/// - `timeout`: 80 seconds
#[derive(Debug, Default)]
pub struct StripeConfigBuilder {
    api_key: Option<ApiKey>,
    api_base: Option<ApiBase>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl StripeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Pins the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`StripeConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<StripeConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(StripeConfig {
            api_key: Arc::new(RwLock::new(api_key)),
            api_base: self.api_base.unwrap_or_default(),
            api_version: self.api_version,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
