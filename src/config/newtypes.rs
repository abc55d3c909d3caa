//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with a [`ConfigError`].

use crate::error::ConfigError;
use std::fmt;

/// A validated Stripe secret API key.
///
/// The key is sent as a bearer token on every request. Its value is masked
/// in `Debug` output so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use stripe_cards::ApiKey;
///
/// let key = ApiKey::new("sk_test_123").unwrap();
/// assert_eq!(key.as_ref(), "sk_test_123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL, e.g. `https://api.stripe.com/v1`.
///
/// Trailing slashes are stripped so request paths (which always start with
/// `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use stripe_cards::ApiBase;
///
/// let base = ApiBase::new("https://api.stripe.com/v1/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.stripe.com/v1");
/// assert_eq!(base.scheme(), "https");
/// assert_eq!(base.host_name(), "api.stripe.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl ApiBase {
    /// The production Stripe API base.
    pub const DEFAULT: &'static str = "https://api.stripe.com/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] if the URL has no `http` or
    /// `https` scheme, no host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidApiBase { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(invalid());
        }
        if url.contains(['?', '#']) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_end: 22,
        }
    }
}

impl AsRef<str> for ApiBase {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("sk_live_very_secret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("very_secret"));
        assert_eq!(debug, "ApiKey(*****)");
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let base = ApiBase::new("http://localhost:12111/v1/").unwrap();
        assert_eq!(base.as_ref(), "http://localhost:12111/v1");
        assert_eq!(base.scheme(), "http");
        assert_eq!(base.host_name(), "localhost");
    }

    #[test]
    fn test_api_base_rejects_invalid_urls() {
        for url in ["", "api.stripe.com", "ftp://api.stripe.com", "https://", "https://x/?a=1"] {
            assert!(
                matches!(ApiBase::new(url), Err(ConfigError::InvalidApiBase { .. })),
                "expected {url:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_api_base_default_matches_parsed_default() {
        let parsed = ApiBase::new(ApiBase::DEFAULT).unwrap();
        assert_eq!(ApiBase::default(), parsed);
        assert_eq!(ApiBase::default().host_name(), "api.stripe.com");
    }
}
