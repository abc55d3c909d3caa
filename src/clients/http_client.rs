//! reqwest-based [`Backend`] implementation.

use std::collections::HashMap;

use crate::clients::backend::Backend;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, ResponseShape};
use crate::clients::http_response::HttpResponse;
use crate::config::StripeConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP backend talking to the Stripe API.
///
/// The client handles:
/// - URL construction from the configured API base
/// - Default headers (User-Agent, Accept, optional `Stripe-Version`)
/// - Bearer authentication with the key carried by each request
/// - Payload encoding: query string for GET/DELETE, form body for POST
/// - Mapping non-2xx responses to [`HttpError::Response`]
///
/// The request timeout comes from [`StripeConfig::timeout`]. Requests are
/// attempted exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and is meant to be shared behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_cards::{ApiKey, StripeConfig};
/// use stripe_cards::clients::{Backend, HttpMethod, HttpRequest, ResponseShape};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()
///     .unwrap();
/// let client = config.backend();
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/customers/cus_1/cards/card_1", config.api_key())
///     .response_shape(ResponseShape::Card)
///     .build()
///     .unwrap();
///
/// let response = client.call(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    api_base: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &StripeConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Stripe Cards Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(version) = config.api_version() {
            default_headers.insert("Stripe-Version".to_string(), version.to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: config.api_base().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the API base URL requests are sent to.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to the API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error or timeout occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.api_base, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.bearer_auth(request.api_key.as_ref());

        if let Some(payload) = &request.payload {
            req_builder = match request.http_method {
                HttpMethod::Post => req_builder.form(payload),
                HttpMethod::Get | HttpMethod::Delete => req_builder.query(payload),
            };
        }

        tracing::debug!(
            method = request.http_method.as_str(),
            path = %request.path,
            "Sending request to Stripe API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let ok = (200..=299).contains(&code);

        let body = if ok && request.response_shape == ResponseShape::Empty {
            serde_json::json!({})
        } else {
            let body_text = res.text().await?;
            if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text)
                    .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let error = Self::response_error(&response);
        tracing::debug!(
            code,
            request_id = error.error_reference.as_deref().unwrap_or("-"),
            "Stripe API returned an error: {}",
            error.message
        );
        Err(HttpError::Response(error))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Builds the error for a non-2xx response.
    ///
    /// The API reports errors as `{"error": {"type": ..., "message": ...}}`;
    /// bodies of any other shape are passed through as the message.
    fn response_error(response: &HttpResponse) -> HttpResponseError {
        let error = response.body.get("error");
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| response.body.to_string(), ToString::to_string);
        let error_type = error
            .and_then(|e| e.get("type"))
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);

        HttpResponseError {
            code: response.code,
            message,
            error_type,
            error_reference: response.request_id().map(String::from),
        }
    }
}

impl Backend for HttpClient {
    async fn call(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.request(request).await
    }
}
