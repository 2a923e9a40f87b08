//! HTTP client for the shop REST API.
//!
//! This module provides the [`HttpClient`] type. Each call to
//! [`HttpClient::request`] sends exactly one request: there is no retry
//! and no caching.

use std::collections::HashMap;

use crate::clients::errors::{ApiErrorBody, HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiBaseUrl, ConsoleConfig};

/// Crate version from Cargo.toml.
pub const CONSOLE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the shop REST API.
///
/// `HttpClient` is `Send + Sync` and cheap to share behind a reference.
///
/// # Example
///
/// ```rust,ignore
/// use shop_console::{ApiBaseUrl, ConsoleConfig};
/// use shop_console::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = ConsoleConfig::builder()
///     .api_base(ApiBaseUrl::new("http://localhost:8080/api/v1")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "shops/1").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base: ApiBaseUrl,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the console configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client
    /// cannot be built (for example when TLS initialization fails).
    pub fn new(config: &ConsoleConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Shop Console v{CONSOLE_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base: config.api_base().clone(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.base.as_ref()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a single HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`), carrying the
    ///   status code and the server's error body unchanged
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base.join(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            url = %url,
            "sending request to shop API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let body_text = res.text().await?;
        let response = HttpResponse::new(code, HttpResponse::parse_body(&body_text));

        if response.is_ok() {
            return Ok(response);
        }

        let body = ApiErrorBody::from_json(&response.body);
        tracing::warn!(
            status = code,
            path = %request.path,
            message = body.message.as_deref().unwrap_or(""),
            "shop API request failed"
        );

        Err(HttpError::Response(HttpResponseError { code, body }))
    }
}
