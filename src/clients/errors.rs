//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: a non-2xx response, carrying the server's error body
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: the unified error type for the HTTP layer
//!
//! The backend reports failures as
//! `{ timestamp, status, error, message, path }`; [`ApiErrorBody`] is that
//! shape, and its `message` is what gets shown to the user.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("{}: {}", e.code, e.message().unwrap_or("no message"));
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// The error body returned by the shop backend.
///
/// Every field is optional: proxies and unexpected failures may return a
/// partial body or none at all.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    /// Server-side timestamp; sent either as epoch millis or as a string.
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
    /// The HTTP status echoed by the server.
    #[serde(default)]
    pub status: Option<u16>,
    /// Short reason phrase (e.g. "Bad Request").
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable message meant for the user.
    #[serde(default)]
    pub message: Option<String>,
    /// Request path echoed by the server.
    #[serde(default)]
    pub path: Option<String>,
}

impl ApiErrorBody {
    /// Extracts the error body from a parsed JSON value.
    ///
    /// Returns the default (all `None`) when the value is not an object.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// Error returned when the server answers with a non-2xx status.
#[derive(Debug, Error)]
#[error("HTTP {code}: {}", .body.message.as_deref().or(.body.error.as_deref()).unwrap_or("request failed"))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error body sent by the server.
    pub body: ApiErrorBody,
}

impl HttpResponseError {
    /// Returns the server-provided message, if present and not blank.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body
            .message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the server-provided message of a response error.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.message(),
            _ => None,
        }
    }

    /// Returns the HTTP status code of a response error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
