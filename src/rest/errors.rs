//! Resource-specific error types for REST API operations.
//!
//! Server failures are never reinterpreted: a non-2xx response surfaces as
//! [`ResourceError::Http`] with the status code and the server's error body
//! exactly as received. [`ResourceError::server_message`] digs out the
//! `message` field that views show to the user.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::rest::{ResourceError, RestResource};
//!
//! match Shop::find(&client, 7).await {
//!     Ok(shop) => println!("{}", shop.name),
//!     Err(e) => println!("{}", e.server_message().unwrap_or("Something went wrong")),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No path is declared for the operation with the provided IDs.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// An operation that needs a server-assigned ID was given a record without one.
    #[error("{resource} has no id; it must be created before it can be {operation}d")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// The record could not be serialized into a request body or query.
    #[error("Failed to serialize {resource}: {source}")]
    Serialize {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A successful response body did not match the expected shape.
    #[error("Failed to deserialize {resource} response: {source}")]
    Deserialize {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred, including non-2xx responses.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error other than an HTTP failure occurred.
    #[error(transparent)]
    Rest(RestError),
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(http) => Self::Http(http),
            other => Self::Rest(other),
        }
    }
}

impl ResourceError {
    /// Returns the server-provided error message, when the server sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http(e) => e.server_message(),
            _ => None,
        }
    }

    /// Returns the HTTP status code of a server error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
