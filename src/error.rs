//! Error types for console configuration.
//!
//! Configuration constructors return `Result<T, ConfigError>` so that an
//! invalid base URL or page size is rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use shop_console::{ApiBaseUrl, ConfigError};
//!
//! let result = ApiBaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidApiBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ConsoleConfig`](crate::ConsoleConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL is empty or has no `http`/`https` scheme.
    #[error("Invalid API base URL '{url}'. Expected an absolute URL such as 'http://localhost:8080/api/v1'.")]
    InvalidApiBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A page size of zero was requested.
    #[error("Invalid page size {size}. Page sizes must be at least 1.")]
    InvalidPageSize {
        /// The rejected size.
        size: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The variable name.
        name: &'static str,
    },

    /// An environment variable holds a value that cannot be parsed.
    #[error("Environment variable '{name}' has invalid value '{value}'.")]
    InvalidEnvVar {
        /// The variable name.
        name: &'static str,
        /// The raw value found.
        value: String,
    },
}
