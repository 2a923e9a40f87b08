//! Configuration types for the shop console.
//!
//! # Overview
//!
//! - [`ConsoleConfig`]: the settings shared by every client and view
//! - [`ConsoleConfigBuilder`]: a builder for [`ConsoleConfig`]
//! - [`ApiBaseUrl`]: the validated REST API base URL
//! - [`PageSize`]: a validated, non-zero page size
//!
//! # Example
//!
//! ```rust
//! use shop_console::{ApiBaseUrl, ConsoleConfig};
//!
//! let config = ConsoleConfig::builder()
//!     .api_base(ApiBaseUrl::new("http://localhost:8080/api/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.list_page_size().get(), 9);
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, PageSize};

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const API_BASE_ENV: &str = "SHOP_CONSOLE_API";

/// Environment variable holding an optional request timeout in seconds.
pub const TIMEOUT_ENV: &str = "SHOP_CONSOLE_TIMEOUT_SECS";

/// Configuration for the shop console.
///
/// `ConsoleConfig` is `Clone`, `Send` and `Sync`; build it once and hand a
/// reference to every client.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    api_base: ApiBaseUrl,
    list_page_size: PageSize,
    shop_products_page_size: PageSize,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ConsoleConfig {
    /// Creates a new builder for constructing a `ConsoleConfig`.
    #[must_use]
    pub fn builder() -> ConsoleConfigBuilder {
        ConsoleConfigBuilder::new()
    }

    /// Reads the configuration from the process environment.
    ///
    /// `SHOP_CONSOLE_API` is required. `SHOP_CONSOLE_TIMEOUT_SECS` is
    /// optional and must be a whole number of seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when the base URL is unset,
    /// [`ConfigError::InvalidEnvVar`] when the timeout does not parse, or
    /// [`ConfigError::InvalidApiBaseUrl`] when the URL is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup(API_BASE_ENV).ok_or(ConfigError::MissingEnvVar {
            name: API_BASE_ENV,
        })?;

        let mut builder = Self::builder().api_base(ApiBaseUrl::new(api_base)?);

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBaseUrl {
        &self.api_base
    }

    /// Returns the page size used by the product, shop and category lists.
    #[must_use]
    pub const fn list_page_size(&self) -> PageSize {
        self.list_page_size
    }

    /// Returns the page size used by the product panel on a shop page.
    #[must_use]
    pub const fn shop_products_page_size(&self) -> PageSize {
        self.shop_products_page_size
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ConsoleConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConsoleConfig>();
};

/// Builder for [`ConsoleConfig`].
///
/// `api_base` is required. Page sizes default to 9 (lists) and 6 (shop
/// products panel); there is no timeout and no user agent prefix.
#[derive(Debug, Default)]
pub struct ConsoleConfigBuilder {
    api_base: Option<ApiBaseUrl>,
    list_page_size: Option<PageSize>,
    shop_products_page_size: Option<PageSize>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ConsoleConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_base(mut self, url: ApiBaseUrl) -> Self {
        self.api_base = Some(url);
        self
    }

    /// Overrides the page size of the list pages.
    #[must_use]
    pub const fn list_page_size(mut self, size: PageSize) -> Self {
        self.list_page_size = Some(size);
        self
    }

    /// Overrides the page size of the shop products panel.
    #[must_use]
    pub const fn shop_products_page_size(mut self, size: PageSize) -> Self {
        self.shop_products_page_size = Some(size);
        self
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ConsoleConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_base` is not set.
    pub fn build(self) -> Result<ConsoleConfig, ConfigError> {
        let api_base = self
            .api_base
            .ok_or(ConfigError::MissingRequiredField { field: "api_base" })?;

        Ok(ConsoleConfig {
            api_base,
            list_page_size: self.list_page_size.unwrap_or(PageSize::LIST),
            shop_products_page_size: self
                .shop_products_page_size
                .unwrap_or(PageSize::SHOP_PRODUCTS),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
