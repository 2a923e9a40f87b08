//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with a [`ConfigError`].

use crate::error::ConfigError;
use std::fmt;

/// The validated base URL of the shop REST API.
///
/// The URL must use the `http` or `https` scheme. A trailing slash is
/// stripped so that resource paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use shop_console::ApiBaseUrl;
///
/// let base = ApiBaseUrl::new("http://localhost:8080/api/v1/").unwrap();
/// assert_eq!(base.as_ref(), "http://localhost:8080/api/v1");
/// assert_eq!(base.join("shops/3"), "http://localhost:8080/api/v1/shops/3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBaseUrl`] if the URL is empty or has
    /// no `http://` / `https://` scheme followed by a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidApiBaseUrl { url }),
        }
    }

    /// Joins a relative resource path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A page size for paginated list requests. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageSize(u32);

impl PageSize {
    /// Page size of the product, shop and category list pages.
    pub const LIST: Self = Self(9);

    /// Page size of the product panel shown on a shop's detail page.
    pub const SHOP_PRODUCTS: Self = Self(6);

    /// Creates a new page size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] if `size` is zero.
    pub const fn new(size: u32) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidPageSize { size });
        }
        Ok(Self(size))
    }

    /// Returns the size as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::LIST
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_http_and_https() {
        assert!(ApiBaseUrl::new("http://localhost:8080").is_ok());
        assert!(ApiBaseUrl::new("https://shops.example.com/api").is_ok());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let base = ApiBaseUrl::new("http://localhost:8080/api/v1///").unwrap();
        assert_eq!(base.as_ref(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme_or_host() {
        for bad in ["", "   ", "localhost:8080", "ftp://host", "http://", "https:///path"] {
            assert!(
                matches!(ApiBaseUrl::new(bad), Err(ConfigError::InvalidApiBaseUrl { .. })),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_base_url_join_avoids_double_slash() {
        let base = ApiBaseUrl::new("http://api.test").unwrap();
        assert_eq!(base.join("/shops"), "http://api.test/shops");
        assert_eq!(base.join("shops/search"), "http://api.test/shops/search");
    }

    #[test]
    fn test_page_size_rejects_zero() {
        assert!(matches!(
            PageSize::new(0),
            Err(ConfigError::InvalidPageSize { size: 0 })
        ));
        assert_eq!(PageSize::new(12).unwrap().get(), 12);
    }

    #[test]
    fn test_page_size_constants() {
        assert_eq!(PageSize::LIST.get(), 9);
        assert_eq!(PageSize::SHOP_PRODUCTS.get(), 6);
        assert_eq!(PageSize::default(), PageSize::LIST);
    }
}
