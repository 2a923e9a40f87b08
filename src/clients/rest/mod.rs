//! REST client for the shop API.
//!
//! [`RestClient`] sits on top of [`HttpClient`](crate::clients::HttpClient)
//! and sends requests over paths relative to the configured API base URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::{ApiBaseUrl, ConsoleConfig, HttpMethod, RestClient};
//!
//! let config = ConsoleConfig::builder()
//!     .api_base(ApiBaseUrl::new("http://localhost:8080/api/v1")?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! let response = client
//!     .request(HttpMethod::Get, "categories", None, None)
//!     .await?;
//! println!("{}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! Leading and trailing slashes are stripped (`/shops/` becomes `shops`);
//! a path that is empty after stripping is rejected with
//! [`RestError::InvalidPath`].

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
