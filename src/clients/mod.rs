//! HTTP client types for the shop REST API.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client, one request per call
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response
//! - [`HttpMethod`] and [`DataType`]
//! - [`rest::RestClient`]: requests over paths relative to the API base URL
//! - [`HttpError`], [`HttpResponseError`], [`ApiErrorBody`]: failures, with the
//!   server's error body kept intact
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use shop_console::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//! let query = HashMap::from([
//!     ("page".to_string(), "0".to_string()),
//!     ("size".to_string(), "9".to_string()),
//! ]);
//! let request = HttpRequest::builder(HttpMethod::Get, "categories")
//!     .query(query)
//!     .build()?;
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{ApiErrorBody, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CONSOLE_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};
