//! # Shop Console
//!
//! A headless administration console for a shop backend: a typed REST
//! client for shops, products and categories, plus the view-models behind
//! the console's list, search, form and card screens.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ConsoleConfig`] and [`ConsoleConfigBuilder`]
//! - Validated newtypes for the API base URL and page sizes
//! - An async HTTP client ([`HttpClient`], [`RestClient`]) returning server errors unchanged
//! - CRUD, listing and search operations on [`rest::resources`] via [`rest::RestResource`]
//! - Paginated list views with stale-response protection ([`console::ListView`])
//! - Form state machines with client-side validation ([`console::FormView`])
//! - Card projections and price formatting
//!
//! ## Quick Start
//!
//! ```rust
//! use shop_console::{ApiBaseUrl, ConsoleConfig, PageSize};
//!
//! let config = ConsoleConfig::builder()
//!     .api_base(ApiBaseUrl::new("http://localhost:8080/api/v1").unwrap())
//!     .shop_products_page_size(PageSize::SHOP_PRODUCTS)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.list_page_size().get(), 9);
//! ```
//!
//! Or from the environment (`SHOP_CONSOLE_API`, `SHOP_CONSOLE_TIMEOUT_SECS`):
//!
//! ```rust,ignore
//! let config = shop_console::ConsoleConfig::from_env()?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shop_console::{ConsoleConfig, PageSize, RestClient};
//! use shop_console::rest::RestResource;
//! use shop_console::rest::resources::{Product, ProductQuery, Shop, ShopSearchParams};
//!
//! let client = RestClient::new(&config)?;
//!
//! let shop = Shop::find(&client, 4).await?;
//! let hits = Shop::search(&client, &ShopSearchParams::by_name("bak")).await?;
//! let page = Product::all_in(&client, &ProductQuery::for_shop(4), 0, PageSize::SHOP_PRODUCTS).await?;
//!
//! match Shop::find(&client, 999).await {
//!     Ok(shop) => println!("{}", shop.name),
//!     Err(e) => println!("{}", e.server_message().unwrap_or("request failed")),
//! }
//! ```
//!
//! ## Driving a Screen
//!
//! ```rust,ignore
//! use shop_console::console::{ListView, ProductListing, Services};
//!
//! let services = Services::with_tracing();
//! let mut products = ListView::<ProductListing>::new(&config);
//!
//! let ticket = products.mount();
//! products.load(&client, &services, ticket).await.ok();
//!
//! if let Some(ticket) = products.select_page(2) {
//!     products.load(&client, &services, ticket).await.ok();
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and collaborators are passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Server errors pass through**: status and message reach the caller unchanged
//! - **Latest input wins**: responses to superseded requests are discarded
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod console;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiBaseUrl, ConsoleConfig, ConsoleConfigBuilder, PageSize};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiErrorBody, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, RestClient, RestError,
};

// Re-export resource types
pub use rest::{Page, ResourceError};
