//! REST resource infrastructure for the shop API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: default `find`, `all`, `create`, `update` and
//!   `delete` operations driven by a static path table
//! - **[`Page<T>`]**: the paginated list shape, with `Deref` to the records
//! - **Path building**: [`ResourcePath`] tables resolved by [`get_path`]
//! - **[`ResourceError`]**: error type for resource operations
//!
//! Concrete resources live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::{ApiBaseUrl, ConsoleConfig, PageSize, RestClient};
//! use shop_console::rest::RestResource;
//! use shop_console::rest::resources::{Category, Shop};
//!
//! let client = RestClient::new(&config)?;
//!
//! // List the first page of shops
//! let page = Shop::all(&client, 0, PageSize::LIST).await?;
//! println!("page {} of {}", page.display_page(), page.total_pages);
//!
//! // Create, rename and delete a category
//! let created = Category::create(&client, &Category::named("Toys")).await?;
//! let renamed = Category::update(&client, &Category { name: "Games".into(), ..created }).await?;
//! Category::delete(&client, renamed.id.unwrap_or_default()).await?;
//! ```

mod errors;
mod path;
mod resource;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::{Page, Pageable};

pub(crate) use resource::serialize_to_query;
