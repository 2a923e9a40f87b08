//! REST resource implementations for the shop backend.
//!
//! # Available Resources
//!
//! ## Shop Resource
//!
//! Shops carry opening hours and a vacation flag. Besides CRUD they support
//! sorted/filtered listing and search.
//!
//! ```rust,ignore
//! use shop_console::rest::resources::{Shop, ShopSearchParams};
//! use shop_console::rest::RestResource;
//!
//! let shop = Shop::find(&client, 4).await?;
//! let hits = Shop::search(&client, &ShopSearchParams::by_name("bak")).await?;
//! ```
//!
//! ## Product Resource
//!
//! Products are localized and priced in cents. They can be listed per shop
//! and per category.
//!
//! ```rust,ignore
//! use shop_console::rest::resources::{Product, ProductQuery};
//!
//! let page = Product::all_in(&client, &ProductQuery::for_shop(4), 0, PageSize::SHOP_PRODUCTS).await?;
//! ```
//!
//! ## Category Resource
//!
//! ```rust,ignore
//! use shop_console::rest::resources::Category;
//! use shop_console::rest::RestResource;
//!
//! let categories = Category::all(&client, 0, PageSize::LIST).await?;
//! ```

mod category;
mod product;
mod shop;

pub use category::Category;
pub use product::{Locale, LocalizedProduct, Product, ProductQuery, ShopRef};
pub use shop::{OpeningHours, Shop, ShopListParams, ShopSearchParams, ShopSort};
