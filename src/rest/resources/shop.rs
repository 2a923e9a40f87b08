//! `Shop` resource implementation.
//!
//! A shop has a name, a vacation flag and weekly opening hours. The server
//! also reports when it was created and how many products and distinct
//! categories it holds; those fields are read-only and never sent back.
//!
//! Besides the standard CRUD operations, shops support two extra queries:
//!
//! - [`Shop::all_with`]: a page of shops sorted and filtered by the server
//! - [`Shop::search`]: full-text search returning every hit as a plain array
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::rest::resources::{Shop, ShopListParams, ShopSearchParams, ShopSort};
//! use shop_console::rest::RestResource;
//!
//! let params = ShopListParams {
//!     sort_by: Some(ShopSort::CreatedAt),
//!     in_vacations: Some(false),
//!     ..Default::default()
//! };
//! let page = Shop::all_with(&client, &params, 0, PageSize::LIST).await?;
//!
//! let hits = Shop::search(&client, &ShopSearchParams::by_name("bakery")).await?;
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::config::PageSize;
use crate::rest::{
    serialize_to_query, Page, ResourceError, ResourceOperation, ResourcePath, RestResource,
};

/// A shop managed by the console.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id` - Assigned on creation, omitted from create bodies
/// - `created_at` - Creation date
/// - `nb_products` - Number of products in the shop
/// - `nb_distinct_categories` - Number of distinct categories across those products
///
/// ## Writable Fields
/// - `name`
/// - `in_vacations`
/// - `opening_hours`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// The unique identifier of the shop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The shop name.
    #[serde(default)]
    pub name: String,

    /// Whether the shop is currently closed for vacations.
    #[serde(default)]
    pub in_vacations: bool,

    /// When the shop was created.
    #[serde(default, skip_serializing)]
    pub created_at: Option<NaiveDate>,

    /// Number of products in the shop.
    #[serde(default, skip_serializing)]
    pub nb_products: u64,

    /// Number of distinct categories across the shop's products.
    #[serde(default, skip_serializing)]
    pub nb_distinct_categories: u64,

    /// Weekly opening hours. The same day may appear more than once.
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,
}

/// One opening slot of a shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    /// The server-side ID of the slot, if it has been stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Day of the week, Monday = 1 through Sunday = 7.
    pub day: u8,

    /// Opening time, sent as `HH:MM:SS`.
    pub open_at: NaiveTime,

    /// Closing time, sent as `HH:MM:SS`.
    pub close_at: NaiveTime,
}

impl Default for OpeningHours {
    /// Monday, 09:00:00 to 18:00:00.
    fn default() -> Self {
        Self {
            id: None,
            day: 1,
            open_at: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            close_at: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
        }
    }
}

/// Sort keys accepted by the shop list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShopSort {
    /// Alphabetical by name.
    Name,
    /// By creation date.
    CreatedAt,
    /// By number of products.
    NbProducts,
}

/// Sorting and filtering for [`Shop::all_with`].
///
/// Unset fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopListParams {
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<ShopSort>,

    /// Only shops whose vacation flag matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_vacations: Option<bool>,

    /// Only shops created on or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<NaiveDate>,

    /// Only shops created on or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<NaiveDate>,
}

/// Filters for [`Shop::search`].
///
/// Unset fields are left out of the request. A blank name counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSearchParams {
    /// Free-text match on the shop name.
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,

    /// Only shops whose vacation flag matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_vacations: Option<bool>,

    /// Lower bound on the creation date, sent as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Upper bound on the creation date, sent as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl ShopSearchParams {
    /// Filters on name only.
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns `true` when no filter would be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        is_blank(&self.name)
            && self.in_vacations.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

#[allow(clippy::ref_option)]
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl Shop {
    /// Creates an unsaved shop with the given name and no opening hours.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Fetches one page of shops, sorted and filtered by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for non-2xx responses.
    pub async fn all_with(
        client: &RestClient,
        params: &ShopListParams,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Self>, ResourceError> {
        Self::all_with_query(client, params, page, size).await
    }

    /// Searches shops. Every hit is returned in one array.
    ///
    /// Only the filters that are set are sent; `ShopSearchParams::default()`
    /// issues `GET shops/search` with no query string.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for non-2xx responses.
    pub async fn search(
        client: &RestClient,
        filters: &ShopSearchParams,
    ) -> Result<Vec<Self>, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Search, None)?;
        let query = serialize_to_query(filters).map_err(|source| ResourceError::Serialize {
            resource: Self::NAME,
            source,
        })?;

        let response = client.request(method, &path, None, Some(query)).await?;
        Self::parse(response)
    }
}

impl RestResource for Shop {
    const NAME: &'static str = "Shop";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "shops/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "shops"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Search, &[], "shops/search"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "shops"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &[], "shops"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "shops/{id}",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}
