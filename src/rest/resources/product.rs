//! `Product` resource implementation.
//!
//! A product belongs to at most one shop and any number of categories. Its
//! name and description are localized: `localized_products` holds one entry
//! per [`Locale`]. Prices are integer cents.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::rest::resources::{Locale, Product, ProductQuery};
//! use shop_console::rest::RestResource;
//!
//! // Products of shop 4 in category 2, second page
//! let query = ProductQuery { shop_id: Some(4), category_id: Some(2) };
//! let page = Product::all_in(&client, &query, 1, PageSize::SHOP_PRODUCTS).await?;
//!
//! for product in page.iter() {
//!     println!("{}", product.display_name(Locale::En));
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::config::PageSize;
use crate::rest::resources::Category;
use crate::rest::{Page, ResourceError, ResourceOperation, ResourcePath, RestResource};

/// Languages a product can be described in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Locale {
    /// French, the primary locale.
    Fr,
    /// English.
    En,
}

impl Locale {
    /// Every supported locale, primary first.
    pub const ALL: [Self; 2] = [Self::Fr, Self::En];

    /// Returns the wire code (`"FR"` or `"EN"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "FR",
            Self::En => "EN",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Name and description of a product in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedProduct {
    /// The server-side ID of the entry, if it has been stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Which language this entry is in.
    pub locale: Locale,

    /// Product name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Product description.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl LocalizedProduct {
    /// Creates an empty entry for `locale`.
    #[must_use]
    pub const fn empty(locale: Locale) -> Self {
        Self {
            id: None,
            locale,
            name: String::new(),
            description: String::new(),
        }
    }

    /// Returns `true` if both name and description are empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.description.trim().is_empty()
    }
}

/// The shop a product belongs to, as embedded in product responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRef {
    /// The shop ID.
    pub id: u64,

    /// The shop name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// A product sold by a shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The unique identifier of the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Price in cents.
    #[serde(default)]
    pub price: i64,

    /// The owning shop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop: Option<ShopRef>,

    /// Categories the product is filed under.
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Localized names and descriptions, at most one per locale.
    #[serde(default)]
    pub localized_products: Vec<LocalizedProduct>,
}

/// Scope for [`Product::all_in`].
///
/// `None` means "any": a `category_id` of `None` lists every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Only products of this shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<u64>,

    /// Only products filed under this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

impl ProductQuery {
    /// Products of one shop, any category.
    #[must_use]
    pub const fn for_shop(shop_id: u64) -> Self {
        Self {
            shop_id: Some(shop_id),
            category_id: None,
        }
    }
}

impl Product {
    /// Returns the entry for `locale`, if present.
    #[must_use]
    pub fn localized(&self, locale: Locale) -> Option<&LocalizedProduct> {
        self.localized_products.iter().find(|l| l.locale == locale)
    }

    /// Returns the entry for `locale`, inserting an empty one if absent.
    pub fn localized_mut(&mut self, locale: Locale) -> &mut LocalizedProduct {
        let index = match self
            .localized_products
            .iter()
            .position(|l| l.locale == locale)
        {
            Some(index) => index,
            None => {
                self.localized_products.push(LocalizedProduct::empty(locale));
                self.localized_products.len() - 1
            }
        };
        &mut self.localized_products[index]
    }

    /// Adds an empty entry for every locale that has none.
    ///
    /// Existing entries are left untouched and no locale is duplicated.
    pub fn fill_missing_locales(&mut self) {
        for locale in Locale::ALL {
            if self.localized(locale).is_none() {
                self.localized_products.push(LocalizedProduct::empty(locale));
            }
        }
    }

    /// Returns the name in `preferred`, falling back to French, then to any
    /// non-empty name.
    #[must_use]
    pub fn display_name(&self, preferred: Locale) -> &str {
        self.pick_localized(preferred, |l| &l.name)
    }

    /// Returns the description in `preferred`, falling back like
    /// [`Product::display_name`].
    #[must_use]
    pub fn display_description(&self, preferred: Locale) -> &str {
        self.pick_localized(preferred, |l| &l.description)
    }

    fn pick_localized<'a>(
        &'a self,
        preferred: Locale,
        field: impl Fn(&'a LocalizedProduct) -> &'a String,
    ) -> &'a str {
        [preferred, Locale::Fr]
            .into_iter()
            .filter_map(|locale| self.localized(locale))
            .map(&field)
            .chain(self.localized_products.iter().map(&field))
            .find(|s| !s.trim().is_empty())
            .map_or("", String::as_str)
    }

    /// Fetches one page of products scoped to a shop and/or a category.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for non-2xx responses.
    pub async fn all_in(
        client: &RestClient,
        query: &ProductQuery,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Self>, ResourceError> {
        Self::all_with_query(client, query, page, size).await
    }
}

impl RestResource for Product {
    const NAME: &'static str = "Product";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "products/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "products"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "products"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &[], "products"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "products/{id}",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
