//! Card projections of records, as shown in lists and on detail pages.
//!
//! Cards are plain data computed from a record; selecting one navigates to
//! the record's detail page.
//!
//! ```rust
//! use shop_console::console::{Card, ProductCard};
//! use shop_console::rest::resources::{Locale, LocalizedProduct, Product};
//!
//! let product = Product {
//!     id: Some(7),
//!     price: 1250,
//!     localized_products: vec![LocalizedProduct {
//!         name: "Pain".to_string(),
//!         ..LocalizedProduct::empty(Locale::Fr)
//!     }],
//!     ..Product::default()
//! };
//!
//! let card = ProductCard::new(&product, Locale::En);
//! assert_eq!(card.name, "Pain");
//! assert_eq!(card.price, "12.50 €");
//! assert_eq!(card.route().as_deref(), Some("/product/7"));
//! ```

use crate::console::price::display_price;
use crate::console::routes;
use crate::console::services::Navigator;
use crate::rest::resources::{Category, Locale, Product, Shop};

/// A selectable projection of a record.
pub trait Card {
    /// The detail route of the record, once it has an ID.
    fn route(&self) -> Option<String>;

    /// Navigates to [`Card::route`]. Does nothing for unsaved records.
    fn select(&self, navigator: &dyn Navigator) {
        if let Some(route) = self.route() {
            navigator.goto(&route);
        }
    }
}

/// Returns `plural` when `count` is greater than one, else `singular`.
#[must_use]
pub const fn pluralize(count: u64, singular: &'static str, plural: &'static str) -> &'static str {
    if count > 1 {
        plural
    } else {
        singular
    }
}

/// Summary of a shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopCard {
    /// Shop ID.
    pub id: Option<u64>,
    /// Shop name.
    pub name: String,
    /// E.g. `"3 products"`.
    pub products: String,
    /// E.g. `"1 category"`.
    pub categories: String,
    /// Whether the shop is on vacation.
    pub in_vacations: bool,
    /// E.g. `"On vacation: no"`.
    pub vacation: String,
    /// Creation date as `YYYY-MM-DD`.
    pub created_at: Option<String>,
}

impl ShopCard {
    /// Projects a shop.
    #[must_use]
    pub fn new(shop: &Shop) -> Self {
        Self {
            id: shop.id,
            name: shop.name.clone(),
            products: format!(
                "{} {}",
                shop.nb_products,
                pluralize(shop.nb_products, "product", "products")
            ),
            categories: format!(
                "{} {}",
                shop.nb_distinct_categories,
                pluralize(shop.nb_distinct_categories, "category", "categories")
            ),
            in_vacations: shop.in_vacations,
            vacation: format!(
                "On vacation: {}",
                if shop.in_vacations { "yes" } else { "no" }
            ),
            created_at: shop.created_at.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl Card for ShopCard {
    fn route(&self) -> Option<String> {
        self.id.map(routes::shop)
    }
}

/// Summary of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Product ID.
    pub id: Option<u64>,
    /// Name in the preferred locale, falling back to French.
    pub name: String,
    /// Description in the preferred locale, falling back to French.
    pub description: String,
    /// E.g. `"12.50 €"`.
    pub price: String,
    /// Name of the owning shop.
    pub shop: Option<String>,
    /// Names of the product's categories.
    pub categories: Vec<String>,
}

impl ProductCard {
    /// Projects a product for display in `preferred`.
    #[must_use]
    pub fn new(product: &Product, preferred: Locale) -> Self {
        Self {
            id: product.id,
            name: product.display_name(preferred).to_string(),
            description: product.display_description(preferred).to_string(),
            price: display_price(product.price),
            shop: product.shop.as_ref().map(|s| s.name.clone()),
            categories: product.categories.iter().map(|c| c.name.clone()).collect(),
        }
    }
}

impl Card for ProductCard {
    fn route(&self) -> Option<String> {
        self.id.map(routes::product)
    }
}

/// Summary of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    /// Category ID.
    pub id: Option<u64>,
    /// Category name.
    pub name: String,
}

impl CategoryCard {
    /// Projects a category.
    #[must_use]
    pub fn new(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl Card for CategoryCard {
    fn route(&self) -> Option<String> {
        self.id.map(routes::category)
    }
}
