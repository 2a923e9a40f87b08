//! Product form.

use crate::console::form::{is_blank, FieldErrors, FormMessages, FormModel};
use crate::console::price::{format_price, parse_price};
use crate::console::routes;
use crate::rest::resources::{Category, Locale, Product, ShopRef};

/// Changes a user can make to a product draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductEvent {
    /// Sets the name in one locale.
    SetName(Locale, String),
    /// Sets the description in one locale.
    SetDescription(Locale, String),
    /// Sets the price from typed text, e.g. `"12,50"`. Unparseable text sets 0.
    SetPrice(String),
    /// Assigns the product to a shop, or to none.
    SetShop(Option<ShopRef>),
    /// Replaces the product's categories.
    SetCategories(Vec<Category>),
}

/// Create/edit form for products.
///
/// Drafts always hold one entry per locale. An English entry left entirely
/// empty is dropped before sending.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductForm;

impl ProductForm {
    /// The draft price as it should appear in the price input.
    #[must_use]
    pub fn price_input(draft: &Product) -> String {
        format_price(draft.price)
    }
}

impl FormModel for ProductForm {
    type Record = Product;
    type Draft = Product;
    type Event = ProductEvent;

    const MESSAGES: FormMessages = FormMessages {
        created: "Product created",
        updated: "Product updated",
        create_failed: "Could not create the product",
        update_failed: "Could not update the product",
        load_failed: "Could not load the product",
    };

    const LIST_ROUTE: &'static str = routes::PRODUCTS;

    fn default_draft() -> Product {
        let mut draft = Product::default();
        draft.fill_missing_locales();
        draft
    }

    fn from_record(mut record: Product) -> Product {
        record.fill_missing_locales();
        record
    }

    fn apply(mut draft: Product, event: ProductEvent) -> Product {
        match event {
            ProductEvent::SetName(locale, name) => draft.localized_mut(locale).name = name,
            ProductEvent::SetDescription(locale, description) => {
                draft.localized_mut(locale).description = description;
            }
            ProductEvent::SetPrice(text) => draft.price = parse_price(&text),
            ProductEvent::SetShop(shop) => draft.shop = shop,
            ProductEvent::SetCategories(categories) => draft.categories = categories,
        }
        draft
    }

    fn validate(draft: &Product) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let french_name = draft.localized(Locale::Fr).map_or("", |l| l.name.as_str());
        if is_blank(french_name) {
            errors.insert("nameFr", "French name is required".to_string());
        }

        if let Some(english) = draft.localized(Locale::En) {
            if !is_blank(&english.description) && is_blank(&english.name) {
                errors.insert(
                    "nameEn",
                    "English name is required when an English description is given".to_string(),
                );
            }
        }

        if draft.price < 0 {
            errors.insert("price", "Price must not be negative".to_string());
        }

        errors
    }

    fn to_wire(draft: &Product, id: Option<u64>) -> Product {
        let mut wire = Product {
            id,
            ..draft.clone()
        };
        wire.localized_products
            .retain(|l| !(l.locale == Locale::En && l.is_blank()));
        wire
    }

    fn detail_route(id: u64) -> String {
        routes::product(id)
    }
}
