//! View-models of the administration console.
//!
//! Rendering is left to a front end. This module owns the state behind each
//! screen and the rules that change it:
//!
//! - [`ListView`]: paginated lists of products, shops and categories
//! - [`ShopSearchView`]: the home page search
//! - [`FormView`]: create/edit forms for each resource
//! - [`ShopCard`], [`ProductCard`], [`CategoryCard`]: record summaries
//!
//! Views reach the outside world only through [`Services`] (loading
//! indicator, notifications, navigation) and a [`RestClient`](crate::RestClient).
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::console::{FormView, ProductEvent, ProductForm, Services, SubmitOutcome};
//! use shop_console::rest::resources::Locale;
//!
//! let services = Services::with_tracing();
//! let mut form = FormView::<ProductForm>::editing(12);
//! form.load(&client, &services).await?;
//!
//! form.apply(ProductEvent::SetPrice("12,50".to_string()));
//! form.apply(ProductEvent::SetName(Locale::En, "Bread".to_string()));
//!
//! if let SubmitOutcome::Invalid = form.submit(&client, &services).await {
//!     for (field, message) in form.errors() {
//!         println!("{field}: {message}");
//!     }
//! }
//! ```

mod card;
mod form;
mod list;
pub mod price;
pub mod routes;
mod search;
mod services;

pub use card::{pluralize, Card, CategoryCard, ProductCard, ShopCard};
pub use form::{
    CategoryEvent, CategoryForm, FieldErrors, FormMessages, FormMode, FormModel, FormState,
    FormView, ProductEvent, ProductForm, ShopEvent, ShopForm, SubmitOutcome,
};
pub use list::{
    Applied, CategoryListing, FetchTicket, ListDisplay, ListView, Listing, Pagination,
    ProductListing, ShopListing,
};
pub use search::{SearchDisplay, SearchTicket, ShopSearchView, NO_MATCHING_SHOPS};
pub use services::{
    LoadingGuard, LoadingIndicator, Navigator, Notifier, Services, Severity,
    TracingLoadingIndicator, TracingNavigator, TracingNotifier,
};
