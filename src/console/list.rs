//! Paginated list view-model.
//!
//! [`ListView`] tracks the page the user asked for, the records the server
//! returned and the query scoping them. Each input change yields exactly one
//! [`FetchTicket`]; a response is applied only if its ticket is still the
//! latest one issued, so a slow reply to an earlier request can never
//! overwrite a newer page.
//!
//! Pages are 1-based in the view and 0-based on the wire: selecting page
//! `k` requests index `k - 1`, and a response for index `n` is shown as
//! page `n + 1`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::console::{ListDisplay, ListView, ProductListing, Services};
//!
//! let mut view = ListView::<ProductListing>::new(&config);
//! let ticket = view.mount();
//! view.load(&client, &services, ticket).await.ok();
//!
//! if let Some(ticket) = view.select_page(2) {
//!     view.load(&client, &services, ticket).await.ok();
//! }
//!
//! match view.display() {
//!     ListDisplay::Loading => println!("..."),
//!     ListDisplay::Empty(message) => println!("{message}"),
//!     ListDisplay::Page { records, pagination } => {
//!         println!("{} products, page {}/{}", records.len(), pagination.page, pagination.count);
//!     }
//! }
//! ```

use std::fmt;

use crate::clients::RestClient;
use crate::config::{ConsoleConfig, PageSize};
use crate::console::services::{Services, Severity};
use crate::rest::resources::{Category, Product, ProductQuery, Shop, ShopListParams};
use crate::rest::{Page, ResourceError, RestResource};

/// A kind of record that can be listed page by page.
#[allow(async_fn_in_trait)]
pub trait Listing {
    /// The listed record type.
    type Record: Clone + fmt::Debug + Send + Sync;

    /// Scope and filters applied to the listing.
    type Query: Clone + fmt::Debug + Default + PartialEq + Send + Sync;

    /// Shown instead of the list when a page comes back empty.
    const EMPTY_MESSAGE: &'static str;

    /// Shown when loading fails and the server sent no message.
    const FAILURE_MESSAGE: &'static str;

    /// Fetches page `page` (0-based) of the records matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    async fn fetch_page(
        client: &RestClient,
        query: &Self::Query,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Self::Record>, ResourceError>;
}

/// Products, optionally scoped to a shop and/or a category.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductListing;

impl Listing for ProductListing {
    type Record = Product;
    type Query = ProductQuery;

    const EMPTY_MESSAGE: &'static str = "No products found";
    const FAILURE_MESSAGE: &'static str = "Could not load products";

    async fn fetch_page(
        client: &RestClient,
        query: &ProductQuery,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Product>, ResourceError> {
        Product::all_in(client, query, page, size).await
    }
}

/// Shops, sorted and filtered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShopListing;

impl Listing for ShopListing {
    type Record = Shop;
    type Query = ShopListParams;

    const EMPTY_MESSAGE: &'static str = "No shops found";
    const FAILURE_MESSAGE: &'static str = "Could not load shops";

    async fn fetch_page(
        client: &RestClient,
        query: &ShopListParams,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Shop>, ResourceError> {
        Shop::all_with(client, query, page, size).await
    }
}

/// All categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryListing;

impl Listing for CategoryListing {
    type Record = Category;
    type Query = ();

    const EMPTY_MESSAGE: &'static str = "No categories found";
    const FAILURE_MESSAGE: &'static str = "Could not load categories";

    async fn fetch_page(
        client: &RestClient,
        _query: &(),
        page: u32,
        size: PageSize,
    ) -> Result<Page<Category>, ResourceError> {
        Category::all(client, page, size).await
    }
}

/// Monotonic counter identifying the latest request a view issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Generation(u64);

impl Generation {
    /// Advances and returns the new current generation.
    pub(crate) fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub(crate) const fn is_current(self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// Everything needed to issue one list request, stamped with the
/// generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<Q> {
    generation: u64,
    page_index: u32,
    size: PageSize,
    query: Q,
}

impl<Q> FetchTicket<Q> {
    /// The 0-based page index that will be requested.
    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.page_index
    }

    /// The query that will be sent.
    #[must_use]
    pub const fn query(&self) -> &Q {
        &self.query
    }
}

/// Whether a response was stored or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response belonged to the latest request and is now displayed.
    Current,
    /// A newer request was issued since; the response was dropped.
    Stale,
}

/// Pagination control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Total number of pages.
    pub count: u32,
    /// The current 1-based page.
    pub page: u32,
}

/// What a list view should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDisplay<'a, R> {
    /// Nothing has been loaded yet.
    Loading,
    /// The current page is empty; show the message and no pagination.
    Empty(&'static str),
    /// Records with their pagination control.
    Page {
        /// Records on the current page.
        records: &'a [R],
        /// Pagination control state.
        pagination: Pagination,
    },
}

/// View-model of a paginated list.
#[derive(Debug, Clone)]
pub struct ListView<L: Listing> {
    records: Option<Vec<L::Record>>,
    total_pages: u32,
    page: u32,
    page_selected: u32,
    query: L::Query,
    page_size: PageSize,
    generation: Generation,
    failed: bool,
}

impl<L: Listing> ListView<L> {
    /// Creates an unloaded view using the configured list page size.
    #[must_use]
    pub fn new(config: &ConsoleConfig) -> Self {
        Self::with_query(L::Query::default(), config.list_page_size())
    }

    /// Creates an unloaded view with an initial query and page size.
    #[must_use]
    pub fn with_query(query: L::Query, page_size: PageSize) -> Self {
        Self {
            records: None,
            total_pages: 0,
            page: 1,
            page_selected: 0,
            query,
            page_size,
            generation: Generation::default(),
            failed: false,
        }
    }

    /// Starts the first load.
    pub fn mount(&mut self) -> FetchTicket<L::Query> {
        self.issue()
    }

    /// Selects a 1-based page.
    ///
    /// Returns a ticket only if the selection changed, or if the latest load
    /// failed, in which case selecting the same page again retries it. Page
    /// 0 is read as page 1.
    pub fn select_page(&mut self, ui_page: u32) -> Option<FetchTicket<L::Query>> {
        let index = ui_page.saturating_sub(1);
        if index == self.page_selected && !self.failed {
            return None;
        }
        self.page_selected = index;
        Some(self.issue())
    }

    /// Replaces the query and goes back to the first page.
    ///
    /// Returns a ticket only if the query changed or the latest load failed.
    pub fn set_query(&mut self, query: L::Query) -> Option<FetchTicket<L::Query>> {
        if query == self.query && !self.failed {
            return None;
        }
        self.query = query;
        self.page_selected = 0;
        Some(self.issue())
    }

    fn issue(&mut self) -> FetchTicket<L::Query> {
        self.failed = false;
        FetchTicket {
            generation: self.generation.advance(),
            page_index: self.page_selected,
            size: self.page_size,
            query: self.query.clone(),
        }
    }

    /// Returns `true` if no ticket was issued after `ticket`.
    #[must_use]
    pub const fn is_current(&self, ticket: &FetchTicket<L::Query>) -> bool {
        self.generation.is_current(ticket.generation)
    }

    /// Sends the request described by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn fetch(
        client: &RestClient,
        ticket: &FetchTicket<L::Query>,
    ) -> Result<Page<L::Record>, ResourceError> {
        L::fetch_page(client, &ticket.query, ticket.page_index, ticket.size).await
    }

    /// Stores `page` if `ticket` is still the latest one.
    pub fn apply(&mut self, ticket: &FetchTicket<L::Query>, page: Page<L::Record>) -> Applied {
        if !self.is_current(ticket) {
            tracing::debug!(
                generation = ticket.generation,
                page_index = ticket.page_index,
                "Dropping stale list response"
            );
            return Applied::Stale;
        }

        self.total_pages = page.total_pages;
        self.page = page.display_page();
        self.records = Some(page.into_content());
        Applied::Current
    }

    /// Fetches and applies `ticket` with the loading indicator held.
    ///
    /// A failure is reported through the notifier unless a newer ticket has
    /// been issued meanwhile. The displayed records are left unchanged, and
    /// the next [`ListView::select_page`] or [`ListView::set_query`] issues a
    /// ticket even for the same input.
    ///
    /// # Errors
    ///
    /// Returns the [`ResourceError`] of a failed request.
    pub async fn load(
        &mut self,
        client: &RestClient,
        services: &Services,
        ticket: FetchTicket<L::Query>,
    ) -> Result<Applied, ResourceError> {
        let _loading = services.loading();

        match Self::fetch(client, &ticket).await {
            Ok(page) => Ok(self.apply(&ticket, page)),
            Err(error) => {
                if self.is_current(&ticket) {
                    self.failed = true;
                    services.notify(
                        Severity::Error,
                        error.server_message().unwrap_or(L::FAILURE_MESSAGE),
                    );
                }
                Err(error)
            }
        }
    }

    /// Returns what should be rendered.
    #[must_use]
    pub fn display(&self) -> ListDisplay<'_, L::Record> {
        match &self.records {
            None => ListDisplay::Loading,
            Some(records) if records.is_empty() => ListDisplay::Empty(L::EMPTY_MESSAGE),
            Some(records) => ListDisplay::Page {
                records,
                pagination: Pagination {
                    count: self.total_pages,
                    page: self.page,
                },
            },
        }
    }

    /// Records of the current page, once loaded.
    #[must_use]
    pub fn records(&self) -> Option<&[L::Record]> {
        self.records.as_deref()
    }

    /// Total number of pages reported by the last applied response.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// The 1-based page shown.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The 0-based page index last requested.
    #[must_use]
    pub const fn page_selected(&self) -> u32 {
        self.page_selected
    }

    /// The current query.
    #[must_use]
    pub const fn query(&self) -> &L::Query {
        &self.query
    }

    /// Records requested per page.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }
}

impl ListView<ProductListing> {
    /// The products panel of a shop detail page.
    #[must_use]
    pub fn shop_products(shop_id: u64, config: &ConsoleConfig) -> Self {
        Self::with_query(
            ProductQuery::for_shop(shop_id),
            config.shop_products_page_size(),
        )
    }

    /// Filters by category, keeping the shop scope. `None` lists every
    /// category.
    pub fn set_category(&mut self, category_id: Option<u64>) -> Option<FetchTicket<ProductQuery>> {
        let query = ProductQuery {
            category_id,
            ..self.query
        };
        self.set_query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ListView<CategoryListing> {
        ListView::with_query((), PageSize::LIST)
    }

    fn categories(names: &[&str]) -> Vec<Category> {
        names.iter().map(|n| Category::named(*n)).collect()
    }

    #[test]
    fn test_new_view_is_loading() {
        let view = view();
        assert_eq!(view.display(), ListDisplay::Loading);
        assert_eq!(view.page(), 1);
        assert_eq!(view.page_selected(), 0);
    }

    #[test]
    fn test_select_page_requests_previous_index() {
        let mut view = view();
        view.mount();

        let ticket = view.select_page(3).unwrap();
        assert_eq!(ticket.page_index(), 2);
        assert_eq!(view.page_selected(), 2);
    }

    #[test]
    fn test_select_same_page_issues_nothing() {
        let mut view = view();
        view.mount();

        assert!(view.select_page(1).is_none());
        assert!(view.select_page(2).is_some());
        assert!(view.select_page(2).is_none());
    }

    #[test]
    fn test_apply_shows_server_page_plus_one() {
        let mut view = view();
        let ticket = view.select_page(4).unwrap();

        let applied = view.apply(&ticket, Page::new(categories(&["a"]), 6, 3));

        assert_eq!(applied, Applied::Current);
        assert_eq!(view.page(), 4);
        assert_eq!(view.total_pages(), 6);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut view = view();
        let first = view.mount();
        let second = view.select_page(2).unwrap();

        assert_eq!(
            view.apply(&second, Page::new(categories(&["new"]), 2, 1)),
            Applied::Current
        );
        assert_eq!(
            view.apply(&first, Page::new(categories(&["old"]), 2, 0)),
            Applied::Stale
        );

        assert_eq!(view.records().unwrap()[0].name, "new");
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn test_empty_page_displays_message_without_pagination() {
        let mut view = view();
        let ticket = view.mount();
        view.apply(&ticket, Page::new(Vec::new(), 0, 0));

        assert_eq!(view.display(), ListDisplay::Empty("No categories found"));
    }

    #[test]
    fn test_display_page_with_pagination() {
        let mut view = view();
        let ticket = view.mount();
        view.apply(&ticket, Page::new(categories(&["a", "b"]), 3, 0));

        match view.display() {
            ListDisplay::Page {
                records,
                pagination,
            } => {
                assert_eq!(records.len(), 2);
                assert_eq!(pagination, Pagination { count: 3, page: 1 });
            }
            other => panic!("unexpected display: {other:?}"),
        }
    }

    #[test]
    fn test_set_query_resets_to_first_page() {
        let config = ConsoleConfig::builder()
            .api_base(crate::config::ApiBaseUrl::new("http://localhost:8080").unwrap())
            .build()
            .unwrap();
        let mut view = ListView::<ProductListing>::shop_products(5, &config);
        view.select_page(3);

        let ticket = view.set_category(Some(2)).unwrap();

        assert_eq!(ticket.page_index(), 0);
        assert_eq!(
            ticket.query(),
            &ProductQuery {
                shop_id: Some(5),
                category_id: Some(2)
            }
        );
        assert_eq!(view.page_size(), PageSize::SHOP_PRODUCTS);
    }

    #[test]
    fn test_failed_load_allows_reselecting_same_page() {
        let mut view = view();
        view.mount();
        view.select_page(2).unwrap();
        view.failed = true;

        let retry = view.select_page(2).unwrap();
        assert_eq!(retry.page_index(), 1);
        assert!(view.select_page(2).is_none());
    }

    #[test]
    fn test_set_same_query_issues_nothing() {
        let mut view = ListView::<ProductListing>::with_query(ProductQuery::default(), PageSize::LIST);
        assert!(view.set_category(None).is_none());
        assert!(view.set_category(Some(1)).is_some());
        assert!(view.set_category(Some(1)).is_none());
    }
}
