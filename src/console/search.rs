//! Home page shop search.
//!
//! [`ShopSearchView`] holds the filters and the hits of the last search.
//! Search results are not paginated: the endpoint returns every hit. Like
//! [`ListView`](crate::console::ListView), each search is stamped with a
//! generation so only the latest response is applied.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::console::{SearchDisplay, ShopSearchView};
//! use shop_console::rest::resources::ShopSearchParams;
//!
//! let mut view = ShopSearchView::new();
//! let ticket = view.search(ShopSearchParams::by_name("bakery"));
//! view.load(&client, &services, ticket).await.ok();
//!
//! if let SearchDisplay::Hits(shops) = view.display() {
//!     println!("{} shops", shops.len());
//! }
//! ```

use crate::clients::RestClient;
use crate::console::list::{Applied, Generation};
use crate::console::services::{Services, Severity};
use crate::rest::resources::{Shop, ShopSearchParams};
use crate::rest::ResourceError;

/// Shown when a search has no hits.
pub const NO_MATCHING_SHOPS: &str = "No matching shops";

const SEARCH_FAILED: &str = "Could not search shops";

/// One search request, stamped with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    filters: ShopSearchParams,
}

impl SearchTicket {
    /// The filters that will be sent.
    #[must_use]
    pub const fn filters(&self) -> &ShopSearchParams {
        &self.filters
    }
}

/// What the search panel should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDisplay<'a> {
    /// No search has completed yet.
    Loading,
    /// The last search matched nothing.
    Empty(&'static str),
    /// Matching shops.
    Hits(&'a [Shop]),
}

/// View-model of the shop search panel.
#[derive(Debug, Clone, Default)]
pub struct ShopSearchView {
    shops: Option<Vec<Shop>>,
    filters: ShopSearchParams,
    generation: Generation,
}

impl ShopSearchView {
    /// Creates a view with no filters and no results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches with new filters.
    pub fn search(&mut self, filters: ShopSearchParams) -> SearchTicket {
        self.filters = filters;
        self.issue()
    }

    /// Clears every filter and searches again.
    pub fn reset(&mut self) -> SearchTicket {
        self.search(ShopSearchParams::default())
    }

    fn issue(&mut self) -> SearchTicket {
        SearchTicket {
            generation: self.generation.advance(),
            filters: self.filters.clone(),
        }
    }

    /// Returns `true` if no search was issued after `ticket`.
    #[must_use]
    pub const fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.generation.is_current(ticket.generation)
    }

    /// Sends the search described by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn fetch(client: &RestClient, ticket: &SearchTicket) -> Result<Vec<Shop>, ResourceError> {
        Shop::search(client, &ticket.filters).await
    }

    /// Stores `shops` if `ticket` is still the latest search.
    pub fn apply(&mut self, ticket: &SearchTicket, shops: Vec<Shop>) -> Applied {
        if !self.is_current(ticket) {
            tracing::debug!(generation = ticket.generation, "Dropping stale search response");
            return Applied::Stale;
        }
        self.shops = Some(shops);
        Applied::Current
    }

    /// Fetches and applies `ticket` with the loading indicator held.
    ///
    /// # Errors
    ///
    /// Returns the [`ResourceError`] of a failed request, after notifying
    /// it unless a newer search was issued meanwhile.
    pub async fn load(
        &mut self,
        client: &RestClient,
        services: &Services,
        ticket: SearchTicket,
    ) -> Result<Applied, ResourceError> {
        let _loading = services.loading();

        match Self::fetch(client, &ticket).await {
            Ok(shops) => Ok(self.apply(&ticket, shops)),
            Err(error) => {
                if self.is_current(&ticket) {
                    services.notify(
                        Severity::Error,
                        error.server_message().unwrap_or(SEARCH_FAILED),
                    );
                }
                Err(error)
            }
        }
    }

    /// Returns what should be rendered.
    #[must_use]
    pub fn display(&self) -> SearchDisplay<'_> {
        match &self.shops {
            None => SearchDisplay::Loading,
            Some(shops) if shops.is_empty() => SearchDisplay::Empty(NO_MATCHING_SHOPS),
            Some(shops) => SearchDisplay::Hits(shops),
        }
    }

    /// Hits of the last applied search.
    #[must_use]
    pub fn shops(&self) -> Option<&[Shop]> {
        self.shops.as_deref()
    }

    /// The current filters.
    #[must_use]
    pub const fn filters(&self) -> &ShopSearchParams {
        &self.filters
    }
}
