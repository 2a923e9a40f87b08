//! Collaborators injected into the view-models.
//!
//! Views never touch global state. They talk to the front end through three
//! narrow traits, bundled as [`Services`]:
//!
//! - [`LoadingIndicator`]: a busy flag, asserted while a request is in flight
//! - [`Notifier`]: transient user messages (toasts)
//! - [`Navigator`]: route changes
//!
//! [`Services::with_tracing`] wires all three to `tracing`, which is handy
//! for headless use and for tests.
//!
//! # Example
//!
//! ```rust
//! use shop_console::console::{Services, Severity};
//!
//! let services = Services::with_tracing();
//! {
//!     let _loading = services.loading();
//!     // ... request in flight ...
//! } // loading cleared here
//! services.notify(Severity::Success, "Shop created");
//! services.goto("/");
//! ```

use std::fmt;
use std::sync::Arc;

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
}

impl Severity {
    /// Returns the severity name as a lowercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A global busy indicator.
pub trait LoadingIndicator: Send + Sync {
    /// Shows (`true`) or hides (`false`) the indicator.
    fn set_loading(&self, loading: bool);
}

/// Displays transient messages to the user.
pub trait Notifier: Send + Sync {
    /// Shows `message` with the given severity.
    fn notify(&self, severity: Severity, message: &str);
}

/// Changes the current route.
pub trait Navigator: Send + Sync {
    /// Navigates to `route` (e.g. `/shop/4`).
    fn goto(&self, route: &str);
}

/// The collaborators a view needs, shared behind `Arc`s.
#[derive(Clone)]
pub struct Services {
    loading: Arc<dyn LoadingIndicator>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

// Verify Services is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Services>();
};

impl Services {
    /// Bundles the given collaborators.
    #[must_use]
    pub fn new(
        loading: Arc<dyn LoadingIndicator>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            loading,
            notifier,
            navigator,
        }
    }

    /// Bundles collaborators that only log through `tracing`.
    #[must_use]
    pub fn with_tracing() -> Self {
        Self::new(
            Arc::new(TracingLoadingIndicator),
            Arc::new(TracingNotifier),
            Arc::new(TracingNavigator),
        )
    }

    /// Asserts the loading indicator until the returned guard is dropped.
    #[must_use = "loading is cleared as soon as the guard is dropped"]
    pub fn loading(&self) -> LoadingGuard<'_> {
        LoadingGuard::new(self.loading.as_ref())
    }

    /// Sends a notification.
    pub fn notify(&self, severity: Severity, message: &str) {
        self.notifier.notify(severity, message);
    }

    /// Navigates to a route.
    pub fn goto(&self, route: &str) {
        self.navigator.goto(route);
    }

    /// Returns the navigator, e.g. to hand to a card's `select`.
    #[must_use]
    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Holds the loading indicator on for its lifetime.
///
/// Created by [`Services::loading`]. Dropping the guard clears the
/// indicator, on every exit path including `?` and early returns.
pub struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> LoadingGuard<'a> {
    fn new(indicator: &'a dyn LoadingIndicator) -> Self {
        indicator.set_loading(true);
        Self { indicator }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.set_loading(false);
    }
}

impl fmt::Debug for LoadingGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingGuard").finish_non_exhaustive()
    }
}

/// Logs loading transitions at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLoadingIndicator;

impl LoadingIndicator for TracingLoadingIndicator {
    fn set_loading(&self, loading: bool) {
        tracing::debug!(loading, "Loading indicator changed");
    }
}

/// Logs notifications at a level matching their severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => tracing::info!(severity = %severity, "{message}"),
            Severity::Error => tracing::error!(severity = %severity, "{message}"),
        }
    }
}

/// Logs route changes at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn goto(&self, route: &str) {
        tracing::info!(route, "Navigating");
    }
}
