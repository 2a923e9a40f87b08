//! Create/edit form view-model.
//!
//! [`FormView`] drives one form through its lifecycle:
//!
//! ```text
//! Idle -> Validating -> Idle                          (invalid draft, nothing sent)
//!                    -> Submitting -> NavigatedAway   (saved)
//!                                  -> Idle            (server refused, draft kept)
//! ```
//!
//! What is being edited is described by a [`FormModel`]: how to build and
//! validate a draft, how user events change it, and how it is sent. The
//! models are [`ShopForm`], [`ProductForm`] and [`CategoryForm`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::console::{CategoryEvent, CategoryForm, FormView, SubmitOutcome};
//!
//! let mut form = FormView::<CategoryForm>::new();
//! form.apply(CategoryEvent::SetName("Toys".to_string()));
//!
//! match form.submit(&client, &services).await {
//!     SubmitOutcome::Saved(category) => println!("saved {:?}", category.id),
//!     SubmitOutcome::Invalid => println!("{:?}", form.errors()),
//!     SubmitOutcome::Failed(error) => println!("{error}"),
//! }
//! ```

mod category;
mod product;
mod shop;

pub use category::{CategoryEvent, CategoryForm};
pub use product::{ProductEvent, ProductForm};
pub use shop::{ShopEvent, ShopForm};

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::RestClient;
use crate::console::services::{Services, Severity};
use crate::rest::{ResourceError, RestResource};

/// Validation messages keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a record.
    New,
    /// Editing the record with this ID.
    Editing(u64),
}

impl FormMode {
    /// The ID being edited, if any.
    #[must_use]
    pub const fn id(self) -> Option<u64> {
        match self {
            Self::New => None,
            Self::Editing(id) => Some(id),
        }
    }
}

/// Lifecycle state of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    /// Waiting for input.
    #[default]
    Idle,
    /// Checking the draft.
    Validating,
    /// The draft has been sent.
    Submitting,
    /// The draft was saved and the view navigated elsewhere.
    NavigatedAway,
}

/// Result of [`FormView::submit`].
#[derive(Debug)]
pub enum SubmitOutcome<R> {
    /// Validation failed; see [`FormView::errors`]. Nothing was sent.
    Invalid,
    /// The server stored the record.
    Saved(R),
    /// The server refused the draft or could not be reached.
    Failed(ResourceError),
}

/// User-facing messages of one kind of form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMessages {
    /// Notified after a successful create.
    pub created: &'static str,
    /// Notified after a successful update.
    pub updated: &'static str,
    /// Notified when create fails without a server message.
    pub create_failed: &'static str,
    /// Notified when update fails without a server message.
    pub update_failed: &'static str,
    /// Notified when loading the record fails without a server message.
    pub load_failed: &'static str,
}

/// Describes one kind of form: its draft, its events and how it is saved.
pub trait FormModel {
    /// The resource the form saves.
    type Record: RestResource + fmt::Debug;

    /// The editable state.
    type Draft: Clone + fmt::Debug + PartialEq;

    /// User actions that change the draft.
    type Event: fmt::Debug;

    /// User-facing messages.
    const MESSAGES: FormMessages;

    /// Where to go after a successful create.
    const LIST_ROUTE: &'static str;

    /// Where to go when the record to edit cannot be loaded, if anywhere.
    const LOAD_FAILURE_ROUTE: Option<&'static str> = None;

    /// The draft of a blank form.
    fn default_draft() -> Self::Draft;

    /// Turns a fetched record into an editable draft.
    fn from_record(record: Self::Record) -> Self::Draft;

    /// Applies one event.
    fn apply(draft: Self::Draft, event: Self::Event) -> Self::Draft;

    /// Checks the draft. An empty map means it can be sent.
    fn validate(draft: &Self::Draft) -> FieldErrors;

    /// Builds the request body, carrying `id` when editing.
    fn to_wire(draft: &Self::Draft, id: Option<u64>) -> Self::Record;

    /// Where to go after a successful update.
    fn detail_route(id: u64) -> String;
}

/// View-model of a create/edit form.
#[derive(Debug, Clone)]
pub struct FormView<M: FormModel> {
    mode: FormMode,
    draft: M::Draft,
    errors: FieldErrors,
    backend_error: Option<String>,
    state: FormState,
}

impl<M: FormModel> Default for FormView<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FormModel> FormView<M> {
    /// A blank form that creates a record.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(FormMode::New)
    }

    /// A form editing record `id`. Call [`FormView::load`] to fetch it.
    #[must_use]
    pub fn editing(id: u64) -> Self {
        Self::with_mode(FormMode::Editing(id))
    }

    fn with_mode(mode: FormMode) -> Self {
        Self {
            mode,
            draft: M::default_draft(),
            errors: FieldErrors::new(),
            backend_error: None,
            state: FormState::Idle,
        }
    }

    /// Fetches the record being edited and replaces the draft with it.
    ///
    /// Does nothing for a new form. On failure the error is notified and,
    /// if the model has a [`FormModel::LOAD_FAILURE_ROUTE`], the view
    /// navigates there.
    ///
    /// # Errors
    ///
    /// Returns the [`ResourceError`] of a failed fetch.
    pub async fn load(&mut self, client: &RestClient, services: &Services) -> Result<(), ResourceError> {
        let FormMode::Editing(id) = self.mode else {
            return Ok(());
        };

        let result = {
            let _loading = services.loading();
            <M::Record as RestResource>::find(client, id).await
        };

        match result {
            Ok(record) => {
                self.draft = M::from_record(record);
                self.errors.clear();
                self.backend_error = None;
                Ok(())
            }
            Err(error) => {
                services.notify(
                    Severity::Error,
                    error.server_message().unwrap_or(M::MESSAGES.load_failed),
                );
                if let Some(route) = M::LOAD_FAILURE_ROUTE {
                    services.goto(route);
                }
                Err(error)
            }
        }
    }

    /// Applies a user event to the draft.
    ///
    /// Once errors are showing, they are recomputed so they clear as the
    /// user fixes the fields.
    pub fn apply(&mut self, event: M::Event) {
        let draft = std::mem::replace(&mut self.draft, M::default_draft());
        self.draft = M::apply(draft, event);
        if !self.errors.is_empty() {
            self.validate();
        }
    }

    /// Validates the draft and stores the errors.
    pub fn validate(&mut self) -> &FieldErrors {
        self.errors = M::validate(&self.draft);
        &self.errors
    }

    /// Validates and, if valid, sends the draft.
    ///
    /// On success the view notifies, navigates to the list (create) or the
    /// detail page (edit) and ends in [`FormState::NavigatedAway`]. On
    /// failure the server message is kept in [`FormView::backend_error`],
    /// the error is notified and the draft is left as it was.
    pub async fn submit(&mut self, client: &RestClient, services: &Services) -> SubmitOutcome<M::Record> {
        self.state = FormState::Validating;
        self.backend_error = None;

        if !self.validate().is_empty() {
            self.state = FormState::Idle;
            return SubmitOutcome::Invalid;
        }

        self.state = FormState::Submitting;
        let wire = M::to_wire(&self.draft, self.mode.id());

        let result = {
            let _loading = services.loading();
            match self.mode {
                FormMode::New => <M::Record as RestResource>::create(client, &wire).await,
                FormMode::Editing(_) => <M::Record as RestResource>::update(client, &wire).await,
            }
        };

        match result {
            Ok(saved) => {
                let (message, route) = match self.mode {
                    FormMode::New => (M::MESSAGES.created, M::LIST_ROUTE.to_string()),
                    FormMode::Editing(id) => (M::MESSAGES.updated, M::detail_route(id)),
                };
                tracing::info!(
                    resource = <M::Record as RestResource>::NAME,
                    id = ?saved.get_id(),
                    "{message}"
                );
                services.goto(&route);
                services.notify(Severity::Success, message);
                self.state = FormState::NavigatedAway;
                SubmitOutcome::Saved(saved)
            }
            Err(error) => {
                let fallback = match self.mode {
                    FormMode::New => M::MESSAGES.create_failed,
                    FormMode::Editing(_) => M::MESSAGES.update_failed,
                };
                self.backend_error = error.server_message().map(ToString::to_string);
                services.notify(
                    Severity::Error,
                    error.server_message().unwrap_or(fallback),
                );
                self.state = FormState::Idle;
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Create or edit.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// The current draft.
    #[must_use]
    pub const fn draft(&self) -> &M::Draft {
        &self.draft
    }

    /// Errors from the last validation.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The server's message from the last failed submit.
    #[must_use]
    pub fn backend_error(&self) -> Option<&str> {
        self.backend_error.as_deref()
    }

    /// Lifecycle state.
    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
