//! Category form.

use crate::console::form::{is_blank, FieldErrors, FormMessages, FormModel};
use crate::console::routes;
use crate::rest::resources::Category;

/// Changes a user can make to a category draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryEvent {
    /// Renames the category.
    SetName(String),
}

/// Create/edit form for categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryForm;

impl FormModel for CategoryForm {
    type Record = Category;
    type Draft = Category;
    type Event = CategoryEvent;

    const MESSAGES: FormMessages = FormMessages {
        created: "Category created",
        updated: "Category updated",
        create_failed: "Could not create the category",
        update_failed: "Could not update the category",
        load_failed: "Could not load the category",
    };

    const LIST_ROUTE: &'static str = routes::CATEGORIES;

    fn default_draft() -> Category {
        Category::default()
    }

    fn from_record(record: Category) -> Category {
        record
    }

    fn apply(mut draft: Category, event: CategoryEvent) -> Category {
        match event {
            CategoryEvent::SetName(name) => draft.name = name,
        }
        draft
    }

    fn validate(draft: &Category) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&draft.name) {
            errors.insert("name", "Name is required".to_string());
        }
        errors
    }

    fn to_wire(draft: &Category, id: Option<u64>) -> Category {
        Category {
            id,
            name: draft.name.clone(),
        }
    }

    fn detail_route(id: u64) -> String {
        routes::category(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_required() {
        let errors = CategoryForm::validate(&Category::named(""));
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
    }

    #[test]
    fn test_set_name() {
        let draft = CategoryForm::apply(
            CategoryForm::default_draft(),
            CategoryEvent::SetName("Toys".to_string()),
        );
        assert_eq!(draft.name, "Toys");
        assert!(CategoryForm::validate(&draft).is_empty());
    }

    #[test]
    fn test_routes() {
        assert_eq!(CategoryForm::LIST_ROUTE, "/category");
        assert_eq!(CategoryForm::detail_route(5), "/category/5");
        assert!(CategoryForm::LOAD_FAILURE_ROUTE.is_none());
    }
}
