//! Path building infrastructure for REST resources.
//!
//! Each resource declares a static table of [`ResourcePath`]s, one per
//! supported operation. [`get_path`] picks the most specific entry whose
//! required IDs are available and [`build_path`] interpolates them.
//!
//! # Example
//!
//! ```rust
//! use shop_console::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use shop_console::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "shops/{id}"),
//!     ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &[], "shops"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap();
//! let mut ids = HashMap::new();
//! ids.insert("id", 12);
//! assert_eq!(build_path(path.template, &ids), "shops/12");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource by ID (GET /resources/{id}).
    Find,
    /// Fetch one page of resources (GET /resources?page=&size=).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Replace an existing resource (PUT /resources, ID in the body).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Free-form search (GET /resources/search).
    Search,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Search => "search",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{name}` placeholders, e.g. `products/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method requests on this path are sent with.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters.
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose required IDs are all available,
/// the one requiring the most IDs wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "products/{id}"),
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

    #[test]
    fn test_get_path_requires_ids() {
        assert!(get_path(PATHS, ResourceOperation::Find, &[]).is_none());
        assert_eq!(
            get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap().template,
            "products/{id}"
        );
    }

    #[test]
    fn test_get_path_missing_operation() {
        assert!(get_path(PATHS, ResourceOperation::Search, &[]).is_none());
    }

    #[test]
    fn test_update_path_has_no_id_placeholder() {
        let path = get_path(PATHS, ResourceOperation::Update, &["id"]).unwrap();
        assert_eq!(path.template, "products");
        assert_eq!(path.http_method, HttpMethod::Put);
    }

    #[test]
    fn test_path_template_interpolation() {
        let mut ids = HashMap::new();
        ids.insert("id", 42_u64);
        assert_eq!(build_path("categories/{id}", &ids), "categories/42");
    }

    #[test]
    fn test_path_template_without_placeholders_is_unchanged() {
        let ids: HashMap<&str, u64> = HashMap::new();
        assert_eq!(build_path("shops/search", &ids), "shops/search");
    }
}
