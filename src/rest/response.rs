//! Paginated response wrapper.
//!
//! The backend returns list endpoints as a page object:
//!
//! ```json
//! { "content": [...], "totalPages": 4, "pageable": { "pageNumber": 0 } }
//! ```
//!
//! [`Page<T>`] models that shape. It implements `Deref<Target = [T]>`, so the
//! records can be iterated and indexed directly:
//!
//! ```rust
//! use shop_console::rest::Page;
//!
//! let page: Page<u32> = serde_json::from_value(serde_json::json!({
//!     "content": [1, 2, 3],
//!     "totalPages": 2,
//!     "pageable": { "pageNumber": 1 }
//! }))
//! .unwrap();
//!
//! assert_eq!(page.len(), 3);
//! assert_eq!(page[0], 1);
//! assert_eq!(page.display_page(), 2);
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Position of a page within the full result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    /// Zero-based page index.
    #[serde(default)]
    pub page_number: u32,
    /// Number of records requested per page, when echoed by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// One page of records from a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The records on this page.
    pub content: Vec<T>,
    /// Total number of pages available.
    #[serde(default)]
    pub total_pages: u32,
    /// Which page this is.
    #[serde(default)]
    pub pageable: Pageable,
    /// Total number of records across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
}

impl<T> Page<T> {
    /// Creates a page holding `content` at zero-based index `page_number`.
    #[must_use]
    pub const fn new(content: Vec<T>, total_pages: u32, page_number: u32) -> Self {
        Self {
            content,
            total_pages,
            pageable: Pageable {
                page_number,
                page_size: None,
            },
            total_elements: None,
        }
    }

    /// Returns the zero-based page index reported by the server.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.pageable.page_number
    }

    /// Returns the one-based page number shown to users.
    #[must_use]
    pub const fn display_page(&self) -> u32 {
        self.pageable.page_number.saturating_add(1)
    }

    /// Consumes the page and returns its records.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.content
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserializes_wire_shape() {
        let page: Page<String> = serde_json::from_value(json!({
            "content": ["a", "b"],
            "totalPages": 5,
            "totalElements": 42,
            "pageable": { "pageNumber": 3, "pageSize": 9 }
        }))
        .unwrap();

        assert_eq!(page.total_pages, 5);
        assert_eq!(page.page_number(), 3);
        assert_eq!(page.display_page(), 4);
        assert_eq!(page.total_elements, Some(42));
        assert_eq!(page.pageable.page_size, Some(9));
    }

    #[test]
    fn test_page_tolerates_missing_metadata() {
        let page: Page<u64> = serde_json::from_value(json!({ "content": [] })).unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.display_page(), 1);
    }

    #[test]
    fn test_page_derefs_to_slice() {
        let page = Page::new(vec![10, 20, 30], 1, 0);
        assert_eq!(page.iter().sum::<i32>(), 60);
        assert_eq!(page.first(), Some(&10));
    }

    #[test]
    fn test_into_content_takes_records() {
        let page = Page::new(vec!["x"], 1, 0);
        assert_eq!(page.into_content(), vec!["x"]);
    }
}
