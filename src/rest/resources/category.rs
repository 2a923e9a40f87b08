//! `Category` resource implementation.
//!
//! Categories are flat labels attached to products. They carry nothing but
//! a name.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_console::rest::resources::Category;
//! use shop_console::rest::RestResource;
//!
//! let created = Category::create(&client, &Category::named("Toys")).await?;
//! let page = Category::all(&client, 0, PageSize::LIST).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A product category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The unique identifier, assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The category name.
    #[serde(default)]
    pub name: String,
}

impl Category {
    /// Creates an unsaved category with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl RestResource for Category {
    const NAME: &'static str = "Category";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "categories/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "categories"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "categories"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &[], "categories"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "categories/{id}",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}
