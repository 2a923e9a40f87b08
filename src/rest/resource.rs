//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which gives every backend
//! resource the same `find()`, `all()`, `create()`, `update()` and `delete()`
//! operations. A resource only declares its name, its path table and how to
//! read its ID; the request plumbing lives in the default methods.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use shop_console::rest::{RestResource, ResourcePath, ResourceOperation};
//! use shop_console::HttpMethod;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Category {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     pub name: String,
//! }
//!
//! impl RestResource for Category {
//!     const NAME: &'static str = "Category";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "categories/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "categories"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "categories"),
//!         ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &[], "categories"),
//!         ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "categories/{id}"),
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! // Usage:
//! let category = Category::find(&client, 3).await?;
//! let first_page = Category::all(&client, 0, PageSize::LIST).await?;
//! ```
//!
//! Each request is sent with the HTTP method declared on the resolved
//! [`ResourcePath`].
//!
//! # Request Bodies
//!
//! Bodies are the bare resource JSON. Creating sends the draft without an
//! `id`; updating sends it with the `id` and the path carries none.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, HttpResponse, RestClient};
use crate::config::PageSize;
use crate::rest::{build_path, get_path, Page, ResourceError, ResourceOperation, ResourcePath};

/// A REST resource that can be fetched, created, updated, and deleted.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "Product"), used in errors and logs
/// - `PATHS`: Available paths for the operations the resource supports
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The singular name of the resource (e.g., "Product").
    const NAME: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID if the server has assigned one.
    fn get_id(&self) -> Option<u64>;

    /// Finds a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] with the server's status and message
    /// when the backend rejects the request, including a 404.
    async fn find(client: &RestClient, id: u64) -> Result<Self, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Find, Some(id))?;
        let response = client.request(method, &path, None, None).await?;
        Self::parse(response)
    }

    /// Fetches one page of resources.
    ///
    /// `page` is the zero-based page index.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for non-2xx responses and
    /// [`ResourceError::Deserialize`] if the body is not a page object.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let page = Product::all(&client, 0, PageSize::LIST).await?;
    /// for product in page.iter() {
    ///     println!("{}", product.price);
    /// }
    /// ```
    async fn all(client: &RestClient, page: u32, size: PageSize) -> Result<Page<Self>, ResourceError> {
        Self::all_with_query(client, &(), page, size).await
    }

    /// Fetches one page of resources narrowed by extra query parameters.
    ///
    /// Fields of `query` that serialize to `null` are left out of the URL.
    ///
    /// # Errors
    ///
    /// Same as [`RestResource::all`], plus [`ResourceError::Serialize`] if
    /// `query` cannot be turned into query parameters.
    async fn all_with_query<Q: Serialize + Sync>(
        client: &RestClient,
        query: &Q,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Self>, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::All, None)?;

        let mut params = serialize_to_query(query).map_err(|source| ResourceError::Serialize {
            resource: Self::NAME,
            source,
        })?;
        params.insert("page".to_string(), page.to_string());
        params.insert("size".to_string(), size.to_string());

        let response = client.request(method, &path, None, Some(params)).await?;
        Self::parse(response)
    }

    /// Creates a new resource from a draft.
    ///
    /// Returns the stored record with its server-assigned fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] when the backend rejects the draft.
    async fn create(client: &RestClient, draft: &Self) -> Result<Self, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Create, None)?;
        let mut body = Self::to_body(draft)?;
        if let Value::Object(map) = &mut body {
            map.remove("id");
        }

        let response = client.request(method, &path, Some(body), None).await?;
        Self::parse(response)
    }

    /// Replaces an existing resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the record has no ID, without
    /// sending anything. Returns [`ResourceError::Http`] when the backend
    /// rejects the update.
    async fn update(client: &RestClient, record: &Self) -> Result<Self, ResourceError> {
        let id = record.get_id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation: "update",
        })?;
        let (method, path) = Self::resolve_path(ResourceOperation::Update, Some(id))?;
        let body = Self::to_body(record)?;

        let response = client.request(method, &path, Some(body), None).await?;
        Self::parse(response)
    }

    /// Deletes the resource with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] when the backend refuses the deletion.
    async fn delete(client: &RestClient, id: u64) -> Result<(), ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Delete, Some(id))?;
        client.request(method, &path, None, None).await?;
        Ok(())
    }

    /// Resolves the HTTP method and URL path for an operation, interpolating
    /// the ID if the chosen template needs one.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// path for the operation.
    fn resolve_path(
        operation: ResourceOperation,
        id: Option<u64>,
    ) -> Result<(HttpMethod, String), ResourceError> {
        let mut ids: HashMap<&str, u64> = HashMap::new();
        if let Some(id) = id {
            ids.insert("id", id);
        }

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        Ok((path.http_method, build_path(path.template, &ids)))
    }

    /// Deserializes a successful response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Deserialize`] if the body has the wrong shape.
    fn parse<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ResourceError> {
        serde_json::from_value(response.body).map_err(|source| ResourceError::Deserialize {
            resource: Self::NAME,
            source,
        })
    }

    /// Serializes a record into a request body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialize`] if serialization fails.
    fn to_body(record: &Self) -> Result<Value, ResourceError> {
        serde_json::to_value(record).map_err(|source| ResourceError::Serialize {
            resource: Self::NAME,
            source,
        })
    }
}

/// Serializes a params struct to a query parameter map.
///
/// Null fields are skipped, so optional filters that are unset never reach
/// the URL. A non-object value (such as `()`) yields an empty map.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, serde_json::Error> {
    let value = serde_json::to_value(params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
