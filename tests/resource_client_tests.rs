//! Integration tests for the resource client against a mock backend.
//!
//! These tests verify exact request paths, query parameters and bodies,
//! and that server errors reach the caller unchanged.

mod common;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shop_console::rest::resources::{
    Category, Locale, LocalizedProduct, Product, ProductQuery, Shop, ShopListParams,
    ShopSearchParams, ShopSort,
};
use shop_console::rest::{ResourceOperation, ResourcePath, RestResource};
use shop_console::{HttpError, HttpMethod, PageSize, ResourceError};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{error_body, test_client};

fn empty_page() -> serde_json::Value {
    json!({ "content": [], "totalPages": 0, "pageable": { "pageNumber": 0 } })
}

/// Returns the query string of the only request the server received.
async fn single_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].url.query().map(ToString::to_string)
}

// ============================================================================
// Shop Tests
// ============================================================================

#[tokio::test]
async fn test_shop_all_sends_page_and_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops"))
        .and(query_param("page", "2"))
        .and(query_param("size", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "id": 1, "name": "Bakery", "inVacations": false,
                          "createdAt": "2023-01-10", "nbProducts": 3,
                          "nbDistinctCategories": 2, "openingHours": [] }],
            "totalPages": 4,
            "pageable": { "pageNumber": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = Shop::all(&client, 2, PageSize::LIST).await.unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Bakery");
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.display_page(), 3);
}

#[tokio::test]
async fn test_shop_all_with_sends_only_set_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let params = ShopListParams {
        sort_by: Some(ShopSort::CreatedAt),
        in_vacations: Some(true),
        ..Default::default()
    };
    Shop::all_with(&client, &params, 0, PageSize::LIST)
        .await
        .unwrap();

    let query = single_query(&server).await.unwrap();
    let mut pairs: Vec<&str> = query.split('&').collect();
    pairs.sort_unstable();
    assert_eq!(
        pairs,
        vec!["inVacations=true", "page=0", "size=9", "sortBy=createdAt"]
    );
}

#[tokio::test]
async fn test_shop_search_without_filters_sends_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let hits = Shop::search(&client, &ShopSearchParams::default())
        .await
        .unwrap();

    assert!(hits.is_empty());
    assert_eq!(single_query(&server).await, None);
}

#[tokio::test]
async fn test_shop_search_sends_only_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 5, "name": "Alpha", "inVacations": false, "openingHours": [] }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let hits = Shop::search(&client, &ShopSearchParams::by_name("a"))
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Alpha");
    assert_eq!(single_query(&server).await.as_deref(), Some("name=a"));
}

#[tokio::test]
async fn test_shop_search_sends_dates_as_iso() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops/search"))
        .and(query_param("startDate", "2024-01-01"))
        .and(query_param("endDate", "2024-12-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let filters = ShopSearchParams {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
        ..Default::default()
    };

    Shop::search(&client, &filters).await.unwrap();
}

#[tokio::test]
async fn test_shop_create_posts_body_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shops"))
        .and(body_json(json!({
            "name": "Bakery",
            "inVacations": false,
            "openingHours": [{ "day": 1, "openAt": "09:00:00", "closeAt": "18:00:00" }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 12, "name": "Bakery", "inVacations": false, "createdAt": "2024-05-01",
            "openingHours": [{ "id": 3, "day": 1, "openAt": "09:00:00", "closeAt": "18:00:00" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let draft = Shop {
        opening_hours: vec![Default::default()],
        ..Shop::named("Bakery")
    };

    let saved = Shop::create(&client, &draft).await.unwrap();

    assert_eq!(saved.id, Some(12));
    assert_eq!(saved.created_at, NaiveDate::from_ymd_opt(2024, 5, 1));
}

#[tokio::test]
async fn test_shop_update_puts_body_with_id_to_collection_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/shops"))
        .and(body_json(json!({
            "id": 12, "name": "Bakery", "inVacations": true, "openingHours": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12, "name": "Bakery", "inVacations": true, "openingHours": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let shop = Shop {
        id: Some(12),
        in_vacations: true,
        ..Shop::named("Bakery")
    };

    let saved = Shop::update(&client, &shop).await.unwrap();
    assert!(saved.in_vacations);
}

#[tokio::test]
async fn test_update_without_id_sends_nothing() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let result = Shop::update(&client, &Shop::named("Bakery")).await;

    assert!(matches!(
        result,
        Err(ResourceError::MissingId {
            resource: "Shop",
            operation: "update"
        })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_shop_error_message_is_surfaced_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shops"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(error_body(400, "Opening hours overlap on day 1")),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = Shop::create(&client, &Shop::named("Bakery"))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(400));
    assert_eq!(
        error.server_message(),
        Some("Opening hours overlap on day 1")
    );
    match error {
        ResourceError::Http(HttpError::Response(response)) => {
            assert_eq!(response.code, 400);
            assert_eq!(response.body.path.as_deref(), Some("/api/v1/shops"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_keeps_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(error_body(404, "Shop 404 not found")),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = Shop::find(&client, 404).await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert_eq!(error.server_message(), Some("Shop 404 not found"));
}

#[tokio::test]
async fn test_shop_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/shops/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    Shop::delete(&client, 7).await.unwrap();
}

// ============================================================================
// Product Tests
// ============================================================================

#[tokio::test]
async fn test_product_all_in_sends_shop_and_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("shopId", "4"))
        .and(query_param("categoryId", "2"))
        .and(query_param("page", "1"))
        .and(query_param("size", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let query = ProductQuery {
        shop_id: Some(4),
        category_id: Some(2),
    };

    let page = Product::all_in(&client, &query, 1, PageSize::SHOP_PRODUCTS)
        .await
        .unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_product_all_in_omits_all_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    Product::all_in(&client, &ProductQuery::for_shop(4), 0, PageSize::SHOP_PRODUCTS)
        .await
        .unwrap();

    let query = single_query(&server).await.unwrap();
    assert!(query.contains("shopId=4"));
    assert!(!query.contains("categoryId"));
}

#[tokio::test]
async fn test_product_find_parses_localized_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 31,
            "price": 1250,
            "shop": { "id": 4, "name": "Bakery" },
            "categories": [{ "id": 2, "name": "Food" }],
            "localizedProducts": [
                { "locale": "FR", "name": "Pain", "description": "Frais" },
                { "locale": "EN", "name": "Bread", "description": "Fresh" }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let product = Product::find(&client, 31).await.unwrap();

    assert_eq!(product.price, 1250);
    assert_eq!(product.display_name(Locale::En), "Bread");
    assert_eq!(product.categories, vec![Category { id: Some(2), name: "Food".to_string() }]);
}

#[tokio::test]
async fn test_product_create_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(json!({
            "price": 300,
            "categories": [],
            "localizedProducts": [{ "locale": "FR", "name": "Croissant", "description": "" }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9, "price": 300, "categories": [],
            "localizedProducts": [{ "id": 1, "locale": "FR", "name": "Croissant", "description": "" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let draft = Product {
        price: 300,
        localized_products: vec![LocalizedProduct {
            name: "Croissant".to_string(),
            ..LocalizedProduct::empty(Locale::Fr)
        }],
        ..Product::default()
    };

    let saved = Product::create(&client, &draft).await.unwrap();
    assert_eq!(saved.id, Some(9));
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_category_crud_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3, "name": "Toys" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/categories"))
        .and(body_json(json!({ "id": 3, "name": "Games" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3, "name": "Games" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/categories/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let category = Category::find(&client, 3).await.unwrap();
    let renamed = Category::update(
        &client,
        &Category {
            name: "Games".to_string(),
            ..category
        },
    )
    .await
    .unwrap();
    assert_eq!(renamed.name, "Games");

    Category::delete(&client, 3).await.unwrap();
}

#[tokio::test]
async fn test_category_all_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = Category::all(&client, 0, PageSize::LIST).await;

    assert!(matches!(
        result,
        Err(ResourceError::Deserialize {
            resource: "Category",
            ..
        })
    ));
}

// ============================================================================
// Path Table Method Tests
// ============================================================================

/// A resource whose backend saves with `POST tags/{id}` and looks up with POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    label: String,
}

impl RestResource for Tag {
    const NAME: &'static str = "Tag";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Find, &["id"], "tags/{id}"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Update, &["id"], "tags/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

#[tokio::test]
async fn test_update_uses_method_and_path_from_table() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tags/5"))
        .and(body_json(json!({ "id": 5, "label": "fresh" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 5, "label": "fresh" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let tag = Tag {
        id: Some(5),
        label: "fresh".to_string(),
    };

    let saved = Tag::update(&client, &tag).await.unwrap();
    assert_eq!(saved, tag);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_never_falls_back_to_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "label": "x" })))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = Tag::find(&client, 1).await;

    assert!(matches!(
        result,
        Err(ResourceError::Http(HttpError::InvalidRequest(_)))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
