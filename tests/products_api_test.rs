mod common;

use axum::http::{header, Method, StatusCode};
use rstest::rstest;
use serde_json::json;

use common::{response_bytes, response_json, TestApp};

#[tokio::test]
async fn product_lifecycle() {
    let app = TestApp::new();

    // Create
    let response = app
        .request(
            Method::POST,
            "/api/products",
            Some(json!({"name": "Carrot", "price": 1.50, "quantity": 10})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/products/1"
    );
    let created = response_json(response).await;
    assert_eq!(
        created,
        json!({"id": 1, "name": "Carrot", "price": 1.5, "quantity": 10})
    );

    // Fetch it back
    let response = app.get("/api/products/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, created);

    // Replace
    let response = app
        .request(
            Method::PUT,
            "/api/products/1",
            Some(json!({"id": 1, "name": "Carrot", "price": 1.75, "quantity": 8})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response_bytes(response).await.is_empty());

    let response = app.get("/api/products/1").await;
    let fetched = response_json(response).await;
    assert_eq!(fetched["price"], 1.75);
    assert_eq!(fetched["quantity"], 8);

    // Delete
    let response = app.request(Method::DELETE, "/api/products/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response_bytes(response).await.is_empty());

    let response = app.get("/api/products/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_all_products_in_id_order() {
    let app = TestApp::new();

    let response = app.get("/api/products").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));

    for name in ["Potato", "Tomato", "Onion"] {
        let response = app
            .request(
                Method::POST,
                "/api/products",
                Some(json!({"name": name, "price": 0.99, "quantity": 1})),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = response_json(app.get("/api/products").await).await;
    let names: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Potato", "Tomato", "Onion"]);
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::POST,
            "/api/products",
            Some(json!({"id": 500, "name": "Leek", "price": 2, "quantity": 4})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response_json(response).await["id"], 1);
    assert_eq!(
        app.get("/api/products/500").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn mismatched_put_is_rejected_without_mutation() {
    let app = TestApp::new();
    app.request(
        Method::POST,
        "/api/products",
        Some(json!({"name": "Carrot", "price": 1.5, "quantity": 10})),
    )
    .await;

    let response = app
        .request(
            Method::PUT,
            "/api/products/1",
            Some(json!({"id": 2, "name": "Beet", "price": 9.0, "quantity": 1})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let fetched = response_json(app.get("/api/products/1").await).await;
    assert_eq!(
        fetched,
        json!({"id": 1, "name": "Carrot", "price": 1.5, "quantity": 10})
    );
}

#[tokio::test]
async fn put_to_missing_product_is_not_found() {
    let app = TestApp::new();
    let response = app
        .request(
            Method::PUT,
            "/api/products/9",
            Some(json!({"id": 9, "name": "Beet", "price": 1.0, "quantity": 1})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_missing_product_is_not_found() {
    let app = TestApp::new();
    let response = app.request(Method::DELETE, "/api/products/3", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_and_duplicate_names_are_allowed() {
    let app = TestApp::new();
    for name in ["", "Carrot", "Carrot"] {
        let response = app
            .request(
                Method::POST,
                "/api/products",
                Some(json!({"name": name, "price": 1, "quantity": 1})),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let list = response_json(app.get("/api/products").await).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[rstest]
#[case::negative_price(r#"{"name":"Carrot","price":-1,"quantity":1}"#)]
#[case::negative_quantity(r#"{"name":"Carrot","price":1,"quantity":-1}"#)]
#[case::price_as_text(r#"{"name":"Carrot","price":"cheap","quantity":1}"#)]
#[case::missing_price(r#"{"name":"Carrot","quantity":1}"#)]
#[case::not_json("name=Carrot")]
#[tokio::test]
async fn invalid_create_bodies_are_bad_requests(#[case] body: &str) {
    let app = TestApp::new();
    let response = app
        .request_raw(Method::POST, "/api/products", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = response_json(response).await;
    assert_eq!(error["error"], "Bad Request");
    assert!(error["request_id"].is_string());

    assert_eq!(app.state.product_service.product_count().await, 0);
}

#[rstest]
#[case::no_body_id(r#"{"name":"Beet","price":1,"quantity":1}"#)]
#[case::negative_price(r#"{"id":1,"name":"Beet","price":-1,"quantity":1}"#)]
#[case::negative_quantity(r#"{"id":1,"name":"Beet","price":1,"quantity":-1}"#)]
#[case::price_as_text(r#"{"id":1,"name":"Beet","price":"cheap","quantity":1}"#)]
#[case::not_json("id=1")]
#[tokio::test]
async fn invalid_replace_bodies_leave_product_unchanged(#[case] body: &str) {
    let app = TestApp::new();
    app.request(
        Method::POST,
        "/api/products",
        Some(json!({"name": "Carrot", "price": 1.5, "quantity": 10})),
    )
    .await;

    let response = app
        .request_raw(Method::PUT, "/api/products/1", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let fetched = response_json(app.get("/api/products/1").await).await;
    assert_eq!(
        fetched,
        json!({"id": 1, "name": "Carrot", "price": 1.5, "quantity": 10})
    );
}

#[tokio::test]
async fn mismatched_put_to_missing_product_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .request(
            Method::PUT,
            "/api/products/7",
            Some(json!({"id": 1, "name": "Beet", "price": 1, "quantity": 1})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.state.product_service.product_count().await, 0);
}

#[rstest]
#[case(Method::GET, None)]
#[case(Method::DELETE, None)]
#[case(Method::PUT, Some(json!({"id": 1, "name": "Beet", "price": 1, "quantity": 1})))]
#[tokio::test]
async fn non_numeric_ids_are_bad_requests(
    #[case] method: Method,
    #[case] body: Option<serde_json::Value>,
) {
    let app = TestApp::new();
    let response = app.request(method, "/api/products/abc", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn configured_prefix_moves_routes_and_location() {
    let cfg = simple_inventory::config::AppConfig {
        api_prefix: "/products".into(),
        ..common::test_config()
    };
    let app = TestApp::with_config(cfg);

    let response = app
        .request(
            Method::POST,
            "/products",
            Some(json!({"name": "Kale", "price": 3.2, "quantity": 2})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/products/1"
    );
    assert_eq!(app.get("/products/1").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::new();
    let response = app.get("/api/products").await;
    assert!(response.headers().contains_key("x-request-id"));
}
