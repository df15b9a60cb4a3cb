//! Integration tests for the catalog read boundary.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use riverstone_integration_tests::{read_json, test_app};

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("build request")
}

#[tokio::test]
async fn test_health_is_ok() {
    let response = test_app().oneshot(get("/health")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_products_lists_full_seed_catalog() {
    let response = test_app()
        .oneshot(get("/api/products"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("public, max-age=60")
    );
    assert!(
        response.headers().contains_key("x-request-id"),
        "every response carries a request id"
    );

    let body = read_json(response).await;
    let products = body.as_array().expect("array of products");
    assert_eq!(products.len(), 8);
    assert!(products.iter().any(|p| p["id"] == "raw-w320"));
}

#[tokio::test]
async fn test_product_by_id() {
    let response = test_app()
        .oneshot(get("/api/products/raw-w320"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["name"], "Raw Cashews W320");
    assert_eq!(body["price"], "1200");
    assert_eq!(body["category"], "raw");
}

#[tokio::test]
async fn test_unknown_product_is_404_with_json_error() {
    let response = test_app()
        .oneshot(get("/api/products/nonexistent"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Product not found: nonexistent");
}

#[tokio::test]
async fn test_category_filter() {
    let response = test_app()
        .oneshot(get("/api/products/category/flavored"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let products = body.as_array().expect("array of products");
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p["category"] == "flavored"));
}

#[tokio::test]
async fn test_unknown_category_is_empty_list_not_error() {
    let response = test_app()
        .oneshot(get("/api/products/category/no-such-category"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_upstream_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/api/products")
        .header("x-request-id", "upstream-trace-42")
        .body(Body::empty())
        .expect("build request");

    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("upstream-trace-42")
    );
}
