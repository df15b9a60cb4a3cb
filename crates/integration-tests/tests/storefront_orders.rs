//! Integration tests for order submission and retrieval.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use riverstone_core::cart::Cart;
use riverstone_core::order::ShippingAddress;
use riverstone_integration_tests::{read_json, test_app};

fn post_json(path: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("build request")
}

fn order_payload() -> serde_json::Value {
    serde_json::json!({
        "customerName": "Asha Menon",
        "customerEmail": "asha@example.com",
        "customerPhone": "+91 98470 00000",
        "items": [
            { "productId": "raw-w320", "quantity": 25, "price": "1200.00" }
        ],
        "total": "30000.00",
        "shippingAddress": {
            "street": "12 Harbour Road",
            "city": "Kochi",
            "state": "Kerala",
            "postalCode": "682001",
            "country": "India"
        },
        "paymentMethod": "bank"
    })
}

#[tokio::test]
async fn test_valid_order_is_created_pending() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/orders", &order_payload()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    let id = body["id"].as_str().expect("server-assigned id");
    assert!(!id.is_empty());
    assert_eq!(body["status"], "pending");
    assert_eq!(body["paymentStatus"], "pending");
    assert_eq!(body["total"], "30000.00");

    // The created order is retrievable on the same server
    let response = app
        .oneshot(get(&format!("/api/orders/{id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = read_json(response).await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["customerName"], "Asha Menon");
}

#[tokio::test]
async fn test_off_policy_quantity_is_rejected_with_field_details() {
    let mut payload = order_payload();
    payload["items"][0]["quantity"] = serde_json::json!(10);
    payload["total"] = serde_json::json!("12000.00");

    let response = test_app()
        .oneshot(post_json("/api/orders", &payload))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], "validation failed");
    let details = body["details"].as_array().expect("field details");
    assert!(
        details
            .iter()
            .any(|d| d["field"] == "items[0].quantity"),
        "offending item is named: {details:?}"
    );
}

#[tokio::test]
async fn test_multiple_invalid_fields_are_all_enumerated() {
    let mut payload = order_payload();
    payload["customerEmail"] = serde_json::json!("not-an-email");
    payload["shippingAddress"]["city"] = serde_json::json!("");
    payload["items"] = serde_json::json!([]);
    payload["total"] = serde_json::json!("0.00");

    let response = test_app()
        .oneshot(post_json("/api/orders", &payload))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    let fields: Vec<&str> = body["details"]
        .as_array()
        .expect("field details")
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert!(fields.contains(&"customerEmail"));
    assert!(fields.contains(&"shippingAddress.city"));
    assert!(fields.contains(&"items"));
}

#[tokio::test]
async fn test_unparseable_body_is_a_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("build request");

    let response = test_app().oneshot(request).await.expect("response");
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_unknown_order_is_404() {
    let response = test_app()
        .oneshot(get("/api/orders/no-such-order"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// End-to-end contract check: a payload assembled by the client library from a
// real cart is accepted by the server as-is.
#[tokio::test]
async fn test_client_assembled_order_is_accepted() {
    let app = test_app();

    // Fetch a product from the API, as the client would
    let response = app
        .clone()
        .oneshot(get("/api/products/jumbo-w240"))
        .await
        .expect("response");
    let product: riverstone_core::catalog::Product =
        serde_json::from_value(read_json(response).await).expect("product parses");

    let mut cart = Cart::new();
    cart.add_item(&product, 30);

    let details = riverstone_client::CheckoutDetails {
        customer_name: "Asha Menon".to_string(),
        customer_email: "asha@example.com".to_string(),
        customer_phone: None,
        shipping_address: ShippingAddress {
            street: "12 Harbour Road".to_string(),
            city: "Kochi".to_string(),
            state: "Kerala".to_string(),
            postal_code: "682001".to_string(),
            country: "India".to_string(),
        },
        payment_method: "bank".to_string(),
        notes: Some("First trial shipment".to_string()),
    };

    let payload = riverstone_client::assemble_order(&cart, &details).expect("assembles");
    let body = serde_json::to_value(&payload).expect("serialize");

    let response = app
        .oneshot(post_json("/api/orders", &body))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = read_json(response).await;
    assert_eq!(created["items"][0]["productId"], "jumbo-w240");
    assert_eq!(created["items"][0]["quantity"], 30);
    assert_eq!(created["status"], "pending");
}
