use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use metalfolio_server::{api::app_router, build_state, config::Config};

fn test_config(dir: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        data_dir: dir.path().to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        metal_price_api_key: None,
        secret_key: "test-secret".to_string(),
    }
}

async fn build_test_router(dir: &TempDir) -> Router {
    let config = test_config(dir);
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_works() {
    let tmp = TempDir::new().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app.oneshot(get("/api/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn prices_without_credential_serve_the_fallback_table() {
    let tmp = TempDir::new().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app.oneshot(get("/api/prices")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let prices = body_json(response).await;
    assert_eq!(prices["gold"], json!(2050.0));
    assert_eq!(prices["silver"], json!(25.5));
    assert_eq!(prices["platinum"], json!(950.0));
    assert_eq!(prices["palladium"], json!(1050.0));
}

#[tokio::test]
async fn create_then_fetch_portfolio_aggregates_the_purchase() {
    let tmp = TempDir::new().unwrap();
    let app = build_test_router(&tmp).await;

    let created = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/purchases",
            json!({
                "metalType": "gold",
                "weightOz": 2.0,
                "pricePaid": 3600.0,
                "purchaseDate": "2024-03-05",
                "notes": "bars"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["metalType"], json!("gold"));
    assert_eq!(created["id"], json!(1));

    let response = app.oneshot(get("/api/portfolio")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;

    assert_eq!(view["purchases"].as_array().unwrap().len(), 1);
    // valued at the fallback gold price of 2050/oz
    let gold = &view["summary"]["positions"][0];
    assert_eq!(gold["metalType"], json!("gold"));
    assert_eq!(gold["weight"], json!(2.0));
    assert_eq!(gold["cost"], json!(3600.0));
    assert_eq!(gold["currentValue"], json!(4100.0));
    assert_eq!(view["summary"]["totalProfitLoss"], json!(500.0));
}

#[tokio::test]
async fn invalid_purchase_is_rejected_with_bad_request() {
    let tmp = TempDir::new().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/purchases",
            json!({
                "metalType": "copper",
                "weightOz": 1.0,
                "pricePaid": 100.0,
                "purchaseDate": "2024-03-05"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // nothing was stored
    let listed = app.oneshot(get("/api/purchases")).await.unwrap();
    assert_eq!(body_json(listed).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_is_idempotent_even_for_unknown_ids() {
    let tmp = TempDir::new().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/purchases/12345")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn price_history_serves_thirty_synthetic_points() {
    let tmp = TempDir::new().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app.oneshot(get("/api/prices/history/silver")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let series = body_json(response).await;
    let points = series.as_array().unwrap();
    assert_eq!(points.len(), 30);
    // every synthetic point stays within 5% of the fallback silver price
    for point in points {
        let price = point["price"].as_f64().unwrap();
        assert!((24.225..=26.775).contains(&price), "price {}", price);
    }
}

#[tokio::test]
async fn unknown_history_metal_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app.oneshot(get("/api/prices/history/tin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
