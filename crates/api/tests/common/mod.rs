use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use loanpay_api::config::ServerConfig;
use loanpay_api::router::build_app_router;
use loanpay_api::state::AppState;
use loanpay_db::models::customer::{CreateCustomer, Customer};
use loanpay_db::repositories::CustomerRepo;
use loanpay_db::DbPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given pool, using the same
/// middleware stack as `main.rs`.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn create_customer(
    pool: &DbPool,
    account_number: &str,
    interest_rate: f64,
    tenure: i32,
    emi_due: f64,
) -> Customer {
    let input = CreateCustomer {
        account_number: account_number.to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        interest_rate,
        tenure,
        emi_due,
    };
    CustomerRepo::create(pool, &input).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
