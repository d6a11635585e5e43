pub mod customers;
pub mod health;
pub mod payments;
pub mod seed;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /                               service info
/// /health                         liveness
/// /customers                      list
/// /payments                       create (POST)
/// /payments/{account_number}      history
/// /seed                           seed sample data (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(customers::router())
        .merge(payments::router())
        .merge(seed::router())
}
