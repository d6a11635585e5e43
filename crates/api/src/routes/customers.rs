use axum::routing::get;
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// ```text
/// GET /customers -> list_customers
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/customers", get(customers::list_customers))
}
