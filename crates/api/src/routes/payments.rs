use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// ```text
/// POST /payments                    -> create_payment
/// GET  /payments/{account_number}   -> list_payment_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payments", post(payments::create_payment))
        .route(
            "/payments/{account_number}",
            get(payments::list_payment_history),
        )
}
