//! Handlers for the customer directory.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use loanpay_db::repositories::CustomerRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /customers
///
/// Every customer in storage order. No filtering or pagination.
pub async fn list_customers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let customers = CustomerRepo::list_all(&state.pool).await?;

    Ok(Json(customers))
}
