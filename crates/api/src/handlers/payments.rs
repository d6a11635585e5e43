//! Handlers for payment submission and payment history.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use loanpay_core::error::CoreError;
use loanpay_db::models::payment::CreatePayment;
use loanpay_db::repositories::{CustomerRepo, PaymentRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /payments
///
/// Record a payment against the customer with the given account number.
/// Unknown accounts yield 404 and nothing is written.
pub async fn create_payment(
    State(state): State<AppState>,
    Json(input): Json<CreatePayment>,
) -> AppResult<impl IntoResponse> {
    let customer = CustomerRepo::find_by_account_number(&state.pool, &input.account_number)
        .await?
        .ok_or_else(|| CoreError::customer_not_found(&input.account_number))?;

    let payment = PaymentRepo::create(&state.pool, customer.id, input.amount).await?;

    tracing::info!(
        payment_id = payment.id,
        account_number = %input.account_number,
        amount = payment.amount,
        "Payment recorded",
    );

    Ok(Json(payment))
}

/// GET /payments/{account_number}
///
/// All payments for the account, oldest first.
pub async fn list_payment_history(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> AppResult<impl IntoResponse> {
    let customer = CustomerRepo::find_by_account_number(&state.pool, &account_number)
        .await?
        .ok_or_else(|| CoreError::customer_not_found(&account_number))?;

    let payments = PaymentRepo::list_by_customer(&state.pool, customer.id).await?;

    Ok(Json(payments))
}
