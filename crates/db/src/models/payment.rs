//! Payment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use loanpay_core::types::{DbId, Timestamp};

/// A row from the `payments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub customer_id: DbId,
    pub payment_date: Timestamp,
    pub amount: f64,
    pub status: String,
}

/// Request body for recording a payment against an account.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub amount: f64,
    pub account_number: String,
}

/// A payment joined with the account number of its customer.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PaymentWithAccount {
    pub id: DbId,
    pub account_number: String,
    pub payment_date: Timestamp,
    pub amount: f64,
    pub status: String,
}
