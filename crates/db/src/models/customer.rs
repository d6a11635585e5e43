//! Customer (loan account) entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use loanpay_core::types::DbId;

/// A row from the `customers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub account_number: String,
    pub issue_date: NaiveDate,
    /// Annual rate, as a percentage.
    pub interest_rate: f64,
    /// Loan duration in months.
    pub tenure: i32,
    pub emi_due: f64,
}

/// DTO for inserting a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub account_number: String,
    pub issue_date: NaiveDate,
    pub interest_rate: f64,
    pub tenure: i32,
    pub emi_due: f64,
}
