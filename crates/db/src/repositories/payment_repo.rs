//! Repository for the `payments` table.

use chrono::Utc;
use loanpay_core::payment::STATUS_SUCCESS;
use loanpay_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::payment::{Payment, PaymentWithAccount};

/// Column list for `payments` queries.
const COLUMNS: &str = "id, customer_id, payment_date, amount, status";

/// Provides data access for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Record a successful payment for a customer, stamped with the current
    /// time. A single insert; no duplicate or amount checks.
    pub async fn create(
        pool: &SqlitePool,
        customer_id: DbId,
        amount: f64,
    ) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (customer_id, payment_date, amount, status) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(customer_id)
            .bind(Utc::now())
            .bind(amount)
            .bind(STATUS_SUCCESS)
            .fetch_one(pool)
            .await
    }

    /// List a customer's payments in insertion order.
    pub async fn list_by_customer(
        pool: &SqlitePool,
        customer_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE customer_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Payment>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// List every payment in insertion order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments ORDER BY id");
        sqlx::query_as::<_, Payment>(&query).fetch_all(pool).await
    }

    /// The `limit` most recently recorded payments, newest first, with the
    /// account number of each payment's customer.
    pub async fn list_recent_with_account(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<PaymentWithAccount>, sqlx::Error> {
        sqlx::query_as::<_, PaymentWithAccount>(
            "SELECT p.id, c.account_number, p.payment_date, p.amount, p.status \
             FROM payments p \
             JOIN customers c ON c.id = p.customer_id \
             ORDER BY p.id DESC \
             LIMIT ?1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
