//! Shared data-access layer for the LoanPay API and dashboard.
//!
//! Both front-ends open their own pool against the same SQLite file and
//! call [`init_schema`] at startup; there is no migration mechanism.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::SqlitePool;

/// Statements that create the schema if it is absent. Safe to run on every start.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS customers ( \
         id             INTEGER PRIMARY KEY AUTOINCREMENT, \
         account_number TEXT    NOT NULL UNIQUE, \
         issue_date     TEXT    NOT NULL, \
         interest_rate  REAL    NOT NULL, \
         tenure         INTEGER NOT NULL, \
         emi_due        REAL    NOT NULL \
     )",
    "CREATE INDEX IF NOT EXISTS idx_customers_account_number ON customers(account_number)",
    "CREATE TABLE IF NOT EXISTS payments ( \
         id           INTEGER PRIMARY KEY AUTOINCREMENT, \
         customer_id  INTEGER NOT NULL REFERENCES customers(id), \
         payment_date TEXT    NOT NULL, \
         amount       REAL    NOT NULL, \
         status       TEXT    NOT NULL DEFAULT 'Success' \
     )",
    "CREATE INDEX IF NOT EXISTS idx_payments_customer_id ON payments(customer_id)",
];

/// Create a connection pool from a database URL such as `sqlite:sql_app.db`.
///
/// The database file is created if it does not exist and foreign keys are
/// enforced on every connection.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `customers` and `payments` tables if they do not exist yet.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::debug!(statements = SCHEMA.len(), "Schema ensured");
    Ok(())
}
