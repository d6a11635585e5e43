//! Repository for the `customers` table.

use sqlx::{Sqlite, SqliteExecutor, SqlitePool};

use crate::models::customer::{CreateCustomer, Customer};
use crate::seed;

/// Column list for `customers` queries.
const COLUMNS: &str = "id, account_number, issue_date, interest_rate, tenure, emi_due";

/// Result of [`CustomerRepo::seed_if_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty; this many sample customers were inserted.
    Seeded(usize),
    /// At least one customer already existed; nothing was written.
    AlreadySeeded,
}

/// Provides data access for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// List every customer in insertion order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Find a customer by exact (case-sensitive) account number.
    pub async fn find_by_account_number(
        pool: &SqlitePool,
        account_number: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE account_number = ?1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(account_number)
            .fetch_optional(pool)
            .await
    }

    /// Insert a customer, returning the stored row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCustomer,
    ) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (account_number, issue_date, interest_rate, tenure, emi_due) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.account_number)
            .bind(input.issue_date)
            .bind(input.interest_rate)
            .bind(input.tenure)
            .bind(input.emi_due)
            .fetch_one(pool)
            .await
    }

    /// Number of customers. Accepts a pool or an open transaction.
    pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let (count,): (i64,) = sqlx::query_as::<Sqlite, (i64,)>("SELECT COUNT(*) FROM customers")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// Insert the sample customers from [`seed::sample_customers`] unless
    /// any customer exists already.
    ///
    /// The emptiness check and the inserts share one transaction.
    pub async fn seed_if_empty(pool: &SqlitePool) -> Result<SeedOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if Self::count(&mut *tx).await? > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let samples = seed::sample_customers();
        for customer in &samples {
            sqlx::query(
                "INSERT INTO customers (account_number, issue_date, interest_rate, tenure, emi_due) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(&customer.account_number)
            .bind(customer.issue_date)
            .bind(customer.interest_rate)
            .bind(customer.tenure)
            .bind(customer.emi_due)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(SeedOutcome::Seeded(samples.len()))
    }
}
