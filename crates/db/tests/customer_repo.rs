//! Integration tests for customer data access and the seed operation.

mod common;

use assert_matches::assert_matches;
use loanpay_db::repositories::{CustomerRepo, SeedOutcome};
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_create_and_find_by_account_number(pool: SqlitePool) {
    loanpay_db::init_schema(&pool).await.unwrap();

    let created = CustomerRepo::create(&pool, &common::new_customer("ACC2000", 9.5, 12, 1000.0))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.account_number, "ACC2000");
    assert_eq!(created.tenure, 12);

    let found = CustomerRepo::find_by_account_number(&pool, "ACC2000")
        .await
        .unwrap()
        .expect("customer should exist");
    assert_eq!(found, created);
}

#[sqlx::test]
async fn test_find_is_exact_and_case_sensitive(pool: SqlitePool) {
    loanpay_db::init_schema(&pool).await.unwrap();
    CustomerRepo::create(&pool, &common::new_customer("ACC2000", 9.5, 12, 1000.0))
        .await
        .unwrap();

    for missing in ["acc2000", "ACC200", "ACC2000 ", "ACC9999"] {
        let found = CustomerRepo::find_by_account_number(&pool, missing).await.unwrap();
        assert!(found.is_none(), "{missing:?} should not match");
    }
}

#[sqlx::test]
async fn test_duplicate_account_number_rejected(pool: SqlitePool) {
    loanpay_db::init_schema(&pool).await.unwrap();
    let input = common::new_customer("ACC2000", 9.5, 12, 1000.0);

    CustomerRepo::create(&pool, &input).await.unwrap();
    let err = CustomerRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));
    assert_eq!(CustomerRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test]
async fn test_list_all_in_insertion_order(pool: SqlitePool) {
    loanpay_db::init_schema(&pool).await.unwrap();
    for account in ["ACC3", "ACC1", "ACC2"] {
        CustomerRepo::create(&pool, &common::new_customer(account, 10.0, 12, 100.0))
            .await
            .unwrap();
    }

    let accounts: Vec<String> = CustomerRepo::list_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.account_number)
        .collect();
    assert_eq!(accounts, ["ACC3", "ACC1", "ACC2"]);
}

#[sqlx::test]
async fn test_seed_is_idempotent(pool: SqlitePool) {
    loanpay_db::init_schema(&pool).await.unwrap();

    let first = CustomerRepo::seed_if_empty(&pool).await.unwrap();
    assert_eq!(first, SeedOutcome::Seeded(3));
    let after_first = CustomerRepo::list_all(&pool).await.unwrap();

    let second = CustomerRepo::seed_if_empty(&pool).await.unwrap();
    assert_eq!(second, SeedOutcome::AlreadySeeded);
    let after_second = CustomerRepo::list_all(&pool).await.unwrap();

    assert_eq!(after_first, after_second);
    let accounts: Vec<&str> = after_second.iter().map(|c| c.account_number.as_str()).collect();
    assert_eq!(accounts, ["ACC1001", "ACC1002", "ACC1003"]);
    assert_eq!(after_second[1].emi_due, 2200.5);
    assert_eq!(after_second[2].tenure, 12);
}

#[sqlx::test]
async fn test_seed_skipped_when_any_customer_exists(pool: SqlitePool) {
    loanpay_db::init_schema(&pool).await.unwrap();
    CustomerRepo::create(&pool, &common::new_customer("ACC2000", 9.5, 12, 1000.0))
        .await
        .unwrap();

    let outcome = CustomerRepo::seed_if_empty(&pool).await.unwrap();
    assert_eq!(outcome, SeedOutcome::AlreadySeeded);
    assert_eq!(CustomerRepo::count(&pool).await.unwrap(), 1);
}
