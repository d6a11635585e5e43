//! Demonstration customers inserted into an empty store.

use chrono::NaiveDate;

use crate::models::customer::CreateCustomer;

/// The three fixed sample loan accounts.
pub fn sample_customers() -> Vec<CreateCustomer> {
    vec![
        sample("ACC1001", (2023, 1, 15), 12.5, 24, 1500.00),
        sample("ACC1002", (2023, 3, 10), 10.0, 36, 2200.50),
        sample("ACC1003", (2023, 6, 20), 11.2, 12, 5000.00),
    ]
}

fn sample(
    account_number: &str,
    (year, month, day): (i32, u32, u32),
    interest_rate: f64,
    tenure: i32,
    emi_due: f64,
) -> CreateCustomer {
    CreateCustomer {
        account_number: account_number.to_string(),
        issue_date: NaiveDate::from_ymd_opt(year, month, day).expect("sample issue dates are valid"),
        interest_rate,
        tenure,
        emi_due,
    }
}
