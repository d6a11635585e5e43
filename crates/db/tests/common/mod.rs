use chrono::NaiveDate;
use loanpay_db::models::customer::CreateCustomer;

pub fn new_customer(account_number: &str, interest_rate: f64, tenure: i32, emi_due: f64) -> CreateCustomer {
    CreateCustomer {
        account_number: account_number.to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        interest_rate,
        tenure,
        emi_due,
    }
}
