//! Payment history search.

use axum::extract::{Query, State};
use axum::response::Html;
use loanpay_db::models::payment::Payment;
use loanpay_db::repositories::{CustomerRepo, PaymentRepo};
use serde::Deserialize;

use crate::error::DashboardResult;
use crate::format;
use crate::html::{self, Alert};
use crate::state::DashboardState;

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub account_number: Option<String>,
}

/// What the search found.
#[derive(Debug)]
pub enum Lookup {
    /// No account number entered yet.
    Empty,
    NotFound,
    /// Payments in storage order.
    Found(Vec<Payment>),
}

/// GET /history?account_number=
pub async fn show(
    State(state): State<DashboardState>,
    Query(params): Query<HistoryParams>,
) -> DashboardResult<Html<String>> {
    let account_number = params.account_number.unwrap_or_default();

    let lookup = if account_number.is_empty() {
        Lookup::Empty
    } else {
        match CustomerRepo::find_by_account_number(&state.pool, &account_number).await? {
            Some(customer) => {
                Lookup::Found(PaymentRepo::list_by_customer(&state.pool, customer.id).await?)
            }
            None => Lookup::NotFound,
        }
    };

    Ok(Html(html::page("History", &render(&account_number, lookup))))
}

/// Render the search box and result. Found payments are shown newest first.
pub fn render(account_number: &str, lookup: Lookup) -> String {
    let mut body = format!(
        "<h3>Payment History Search</h3>\
         <form method=\"get\" action=\"/history\">\
         <label>Enter Account Number \
         <input type=\"text\" name=\"account_number\" value=\"{}\"></label>\
         </form>",
        html::escape(account_number)
    );

    match lookup {
        Lookup::Empty => {}
        Lookup::NotFound => body.push_str(&html::alert(Alert::Error, "Account not found.")),
        Lookup::Found(payments) => {
            body.push_str(&format!(
                "<p>Showing history for <strong>{}</strong></p>",
                html::escape(account_number)
            ));
            if payments.is_empty() {
                body.push_str(&html::alert(
                    Alert::Info,
                    "No payment history for this account.",
                ));
            } else {
                body.push_str(&html::table(
                    &["Date", "Amount", "Status"],
                    payments.iter().rev().map(|p| {
                        vec![
                            format::timestamp(&p.payment_date),
                            format::money(p.amount),
                            p.status.clone(),
                        ]
                    }),
                ));
            }
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn payment(id: i64, amount: f64) -> Payment {
        Payment {
            id,
            customer_id: 1,
            payment_date: Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap(),
            amount,
            status: "Success".to_string(),
        }
    }

    #[test]
    fn empty_search_shows_only_the_form() {
        let out = render("", Lookup::Empty);
        assert!(out.contains("name=\"account_number\""));
        assert!(!out.contains("Account not found."));
    }

    #[test]
    fn unknown_account_is_reported_inline() {
        let out = render("ACC9999", Lookup::NotFound);
        assert!(out.contains("Account not found."));
        assert!(out.contains("value=\"ACC9999\""));
    }

    #[test]
    fn found_history_is_newest_first() {
        let out = render("ACC1001", Lookup::Found(vec![payment(1, 111.0), payment(2, 222.0)]));
        let older = out.find("$111.00").unwrap();
        let newer = out.find("$222.00").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn account_without_payments() {
        let out = render("ACC1001", Lookup::Found(Vec::new()));
        assert!(out.contains("No payment history for this account."));
    }

    #[test]
    fn search_value_is_escaped() {
        let out = render("\"><script>", Lookup::NotFound);
        assert!(!out.contains("<script>"));
    }
}
