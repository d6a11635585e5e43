//! Customer directory view and the seed trigger.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use loanpay_db::models::customer::Customer;
use loanpay_db::repositories::{CustomerRepo, SeedOutcome};
use serde::Deserialize;

use crate::error::DashboardResult;
use crate::format;
use crate::html::{self, Alert};
use crate::state::DashboardState;

/// Outcome of the last seed request, carried through the redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedNotice {
    Seeded,
    AlreadySeeded,
}

#[derive(Debug, Deserialize)]
pub struct CustomersParams {
    pub notice: Option<SeedNotice>,
}

/// GET /customers
pub async fn show(
    State(state): State<DashboardState>,
    Query(params): Query<CustomersParams>,
) -> DashboardResult<Html<String>> {
    let customers = CustomerRepo::list_all(&state.pool).await?;

    Ok(Html(html::page("Customers", &render(&customers, params.notice))))
}

/// POST /customers/seed
pub async fn seed(State(state): State<DashboardState>) -> DashboardResult<Redirect> {
    let notice = match CustomerRepo::seed_if_empty(&state.pool).await? {
        SeedOutcome::Seeded(count) => {
            tracing::info!(count, "Sample customers seeded from dashboard");
            "seeded"
        }
        SeedOutcome::AlreadySeeded => "already_seeded",
    };

    Ok(Redirect::to(&format!("/customers?notice={notice}")))
}

pub fn render(customers: &[Customer], notice: Option<SeedNotice>) -> String {
    let mut body = String::from("<h3>Customer Directory</h3>");

    match notice {
        Some(SeedNotice::Seeded) => body.push_str(&html::alert(Alert::Success, "Data seeded!")),
        Some(SeedNotice::AlreadySeeded) => {
            body.push_str(&html::alert(Alert::Info, "Database already seeded"))
        }
        None => {}
    }

    if customers.is_empty() {
        body.push_str(&html::alert(
            Alert::Warning,
            "No customers found in database.",
        ));
        body.push_str(
            "<form method=\"post\" action=\"/customers/seed\">\
             <button type=\"submit\">Seed Sample Data</button></form>",
        );
        return body;
    }

    body.push_str(&html::table(
        &[
            "Account Number",
            "Issue Date",
            "Interest Rate",
            "Tenure (mos)",
            "EMI Due",
        ],
        customers.iter().map(|c| {
            vec![
                c.account_number.clone(),
                c.issue_date.to_string(),
                format::rate(c.interest_rate),
                c.tenure.to_string(),
                format::money(c.emi_due),
            ]
        }),
    ));
    body
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn empty_directory_offers_seed_button() {
        let out = render(&[], None);
        assert!(out.contains("No customers found in database."));
        assert!(out.contains("action=\"/customers/seed\""));
    }

    #[test]
    fn directory_lists_formatted_rows() {
        let customer = Customer {
            id: 1,
            account_number: "ACC1002".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2023, 3, 10).unwrap(),
            interest_rate: 10.0,
            tenure: 36,
            emi_due: 2200.5,
        };
        let out = render(&[customer], Some(SeedNotice::Seeded));

        assert!(out.contains("Data seeded!"));
        assert!(out.contains("<td>ACC1002</td>"));
        assert!(out.contains("<td>2023-03-10</td>"));
        assert!(out.contains("<td>10.0%</td>"));
        assert!(out.contains("<td>36</td>"));
        assert!(out.contains("<td>$2,200.50</td>"));
        assert!(!out.contains("Seed Sample Data"));
    }
}
