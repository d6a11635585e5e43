//! Payment entry form.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use loanpay_db::models::customer::Customer;
use loanpay_db::repositories::{CustomerRepo, PaymentRepo};
use serde::Deserialize;

use crate::error::DashboardResult;
use crate::format;
use crate::html::{self, Alert};
use crate::state::DashboardState;

/// Submitted payment form fields.
#[derive(Debug, Deserialize)]
pub struct PaymentForm {
    pub account_number: String,
    pub amount: f64,
}

/// GET /payments/new
pub async fn show(State(state): State<DashboardState>) -> DashboardResult<Html<String>> {
    let customers = CustomerRepo::list_all(&state.pool).await?;

    Ok(Html(html::page("New Payment", &render(&customers, None))))
}

/// POST /payments/new
///
/// Records the payment and re-renders the form with a banner. An account
/// that no longer exists is reported inline and nothing is written.
pub async fn submit(
    State(state): State<DashboardState>,
    Form(form): Form<PaymentForm>,
) -> DashboardResult<Html<String>> {
    let banner = match CustomerRepo::find_by_account_number(&state.pool, &form.account_number)
        .await?
    {
        Some(customer) => {
            let payment = PaymentRepo::create(&state.pool, customer.id, form.amount).await?;
            tracing::info!(
                payment_id = payment.id,
                account_number = %form.account_number,
                amount = payment.amount,
                "Payment recorded from dashboard",
            );
            html::alert(
                Alert::Success,
                &format!(
                    "Payment of {} recorded for {}!",
                    format::money(payment.amount),
                    form.account_number
                ),
            )
        }
        None => html::alert(Alert::Error, "Account not found."),
    };

    let customers = CustomerRepo::list_all(&state.pool).await?;
    Ok(Html(html::page(
        "New Payment",
        &render(&customers, Some(&banner)),
    )))
}

/// Render the form. `banner` is pre-rendered HTML shown above it.
pub fn render(customers: &[Customer], banner: Option<&str>) -> String {
    let mut body = String::from("<h3>Record New Payment</h3>");
    if let Some(banner) = banner {
        body.push_str(banner);
    }

    if customers.is_empty() {
        body.push_str(&html::alert(
            Alert::Error,
            "No customers available. Please add customers first.",
        ));
        return body;
    }

    let options: String = customers
        .iter()
        .map(|c| {
            let account = html::escape(&c.account_number);
            format!("<option value=\"{account}\">{account}</option>")
        })
        .collect();

    body.push_str(&format!(
        "<form method=\"post\" action=\"/payments/new\">\
         <label>Select Customer Account \
         <select name=\"account_number\">{options}</select></label>\
         <label>Payment Amount ($) \
         <input type=\"number\" name=\"amount\" min=\"0\" step=\"0.01\" value=\"0.00\" required></label>\
         <button type=\"submit\">Submit Payment</button>\
         </form>"
    ));
    body
}
