//! Home view: portfolio aggregates and the latest transactions.

use axum::extract::State;
use axum::response::Html;
use loanpay_core::portfolio::PortfolioSummary;
use loanpay_db::models::payment::PaymentWithAccount;
use loanpay_db::repositories::{CustomerRepo, PaymentRepo};

use crate::error::DashboardResult;
use crate::format;
use crate::html::{self, Alert};
use crate::state::DashboardState;

/// Number of payments listed under "Recent Transactions".
pub const RECENT_LIMIT: i64 = 10;

/// GET /
pub async fn show(State(state): State<DashboardState>) -> DashboardResult<Html<String>> {
    let customers = CustomerRepo::list_all(&state.pool).await?;
    let payments = PaymentRepo::list_all(&state.pool).await?;

    let summary = PortfolioSummary::from_parts(
        customers.iter().map(|c| (c.interest_rate, c.emi_due)),
        payments.iter().map(|p| p.amount),
    );
    let recent = PaymentRepo::list_recent_with_account(&state.pool, RECENT_LIMIT).await?;

    Ok(Html(html::page("Dashboard", &render(&summary, &recent))))
}

/// Render the aggregates followed by `recent` (already newest first).
pub fn render(summary: &PortfolioSummary, recent: &[PaymentWithAccount]) -> String {
    let metrics = [
        ("Total Customers", summary.total_customers.to_string()),
        ("Total Collected", format::money(summary.total_collected)),
        ("Pending EMI", format::money(summary.pending_emi)),
        ("Avg Interest", format::average_rate(summary.average_interest_rate())),
    ];

    let mut body = String::from("<h3>Market Overview</h3><div class=\"metrics\">");
    for (label, value) in metrics {
        body.push_str(&format!(
            "<div class=\"metric\"><div class=\"label\">{label}</div>\
             <div class=\"value\">{}</div></div>",
            html::escape(&value)
        ));
    }
    body.push_str("</div><hr><h4>Recent Transactions</h4>");

    if recent.is_empty() {
        body.push_str(&html::alert(Alert::Info, "No transactions yet."));
    } else {
        body.push_str(&html::table(
            &["Date", "Account", "Amount", "Status"],
            recent.iter().map(|p| {
                vec![
                    format::timestamp(&p.payment_date),
                    p.account_number.clone(),
                    format::money(p.amount),
                    p.status.clone(),
                ]
            }),
        ));
    }
    body
}
