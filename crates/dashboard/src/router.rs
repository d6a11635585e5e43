use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::DashboardState;
use crate::views::{customers, history, overview, payment};

/// Build the dashboard router.
///
/// ```text
/// GET  /                  overview (aggregates + recent transactions)
/// GET  /customers         customer directory
/// POST /customers/seed    seed sample data, redirect back
/// GET  /payments/new      payment form
/// POST /payments/new      record payment
/// GET  /history           history search
/// ```
pub fn build_dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(overview::show))
        .route("/customers", get(customers::show))
        .route("/customers/seed", post(customers::seed))
        .route("/payments/new", get(payment::show).post(payment::submit))
        .route("/history", get(history::show))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
