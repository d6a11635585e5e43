//! Handler for the one-time demo data seed.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use loanpay_db::repositories::{CustomerRepo, SeedOutcome};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
}

/// POST /seed
///
/// Insert the sample customers into an empty store. A no-op once any
/// customer exists.
pub async fn seed_data(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let message = match CustomerRepo::seed_if_empty(&state.pool).await? {
        SeedOutcome::Seeded(count) => {
            tracing::info!(count, "Sample customers seeded");
            "Sample data seeded successfully"
        }
        SeedOutcome::AlreadySeeded => "Database already seeded",
    };

    Ok(Json(SeedResponse { message }))
}
