use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::html;

/// Errors a dashboard view can fail with.
///
/// Unknown accounts are not errors here; views render them inline.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Dashboard view failed");

        let body = html::page(
            "Error",
            &html::alert(html::Alert::Error, "Something went wrong while reading the database."),
        );
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}
