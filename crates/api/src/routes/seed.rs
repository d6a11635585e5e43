use axum::routing::post;
use axum::Router;

use crate::handlers::seed;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/seed", post(seed::seed_data))
}
