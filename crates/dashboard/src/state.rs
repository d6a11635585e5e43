/// Shared state for dashboard views.
#[derive(Clone)]
pub struct DashboardState {
    /// Database connection pool, passed explicitly to every repository call.
    pub pool: loanpay_db::DbPool,
}
