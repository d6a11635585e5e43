/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8501`).
    pub port: u16,
    /// SQLite database URL, normally the same file the API uses.
    pub database_url: String,
}

impl DashboardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default              |
    /// |------------------|----------------------|
    /// | `DASHBOARD_HOST` | `0.0.0.0`            |
    /// | `DASHBOARD_PORT` | `8501`               |
    /// | `DATABASE_URL`   | `sqlite:sql_app.db`  |
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("DASHBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = std::env::var("DASHBOARD_PORT")
            .unwrap_or_else(|_| "8501".into())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("DASHBOARD_PORT must be a valid u16: {e}"))?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:sql_app.db".into());

        Ok(Self {
            host,
            port,
            database_url,
        })
    }
}
