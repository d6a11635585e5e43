use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loanpay_dashboard::config::DashboardConfig;
use loanpay_dashboard::router::build_dashboard_router;
use loanpay_dashboard::shutdown::shutdown_signal;
use loanpay_dashboard::state::DashboardState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loanpay_dashboard=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DashboardConfig::from_env()?;
    tracing::info!(
        host = %config.host,
        port = %config.port,
        database_url = %config.database_url,
        "Loaded dashboard configuration",
    );

    let pool = loanpay_db::create_pool(&config.database_url)
        .await
        .with_context(|| format!("failed to open {}", config.database_url))?;
    loanpay_db::init_schema(&pool)
        .await
        .context("failed to create database schema")?;
    tracing::info!("Database schema ready");

    let app = build_dashboard_router(DashboardState { pool: pool.clone() });

    let addr = SocketAddr::new(
        config.host.parse().context("invalid DASHBOARD_HOST")?,
        config.port,
    );
    tracing::info!(%addr, "Starting dashboard");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}
