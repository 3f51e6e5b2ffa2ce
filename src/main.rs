//! Movie gateway server binary.

use anyhow::{Context, Result};
use clap::Parser;
use movie_gateway::build_app;
use movie_gateway::config::{AppConfig, LogFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Movie aggregation gateway
#[derive(Parser)]
#[command(name = "movie-gateway", version)]
#[command(
    about = "Merges movie catalogs from several providers behind one REST API",
    long_about = None
)]
struct Cli {
    /// Path to a TOML config file (defaults to config/default.toml if present)
    #[arg(short, long, env = "MOVIE_GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(config.log.format);

    let router = build_app(&config).context("failed to build application")?;
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, cache_ttl_secs = config.cache.ttl_secs, "movie gateway listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("movie gateway stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
