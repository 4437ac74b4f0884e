//! Weather Symbol API Server
//!
//! Serves weather symbols and wind direction arrows as SVG.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use symbol_api::config::{Args, ServiceConfig};
use symbol_api::state::AppState;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Prometheus metrics exporter initialized");

    let config = ServiceConfig::from_args(&args)?;
    info!(
        version = %config.build.version,
        commit = %config.build.commit_hash,
        assets = %config.assets_base_path.display(),
        optimize = !config.no_opt_svg,
        "Starting Weather Symbol API server"
    );
    config.check_asset_dirs();

    let addr = config.listen_addr;
    let state = Arc::new(AppState::new(config));
    let app = symbol_api::build_router(state, prometheus_handle);

    info!("Weather Symbol API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
