//! Weather Symbol API Library
//!
//! HTTP surface for the symbol renderer: weather symbols, wind arrows,
//! service info, health and Prometheus metrics.

pub mod config;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the service router.
pub fn build_router(state: Arc<AppState>, prometheus: PrometheusHandle) -> Router {
    Router::new()
        // Service info
        .route("/", get(handlers::health::info_handler))
        // Symbols
        .route(
            "/wind_direction/:angle",
            get(handlers::symbols::wind_direction_handler),
        )
        .route(
            "/weather_symbol/:weather_code",
            get(handlers::symbols::weather_symbol_handler),
        )
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(Extension(prometheus))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
