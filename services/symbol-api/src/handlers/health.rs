//! Service info, health and metrics handlers.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{SecondsFormat, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use crate::config::APP_NAME;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub ts: String,
    pub app_name: String,
    pub version: String,
    pub commit_hash: String,
    pub build_date: String,
    pub environment: String,
}

/// GET / - Service info
pub async fn info_handler(Extension(state): Extension<Arc<AppState>>) -> Json<InfoResponse> {
    let build = &state.config.build;
    Json(InfoResponse {
        ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        app_name: APP_NAME.to_string(),
        version: build.version.clone(),
        commit_hash: build.commit_hash.clone(),
        build_date: state
            .started_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: build.environment.clone(),
    })
}

/// GET /health - Basic health check
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /metrics - Prometheus metrics
pub async fn metrics_handler(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}
