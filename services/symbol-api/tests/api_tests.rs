//! Router-level tests for the Symbol API.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

use symbol_api::config::ServiceConfig;
use symbol_api::handlers::symbols::SVG_CACHE_CONTROL;
use symbol_api::state::AppState;
use test_utils::{create_asset_tree, fixtures, AssetTree};

fn app_for(config: ServiceConfig) -> Router {
    let prometheus = PrometheusBuilder::new().build_recorder().handle();
    symbol_api::build_router(Arc::new(AppState::new(config)), prometheus)
}

fn app(tree: &AssetTree) -> Router {
    app_for(ServiceConfig::new(tree.base_path()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

// ============================================================================
// Weather symbols
// ============================================================================

#[tokio::test]
async fn test_weather_symbol_ok() {
    let tree = create_asset_tree();
    let response = app(&tree)
        .oneshot(
            Request::builder()
                .uri("/weather_symbol/d240")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
    assert_eq!(response.headers()[header::CACHE_CONTROL], SVG_CACHE_CONTROL);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.starts_with(b"<svg"));
}

#[tokio::test]
async fn test_weather_symbol_invalid_codes() {
    let tree = create_asset_tree();
    for code in fixtures::codes::INVALID {
        let (status, content_type, body) =
            get(app(&tree), &format!("/weather_symbol/{}", code)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", code);
        assert!(content_type.unwrap().starts_with("text/plain"));
        assert_eq!(body, "Invalid weather code format.");
    }
}

#[tokio::test]
async fn test_weather_symbol_bad_params() {
    let tree = create_asset_tree();
    for query in ["width=abc", "height=-5", "viewBox=0%200%2064", "width=0"] {
        let (status, _, _) = get(app(&tree), &format!("/weather_symbol/d000?{}", query)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", query);
    }
}

#[tokio::test]
async fn test_weather_symbol_custom_geometry_raw() {
    let tree = create_asset_tree();
    let mut config = ServiceConfig::new(tree.base_path());
    config.no_opt_svg = true;

    let (status, _, body) = get(
        app_for(config),
        "/weather_symbol/n401?viewBox=0%200%20128%20128&width=128&height=96",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(
        r#"<svg width="128" height="96" viewBox="0 0 128 128" xmlns="http://www.w3.org/2000/svg">"#
    ));
    assert!(body.contains("translate(0 0) scale(1.1)"));
    assert!(body.contains("translate(10 30) scale(0.7)"));
}

#[tokio::test]
async fn test_weather_symbol_without_fragments_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _, body) = get(
        app_for(ServiceConfig::new(dir.path())),
        "/weather_symbol/d000",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Failed to generate weather symbol SVG.");
}

// ============================================================================
// Wind direction
// ============================================================================

#[tokio::test]
async fn test_wind_direction_ok() {
    let tree = create_asset_tree();
    let (status, content_type, body) = get(app(&tree), "/wind_direction/270").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert!(body.starts_with("<svg"));
}

#[tokio::test]
async fn test_wind_direction_fractional_angle() {
    let tree = create_asset_tree();
    let mut config = ServiceConfig::new(tree.base_path());
    config.no_opt_svg = true;

    let (status, _, body) = get(app_for(config), "/wind_direction/12.5").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("rotate(12.5)"));
}

#[tokio::test]
async fn test_wind_direction_invalid_angles() {
    let tree = create_asset_tree();
    for angle in ["360", "-1", "abc", "NaN", "inf"] {
        let (status, _, body) = get(app(&tree), &format!("/wind_direction/{}", angle)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", angle);
        assert_eq!(body, "Invalid angle parameter for wind direction SVG.");
    }
}

#[tokio::test]
async fn test_wind_direction_missing_arrow() {
    let tree = create_asset_tree();
    tree.remove_wind_arrow();
    let (status, _, body) = get(app(&tree), "/wind_direction/90").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Failed to generate wind direction SVG.");
}

#[tokio::test]
async fn test_wind_direction_raw_transform() {
    let tree = create_asset_tree();
    let mut config = ServiceConfig::new(tree.base_path());
    config.no_opt_svg = true;

    let (status, _, body) = get(app_for(config), "/wind_direction/0?viewBox=0%200%2048%2048&width=48&height=48").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("translate(24 24) rotate(0) scale(2) translate(-12 -12)"));
    assert!(body.contains(r#"stroke="red""#));
}

#[tokio::test]
async fn test_wind_direction_uses_view_box_units() {
    let tree = create_asset_tree();
    let mut config = ServiceConfig::new(tree.base_path());
    config.no_opt_svg = true;

    let (status, _, body) = get(app_for(config), "/wind_direction/90?viewBox=0%200%2024%2024").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("translate(12 12) rotate(90) scale(1) translate(-12 -12)"));
}

// ============================================================================
// Info, health, metrics
// ============================================================================

#[tokio::test]
async fn test_info() {
    let tree = create_asset_tree();
    let (status, _, body) = get(app(&tree), "/").await;
    assert_eq!(status, StatusCode::OK);

    let info: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(info["appName"], "Weather Symbol Microservice");
    assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(info["commitHash"], "unknown");
    assert_eq!(info["environment"], "production");
    for key in ["ts", "buildDate"] {
        let value = info[key].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(value).is_ok(), "{}", key);
    }
}

#[tokio::test]
async fn test_health() {
    let tree = create_asset_tree();
    let (status, _, body) = get(app(&tree), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let tree = create_asset_tree();
    let (status, content_type, _) = get(app(&tree), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn test_unknown_route() {
    let tree = create_asset_tree();
    let (status, _, _) = get(app(&tree), "/weather_symbol").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
