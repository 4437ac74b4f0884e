//! Weather symbol and wind direction handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, instrument, warn};

use symbol_common::{parse_angle, RenderParams, SymbolError, SymbolResult};

use crate::state::AppState;

/// Cache policy for rendered symbols; output depends only on the request.
pub const SVG_CACHE_CONTROL: &str = "public, max-age=3600";

const WEATHER_SYMBOL_ENDPOINT: &str = "weather_symbol";
const WIND_DIRECTION_ENDPOINT: &str = "wind_direction";

/// Optional output geometry shared by both symbol endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SvgQuery {
    #[serde(rename = "viewBox")]
    pub view_box: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl SvgQuery {
    pub fn render_params(&self) -> SymbolResult<RenderParams> {
        RenderParams::from_parts(
            self.view_box.as_deref(),
            self.width.as_deref(),
            self.height.as_deref(),
        )
    }
}

/// GET /weather_symbol/:weather_code
#[instrument(skip(state, query))]
pub async fn weather_symbol_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(weather_code): Path<String>,
    Query(query): Query<SvgQuery>,
) -> Response {
    let start = Instant::now();

    let result = match query.render_params() {
        Ok(params) => {
            state
                .renderer
                .weather_symbol(&weather_code, &params, state.render_options())
                .await
        }
        Err(e) => Err(e),
    };

    finish_request(
        WEATHER_SYMBOL_ENDPOINT,
        start,
        result,
        "Failed to generate weather symbol SVG.",
    )
}

/// GET /wind_direction/:angle
#[instrument(skip(state, query))]
pub async fn wind_direction_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(angle): Path<String>,
    Query(query): Query<SvgQuery>,
) -> Response {
    let start = Instant::now();

    let result = async {
        let angle = parse_angle(&angle).ok_or_else(|| {
            SymbolError::InvalidInput(
                "Invalid angle parameter for wind direction SVG.".to_string(),
            )
        })?;
        let params = query.render_params()?;
        state
            .renderer
            .wind_arrow(angle, &params, state.render_options())
            .await
    }
    .await;

    finish_request(
        WIND_DIRECTION_ENDPOINT,
        start,
        result,
        "Failed to generate wind direction SVG.",
    )
}

/// Record metrics and turn a render result into a response.
///
/// Client errors echo their message; server errors are logged in full and
/// answered with `server_message`.
fn finish_request(
    endpoint: &'static str,
    start: Instant,
    result: SymbolResult<String>,
    server_message: &'static str,
) -> Response {
    let response = match result {
        Ok(svg) => svg_response(svg),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if e.is_client_error() {
                warn!(endpoint, error = %e, "Rejected symbol request");
                (status, e.to_string()).into_response()
            } else {
                error!(endpoint, error = %e, "Symbol rendering failed");
                (status, server_message).into_response()
            }
        }
    };

    metrics::counter!(
        "symbol_requests_total",
        "endpoint" => endpoint,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);
    metrics::histogram!("symbol_render_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());

    response
}

fn svg_response(svg: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, SVG_CACHE_CONTROL),
        ],
        svg,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let params = SvgQuery::default().render_params().unwrap();
        assert_eq!(params.view_box, "0 0 64 64");
        assert_eq!(params.width, "64");
        assert_eq!(params.height, "64");
    }

    #[test]
    fn test_query_rejects_bad_size() {
        let query = SvgQuery {
            width: Some("wide".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.render_params(),
            Err(SymbolError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let response = finish_request(
            WEATHER_SYMBOL_ENDPOINT,
            Instant::now(),
            Err(SymbolError::RenderFailure("disk on fire".to_string())),
            "Failed to generate weather symbol SVG.",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_svg_response_headers() {
        let response = svg_response("<svg/>".to_string());
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
        assert_eq!(response.headers()[header::CACHE_CONTROL], SVG_CACHE_CONTROL);
    }
}
