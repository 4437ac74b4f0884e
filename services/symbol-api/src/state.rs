//! Application state for the Symbol API.

use chrono::{DateTime, Utc};

use symbol_common::RenderOptions;
use symbol_renderer::SymbolRenderer;

use crate::config::ServiceConfig;

/// Shared application state.
pub struct AppState {
    /// Resolved service configuration.
    pub config: ServiceConfig,

    /// Renderer bound to the configured asset directories.
    pub renderer: SymbolRenderer,

    /// Process start time, reported as the build date.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with a filesystem-backed renderer.
    pub fn new(config: ServiceConfig) -> Self {
        let renderer = SymbolRenderer::from_dirs(&config.assets_dir(), &config.elements_dir());
        Self::with_renderer(config, renderer)
    }

    /// Create state around an existing renderer.
    pub fn with_renderer(config: ServiceConfig, renderer: SymbolRenderer) -> Self {
        Self {
            config,
            renderer,
            started_at: Utc::now(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        self.config.render_options()
    }
}
