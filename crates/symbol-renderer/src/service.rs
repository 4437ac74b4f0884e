//! High-level rendering entry points bound to their asset sources.

use std::path::Path;
use std::sync::Arc;

use symbol_common::{RenderOptions, RenderParams, SymbolResult};

use crate::compose::render_weather_symbol;
use crate::optimize::{SvgOptimizer, UsvgOptimizer};
use crate::store::{FragmentStore, FsFragmentStore};
use crate::wind::render_wind_arrow;

/// Renders weather symbols and wind arrows from a fixed set of sources.
///
/// Weather symbol fragments and the wind arrow glyph live in separate
/// stores (`assets/elements/` and `assets/` on disk).
#[derive(Clone)]
pub struct SymbolRenderer {
    elements: Arc<dyn FragmentStore>,
    glyphs: Arc<dyn FragmentStore>,
    optimizer: Arc<dyn SvgOptimizer>,
}

impl SymbolRenderer {
    pub fn new(
        elements: Arc<dyn FragmentStore>,
        glyphs: Arc<dyn FragmentStore>,
        optimizer: Arc<dyn SvgOptimizer>,
    ) -> Self {
        Self {
            elements,
            glyphs,
            optimizer,
        }
    }

    /// Filesystem-backed renderer with usvg optimization.
    pub fn from_dirs(assets_dir: &Path, elements_dir: &Path) -> Self {
        Self::new(
            Arc::new(FsFragmentStore::new(elements_dir)),
            Arc::new(FsFragmentStore::new(assets_dir)),
            Arc::new(UsvgOptimizer),
        )
    }

    pub async fn weather_symbol(
        &self,
        code: &str,
        params: &RenderParams,
        options: RenderOptions,
    ) -> SymbolResult<String> {
        render_weather_symbol(
            code,
            params,
            self.elements.as_ref(),
            self.optimizer.as_ref(),
            options,
        )
        .await
    }

    pub async fn wind_arrow(
        &self,
        angle_degrees: f64,
        params: &RenderParams,
        options: RenderOptions,
    ) -> SymbolResult<String> {
        render_wind_arrow(
            angle_degrees,
            params,
            self.glyphs.as_ref(),
            self.optimizer.as_ref(),
            options,
        )
        .await
    }
}
