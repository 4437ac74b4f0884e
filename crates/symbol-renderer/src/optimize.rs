//! SVG output optimization.

use symbol_common::{RenderOptions, SymbolError, SymbolResult};

/// Markup-to-markup minification step applied to finished documents.
pub trait SvgOptimizer: Send + Sync {
    fn optimize(&self, svg: &str) -> SymbolResult<String>;
}

/// Normalizes and compacts documents through usvg.
///
/// usvg resolves CSS classes into presentation attributes and flattens
/// `<use>` references; the tree is written without indentation and with
/// reduced numeric precision. Since usvg also expands shapes into paths,
/// the rewrite is kept only when it is smaller than the input with its
/// inter-tag whitespace removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsvgOptimizer;

/// Decimal places kept for path coordinates.
const COORDINATES_PRECISION: u8 = 3;
/// Decimal places kept for transform matrices.
const TRANSFORMS_PRECISION: u8 = 4;

impl UsvgOptimizer {
    /// Rewrite a document as normalized usvg output.
    ///
    /// The output keeps a `viewBox` matching its width and height, so the
    /// document still scales when embedded at another size.
    pub fn rewrite(&self, svg: &str) -> SymbolResult<String> {
        let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
            .map_err(|e| SymbolError::RenderFailure(format!("SVG optimization failed: {}", e)))?;

        let write_options = usvg::WriteOptions {
            coordinates_precision: COORDINATES_PRECISION,
            transforms_precision: TRANSFORMS_PRECISION,
            indent: usvg::Indent::None,
            attributes_indent: usvg::Indent::None,
            ..usvg::WriteOptions::default()
        };
        let written = tree.to_string(&write_options);

        let size = tree.size();
        Ok(with_view_box(&written, size.width(), size.height()))
    }
}

impl SvgOptimizer for UsvgOptimizer {
    fn optimize(&self, svg: &str) -> SymbolResult<String> {
        let rewritten = self.rewrite(svg)?;
        let compact = collapse_whitespace(svg);

        if rewritten.len() < compact.len() {
            Ok(rewritten)
        } else {
            Ok(compact)
        }
    }
}

/// Add `viewBox="0 0 w h"` to the root tag unless it already has one.
fn with_view_box(svg: &str, width: f32, height: f32) -> String {
    let root_end = svg.find('>').unwrap_or(svg.len());
    if svg[..root_end].contains("viewBox=") || !svg.starts_with("<svg") {
        return svg.to_string();
    }
    format!(
        "<svg viewBox=\"0 0 {} {}\"{}",
        width,
        height,
        &svg["<svg".len()..]
    )
}

/// Drop indentation and line breaks between tags.
///
/// Lines that continue text or attribute values are joined with a single
/// space.
fn collapse_whitespace(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len());
    for line in svg.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !out.is_empty() && !out.ends_with('>') && !line.starts_with('<') {
            out.push(' ');
        }
        out.push_str(line);
    }
    out
}

/// Leaves markup untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughOptimizer;

impl SvgOptimizer for PassthroughOptimizer {
    fn optimize(&self, svg: &str) -> SymbolResult<String> {
        Ok(svg.to_string())
    }
}

/// Apply the optimizer unless the request asks for raw output.
pub fn finish(
    svg: String,
    optimizer: &dyn SvgOptimizer,
    options: RenderOptions,
) -> SymbolResult<String> {
    if options.skip_optimization {
        return Ok(svg);
    }
    optimizer.optimize(&svg)
}
