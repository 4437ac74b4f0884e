//! Wind direction arrows.
//!
//! The arrow glyph is drawn in its own coordinate space (by default a
//! 24x24 box centered at (12, 12), pointing at the reference bearing).
//! The target box is the output document's `viewBox`, in user units.
//! Rendering moves the glyph center to the origin, scales it uniformly to
//! fit the target box, rotates it clockwise by the bearing and finally
//! places it at the target center:
//!
//! ```text
//! translate(target center) rotate(angle) scale(s) translate(-glyph center)
//! ```
//!
//! SVG applies the list right to left, so rotation and scaling both happen
//! about the glyph center before placement.

use tracing::instrument;

use symbol_common::{
    is_valid_angle, RenderOptions, RenderParams, SymbolError, SymbolResult, ViewBox,
};

use crate::compose::SVG_NS;
use crate::extract::{extract_svg_parts, svg_root_attribute};
use crate::optimize::{finish, SvgOptimizer};
use crate::store::FragmentStore;

/// Fragment name of the arrow glyph.
pub const WIND_ARROW: &str = "wind-arrow";

/// Glyph box assumed when the source has no usable `viewBox`.
pub const DEFAULT_GLYPH_BOX: ViewBox = ViewBox {
    min_x: 0.0,
    min_y: 0.0,
    width: 24.0,
    height: 24.0,
};

/// Placement of the arrow glyph inside the target box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindArrowTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation: f64,
    pub scale: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl WindArrowTransform {
    /// Fit `glyph` into the `target` box (in the output's user units),
    /// rotated by `angle_degrees` clockwise.
    pub fn compute(angle_degrees: f64, glyph: &ViewBox, target: &ViewBox) -> Self {
        // Never overflow either dimension on non-square targets.
        let scale = (target.width / glyph.width).min(target.height / glyph.height);
        let (origin_x, origin_y) = glyph.center();
        let (translate_x, translate_y) = target.center();

        Self {
            translate_x,
            translate_y,
            rotation: angle_degrees,
            scale,
            origin_x,
            origin_y,
        }
    }

    pub fn to_svg_transform(&self) -> String {
        format!(
            "translate({} {}) rotate({}) scale({}) translate({} {})",
            self.translate_x,
            self.translate_y,
            self.rotation,
            self.scale,
            -self.origin_x,
            -self.origin_y
        )
    }
}

/// Presentation attributes inherited from the glyph's root `<svg>`.
const INHERITED_ATTRIBUTES: [&str; 5] = [
    "fill",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
];

/// Root presentation attributes of the glyph, rendered for the wrapping
/// group (with a leading space per attribute).
///
/// Extraction drops the root tag, so paint set there would otherwise be
/// lost.
pub fn inherited_attributes(markup: &str) -> String {
    INHERITED_ATTRIBUTES
        .iter()
        .filter_map(|name| {
            svg_root_attribute(markup, name)
                .filter(|value| !value.contains('"'))
                .map(|value| format!(" {}=\"{}\"", name, value))
        })
        .collect()
}

/// The glyph's own coordinate box, from its root `viewBox`.
pub fn glyph_box(markup: &str) -> ViewBox {
    svg_root_attribute(markup, "viewBox")
        .and_then(|raw| ViewBox::parse(raw).ok())
        .unwrap_or(DEFAULT_GLYPH_BOX)
}

/// Build the wind arrow document from glyph markup.
pub fn compose_wind_arrow(
    angle_degrees: f64,
    markup: &str,
    params: &RenderParams,
) -> SymbolResult<String> {
    if !is_valid_angle(angle_degrees) {
        return Err(SymbolError::InvalidInput(
            "Invalid angle parameter for wind direction SVG.".to_string(),
        ));
    }

    let parsed = extract_svg_parts(markup).ok_or_else(|| {
        SymbolError::RenderFailure(format!(
            "Error parsing {}.svg: invalid SVG structure",
            WIND_ARROW
        ))
    })?;

    let target = ViewBox::parse(&params.view_box)?;
    let transform = WindArrowTransform::compute(angle_degrees, &glyph_box(markup), &target);

    Ok(format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"{view_box}\" xmlns=\"{ns}\">\n\
         <defs>\n\
         <style type=\"text/css\">{style}</style>\n\
         {defs}\n\
         </defs>\n\
         <g transform=\"{transform}\"{paint}>{content}</g>\n\
         </svg>\n",
        width = params.width,
        height = params.height,
        view_box = params.view_box,
        ns = SVG_NS,
        style = parsed.style,
        defs = parsed.defs,
        transform = transform.to_svg_transform(),
        paint = inherited_attributes(markup),
        content = parsed.main_content,
    ))
}

/// Render the wind arrow for a bearing in degrees.
///
/// The glyph is mandatory: a missing or malformed glyph is a
/// `RenderFailure`.
#[instrument(skip(store, optimizer, params))]
pub async fn render_wind_arrow(
    angle_degrees: f64,
    params: &RenderParams,
    store: &dyn FragmentStore,
    optimizer: &dyn SvgOptimizer,
    options: RenderOptions,
) -> SymbolResult<String> {
    if !is_valid_angle(angle_degrees) {
        return Err(SymbolError::InvalidInput(
            "Invalid angle parameter for wind direction SVG.".to_string(),
        ));
    }

    let markup = store.load(WIND_ARROW).await.map_err(|e| match e {
        SymbolError::ResourceMissing(detail) => {
            SymbolError::RenderFailure(format!("wind arrow glyph missing: {}", detail))
        }
        other => other,
    })?;

    let svg = compose_wind_arrow(angle_degrees, &markup, params)?;
    finish(svg, optimizer, options)
}
