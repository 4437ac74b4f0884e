//! Output document parameters.

use crate::error::{SymbolError, SymbolResult};
use crate::viewbox::ViewBox;

pub const DEFAULT_VIEW_BOX: &str = "0 0 64 64";
pub const DEFAULT_WIDTH: &str = "64";
pub const DEFAULT_HEIGHT: &str = "64";

/// Attributes of the root `<svg>` element in a rendered symbol.
///
/// The raw strings are written to the output as given; the numeric
/// values drive the wind arrow placement.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub view_box: String,
    pub width: String,
    pub height: String,
    width_value: f64,
    height_value: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            view_box: DEFAULT_VIEW_BOX.to_string(),
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            width_value: 64.0,
            height_value: 64.0,
        }
    }
}

impl RenderParams {
    /// Build params from optional caller values, filling in defaults.
    pub fn from_parts(
        view_box: Option<&str>,
        width: Option<&str>,
        height: Option<&str>,
    ) -> SymbolResult<Self> {
        let view_box = view_box.unwrap_or(DEFAULT_VIEW_BOX).trim();
        let width = width.unwrap_or(DEFAULT_WIDTH).trim();
        let height = height.unwrap_or(DEFAULT_HEIGHT).trim();

        ViewBox::parse(view_box)?;
        let width_value = parse_dimension("width", width)?;
        let height_value = parse_dimension("height", height)?;

        Ok(Self {
            view_box: view_box.to_string(),
            width: width.to_string(),
            height: height.to_string(),
            width_value,
            height_value,
        })
    }

    pub fn width_value(&self) -> f64 {
        self.width_value
    }

    pub fn height_value(&self) -> f64 {
        self.height_value
    }
}

fn parse_dimension(name: &str, raw: &str) -> SymbolResult<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| {
            SymbolError::InvalidInput(format!(
                "Invalid {} '{}': expected a positive number",
                name, raw
            ))
        })
}

/// Per-request rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Return the assembled markup without running the optimizer.
    pub skip_optimization: bool,
}

impl RenderOptions {
    pub fn unoptimized() -> Self {
        Self {
            skip_optimization: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RenderParams::from_parts(None, None, None).unwrap();
        assert_eq!(params, RenderParams::default());
        assert_eq!(params.view_box, "0 0 64 64");
        assert_eq!(params.width_value(), 64.0);
    }

    #[test]
    fn test_caller_values_kept_verbatim() {
        let params = RenderParams::from_parts(Some("0 0 100 50"), Some("100"), Some("50.5")).unwrap();
        assert_eq!(params.width, "100");
        assert_eq!(params.height, "50.5");
        assert_eq!(params.height_value(), 50.5);
    }

    #[test]
    fn test_rejects_non_numeric_dimensions() {
        let err = RenderParams::from_parts(None, Some("big"), None).unwrap_err();
        assert!(matches!(err, SymbolError::InvalidInput(_)));
        assert!(RenderParams::from_parts(None, None, Some("0")).is_err());
        assert!(RenderParams::from_parts(None, None, Some("-5")).is_err());
    }

    #[test]
    fn test_rejects_bad_view_box() {
        assert!(RenderParams::from_parts(Some("0 0 64"), None, None).is_err());
    }
}
