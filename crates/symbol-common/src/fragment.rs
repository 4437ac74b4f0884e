//! Icon fragment references and parsed fragment markup.

use serde::Serialize;

/// Rotation applied after translation and scaling, about `(cx, cy)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rotation {
    pub angle: f64,
    pub cx: f64,
    pub cy: f64,
}

/// A named fragment with its placement inside the composite.
///
/// The decoder emits these in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconFragmentRef {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
}

impl IconFragmentRef {
    pub fn new(name: impl Into<String>, x: f64, y: f64, scale: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            scale,
            rotation: None,
        }
    }

    pub fn with_rotation(mut self, angle: f64, cx: f64, cy: f64) -> Self {
        self.rotation = Some(Rotation { angle, cx, cy });
        self
    }
}

/// The three regions pulled out of a fragment's `<svg>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFragment {
    /// Inner text of the first `<style>` block.
    pub style: String,
    /// Inner text of the first `<defs>` block.
    pub defs: String,
    /// Everything else inside `<svg>`, trimmed.
    pub main_content: String,
}
