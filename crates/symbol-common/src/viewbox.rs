//! SVG `viewBox` values.

use crate::error::{SymbolError, SymbolResult};

/// A parsed `viewBox="min-x min-y width height"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Parse a viewBox attribute. Values may be separated by whitespace
    /// and/or commas; width and height must be positive.
    pub fn parse(s: &str) -> SymbolResult<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 4 {
            return Err(SymbolError::InvalidInput(format!(
                "Invalid viewBox '{}': expected four numbers",
                s
            )));
        }

        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    SymbolError::InvalidInput(format!("Invalid viewBox number: {}", part))
                })?;
        }

        let [min_x, min_y, width, height] = values;
        if width <= 0.0 || height <= 0.0 {
            return Err(SymbolError::InvalidInput(format!(
                "Invalid viewBox '{}': width and height must be positive",
                s
            )));
        }

        Ok(Self::new(min_x, min_y, width, height))
    }

    /// Center point in viewBox coordinates.
    pub fn center(&self) -> (f64, f64) {
        (
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }
}
