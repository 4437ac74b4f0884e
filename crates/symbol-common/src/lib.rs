//! Common types and utilities shared across the weather symbol crates.

pub mod code;
pub mod error;
pub mod fragment;
pub mod params;
pub mod validation;
pub mod viewbox;

pub use code::{DayNight, WeatherCode};
pub use error::{SymbolError, SymbolResult};
pub use fragment::{IconFragmentRef, ParsedFragment, Rotation};
pub use params::{RenderOptions, RenderParams};
pub use validation::{is_valid_angle, is_valid_weather_code, parse_angle};
pub use viewbox::ViewBox;
