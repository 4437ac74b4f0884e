//! Weather symbol rendering.
//!
//! Builds SVG documents from small icon fragments:
//! - Weather code decoding into an ordered fragment list
//! - Fragment extraction (style, defs, body)
//! - Multi-fragment composition with defs deduplication
//! - Wind arrows rotated about their own center

pub mod compose;
pub mod decoder;
pub mod extract;
pub mod optimize;
pub mod service;
pub mod store;
pub mod wind;

pub use compose::{compose_fragments, load_fragments, render_weather_symbol};
pub use decoder::decode_weather_code;
pub use extract::extract_svg_parts;
pub use optimize::{PassthroughOptimizer, SvgOptimizer, UsvgOptimizer};
pub use service::SymbolRenderer;
pub use store::{FragmentStore, FsFragmentStore, MemoryFragmentStore};
pub use wind::{compose_wind_arrow, render_wind_arrow, WindArrowTransform, WIND_ARROW};
