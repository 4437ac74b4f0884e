//! Common fragment markup used across the test suite.
//!
//! These mirror the shape of the real assets: a root `<svg>` with an
//! optional `<style>` block, an optional `<defs>` block and a body.

/// Shared gradient used by both cloud fixtures.
pub const CLOUD_DEFS: &str =
    r##"<linearGradient id="cloud-grad"><stop offset="0" stop-color="#fff"/><stop offset="1" stop-color="#ccc"/></linearGradient>"##;

/// Sun with a style block and no defs.
pub const SUN_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
  <style>.sun{fill:#ffc107;}</style>
  <circle class="sun" cx="32" cy="32" r="12"/>
</svg>"##;

/// Moon with neither style nor defs.
pub const MOON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><path d="M40 20a14 14 0 1 0 4 24a12 12 0 0 1-4-24z" fill="#cfd8dc"/></svg>"##;

/// Cloud using the shared gradient.
pub const CLOUD_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
  <style>.cloud{fill:url(#cloud-grad);}</style>
  <defs><linearGradient id="cloud-grad"><stop offset="0" stop-color="#fff"/><stop offset="1" stop-color="#ccc"/></linearGradient></defs>
  <ellipse class="cloud" cx="34" cy="36" rx="18" ry="10"/>
</svg>"##;

/// Second cloud with identical defs content.
pub const CLOUD_ALT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
  <defs><linearGradient id="cloud-grad"><stop offset="0" stop-color="#fff"/><stop offset="1" stop-color="#ccc"/></linearGradient></defs>
  <ellipse fill="url(#cloud-grad)" cx="28" cy="30" rx="14" ry="8"/>
</svg>"##;

/// Precipitation streaks.
pub const PRECIP_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
  <style>.drop{stroke:#2196f3;stroke-width:2;}</style>
  <path class="drop" d="M24 10l-4 8M34 10l-4 8M44 10l-4 8"/>
</svg>"##;

/// Thunderbolt polygon.
pub const THUNDERBOLT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><polygon points="30,0 20,20 30,20 24,36 40,14 30,14 36,0" fill="#ffeb3b"/></svg>"##;

/// 24x24 arrow pointing along the reference bearing.
pub const WIND_ARROW_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="red"><path stroke-linecap="round" stroke-linejoin="round" d="M19.5 13.5 12 21m0 0-7.5-7.5M12 21V3"/></svg>"##;

/// Markup without an `<svg>` element.
pub const MALFORMED_SVG: &str = "<g><circle r=\"4\"/></g>";

/// Sample weather codes for tests.
pub mod codes {
    /// Clear day, no precipitation.
    pub const CLEAR_DAY: &str = "d000";

    /// Night, overcast, light sleet.
    pub const OVERCAST_SLEET_NIGHT: &str = "n401";

    /// Day, partly cloudy, thunderstorm with rain.
    pub const THUNDERSTORM_DAY: &str = "d240";

    /// Fog at night.
    pub const FOG_NIGHT: &str = "n600";

    /// Codes that must be rejected.
    pub const INVALID: [&str; 6] = ["x000", "d700", "d050", "d003", "d00", "d0000"];
}
