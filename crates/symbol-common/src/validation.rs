//! Input predicates for weather codes and wind angles.

/// Check a weather code against `[dn][0-6][0-4][0-2]`.
///
/// Exactly four characters, one per class, in that order. Anything else,
/// including non-ASCII input, is rejected.
pub fn is_valid_weather_code(code: &str) -> bool {
    match code.as_bytes() {
        [day_night, cloudiness, rate, kind] => {
            matches!(day_night, b'd' | b'n')
                && (b'0'..=b'6').contains(cloudiness)
                && (b'0'..=b'4').contains(rate)
                && (b'0'..=b'2').contains(kind)
        }
        _ => false,
    }
}

/// Check that an angle is a finite value in `[0, 360)` degrees.
pub fn is_valid_angle(angle: f64) -> bool {
    angle.is_finite() && (0.0..360.0).contains(&angle)
}

/// Parse a path segment as an angle in degrees.
///
/// Accepts any decimal float form (`90`, `12.5`, `1e2`), not only integer
/// degrees. Returns `None` for non-numeric text. The result still needs
/// [`is_valid_angle`] before use.
pub fn parse_angle(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|a| !a.is_nan())
}
