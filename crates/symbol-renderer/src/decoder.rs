//! Weather code to fragment list decoding.
//!
//! Layers are emitted in paint order: celestial body, cloud, then
//! precipitation (with the thunderbolt ahead of storm precipitation).

use symbol_common::{DayNight, IconFragmentRef, SymbolError, SymbolResult, WeatherCode};

pub const SUN: &str = "sun";
pub const MOON: &str = "moon";
pub const THUNDERBOLT: &str = "thunderbolt";

/// Fragment name and placement for a table entry.
#[derive(Debug, Clone, Copy)]
struct Placement {
    name: &'static str,
    x: f64,
    y: f64,
    scale: f64,
}

impl Placement {
    const fn new(name: &'static str, x: f64, y: f64, scale: f64) -> Self {
        Self { name, x, y, scale }
    }

    fn to_ref(self) -> IconFragmentRef {
        IconFragmentRef::new(self.name, self.x, self.y, self.scale)
    }
}

/// Cloud fragment per cloudiness level 1..=6.
const CLOUD_LAYERS: [Placement; 6] = [
    Placement::new("cloud-1", 10.0, 10.0, 0.9), // almost clear
    Placement::new("cloud-2", 0.0, 0.0, 1.0),   // partly cloudy
    Placement::new("cloud-3", 0.0, 0.0, 1.0),   // broken
    Placement::new("cloud-4", 0.0, 0.0, 1.1),   // overcast
    Placement::new("cloud-5", 0.0, 0.0, 1.0),   // thin high cloud
    Placement::new("cloud-6", 0.0, 0.0, 1.2),   // fog
];

/// Cloud added under precipitation falling from a clear sky.
const INJECTED_OVERCAST: Placement = Placement::new("cloud-4", 0.0, 0.0, 1.0);

/// Below-cloud offset for precipitation.
const PRECIP_Y: f64 = 30.0;

/// (x, scale) for precipitation rates 1..=3.
const PRECIP_PLACEMENT: [(f64, f64); 3] = [(10.0, 0.7), (0.0, 1.0), (0.0, 1.2)];

const THUNDERBOLT_PLACEMENT: Placement = Placement::new(THUNDERBOLT, 0.0, 15.0, 1.2);
const STORM_PRECIP_Y: f64 = PRECIP_Y + 10.0;
const STORM_PRECIP_SCALE: f64 = 1.1;

/// Partly cloudy skies push the sun or moon up and left, behind the cloud.
const PEEK_OFFSET: f64 = -15.0;
const PEEK_SCALE: f64 = 0.7;

fn add_celestial_body(fragments: &mut Vec<IconFragmentRef>, code: &WeatherCode) {
    // Overcast and fog hide the sky entirely.
    if matches!(code.cloudiness, 4 | 6) {
        return;
    }

    let name = match code.day_night {
        DayNight::Day => SUN,
        DayNight::Night => MOON,
    };

    let body = if matches!(code.cloudiness, 1 | 2) {
        IconFragmentRef::new(name, PEEK_OFFSET, PEEK_OFFSET, PEEK_SCALE)
    } else {
        IconFragmentRef::new(name, 0.0, 0.0, 1.0)
    };
    fragments.push(body);
}

fn add_cloud(fragments: &mut Vec<IconFragmentRef>, code: &WeatherCode) {
    match code.cloudiness {
        0 if code.has_precipitation() => fragments.push(INJECTED_OVERCAST.to_ref()),
        0 => {}
        level => {
            if let Some(layer) = CLOUD_LAYERS.get(usize::from(level) - 1) {
                fragments.push(layer.to_ref());
            }
        }
    }
}

fn add_precipitation(fragments: &mut Vec<IconFragmentRef>, code: &WeatherCode) {
    match code.precip_rate {
        0 => {}
        4 => {
            fragments.push(THUNDERBOLT_PLACEMENT.to_ref());
            fragments.push(IconFragmentRef::new(
                format!("precip-storm-{}", code.precip_type),
                0.0,
                STORM_PRECIP_Y,
                STORM_PRECIP_SCALE,
            ));
        }
        rate => {
            if let Some(&(x, scale)) = PRECIP_PLACEMENT.get(usize::from(rate) - 1) {
                fragments.push(IconFragmentRef::new(
                    format!("precip-{}{}", rate, code.precip_type),
                    x,
                    PRECIP_Y,
                    scale,
                ));
            }
        }
    }
}

/// Decode a parsed weather code into fragments, in paint order.
pub fn decode(code: &WeatherCode) -> Vec<IconFragmentRef> {
    let mut fragments = Vec::with_capacity(4);
    add_celestial_body(&mut fragments, code);
    add_cloud(&mut fragments, code);
    add_precipitation(&mut fragments, code);
    fragments
}

/// Validate and decode a raw weather code.
///
/// Fails with `InvalidInput` for a malformed code, and for a code that
/// yields no fragments at all.
pub fn decode_weather_code(code: &str) -> SymbolResult<Vec<IconFragmentRef>> {
    let parsed: WeatherCode = code.parse()?;
    let fragments = decode(&parsed);

    if fragments.is_empty() {
        return Err(SymbolError::InvalidInput(format!(
            "Weather code {} resulted in no symbol components.",
            parsed
        )));
    }

    tracing::debug!(
        code = %parsed,
        fragments = ?fragments.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
        "Decoded weather code"
    );
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(code: &str) -> Vec<String> {
        decode_weather_code(code)
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect()
    }

    #[test]
    fn test_clear_day_is_sun_only() {
        let fragments = decode_weather_code("d000").unwrap();
        assert_eq!(fragments, vec![IconFragmentRef::new("sun", 0.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_clear_night_is_moon_only() {
        assert_eq!(names("n000"), vec!["moon"]);
    }

    #[test]
    fn test_overcast_sleet_has_no_body() {
        let fragments = decode_weather_code("n401").unwrap();
        assert_eq!(
            fragments,
            vec![
                IconFragmentRef::new("cloud-4", 0.0, 0.0, 1.1),
                IconFragmentRef::new("precip-11", 10.0, 30.0, 0.7),
            ]
        );
    }

    #[test]
    fn test_partly_cloudy_thunderstorm() {
        let fragments = decode_weather_code("d240").unwrap();
        assert_eq!(
            fragments,
            vec![
                IconFragmentRef::new("sun", -15.0, -15.0, 0.7),
                IconFragmentRef::new("cloud-2", 0.0, 0.0, 1.0),
                IconFragmentRef::new("thunderbolt", 0.0, 15.0, 1.2),
                IconFragmentRef::new("precip-storm-0", 0.0, 40.0, 1.1),
            ]
        );
    }

    #[test]
    fn test_fog_hides_body() {
        assert_eq!(names("d600"), vec!["cloud-6"]);
    }

    #[test]
    fn test_clear_sky_precipitation_injects_overcast() {
        let fragments = decode_weather_code("d022").unwrap();
        assert_eq!(
            fragments,
            vec![
                IconFragmentRef::new("sun", 0.0, 0.0, 1.0),
                IconFragmentRef::new("cloud-4", 0.0, 0.0, 1.0),
                IconFragmentRef::new("precip-22", 0.0, 30.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_each_cloud_level_distinct() {
        let clouds: Vec<String> = (1..=6)
            .map(|level| names(&format!("d{}00", level)).pop().unwrap())
            .collect();
        assert_eq!(
            clouds,
            vec!["cloud-1", "cloud-2", "cloud-3", "cloud-4", "cloud-5", "cloud-6"]
        );
    }

    #[test]
    fn test_precip_scale_grows_with_rate() {
        let scales: Vec<f64> = (1..=3)
            .map(|rate| decode_weather_code(&format!("n3{}2", rate)).unwrap().pop().unwrap().scale)
            .collect();
        assert!(scales[0] < scales[1] && scales[1] < scales[2]);
    }

    #[test]
    fn test_invalid_code() {
        let err = decode_weather_code("d700").unwrap_err();
        assert!(matches!(err, SymbolError::InvalidInput(_)));
        assert!(decode_weather_code("").is_err());
    }

    #[test]
    fn test_every_valid_code_decodes_to_something() {
        for day_night in ['d', 'n'] {
            for cloudiness in 0..=6 {
                for rate in 0..=4 {
                    for kind in 0..=2 {
                        let code = format!("{}{}{}{}", day_night, cloudiness, rate, kind);
                        let fragments = decode_weather_code(&code).unwrap();
                        assert!(!fragments.is_empty(), "{}", code);
                    }
                }
            }
        }
    }
}
