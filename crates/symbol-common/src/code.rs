//! Compact four-character weather codes.
//!
//! Positions are `[day/night, cloudiness, precipitation rate, precipitation
//! type]`, e.g. `d240` is a daytime partly cloudy thunderstorm with rain.

use std::fmt;
use std::str::FromStr;

use crate::error::SymbolError;
use crate::validation::is_valid_weather_code;

/// Whether the symbol shows the sun or the moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayNight {
    Day,
    Night,
}

impl DayNight {
    pub fn as_char(&self) -> char {
        match self {
            DayNight::Day => 'd',
            DayNight::Night => 'n',
        }
    }
}

/// A validated weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCode {
    pub day_night: DayNight,
    /// 0 = clear .. 4 = overcast, 5 = thin high cloud, 6 = fog
    pub cloudiness: u8,
    /// 0 = none, 1 = light, 2 = showers, 3 = continuous, 4 = thunderstorm
    pub precip_rate: u8,
    /// 0 = rain, 1 = sleet, 2 = snow
    pub precip_type: u8,
}

impl WeatherCode {
    pub fn has_precipitation(&self) -> bool {
        self.precip_rate > 0
    }
}

impl FromStr for WeatherCode {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_weather_code(s) {
            return Err(SymbolError::InvalidInput(
                "Invalid weather code format.".to_string(),
            ));
        }

        let bytes = s.as_bytes();
        let day_night = if bytes[0] == b'd' {
            DayNight::Day
        } else {
            DayNight::Night
        };

        Ok(Self {
            day_night,
            cloudiness: bytes[1] - b'0',
            precip_rate: bytes[2] - b'0',
            precip_type: bytes[3] - b'0',
        })
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.day_night.as_char(),
            self.cloudiness,
            self.precip_rate,
            self.precip_type
        )
    }
}
