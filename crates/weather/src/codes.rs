//! WMO weather interpretation codes as reported by Open-Meteo.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WMO weather code. Unknown codes are kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum WeatherCode {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    DepositingRimeFog,
    DrizzleLight,
    DrizzleModerate,
    DrizzleDense,
    FreezingDrizzleLight,
    FreezingDrizzleDense,
    RainSlight,
    RainModerate,
    RainHeavy,
    FreezingRainLight,
    FreezingRainHeavy,
    SnowSlight,
    SnowModerate,
    SnowHeavy,
    SnowGrains,
    RainShowersSlight,
    RainShowersModerate,
    RainShowersViolent,
    SnowShowersSlight,
    SnowShowersHeavy,
    Thunderstorm,
    ThunderstormSlightHail,
    ThunderstormHeavyHail,
    Other(u16),
}

impl From<u16> for WeatherCode {
    fn from(code: u16) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::DepositingRimeFog,
            51 => Self::DrizzleLight,
            53 => Self::DrizzleModerate,
            55 => Self::DrizzleDense,
            56 => Self::FreezingDrizzleLight,
            57 => Self::FreezingDrizzleDense,
            61 => Self::RainSlight,
            63 => Self::RainModerate,
            65 => Self::RainHeavy,
            66 => Self::FreezingRainLight,
            67 => Self::FreezingRainHeavy,
            71 => Self::SnowSlight,
            73 => Self::SnowModerate,
            75 => Self::SnowHeavy,
            77 => Self::SnowGrains,
            80 => Self::RainShowersSlight,
            81 => Self::RainShowersModerate,
            82 => Self::RainShowersViolent,
            85 => Self::SnowShowersSlight,
            86 => Self::SnowShowersHeavy,
            95 => Self::Thunderstorm,
            96 => Self::ThunderstormSlightHail,
            99 => Self::ThunderstormHeavyHail,
            other => Self::Other(other),
        }
    }
}

impl From<WeatherCode> for u16 {
    fn from(code: WeatherCode) -> Self {
        code.code()
    }
}

impl WeatherCode {
    /// Numeric WMO code.
    pub fn code(self) -> u16 {
        match self {
            Self::ClearSky => 0,
            Self::MainlyClear => 1,
            Self::PartlyCloudy => 2,
            Self::Overcast => 3,
            Self::Fog => 45,
            Self::DepositingRimeFog => 48,
            Self::DrizzleLight => 51,
            Self::DrizzleModerate => 53,
            Self::DrizzleDense => 55,
            Self::FreezingDrizzleLight => 56,
            Self::FreezingDrizzleDense => 57,
            Self::RainSlight => 61,
            Self::RainModerate => 63,
            Self::RainHeavy => 65,
            Self::FreezingRainLight => 66,
            Self::FreezingRainHeavy => 67,
            Self::SnowSlight => 71,
            Self::SnowModerate => 73,
            Self::SnowHeavy => 75,
            Self::SnowGrains => 77,
            Self::RainShowersSlight => 80,
            Self::RainShowersModerate => 81,
            Self::RainShowersViolent => 82,
            Self::SnowShowersSlight => 85,
            Self::SnowShowersHeavy => 86,
            Self::Thunderstorm => 95,
            Self::ThunderstormSlightHail => 96,
            Self::ThunderstormHeavyHail => 99,
            Self::Other(code) => code,
        }
    }

    /// Human-readable condition text.
    pub fn description(self) -> &'static str {
        match self {
            Self::ClearSky => "Clear Sky",
            Self::MainlyClear => "Mainly Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::DepositingRimeFog => "Depositing Rime Fog",
            Self::DrizzleLight => "Drizzle: Light",
            Self::DrizzleModerate => "Drizzle: Moderate",
            Self::DrizzleDense => "Drizzle: Dense",
            Self::FreezingDrizzleLight => "Freezing Drizzle: Light",
            Self::FreezingDrizzleDense => "Freezing Drizzle: Dense",
            Self::RainSlight => "Rain: Slight",
            Self::RainModerate => "Rain: Moderate",
            Self::RainHeavy => "Rain: Heavy",
            Self::FreezingRainLight => "Freezing Rain: Light",
            Self::FreezingRainHeavy => "Freezing Rain: Heavy",
            Self::SnowSlight => "Snow: Slight",
            Self::SnowModerate => "Snow: Moderate",
            Self::SnowHeavy => "Snow: Heavy",
            Self::SnowGrains => "Snow Grains",
            Self::RainShowersSlight => "Rain Showers: Slight",
            Self::RainShowersModerate => "Rain Showers: Moderate",
            Self::RainShowersViolent => "Rain Showers: Violent",
            Self::SnowShowersSlight => "Snow Showers: Slight",
            Self::SnowShowersHeavy => "Snow Showers: Heavy",
            Self::Thunderstorm => "Thunderstorm: Slight",
            Self::ThunderstormSlightHail => "Thunderstorm: Slight Hail",
            Self::ThunderstormHeavyHail => "Thunderstorm: Heavy Hail",
            Self::Other(_) => "Unknown",
        }
    }

    /// Emoji icon used on cards. Grouped by code range, so showers and
    /// unknown codes share the generic cloud.
    pub fn icon(self) -> &'static str {
        match self.code() {
            0 => "☀️",
            1..=2 => "☁️☁️",
            3 => "☁️",
            45..=48 => "🌫️",
            51..=67 => "🌧️",
            71..=77 => "❄️",
            95.. => "⛈️",
            _ => "🌥️",
        }
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_codes() {
        for code in [0u16, 1, 2, 3, 45, 48, 51, 55, 61, 65, 71, 75, 95, 96, 99] {
            assert_eq!(WeatherCode::from(code).code(), code);
            assert_ne!(WeatherCode::from(code).description(), "Unknown");
        }
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let code = WeatherCode::from(42);
        assert_eq!(code, WeatherCode::Other(42));
        assert_eq!(code.code(), 42);
        assert_eq!(code.description(), "Unknown");
        assert_eq!(code.icon(), "🌥️");
    }

    #[test]
    fn icons_follow_code_ranges() {
        assert_eq!(WeatherCode::from(0).icon(), "☀️");
        assert_eq!(WeatherCode::from(2).icon(), "☁️☁️");
        assert_eq!(WeatherCode::from(3).icon(), "☁️");
        assert_eq!(WeatherCode::from(48).icon(), "🌫️");
        assert_eq!(WeatherCode::from(57).icon(), "🌧️");
        assert_eq!(WeatherCode::from(77).icon(), "❄️");
        assert_eq!(WeatherCode::from(81).icon(), "🌥️");
        assert_eq!(WeatherCode::from(99).icon(), "⛈️");
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&WeatherCode::RainHeavy).unwrap();
        assert_eq!(json, "65");
        let back: WeatherCode = serde_json::from_str("63").unwrap();
        assert_eq!(back, WeatherCode::RainModerate);
        assert_eq!(WeatherCode::Fog.to_string(), "Fog");
    }
}
