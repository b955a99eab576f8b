//! Open-Meteo response payloads.
//!
//! Series values are `Option<f64>` because the API emits `null` for gaps.
//! Both the legacy (`relativehumidity_2m`, `weathercode`) and current
//! (`relative_humidity_2m`, `weather_code`) variable names are accepted.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp format of hourly values (`2024-01-01T13:00`).
pub const HOURLY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Date format of daily values (`2024-01-01`).
pub const DAILY_DATE_FORMAT: &str = "%Y-%m-%d";

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Location {
    /// `"Mumbai, India"`, or just the name when the country is unknown.
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

/// Forecast endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Forecast {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Offset of the local times in `hourly`/`daily` from UTC.
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
    #[serde(default)]
    pub daily: Option<DailySeries>,
}

/// `current_weather` block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub time: Option<String>,
    pub temperature: f64,
    pub windspeed: f64,
    #[serde(default)]
    pub winddirection: Option<f64>,
    pub weathercode: u16,
    #[serde(default)]
    pub is_day: Option<u8>,
}

/// Hourly series; each vector is index-aligned with `time`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Option<Vec<Option<f64>>>,
    #[serde(default, alias = "relative_humidity_2m")]
    pub relativehumidity_2m: Option<Vec<Option<f64>>>,
    #[serde(default, alias = "weather_code")]
    pub weathercode: Option<Vec<Option<u16>>>,
    #[serde(default)]
    pub surface_pressure: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub pressure_msl: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub visibility: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub uv_index: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub apparent_temperature: Option<Vec<Option<f64>>>,
}

/// Daily series; each vector is index-aligned with `time`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    #[serde(default, alias = "weather_code")]
    pub weathercode: Option<Vec<Option<u16>>>,
    #[serde(default)]
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    #[serde(default, alias = "wind_speed_10m_max")]
    pub windspeed_10m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub sunrise: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub sunset: Option<Vec<Option<String>>>,
}

/// Air-quality endpoint response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AirQuality {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub hourly: Option<AirQualityHourly>,
}

/// Hourly air-quality series.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AirQualityHourly {
    pub time: Vec<String>,
    #[serde(default)]
    pub us_aqi: Option<Vec<Option<f64>>>,
}

/// Value at `idx` of an optional series, flattening missing series, short series and `null`s.
pub fn value_at<T: Copy>(series: &Option<Vec<Option<T>>>, idx: usize) -> Option<T> {
    series.as_ref().and_then(|values| values.get(idx).copied().flatten())
}

/// Parse an hourly timestamp such as `2024-01-01T13:00`.
pub fn parse_hourly_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, HOURLY_TIME_FORMAT).ok()
}

/// Parse a daily date such as `2024-01-01`.
pub fn parse_daily_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DAILY_DATE_FORMAT).ok()
}
