//! Weather data models and the pure logic behind every dashboard widget.
//!
//! Payload types mirror the Open-Meteo JSON responses. Everything else turns
//! those payloads into display-ready values: condition text and icons, UV and
//! air-quality bands, the hourly strip, the weekly table, and the daily
//! insight widgets. Nothing here performs I/O; the current time is always
//! passed in explicitly.

pub mod assistant;
pub mod bands;
pub mod codes;
pub mod forecast;
pub mod hourly;
pub mod insights;
pub mod weekly;

use thiserror::Error;

pub use assistant::{Conversation, Intent, WeatherWidget, classify_query, extract_city, route};
pub use bands::{AqiBand, PressureTrend, UvBand, VisibilityStatus};
pub use codes::WeatherCode;
pub use forecast::{AirQuality, CurrentWeather, DailySeries, Forecast, HourlySeries, Location};
pub use hourly::{HourlyCard, current_hour_index, hourly_strip};
pub use insights::{CurrentConditions, DailyInsights, Gauge, MapMarker};
pub use weekly::{DailySummary, DayCard, WeeklyView, day_card, weekly_summary};

/// Errors raised when a payload lacks data a widget needs.
#[derive(Debug, Error, PartialEq)]
pub enum WeatherError {
    #[error("forecast response has no `{0}` block")]
    MissingBlock(&'static str),
    #[error("unknown weekly view `{0}` (expected TEMP, WIND or HUMIDITY)")]
    UnknownView(String),
}

/// Format a reading the way the dashboard prints numbers: `30` rather than `30.0`,
/// and `--` when the API returned `null`.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_drops_trailing_zero() {
        assert_eq!(format_value(Some(30.0)), "30");
        assert_eq!(format_value(Some(31.2)), "31.2");
        assert_eq!(format_value(None), "--");
    }
}
