//! Seven-day summary and the TEMP/WIND/HUMIDITY card views.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::codes::WeatherCode;
use crate::forecast::{Forecast, HourlySeries, parse_daily_date, value_at};
use crate::{WeatherError, format_value};

/// Aggregated values for one forecast day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// Local date as returned by the API (`2024-05-01`).
    pub date: String,
    /// Short weekday name (`Wed`).
    pub day: String,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub wind_max: Option<f64>,
    /// Rounded mean of the hourly relative humidity samples that fall on this date.
    pub humidity_avg: Option<u8>,
    /// Number of hourly humidity samples behind `humidity_avg`.
    pub humidity_samples: usize,
    pub code: Option<WeatherCode>,
}

/// Summarize up to `days` days of the daily block.
///
/// Hourly humidity is grouped by the date prefix of each hourly timestamp
/// rather than by fixed 24-sample slices, so partial days at either end of
/// the series only average what is actually there.
pub fn weekly_summary(forecast: &Forecast, days: usize) -> Result<Vec<DailySummary>, WeatherError> {
    let daily = forecast
        .daily
        .as_ref()
        .ok_or(WeatherError::MissingBlock("daily"))?;

    Ok(daily
        .time
        .iter()
        .enumerate()
        .take(days)
        .map(|(idx, date)| {
            let (humidity_avg, humidity_samples) = forecast
                .hourly
                .as_ref()
                .map(|hourly| daily_humidity(hourly, date))
                .unwrap_or((None, 0));
            if humidity_samples > 0 && humidity_samples < 24 {
                log::debug!("{date}: humidity averaged over {humidity_samples} hourly samples");
            }
            DailySummary {
                date: date.clone(),
                day: parse_daily_date(date)
                    .map(|d| d.format("%a").to_string())
                    .unwrap_or_else(|| date.clone()),
                temp_max: value_at(&daily.temperature_2m_max, idx),
                temp_min: value_at(&daily.temperature_2m_min, idx),
                wind_max: value_at(&daily.windspeed_10m_max, idx),
                humidity_avg,
                humidity_samples,
                code: value_at(&daily.weathercode, idx).map(WeatherCode::from),
            }
        })
        .collect())
}

fn daily_humidity(hourly: &HourlySeries, date: &str) -> (Option<u8>, usize) {
    let samples: Vec<f64> = hourly
        .time
        .iter()
        .enumerate()
        .filter(|(_, t)| t.starts_with(date))
        .filter_map(|(idx, _)| value_at(&hourly.relativehumidity_2m, idx))
        .collect();
    if samples.is_empty() {
        return (None, 0);
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    (Some(mean.round().clamp(0.0, 100.0) as u8), samples.len())
}

/// Which metric the weekly grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WeeklyView {
    #[default]
    Temp,
    Wind,
    Humidity,
}

impl FromStr for WeeklyView {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TEMP" => Ok(Self::Temp),
            "WIND" => Ok(Self::Wind),
            "HUMIDITY" => Ok(Self::Humidity),
            _ => Err(WeatherError::UnknownView(s.to_string())),
        }
    }
}

impl fmt::Display for WeeklyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Temp => "TEMP",
            Self::Wind => "WIND",
            Self::Humidity => "HUMIDITY",
        })
    }
}

/// Display text for one day in a given view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCard {
    pub day: String,
    pub icon: &'static str,
    pub value: String,
    pub sub: String,
}

/// Render a day for the selected view.
pub fn day_card(summary: &DailySummary, view: WeeklyView) -> DayCard {
    let (icon, value, sub) = match view {
        WeeklyView::Temp => (
            summary.code.map(WeatherCode::icon).unwrap_or("🌥️"),
            format!("{}°", format_value(summary.temp_max)),
            format!("{}°", format_value(summary.temp_min)),
        ),
        WeeklyView::Wind => ("💨", format_value(summary.wind_max), "km/h".to_string()),
        WeeklyView::Humidity => (
            "💧",
            match summary.humidity_avg {
                Some(h) => format!("{h}%"),
                None => "N/A".to_string(),
            },
            "Avg".to_string(),
        ),
    };
    DayCard {
        day: summary.day.clone(),
        icon,
        value,
        sub,
    }
}
