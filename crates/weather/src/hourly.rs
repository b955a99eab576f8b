//! Current-hour lookup and the hourly forecast strip.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::codes::WeatherCode;
use crate::forecast::{HourlySeries, parse_hourly_time, value_at};

/// Wall-clock time at the forecast location.
///
/// Open-Meteo reports hourly timestamps in local time when asked for
/// `timezone=auto`; `utc_offset_seconds` gives the shift back to UTC.
pub fn local_now(now: DateTime<Utc>, utc_offset_seconds: i32) -> NaiveDateTime {
    (now + TimeDelta::seconds(i64::from(utc_offset_seconds))).naive_utc()
}

/// Index of the first timestamp in the current local hour, or 0 when none matches.
pub fn current_hour_index(times: &[String], now_local: NaiveDateTime) -> usize {
    let prefix = now_local.format("%Y-%m-%dT%H").to_string();
    match times.iter().position(|t| t.starts_with(&prefix)) {
        Some(idx) => idx,
        None => {
            log::warn!("no hourly sample for {prefix}, falling back to the first entry");
            0
        }
    }
}

/// `"2 PM"` style label.
pub fn hour_label(time: NaiveDateTime) -> String {
    time.format("%-I %p").to_string()
}

/// `"6:45 AM"` style label, or `"--:--"` when missing or unparsable.
pub fn clock_label(raw: Option<&str>) -> String {
    raw.and_then(parse_hourly_time)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// One card of the hourly strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyCard {
    /// Raw local timestamp as returned by the API.
    pub time: String,
    pub label: String,
    pub temperature: Option<f64>,
    pub code: Option<WeatherCode>,
}

impl HourlyCard {
    pub fn icon(&self) -> &'static str {
        self.code.map(WeatherCode::icon).unwrap_or("🌥️")
    }
}

/// Up to `count` cards starting at `start`; stops early at the end of the series.
pub fn hourly_strip(hourly: &HourlySeries, start: usize, count: usize) -> Vec<HourlyCard> {
    hourly
        .time
        .iter()
        .enumerate()
        .skip(start)
        .take(count)
        .map(|(idx, raw)| HourlyCard {
            time: raw.clone(),
            label: parse_hourly_time(raw)
                .map(hour_label)
                .unwrap_or_else(|| raw.clone()),
            temperature: value_at(&hourly.temperature_2m, idx),
            code: value_at(&hourly.weathercode, idx).map(WeatherCode::from),
        })
        .collect()
}
