//! Current conditions, daily insight widgets, and the map marker.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::WeatherError;
use crate::bands::{AqiBand, PressureTrend, UvBand, VisibilityStatus, gauge_percent};
use crate::codes::WeatherCode;
use crate::forecast::{AirQuality, Forecast, Location, value_at};
use crate::hourly::{clock_label, current_hour_index, local_now};

/// Header widget of the main dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub place: String,
    pub temperature: f64,
    pub windspeed: f64,
    pub code: WeatherCode,
    /// Relative humidity for the current local hour.
    pub humidity: Option<f64>,
}

impl CurrentConditions {
    pub fn new(location: &Location, forecast: &Forecast, now: DateTime<Utc>) -> Result<Self, WeatherError> {
        let current = forecast
            .current_weather
            .as_ref()
            .ok_or(WeatherError::MissingBlock("current_weather"))?;
        let humidity = forecast.hourly.as_ref().and_then(|hourly| {
            let idx = current_hour_index(&hourly.time, local_now(now, forecast.utc_offset_seconds));
            value_at(&hourly.relativehumidity_2m, idx)
        });
        Ok(Self {
            place: location.display_name(),
            temperature: current.temperature,
            windspeed: current.windspeed,
            code: WeatherCode::from(current.weathercode),
            humidity,
        })
    }

    pub fn condition(&self) -> &'static str {
        self.code.description()
    }

    /// `"64%"` or `"N/A"`.
    pub fn humidity_text(&self) -> String {
        match self.humidity {
            Some(h) => format!("{h}%"),
            None => "N/A".to_string(),
        }
    }
}

/// A value placed on a banded gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gauge<B> {
    pub value: f64,
    pub band: B,
    /// Fill of the gauge bar in percent, clamped to 100.
    pub percent: f64,
}

/// Rounded sea-level pressure with its tendency arrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressureReading {
    pub hpa: f64,
    pub trend: PressureTrend,
}

/// Visibility in kilometres (one decimal) with its description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisibilityReading {
    pub km: f64,
    pub status: VisibilityStatus,
}

/// The "today" page widgets for the current local hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyInsights {
    pub aqi: Option<Gauge<AqiBand>>,
    pub uv: Option<Gauge<UvBand>>,
    pub pressure: Option<PressureReading>,
    pub sunrise: String,
    pub sunset: String,
    pub visibility: Option<VisibilityReading>,
    pub feels_like: Option<f64>,
    pub actual: Option<f64>,
}

impl DailyInsights {
    /// Build the widgets, locating the current hour separately in each payload.
    pub fn new(forecast: &Forecast, air: &AirQuality, now: DateTime<Utc>) -> Result<Self, WeatherError> {
        let hourly = forecast
            .hourly
            .as_ref()
            .ok_or(WeatherError::MissingBlock("hourly"))?;
        let idx = current_hour_index(&hourly.time, local_now(now, forecast.utc_offset_seconds));

        let aqi = air.hourly.as_ref().and_then(|air_hourly| {
            let air_idx = current_hour_index(&air_hourly.time, local_now(now, air.utc_offset_seconds));
            value_at(&air_hourly.us_aqi, air_idx)
        });

        let daily = forecast.daily.as_ref();
        let first = |series: Option<&Vec<Option<String>>>| {
            series
                .and_then(|values| values.first())
                .and_then(|v| v.as_deref())
                .map(str::to_string)
        };
        let sunrise = first(daily.and_then(|d| d.sunrise.as_ref()));
        let sunset = first(daily.and_then(|d| d.sunset.as_ref()));

        Ok(Self {
            aqi: aqi.map(|value| Gauge {
                value,
                band: AqiBand::classify(value),
                percent: gauge_percent(value, AqiBand::FULL_SCALE),
            }),
            uv: value_at(&hourly.uv_index, idx).map(|value| Gauge {
                value,
                band: UvBand::classify(value),
                percent: gauge_percent(value, UvBand::FULL_SCALE),
            }),
            pressure: value_at(&hourly.pressure_msl, idx).map(|hpa| PressureReading {
                hpa: hpa.round(),
                trend: PressureTrend::classify(hpa),
            }),
            sunrise: clock_label(sunrise.as_deref()),
            sunset: clock_label(sunset.as_deref()),
            visibility: value_at(&hourly.visibility, idx).map(|metres| {
                let km = VisibilityStatus::display_km(metres);
                VisibilityReading {
                    km,
                    status: VisibilityStatus::classify_km(km),
                }
            }),
            feels_like: value_at(&hourly.apparent_temperature, idx),
            actual: forecast.current_weather.as_ref().map(|c| c.temperature),
        })
    }
}

/// Marker dropped on the location map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    /// HTML popup body.
    pub popup: String,
}

impl MapMarker {
    pub fn new(location: &Location, temperature: f64, zoom: u8) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            zoom,
            popup: format!("<b>{}</b><br>Temp: {}°C", location.name, temperature),
        }
    }
}
