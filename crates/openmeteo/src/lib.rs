//! Open-Meteo HTTP client: geocoding, forecast, and air-quality endpoints.
//!
//! Requests are blocking and never retried; a failure is reported to the
//! caller as-is.

use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Request};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use skyview_config::ApiConfig;
use skyview_weather::{AirQuality, Forecast, Location};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("city `{0}` not found")]
    CityNotFound(String),
    #[error("no city name given")]
    EmptyQuery,
}

/// Hourly and daily variables to request from the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    pub hourly: Vec<&'static str>,
    pub daily: Vec<&'static str>,
}

impl ForecastRequest {
    /// Main page: current conditions, humidity, and the hourly strip.
    pub fn overview() -> Self {
        Self {
            hourly: vec![
                "relativehumidity_2m",
                "surface_pressure",
                "temperature_2m",
                "weathercode",
            ],
            daily: vec![
                "weathercode",
                "temperature_2m_max",
                "temperature_2m_min",
                "windspeed_10m_max",
            ],
        }
    }

    /// Daily insights page.
    pub fn today() -> Self {
        Self {
            hourly: vec!["pressure_msl", "visibility", "uv_index", "apparent_temperature"],
            daily: vec!["sunrise", "sunset"],
        }
    }

    /// Weekly page.
    pub fn weekly() -> Self {
        Self {
            hourly: vec!["relativehumidity_2m"],
            daily: vec![
                "weathercode",
                "temperature_2m_max",
                "temperature_2m_min",
                "windspeed_10m_max",
            ],
        }
    }

    /// Union of every page, used for full snapshots.
    pub fn all() -> Self {
        let mut merged = Self::overview();
        for other in [Self::today(), Self::weekly()] {
            for var in other.hourly {
                if !merged.hourly.contains(&var) {
                    merged.hourly.push(var);
                }
            }
            for var in other.daily {
                if !merged.daily.contains(&var) {
                    merged.daily.push(var);
                }
            }
        }
        merged
    }
}

/// Query parameters for a forecast request.
pub fn forecast_query(location: &Location, request: &ForecastRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("latitude", location.latitude.to_string()),
        ("longitude", location.longitude.to_string()),
        ("current_weather", "true".to_string()),
    ];
    if !request.hourly.is_empty() {
        query.push(("hourly", request.hourly.join(",")));
    }
    if !request.daily.is_empty() {
        query.push(("daily", request.daily.join(",")));
    }
    query.push(("timezone", "auto".to_string()));
    query
}

/// Query parameters for a geocoding lookup; only the best match is requested.
pub fn geocoding_query(name: &str, language: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("count", "1".to_string()),
        ("language", language.to_string()),
        ("format", "json".to_string()),
    ]
}

/// Query parameters for an air-quality request.
pub fn air_quality_query(location: &Location) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", location.latitude.to_string()),
        ("longitude", location.longitude.to_string()),
        ("hourly", "us_aqi".to_string()),
        ("timezone", "auto".to_string()),
    ]
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<Location>>,
}

/// First geocoding match, or `CityNotFound`.
fn first_match(name: &str, response: GeocodingResponse) -> Result<Location, ApiError> {
    response
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| ApiError::CityNotFound(name.to_string()))
}

/// Everything the dashboard pages need for one city.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub location: Location,
    pub forecast: Forecast,
    pub air_quality: AirQuality,
}

/// Blocking Open-Meteo client.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: ApiConfig,
}

impl OpenMeteoClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Resolve a city name to its best match.
    pub fn geocode(&self, name: &str) -> Result<Location, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::EmptyQuery);
        }
        let response: GeocodingResponse = self.get_json(
            &self.config.geocoding_url,
            &geocoding_query(name, &self.config.language),
        )?;
        let location = first_match(name, response)?;
        log::info!(
            "resolved `{name}` to {} ({:.4}, {:.4})",
            location.display_name(),
            location.latitude,
            location.longitude
        );
        Ok(location)
    }

    pub fn forecast(&self, location: &Location, request: &ForecastRequest) -> Result<Forecast, ApiError> {
        self.get_json(&self.config.forecast_url, &forecast_query(location, request))
    }

    pub fn air_quality(&self, location: &Location) -> Result<AirQuality, ApiError> {
        self.get_json(&self.config.air_quality_url, &air_quality_query(location))
    }

    /// Build a GET request with its query string encoded, logging the full URL.
    fn request(&self, url: &str, query: &[(&str, String)]) -> Result<Request, ApiError> {
        let request = self.client.get(url).query(query).build()?;
        log::debug!("GET {}", request.url());
        Ok(request)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(url, query)?;
        Ok(self.client.execute(request)?.error_for_status()?.json()?)
    }

    /// Geocode `name`, then fetch the forecast and air quality side by side.
    pub fn dashboard(&self, name: &str, request: &ForecastRequest) -> Result<DashboardData, ApiError> {
        let location = self.geocode(name)?;
        let (forecast, air_quality) = thread::scope(|scope| {
            let air = scope.spawn(|| self.air_quality(&location));
            let forecast = self.forecast(&location, request);
            let air = air.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (forecast, air)
        });
        Ok(DashboardData {
            forecast: forecast?,
            air_quality: air_quality?,
            location,
        })
    }
}
