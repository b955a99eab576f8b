//! Configuration models and loaders for Skyview.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration pointed at the public Open-Meteo endpoints.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SkyviewConfig {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    pub orbits: OrbitsConfig,
}

/// Open-Meteo endpoints and HTTP client settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub air_quality_url: String,
    /// Language requested for geocoding results.
    pub language: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            geocoding_url: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            air_quality_url: "https://air-quality-api.open-meteo.com/v1/air-quality".to_string(),
            language: "en".to_string(),
            timeout_secs: 10,
            user_agent: concat!("skyview/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Dashboard presentation defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// City used when none is given on the command line.
    pub default_city: Option<String>,
    /// Number of hourly cards shown from the current hour onwards.
    pub hourly_cards: usize,
    /// Number of days in the weekly view.
    pub weekly_days: usize,
    /// Zoom level for the location map marker.
    pub map_zoom: u8,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_city: None,
            hourly_cards: 24,
            weekly_days: 7,
            map_zoom: 12,
        }
    }
}

/// Semi-major axis and eccentricity of one body's orbit, in scene units.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct BodyOrbitConfig {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}

/// Orbit view configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OrbitsConfig {
    pub earth: BodyOrbitConfig,
    pub moon: BodyOrbitConfig,
    pub earth_path_segments: usize,
    pub moon_path_segments: usize,
}

impl Default for OrbitsConfig {
    fn default() -> Self {
        Self {
            earth: BodyOrbitConfig {
                semi_major_axis: 18.0,
                eccentricity: 0.0167,
            },
            moon: BodyOrbitConfig {
                semi_major_axis: 4.0,
                eccentricity: 0.0549,
            },
            earth_path_segments: 200,
            moon_path_segments: 50,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a configuration file, choosing TOML or YAML by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SkyviewConfig, ConfigError> {
    let path = path.as_ref();
    log::debug!("loading configuration from {}", path.display());
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        let config: Option<SkyviewConfig> = serde_yaml::from_reader(reader)?;
        Ok(config.unwrap_or_default())
    }
}

/// Load `path` when given, otherwise fall back to the built-in defaults.
pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<SkyviewConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            log::debug!("no configuration file given, using defaults");
            Ok(SkyviewConfig::default())
        }
    }
}
