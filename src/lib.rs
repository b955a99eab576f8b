//! Skyview: a weather dashboard with a live Sun/Earth/Moon orbit view.
//!
//! The heavy lifting lives in the workspace crates; this crate wires them
//! together for the command-line front-ends in `src/bin`.

pub use skyview_config as config;
pub use skyview_core as math;
pub use skyview_export as export;
pub use skyview_openmeteo as openmeteo;
pub use skyview_orbits as orbits;
pub use skyview_weather as weather;

use std::fmt::Display;

use skyview_config::{DashboardConfig, OrbitsConfig};
use skyview_orbits::{OrbitError, OrbitSystem};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Install the env_logger backend, defaulting to `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
}

/// Validated orbit shapes from configuration.
pub fn orbit_system(config: &OrbitsConfig) -> Result<OrbitSystem, OrbitError> {
    OrbitSystem::new(
        (config.earth.semi_major_axis, config.earth.eccentricity),
        (config.moon.semi_major_axis, config.moon.eccentricity),
    )
}

/// City to query: the command-line value wins, then the configured default.
pub fn resolve_city(cli: Option<&str>, dashboard: &DashboardConfig) -> Option<String> {
    cli.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .or_else(|| dashboard.default_city.clone())
}

/// A snapshot section that failed to compute is logged and left out.
pub fn optional_section<T, E: Display>(name: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(section) => Some(section),
        Err(err) => {
            log::warn!("{name} unavailable: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyview_weather::{Forecast, weekly_summary};

    #[test]
    fn cli_city_overrides_default() {
        let dashboard = DashboardConfig {
            default_city: Some("Mumbai".into()),
            ..DashboardConfig::default()
        };
        assert_eq!(resolve_city(Some("Pune"), &dashboard).as_deref(), Some("Pune"));
        assert_eq!(resolve_city(Some("  "), &dashboard).as_deref(), Some("Mumbai"));
        assert_eq!(resolve_city(None, &DashboardConfig::default()), None);
    }

    #[test]
    fn forecast_without_daily_block_drops_weekly_section() {
        let forecast: Forecast =
            serde_json::from_str(r#"{"latitude": 19.0, "longitude": 72.8}"#).unwrap();
        assert!(optional_section("weekly summary", weekly_summary(&forecast, 7)).is_none());
        assert_eq!(optional_section::<_, String>("weekly summary", Ok(3)), Some(3));
    }

    #[test]
    fn default_orbits_are_valid() {
        let system = orbit_system(&OrbitsConfig::default()).unwrap();
        assert_eq!(system, OrbitSystem::default());
    }

    #[test]
    fn bad_eccentricity_is_rejected() {
        let mut config = OrbitsConfig::default();
        config.moon.eccentricity = 1.2;
        assert!(orbit_system(&config).is_err());
    }
}
