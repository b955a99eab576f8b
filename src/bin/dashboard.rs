use std::path::PathBuf;

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use skyview::config::load_or_default;
use skyview::export::snapshot::{DashboardSnapshot, write_json};
use skyview::export::{hourly, writer_for_path};
use skyview::openmeteo::{ForecastRequest, OpenMeteoClient};
use skyview::orbits::SceneFrame;
use skyview::weather::hourly::local_now;
use skyview::weather::{
    CurrentConditions, DailyInsights, MapMarker, current_hour_index, format_value, hourly_strip,
    weekly_summary,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Current conditions, hourly strip, and map marker for a city"
)]
struct Cli {
    /// City to look up (defaults to `dashboard.default_city` from config)
    city: Option<String>,
    /// Configuration file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of hourly cards (overrides config)
    #[arg(long)]
    hours: Option<usize>,
    /// Write the hourly strip as CSV (`-` for stdout)
    #[arg(long)]
    hourly_csv: Option<PathBuf>,
    /// Write a full JSON snapshot of every widget
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    skyview::init_logging();
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_ref())?;
    let city = skyview::resolve_city(cli.city.as_deref(), &config.dashboard)
        .context("no city given and no `dashboard.default_city` configured")?;
    let system = skyview::orbit_system(&config.orbits)?;

    let client = OpenMeteoClient::new(&config.api)?;
    let data = client.dashboard(&city, &ForecastRequest::all())?;
    let now = Utc::now();

    let current = CurrentConditions::new(&data.location, &data.forecast, now)?;
    println!("{}", current.place);
    println!(
        "{} {}°C  {}  wind {} km/h  humidity {}",
        current.code.icon(),
        current.temperature,
        current.condition(),
        current.windspeed,
        current.humidity_text()
    );

    let count = cli.hours.unwrap_or(config.dashboard.hourly_cards);
    let cards = match data.forecast.hourly.as_ref() {
        Some(series) => {
            let start = current_hour_index(
                &series.time,
                local_now(now, data.forecast.utc_offset_seconds),
            );
            hourly_strip(series, start, count)
        }
        None => {
            log::warn!("forecast has no hourly block; skipping hourly strip");
            Vec::new()
        }
    };
    for card in &cards {
        println!(
            "  {:>5}  {}  {}°",
            card.label,
            card.icon(),
            format_value(card.temperature)
        );
    }

    let marker = MapMarker::new(&data.location, current.temperature, config.dashboard.map_zoom);
    println!(
        "map: {:.4}, {:.4} (zoom {})",
        marker.latitude, marker.longitude, marker.zoom
    );

    if let Some(path) = &cli.hourly_csv {
        hourly::write_csv(writer_for_path(path)?, &cards)?;
        log::info!("hourly strip written to {}", path.display());
    }

    if let Some(path) = &cli.json {
        let weekly = skyview::optional_section(
            "weekly summary",
            weekly_summary(&data.forecast, config.dashboard.weekly_days),
        );
        let insights = skyview::optional_section(
            "daily insights",
            DailyInsights::new(&data.forecast, &data.air_quality, now),
        );
        let orbit = SceneFrame::at(now, &system);
        let generated_at = now.to_rfc3339_opts(SecondsFormat::Secs, true);
        let snapshot = DashboardSnapshot {
            generated_at: &generated_at,
            location: &data.location,
            current: &current,
            marker: &marker,
            hourly: &cards,
            weekly: weekly.as_deref(),
            insights: insights.as_ref(),
            orbit: &orbit,
        };
        write_json(path, &snapshot)?;
        log::info!("snapshot written to {}", path.display());
    }

    Ok(())
}
