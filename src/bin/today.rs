use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use skyview::config::load_or_default;
use skyview::openmeteo::{ForecastRequest, OpenMeteoClient};
use skyview::weather::{DailyInsights, format_value};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Today's highlights: air quality, UV, pressure, sun times, visibility"
)]
struct Cli {
    /// City to look up (defaults to `dashboard.default_city` from config)
    city: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    skyview::init_logging();
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_ref())?;
    let city = skyview::resolve_city(cli.city.as_deref(), &config.dashboard)
        .context("no city given and no `dashboard.default_city` configured")?;

    let client = OpenMeteoClient::new(&config.api)?;
    let data = client.dashboard(&city, &ForecastRequest::today())?;
    let insights = DailyInsights::new(&data.forecast, &data.air_quality, Utc::now())?;

    println!("Today in {}", data.location.display_name());
    match insights.aqi {
        Some(aqi) => println!(
            "  Air quality  {:>6}  {} ({:.0}%)",
            aqi.value, aqi.band, aqi.percent
        ),
        None => println!("  Air quality  {:>6}", "--"),
    }
    match insights.uv {
        Some(uv) => println!(
            "  UV index     {:>6}  {} ({:.0}%)",
            uv.value, uv.band, uv.percent
        ),
        None => println!("  UV index     {:>6}", "--"),
    }
    match insights.pressure {
        Some(p) => println!(
            "  Pressure     {:>6}  hPa {} {}",
            p.hpa,
            p.trend.arrow(),
            p.trend
        ),
        None => println!("  Pressure     {:>6}", "--"),
    }
    println!("  Sunrise      {:>8}", insights.sunrise);
    println!("  Sunset       {:>8}", insights.sunset);
    match insights.visibility {
        Some(v) => println!("  Visibility   {:>6}  km, {}", v.km, v.status),
        None => println!("  Visibility   {:>6}", "--"),
    }
    println!(
        "  Feels like   {:>6}°  (actual {}°)",
        format_value(insights.feels_like),
        format_value(insights.actual)
    );
    Ok(())
}
