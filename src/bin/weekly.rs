use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use skyview::config::load_or_default;
use skyview::export::{weekly, writer_for_path};
use skyview::openmeteo::{ForecastRequest, OpenMeteoClient};
use skyview::weather::{WeeklyView, day_card, weekly_summary};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seven-day forecast in TEMP, WIND, or HUMIDITY view")]
struct Cli {
    /// City to look up (defaults to `dashboard.default_city` from config)
    city: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// TEMP, WIND, or HUMIDITY
    #[arg(long, default_value = "TEMP")]
    view: WeeklyView,
    /// Number of days (overrides config)
    #[arg(long)]
    days: Option<usize>,
    /// Write the summary as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    skyview::init_logging();
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_ref())?;
    let city = skyview::resolve_city(cli.city.as_deref(), &config.dashboard)
        .context("no city given and no `dashboard.default_city` configured")?;

    let client = OpenMeteoClient::new(&config.api)?;
    let location = client.geocode(&city)?;
    let forecast = client.forecast(&location, &ForecastRequest::weekly())?;
    let days = weekly_summary(&forecast, cli.days.unwrap_or(config.dashboard.weekly_days))?;

    println!("{} | {}", location.display_name(), cli.view);
    for summary in &days {
        let card = day_card(summary, cli.view);
        println!("  {:<4} {}  {:>7}  {}", card.day, card.icon, card.value, card.sub);
    }

    if let Some(path) = &cli.csv {
        weekly::write_csv(writer_for_path(path)?, &days)?;
        log::info!("weekly summary written to {}", path.display());
    }
    Ok(())
}
