use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use skyview::config::load_or_default;
use skyview::openmeteo::{ForecastRequest, OpenMeteoClient};
use skyview::weather::assistant::Role;
use skyview::weather::{Conversation, Intent, WeatherWidget, route};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Ask the weather assistant; weather questions get a widget reply"
)]
struct Cli {
    /// Free-form question, e.g. "what's the weather in Paris?"
    query: String,
    /// City to use when the question names none
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Only print the routing decision, without any network access
    #[arg(long)]
    dry_run: bool,
    /// Print the conversation history as JSON after the reply
    #[arg(long)]
    transcript: bool,
}

fn main() -> anyhow::Result<()> {
    skyview::init_logging();
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_ref())?;

    let mut routed = route(&cli.query, cli.city.as_deref());
    if routed.city.is_none() {
        routed.city = config.dashboard.default_city.clone();
    }
    log::debug!("routed query: {routed:?}");

    if cli.dry_run {
        println!("{}", serde_json::to_string(&routed)?);
        return Ok(());
    }

    let mut conversation = Conversation::default();
    conversation.push(Role::User, cli.query.as_str());

    let reply = match routed.intent {
        Intent::Chat => {
            "I can only answer weather and outfit questions from the command line.".to_string()
        }
        Intent::WeatherQuery | Intent::LifestyleSuggestion => {
            let city = routed
                .city
                .context("could not tell which city you mean; pass --city")?;
            let client = OpenMeteoClient::new(&config.api)?;
            let location = client.geocode(&city)?;
            let forecast = client.forecast(&location, &ForecastRequest::overview())?;
            let current = forecast
                .current_weather
                .as_ref()
                .context("forecast response has no current weather")?;
            if routed.intent == Intent::LifestyleSuggestion {
                log::info!(
                    "outfit suggestions need a chat model; showing current weather for {} instead",
                    location.name
                );
            }
            WeatherWidget::new(&location, current).render()?
        }
    };
    println!("{reply}");
    conversation.push(Role::Assistant, reply);

    if cli.transcript {
        println!("{}", serde_json::to_string(conversation.history())?);
    }
    Ok(())
}
