use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use clima_core::{Config, Coordinates, FetchResult, FixedLocation};
use inquire::{Password, PasswordDisplayMode, Text};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Current weather by city or coordinates")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// API key to use instead of the stored one.
    #[arg(long, global = true, env = "CLIMA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Weather endpoint to use instead of the stored one.
    #[arg(long, global = true, env = "CLIMA_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Print the reading as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and endpoint.
    Configure,

    /// Show weather for a city name.
    City {
        /// City name, e.g. "London" or "Paris,FR".
        name: String,
    },

    /// Show weather for a latitude/longitude pair.
    Coords {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let GlobalArgs { api_key, endpoint, json } = self.global;

        let outcome = match self.command {
            Command::Configure => return configure(),
            Command::City { name } => {
                let fetcher = Config::load()?.with_overrides(endpoint, api_key).fetcher()?;
                fetcher.fetch_by_city_name(&name).await
            }
            Command::Coords { latitude, longitude } => {
                let fetcher = Config::load()?.with_overrides(endpoint, api_key).fetcher()?;
                let source = FixedLocation::new(Coordinates::new(latitude, longitude));
                fetcher.fetch_current_location(&source).await
            }
        };

        report(outcome, json)
    }
}

fn report(outcome: FetchResult, json: bool) -> anyhow::Result<()> {
    match outcome {
        Ok(reading) if json => {
            let text = serde_json::to_string_pretty(&reading)
                .context("Failed to serialize weather reading")?;
            println!("{text}");
            Ok(())
        }
        Ok(reading) => {
            println!("{}", output::render_reading(&reading));
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = ?err, "fetch failed");
            bail!("{}", output::render_error(&err))
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    let endpoint = Text::new("Weather endpoint:")
        .with_default(&config.endpoint)
        .prompt()
        .context("Failed to read endpoint")?;

    config = config.with_overrides(Some(endpoint), Some(api_key.trim().to_string()));
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
