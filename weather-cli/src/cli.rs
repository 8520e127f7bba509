use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Password, PasswordDisplayMode, Text};
use weather_core::{
    Config, LocalWeatherLoader, RemoteWeatherLoader, ReqwestHttpClient, WeatherForecast,
    WeatherLoader, config::MAX_DAYS,
};

use crate::{file_store::FileForecastStore, output::render_forecast};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the WeatherAPI.com key and defaults.
    Configure,

    /// Fetch and show the forecast for a location, then cache it.
    Show {
        /// Location query, e.g. "Belgrade" or "44.8,20.47". Falls back to the configured default.
        location: Option<String>,

        /// Number of forecast days (1-14).
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_DAYS as i64))]
        days: Option<u8>,
    },

    /// Show the last cached forecast without touching the network.
    Cached,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, days } => show(location.as_deref(), days).await,
            Command::Cached => cached().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    if !api_key.trim().is_empty() {
        cfg.api_key = Some(api_key.trim().to_string());
    }

    let location = Text::new("Default location (leave empty for none):")
        .with_default(cfg.default_location.as_deref().unwrap_or_default())
        .prompt()?;
    cfg.default_location = Some(location.trim().to_string()).filter(|l| !l.is_empty());

    let days = CustomType::<u8>::new("Forecast days:")
        .with_default(cfg.days())
        .with_error_message("Please enter a whole number")
        .prompt()?;
    cfg.days = Some(days.clamp(1, MAX_DAYS));

    cfg.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(location: Option<&str>, days: Option<u8>) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let query = cfg.location_or_default(location)?;
    let days = days.unwrap_or_else(|| cfg.days());

    let loader = RemoteWeatherLoader::new(cfg.forecast_url(query, days)?, ReqwestHttpClient::new());
    let forecast = loader
        .load()
        .await
        .with_context(|| format!("Failed to load the forecast for '{query}'"))?;

    print!("{}", render_forecast(&forecast));

    let cache = LocalWeatherLoader::new(FileForecastStore::new(Config::cache_file_path()?), Utc::now);
    if let Err(err) = cache.save(forecast).await {
        let stage = err.to_string();
        tracing::warn!(cause = %err.into_inner(), "{stage}");
    }

    Ok(())
}

async fn cached() -> anyhow::Result<()> {
    let store = FileForecastStore::new(Config::cache_file_path()?);

    match store.retrieve().await? {
        Some(entry) => {
            println!("Cached at {}", entry.timestamp.to_rfc3339());
            print!("{}", render_forecast(&WeatherForecast::from(entry.forecast)));
        }
        None => println!("No cached forecast yet. Run `weather show` first."),
    }

    Ok(())
}
