use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_DAYS: u8 = 3;
/// Longest forecast the upstream API serves.
pub const MAX_DAYS: u8 = 14;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_location = "Belgrade"
/// days = 3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub default_location: Option<String>,
    pub days: Option<u8>,
    /// Overrides the API root, mostly useful against a local test server.
    pub base_url: Option<String>,
}

impl Config {
    /// API key, or an error telling the user how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weather configure` and enter your WeatherAPI.com key."
            )
        })
    }

    /// Location to use when none is given on the command line.
    pub fn location_or_default<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str> {
        explicit.or(self.default_location.as_deref()).ok_or_else(|| {
            anyhow!(
                "No location given and no default location configured.\n\
                 Hint: pass a location or run `weather configure`."
            )
        })
    }

    /// Number of forecast days, clamped to what the API can return.
    pub fn days(&self) -> u8 {
        self.days.unwrap_or(DEFAULT_DAYS).clamp(1, MAX_DAYS)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Build the `forecast.json` URL for `query`, including air quality data.
    pub fn forecast_url(&self, query: &str, days: u8) -> Result<Url> {
        let base = self.base_url().trim_end_matches('/');
        let days = days.clamp(1, MAX_DAYS).to_string();

        Url::parse_with_params(
            &format!("{base}/forecast.json"),
            &[
                ("key", self.api_key()?),
                ("q", query),
                ("days", days.as_str()),
                ("aqi", "yes"),
                ("alerts", "no"),
            ],
        )
        .with_context(|| format!("Invalid forecast API base URL: {base}"))
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Path to the cached forecast snapshot.
    pub fn cache_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.cache_dir().join("forecast.json"))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "weather-task", "weather-cli")
        .ok_or_else(|| anyhow!("Could not determine platform config directory"))
}
