//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The forecast domain model
//! - Loading a forecast from the WeatherAPI.com `forecast.json` endpoint
//!   through an injected HTTP client
//! - Replacing the cached forecast snapshot through an injected store
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod config;
pub mod model;
pub mod remote;

#[cfg(test)]
mod fixtures;

pub use cache::{
    CachedForecast, InMemoryForecastStore, LocalWeatherForecast, LocalWeatherLoader, SaveError,
    WeatherForecastStore,
};
pub use config::Config;
pub use model::{
    AirQuality, Astrology, CurrentWeather, DailyForecast, DailyWeather, Forecast, HourlyWeather,
    Location, WeatherCondition, WeatherForecast,
};
pub use remote::{
    HttpClient, HttpClientError, HttpResponse, LoadError, RemoteWeatherLoader, ReqwestHttpClient,
    WeatherLoader,
};
pub use reqwest::Url;
