//! Domain model for a fetched forecast.
//!
//! These types carry no knowledge of the upstream wire schema: renaming and
//! validation happen in [`crate::remote::api`]. The serde derives here describe
//! the storage representation only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone_id: String,
    /// Local time at the location when the snapshot was produced, e.g. `2021-03-14 16:52`.
    pub local_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
    pub icon_url: String,
    pub code: i32,
}

/// Pollutant concentrations (μg/m3) and the two categorical indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    pub carbon_monoxide: f64,
    pub ozone: f64,
    pub nitrogen_dioxide: f64,
    pub sulphur_dioxide: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    /// 1 Good, 2 Moderate, 3 Unhealthy for sensitive groups, 4 Unhealthy,
    /// 5 Very unhealthy, 6 Hazardous.
    pub us_epa_index: u8,
    /// UK DEFRA band, 1 (low) to 10 (very high).
    pub gb_defra_index: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub last_updated: String,
    pub temp_celsius: f64,
    pub temp_fahrenheit: f64,
    pub is_day: bool,
    pub condition: WeatherCondition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: u16,
    pub wind_direction: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precipitation_mm: f64,
    pub precipitation_in: f64,
    pub humidity: u8,
    pub cloud: u8,
    pub feelslike_celsius: f64,
    pub feelslike_fahrenheit: f64,
    pub visibility_km: f64,
    pub visibility_miles: f64,
    pub uv_index: f64,
    pub air_quality: AirQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    pub max_temp_celsius: f64,
    pub max_temp_fahrenheit: f64,
    pub min_temp_celsius: f64,
    pub min_temp_fahrenheit: f64,
    pub avg_temp_celsius: f64,
    pub avg_temp_fahrenheit: f64,
    pub max_wind_mph: f64,
    pub max_wind_kph: f64,
    pub total_precipitation_mm: f64,
    pub total_precipitation_in: f64,
    pub avg_visibility_km: f64,
    pub avg_visibility_miles: f64,
    pub avg_humidity: u8,
    /// Percentage, 0-100.
    pub chance_of_rain: u8,
    /// Percentage, 0-100.
    pub chance_of_snow: u8,
    pub condition: WeatherCondition,
    pub uv_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astrology {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub moon_illumination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyWeather {
    pub time: String,
    pub time_epoch: i64,
    pub temp_celsius: f64,
    pub temp_fahrenheit: f64,
    pub is_day: bool,
    pub condition: WeatherCondition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: u16,
    pub wind_direction: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precipitation_mm: f64,
    pub precipitation_in: f64,
    pub humidity: u8,
    pub cloud: u8,
    pub feelslike_celsius: f64,
    pub feelslike_fahrenheit: f64,
    pub visibility_km: f64,
    pub visibility_miles: f64,
    pub uv_index: f64,
    pub chance_of_rain: u8,
    pub chance_of_snow: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub date_epoch: i64,
    pub day: DailyWeather,
    pub astrology: Astrology,
    /// Chronological, one entry per hour of `date`.
    pub hours: Vec<HourlyWeather>,
}

/// Days in the order the upstream API returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub days: Vec<DailyForecast>,
}

/// One fetched snapshot: where, what it is like now, and what is coming.
///
/// Two forecasts compare equal when their `location.local_time` matches,
/// regardless of any other field. That is the identity used for cache
/// freshness; compare the nested values directly for full equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub location: Location,
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

impl PartialEq for WeatherForecast {
    fn eq(&self, other: &Self) -> bool {
        self.location.local_time == other.location.local_time
    }
}

impl Eq for WeatherForecast {}
