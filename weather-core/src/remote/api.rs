//! Wire schema of the `forecast.json` endpoint and its mapping onto the domain model.
//!
//! The `#[serde(rename = ...)]` attributes below are the rename table: every
//! wire key maps to exactly one domain field and values are carried through
//! unchanged. Conversions into the domain types are plain moves.

use serde::{Deserialize, Deserializer, de};

use crate::model::{
    AirQuality, Astrology, CurrentWeather, DailyForecast, DailyWeather, Forecast, HourlyWeather,
    Location, WeatherCondition, WeatherForecast,
};

use super::LoadError;

const OK_200: u16 = 200;

/// Decodes a response into a [`WeatherForecast`].
///
/// Fails with [`LoadError::InvalidData`] unless `status` is exactly 200 and
/// `body` matches the schema in full. There are no partial results.
pub fn map(body: &[u8], status: u16) -> Result<WeatherForecast, LoadError> {
    if status != OK_200 {
        tracing::debug!(status, "rejecting non-200 response");
        return Err(LoadError::InvalidData);
    }

    let parsed: WaResponse = serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "response body does not match forecast schema");
        LoadError::InvalidData
    })?;

    Ok(parsed.into())
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    region: String,
    country: String,
    #[serde(rename = "lat", deserialize_with = "finite")]
    latitude: f64,
    #[serde(rename = "lon", deserialize_with = "finite")]
    longitude: f64,
    #[serde(rename = "tz_id")]
    time_zone_id: String,
    #[serde(rename = "localtime")]
    local_time: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    #[serde(rename = "text")]
    description: String,
    #[serde(rename = "icon")]
    icon_url: String,
    code: i32,
}

#[derive(Debug, Deserialize)]
struct WaAirQuality {
    #[serde(rename = "co", deserialize_with = "finite")]
    carbon_monoxide: f64,
    #[serde(rename = "o3", deserialize_with = "finite")]
    ozone: f64,
    #[serde(rename = "no2", deserialize_with = "finite")]
    nitrogen_dioxide: f64,
    #[serde(rename = "so2", deserialize_with = "finite")]
    sulphur_dioxide: f64,
    #[serde(deserialize_with = "finite")]
    pm2_5: f64,
    #[serde(deserialize_with = "finite")]
    pm10: f64,
    #[serde(rename = "us-epa-index")]
    us_epa_index: u8,
    #[serde(rename = "gb-defra-index")]
    gb_defra_index: u8,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    last_updated: String,
    #[serde(rename = "temp_c", deserialize_with = "finite")]
    temp_celsius: f64,
    #[serde(rename = "temp_f", deserialize_with = "finite")]
    temp_fahrenheit: f64,
    #[serde(deserialize_with = "day_flag")]
    is_day: bool,
    condition: WaCondition,
    #[serde(deserialize_with = "finite")]
    wind_mph: f64,
    #[serde(deserialize_with = "finite")]
    wind_kph: f64,
    wind_degree: u16,
    #[serde(rename = "wind_dir")]
    wind_direction: String,
    #[serde(deserialize_with = "finite")]
    pressure_mb: f64,
    #[serde(deserialize_with = "finite")]
    pressure_in: f64,
    #[serde(rename = "precip_mm", deserialize_with = "finite")]
    precipitation_mm: f64,
    #[serde(rename = "precip_in", deserialize_with = "finite")]
    precipitation_in: f64,
    humidity: u8,
    cloud: u8,
    #[serde(rename = "feelslike_c", deserialize_with = "finite")]
    feelslike_celsius: f64,
    #[serde(rename = "feelslike_f", deserialize_with = "finite")]
    feelslike_fahrenheit: f64,
    #[serde(rename = "vis_km", deserialize_with = "finite")]
    visibility_km: f64,
    #[serde(rename = "vis_miles", deserialize_with = "finite")]
    visibility_miles: f64,
    #[serde(rename = "uv", deserialize_with = "finite")]
    uv_index: f64,
    air_quality: WaAirQuality,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    #[serde(rename = "maxtemp_c", deserialize_with = "finite")]
    max_temp_celsius: f64,
    #[serde(rename = "maxtemp_f", deserialize_with = "finite")]
    max_temp_fahrenheit: f64,
    #[serde(rename = "mintemp_c", deserialize_with = "finite")]
    min_temp_celsius: f64,
    #[serde(rename = "mintemp_f", deserialize_with = "finite")]
    min_temp_fahrenheit: f64,
    #[serde(rename = "avgtemp_c", deserialize_with = "finite")]
    avg_temp_celsius: f64,
    #[serde(rename = "avgtemp_f", deserialize_with = "finite")]
    avg_temp_fahrenheit: f64,
    #[serde(rename = "maxwind_mph", deserialize_with = "finite")]
    max_wind_mph: f64,
    #[serde(rename = "maxwind_kph", deserialize_with = "finite")]
    max_wind_kph: f64,
    #[serde(rename = "totalprecip_mm", deserialize_with = "finite")]
    total_precipitation_mm: f64,
    #[serde(rename = "totalprecip_in", deserialize_with = "finite")]
    total_precipitation_in: f64,
    #[serde(rename = "avgvis_km", deserialize_with = "finite")]
    avg_visibility_km: f64,
    #[serde(rename = "avgvis_miles", deserialize_with = "finite")]
    avg_visibility_miles: f64,
    #[serde(rename = "avghumidity", deserialize_with = "whole_percentage")]
    avg_humidity: u8,
    #[serde(rename = "daily_chance_of_rain", deserialize_with = "percentage")]
    chance_of_rain: u8,
    #[serde(rename = "daily_chance_of_snow", deserialize_with = "percentage")]
    chance_of_snow: u8,
    condition: WaCondition,
    #[serde(rename = "uv", deserialize_with = "finite")]
    uv_index: f64,
}

#[derive(Debug, Deserialize)]
struct WaAstro {
    sunrise: String,
    sunset: String,
    moonrise: String,
    moonset: String,
    moon_phase: String,
    moon_illumination: String,
}

#[derive(Debug, Deserialize)]
struct WaHour {
    time: String,
    time_epoch: i64,
    #[serde(rename = "temp_c", deserialize_with = "finite")]
    temp_celsius: f64,
    #[serde(rename = "temp_f", deserialize_with = "finite")]
    temp_fahrenheit: f64,
    #[serde(deserialize_with = "day_flag")]
    is_day: bool,
    condition: WaCondition,
    #[serde(deserialize_with = "finite")]
    wind_mph: f64,
    #[serde(deserialize_with = "finite")]
    wind_kph: f64,
    wind_degree: u16,
    #[serde(rename = "wind_dir")]
    wind_direction: String,
    #[serde(deserialize_with = "finite")]
    pressure_mb: f64,
    #[serde(deserialize_with = "finite")]
    pressure_in: f64,
    #[serde(rename = "precip_mm", deserialize_with = "finite")]
    precipitation_mm: f64,
    #[serde(rename = "precip_in", deserialize_with = "finite")]
    precipitation_in: f64,
    humidity: u8,
    cloud: u8,
    #[serde(rename = "feelslike_c", deserialize_with = "finite")]
    feelslike_celsius: f64,
    #[serde(rename = "feelslike_f", deserialize_with = "finite")]
    feelslike_fahrenheit: f64,
    #[serde(rename = "vis_km", deserialize_with = "finite")]
    visibility_km: f64,
    #[serde(rename = "vis_miles", deserialize_with = "finite")]
    visibility_miles: f64,
    #[serde(rename = "uv", deserialize_with = "finite")]
    uv_index: f64,
    #[serde(deserialize_with = "percentage")]
    chance_of_rain: u8,
    #[serde(deserialize_with = "percentage")]
    chance_of_snow: u8,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: String,
    date_epoch: i64,
    day: WaDay,
    #[serde(rename = "astro")]
    astrology: WaAstro,
    #[serde(rename = "hour")]
    hours: Vec<WaHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    #[serde(rename = "forecastday")]
    days: Vec<WaForecastDay>,
}

fn finite<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom(format!("non-finite number {value}")))
    }
}

fn day_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(de::Error::custom(format!("is_day must be 0 or 1, got {other}"))),
    }
}

/// A percentage as the API has sent it over time: a bare integer or a
/// base-10 integer inside a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPercentage {
    Number(u64),
    Text(String),
}

/// Accepts `40` or `"40"`; the value must lie within 0..=100.
fn percentage<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = match RawPercentage::deserialize(deserializer)? {
        RawPercentage::Number(n) => n,
        RawPercentage::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| de::Error::custom(format!("invalid percentage string {s:?}")))?,
    };
    clamp_checked(value)
}

/// Accepts an integer or a float with no fractional part, e.g. `71` or `71.0`.
fn whole_percentage<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = finite(deserializer)?;
    if value.fract() != 0.0 || value < 0.0 {
        return Err(de::Error::custom(format!("expected a whole percentage, got {value}")));
    }
    clamp_checked(value as u64)
}

fn clamp_checked<E: de::Error>(value: u64) -> Result<u8, E> {
    match u8::try_from(value) {
        Ok(v) if v <= 100 => Ok(v),
        _ => Err(E::custom(format!("percentage out of range: {value}"))),
    }
}

impl From<WaResponse> for WeatherForecast {
    fn from(r: WaResponse) -> Self {
        Self {
            location: r.location.into(),
            current: r.current.into(),
            forecast: Forecast { days: r.forecast.days.into_iter().map(Into::into).collect() },
        }
    }
}

impl From<WaLocation> for Location {
    fn from(l: WaLocation) -> Self {
        Self {
            name: l.name,
            region: l.region,
            country: l.country,
            latitude: l.latitude,
            longitude: l.longitude,
            time_zone_id: l.time_zone_id,
            local_time: l.local_time,
        }
    }
}

impl From<WaCondition> for WeatherCondition {
    fn from(c: WaCondition) -> Self {
        Self { description: c.description, icon_url: c.icon_url, code: c.code }
    }
}

impl From<WaAirQuality> for AirQuality {
    fn from(a: WaAirQuality) -> Self {
        Self {
            carbon_monoxide: a.carbon_monoxide,
            ozone: a.ozone,
            nitrogen_dioxide: a.nitrogen_dioxide,
            sulphur_dioxide: a.sulphur_dioxide,
            pm2_5: a.pm2_5,
            pm10: a.pm10,
            us_epa_index: a.us_epa_index,
            gb_defra_index: a.gb_defra_index,
        }
    }
}

impl From<WaCurrent> for CurrentWeather {
    fn from(c: WaCurrent) -> Self {
        Self {
            last_updated: c.last_updated,
            temp_celsius: c.temp_celsius,
            temp_fahrenheit: c.temp_fahrenheit,
            is_day: c.is_day,
            condition: c.condition.into(),
            wind_mph: c.wind_mph,
            wind_kph: c.wind_kph,
            wind_degree: c.wind_degree,
            wind_direction: c.wind_direction,
            pressure_mb: c.pressure_mb,
            pressure_in: c.pressure_in,
            precipitation_mm: c.precipitation_mm,
            precipitation_in: c.precipitation_in,
            humidity: c.humidity,
            cloud: c.cloud,
            feelslike_celsius: c.feelslike_celsius,
            feelslike_fahrenheit: c.feelslike_fahrenheit,
            visibility_km: c.visibility_km,
            visibility_miles: c.visibility_miles,
            uv_index: c.uv_index,
            air_quality: c.air_quality.into(),
        }
    }
}

impl From<WaDay> for DailyWeather {
    fn from(d: WaDay) -> Self {
        Self {
            max_temp_celsius: d.max_temp_celsius,
            max_temp_fahrenheit: d.max_temp_fahrenheit,
            min_temp_celsius: d.min_temp_celsius,
            min_temp_fahrenheit: d.min_temp_fahrenheit,
            avg_temp_celsius: d.avg_temp_celsius,
            avg_temp_fahrenheit: d.avg_temp_fahrenheit,
            max_wind_mph: d.max_wind_mph,
            max_wind_kph: d.max_wind_kph,
            total_precipitation_mm: d.total_precipitation_mm,
            total_precipitation_in: d.total_precipitation_in,
            avg_visibility_km: d.avg_visibility_km,
            avg_visibility_miles: d.avg_visibility_miles,
            avg_humidity: d.avg_humidity,
            chance_of_rain: d.chance_of_rain,
            chance_of_snow: d.chance_of_snow,
            condition: d.condition.into(),
            uv_index: d.uv_index,
        }
    }
}

impl From<WaAstro> for Astrology {
    fn from(a: WaAstro) -> Self {
        Self {
            sunrise: a.sunrise,
            sunset: a.sunset,
            moonrise: a.moonrise,
            moonset: a.moonset,
            moon_phase: a.moon_phase,
            moon_illumination: a.moon_illumination,
        }
    }
}

impl From<WaHour> for HourlyWeather {
    fn from(h: WaHour) -> Self {
        Self {
            time: h.time,
            time_epoch: h.time_epoch,
            temp_celsius: h.temp_celsius,
            temp_fahrenheit: h.temp_fahrenheit,
            is_day: h.is_day,
            condition: h.condition.into(),
            wind_mph: h.wind_mph,
            wind_kph: h.wind_kph,
            wind_degree: h.wind_degree,
            wind_direction: h.wind_direction,
            pressure_mb: h.pressure_mb,
            pressure_in: h.pressure_in,
            precipitation_mm: h.precipitation_mm,
            precipitation_in: h.precipitation_in,
            humidity: h.humidity,
            cloud: h.cloud,
            feelslike_celsius: h.feelslike_celsius,
            feelslike_fahrenheit: h.feelslike_fahrenheit,
            visibility_km: h.visibility_km,
            visibility_miles: h.visibility_miles,
            uv_index: h.uv_index,
            chance_of_rain: h.chance_of_rain,
            chance_of_snow: h.chance_of_snow,
        }
    }
}

impl From<WaForecastDay> for DailyForecast {
    fn from(d: WaForecastDay) -> Self {
        Self {
            date: d.date,
            date_epoch: d.date_epoch,
            day: d.day.into(),
            astrology: d.astrology.into(),
            hours: d.hours.into_iter().map(Into::into).collect(),
        }
    }
}
