//! Shared test fixtures: a known forecast and its wire encoding.

use serde_json::{Value, json};

use crate::model::{
    AirQuality, Astrology, CurrentWeather, DailyForecast, DailyWeather, Forecast, HourlyWeather,
    Location, WeatherCondition, WeatherForecast,
};

pub fn location() -> Location {
    Location {
        name: "Belgrade".into(),
        region: "Central Serbia".into(),
        country: "Serbia".into(),
        latitude: 44.8,
        longitude: 20.47,
        time_zone_id: "Europe/Belgrade".into(),
        local_time: "2021-03-14 16:52".into(),
    }
}

pub fn condition() -> WeatherCondition {
    WeatherCondition {
        description: "Partly cloudy".into(),
        icon_url: "//cdn.weatherapi.com/weather/64x64/day/116.png".into(),
        code: 1003,
    }
}

pub fn air_quality() -> AirQuality {
    AirQuality {
        carbon_monoxide: 230.3,
        ozone: 61.5,
        nitrogen_dioxide: 7.2,
        sulphur_dioxide: 3.1,
        pm2_5: 8.4,
        pm10: 11.9,
        us_epa_index: 1,
        gb_defra_index: 2,
    }
}

pub fn current_weather() -> CurrentWeather {
    CurrentWeather {
        last_updated: "2021-03-14 16:45".into(),
        temp_celsius: 14.0,
        temp_fahrenheit: 57.2,
        is_day: true,
        condition: condition(),
        wind_mph: 4.3,
        wind_kph: 6.8,
        wind_degree: 20,
        wind_direction: "NNE".into(),
        pressure_mb: 1004.0,
        pressure_in: 30.1,
        precipitation_mm: 0.0,
        precipitation_in: 0.0,
        humidity: 63,
        cloud: 50,
        feelslike_celsius: 13.4,
        feelslike_fahrenheit: 56.1,
        visibility_km: 10.0,
        visibility_miles: 6.0,
        uv_index: 5.0,
        air_quality: air_quality(),
    }
}

pub fn daily_weather() -> DailyWeather {
    DailyWeather {
        max_temp_celsius: 16.2,
        max_temp_fahrenheit: 61.2,
        min_temp_celsius: 4.1,
        min_temp_fahrenheit: 39.4,
        avg_temp_celsius: 9.8,
        avg_temp_fahrenheit: 49.6,
        max_wind_mph: 9.4,
        max_wind_kph: 15.1,
        total_precipitation_mm: 1.2,
        total_precipitation_in: 0.05,
        avg_visibility_km: 9.7,
        avg_visibility_miles: 6.0,
        avg_humidity: 71,
        chance_of_rain: 40,
        chance_of_snow: 0,
        condition: condition(),
        uv_index: 3.0,
    }
}

pub fn astrology() -> Astrology {
    Astrology {
        sunrise: "06:02 AM".into(),
        sunset: "05:51 PM".into(),
        moonrise: "06:39 AM".into(),
        moonset: "07:24 PM".into(),
        moon_phase: "Waxing Crescent".into(),
        moon_illumination: "2".into(),
    }
}

pub fn hourly_weather(date: &str, date_epoch: i64, hour: i64) -> HourlyWeather {
    HourlyWeather {
        time: format!("{date} {hour:02}:00"),
        time_epoch: date_epoch + hour * 3600,
        temp_celsius: 5.0 + hour as f64 * 0.5,
        temp_fahrenheit: 41.0 + hour as f64 * 0.9,
        is_day: (6..18).contains(&hour),
        condition: condition(),
        wind_mph: 3.1,
        wind_kph: 5.0,
        wind_degree: 180,
        wind_direction: "S".into(),
        pressure_mb: 1012.0,
        pressure_in: 29.9,
        precipitation_mm: 0.1,
        precipitation_in: 0.0,
        humidity: 70,
        cloud: 25,
        feelslike_celsius: 4.2,
        feelslike_fahrenheit: 39.6,
        visibility_km: 10.0,
        visibility_miles: 6.0,
        uv_index: 1.0,
        chance_of_rain: 12,
        chance_of_snow: 0,
    }
}

pub fn daily_forecast(date: &str, date_epoch: i64) -> DailyForecast {
    DailyForecast {
        date: date.into(),
        date_epoch,
        day: daily_weather(),
        astrology: astrology(),
        hours: (0..24).map(|h| hourly_weather(date, date_epoch, h)).collect(),
    }
}

pub fn weather_forecast() -> WeatherForecast {
    WeatherForecast {
        location: location(),
        current: current_weather(),
        forecast: Forecast {
            days: vec![
                daily_forecast("2021-03-14", 1_615_680_000),
                daily_forecast("2021-03-15", 1_615_766_400),
            ],
        },
    }
}

fn condition_json(c: &WeatherCondition) -> Value {
    json!({ "text": c.description, "icon": c.icon_url, "code": c.code })
}

fn flag(b: bool) -> u8 {
    u8::from(b)
}

fn hour_json(h: &HourlyWeather) -> Value {
    json!({
        "time": h.time,
        "time_epoch": h.time_epoch,
        "temp_c": h.temp_celsius,
        "temp_f": h.temp_fahrenheit,
        "is_day": flag(h.is_day),
        "condition": condition_json(&h.condition),
        "wind_mph": h.wind_mph,
        "wind_kph": h.wind_kph,
        "wind_degree": h.wind_degree,
        "wind_dir": h.wind_direction,
        "pressure_mb": h.pressure_mb,
        "pressure_in": h.pressure_in,
        "precip_mm": h.precipitation_mm,
        "precip_in": h.precipitation_in,
        "humidity": h.humidity,
        "cloud": h.cloud,
        "feelslike_c": h.feelslike_celsius,
        "feelslike_f": h.feelslike_fahrenheit,
        "vis_km": h.visibility_km,
        "vis_miles": h.visibility_miles,
        "uv": h.uv_index,
        "chance_of_rain": h.chance_of_rain,
        "chance_of_snow": h.chance_of_snow,
    })
}

fn day_json(d: &DailyForecast) -> Value {
    let w = &d.day;
    let a = &d.astrology;
    json!({
        "date": d.date,
        "date_epoch": d.date_epoch,
        "day": {
            "maxtemp_c": w.max_temp_celsius,
            "maxtemp_f": w.max_temp_fahrenheit,
            "mintemp_c": w.min_temp_celsius,
            "mintemp_f": w.min_temp_fahrenheit,
            "avgtemp_c": w.avg_temp_celsius,
            "avgtemp_f": w.avg_temp_fahrenheit,
            "maxwind_mph": w.max_wind_mph,
            "maxwind_kph": w.max_wind_kph,
            "totalprecip_mm": w.total_precipitation_mm,
            "totalprecip_in": w.total_precipitation_in,
            "avgvis_km": w.avg_visibility_km,
            "avgvis_miles": w.avg_visibility_miles,
            "avghumidity": w.avg_humidity,
            "daily_chance_of_rain": w.chance_of_rain,
            "daily_chance_of_snow": w.chance_of_snow,
            "condition": condition_json(&w.condition),
            "uv": w.uv_index,
        },
        "astro": {
            "sunrise": a.sunrise,
            "sunset": a.sunset,
            "moonrise": a.moonrise,
            "moonset": a.moonset,
            "moon_phase": a.moon_phase,
            "moon_illumination": a.moon_illumination,
        },
        "hour": d.hours.iter().map(hour_json).collect::<Vec<_>>(),
    })
}

/// Encodes `forecast` the way the upstream forecast endpoint would.
pub fn wire_json(forecast: &WeatherForecast) -> Value {
    let l = &forecast.location;
    let c = &forecast.current;
    let aq = &c.air_quality;
    json!({
        "location": {
            "name": l.name,
            "region": l.region,
            "country": l.country,
            "lat": l.latitude,
            "lon": l.longitude,
            "tz_id": l.time_zone_id,
            "localtime": l.local_time,
        },
        "current": {
            "last_updated": c.last_updated,
            "temp_c": c.temp_celsius,
            "temp_f": c.temp_fahrenheit,
            "is_day": flag(c.is_day),
            "condition": condition_json(&c.condition),
            "wind_mph": c.wind_mph,
            "wind_kph": c.wind_kph,
            "wind_degree": c.wind_degree,
            "wind_dir": c.wind_direction,
            "pressure_mb": c.pressure_mb,
            "pressure_in": c.pressure_in,
            "precip_mm": c.precipitation_mm,
            "precip_in": c.precipitation_in,
            "humidity": c.humidity,
            "cloud": c.cloud,
            "feelslike_c": c.feelslike_celsius,
            "feelslike_f": c.feelslike_fahrenheit,
            "vis_km": c.visibility_km,
            "vis_miles": c.visibility_miles,
            "uv": c.uv_index,
            "air_quality": {
                "co": aq.carbon_monoxide,
                "o3": aq.ozone,
                "no2": aq.nitrogen_dioxide,
                "so2": aq.sulphur_dioxide,
                "pm2_5": aq.pm2_5,
                "pm10": aq.pm10,
                "us-epa-index": aq.us_epa_index,
                "gb-defra-index": aq.gb_defra_index,
            },
        },
        "forecast": {
            "forecastday": forecast.forecast.days.iter().map(day_json).collect::<Vec<_>>(),
        },
    })
}

pub fn wire_bytes(forecast: &WeatherForecast) -> Vec<u8> {
    wire_json(forecast).to_string().into_bytes()
}
