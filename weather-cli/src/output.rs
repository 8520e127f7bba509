//! Human-friendly rendering of a forecast.

use std::fmt::Write;

use weather_core::{AirQuality, WeatherForecast};

fn epa_label(index: u8) -> &'static str {
    match index {
        1 => "Good",
        2 => "Moderate",
        3 => "Unhealthy for sensitive groups",
        4 => "Unhealthy",
        5 => "Very unhealthy",
        6 => "Hazardous",
        _ => "Unknown",
    }
}

fn air_quality_line(aq: &AirQuality) -> String {
    format!(
        "Air quality: {} (US EPA {}, UK DEFRA {}), PM2.5 {:.1}, PM10 {:.1}",
        epa_label(aq.us_epa_index),
        aq.us_epa_index,
        aq.gb_defra_index,
        aq.pm2_5,
        aq.pm10,
    )
}

pub fn render_forecast(forecast: &WeatherForecast) -> String {
    let loc = &forecast.location;
    let now = &forecast.current;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}, {}, {} (local time {})", loc.name, loc.region, loc.country, loc.local_time);
    let _ = writeln!(
        out,
        "Now: {:.1}°C, feels like {:.1}°C, {}",
        now.temp_celsius, now.feelslike_celsius, now.condition.description
    );
    let _ = writeln!(
        out,
        "Wind {:.1} km/h {}, humidity {}%, cloud {}%, UV {:.0}",
        now.wind_kph, now.wind_direction, now.humidity, now.cloud, now.uv_index
    );
    let _ = writeln!(out, "{}", air_quality_line(&now.air_quality));

    for day in &forecast.forecast.days {
        let w = &day.day;
        let _ = writeln!(
            out,
            "{}: {:.1}..{:.1}°C, {}, rain {}%, snow {}%, sunrise {} sunset {}",
            day.date,
            w.min_temp_celsius,
            w.max_temp_celsius,
            w.condition.description,
            w.chance_of_rain,
            w.chance_of_snow,
            day.astrology.sunrise,
            day.astrology.sunset,
        );
    }

    out
}
