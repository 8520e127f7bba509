use weather_core::{
    AirQuality, Astrology, CurrentWeather, DailyForecast, DailyWeather, Forecast, Location,
    WeatherCondition, WeatherForecast,
};

fn condition() -> WeatherCondition {
    WeatherCondition {
        description: "Sunny".into(),
        icon_url: "//cdn.weatherapi.com/weather/64x64/day/113.png".into(),
        code: 1000,
    }
}

/// A one-day forecast with no hourly entries, identified by `local_time`.
pub fn sample_forecast(local_time: &str) -> WeatherForecast {
    WeatherForecast {
        location: Location {
            name: "Belgrade".into(),
            region: "Central Serbia".into(),
            country: "Serbia".into(),
            latitude: 44.8,
            longitude: 20.47,
            time_zone_id: "Europe/Belgrade".into(),
            local_time: local_time.into(),
        },
        current: CurrentWeather {
            last_updated: local_time.into(),
            temp_celsius: 24.0,
            temp_fahrenheit: 75.2,
            is_day: true,
            condition: condition(),
            wind_mph: 6.9,
            wind_kph: 11.2,
            wind_degree: 300,
            wind_direction: "WNW".into(),
            pressure_mb: 1015.0,
            pressure_in: 29.97,
            precipitation_mm: 0.0,
            precipitation_in: 0.0,
            humidity: 41,
            cloud: 0,
            feelslike_celsius: 25.1,
            feelslike_fahrenheit: 77.2,
            visibility_km: 10.0,
            visibility_miles: 6.0,
            uv_index: 7.0,
            air_quality: AirQuality {
                carbon_monoxide: 280.4,
                ozone: 98.7,
                nitrogen_dioxide: 9.3,
                sulphur_dioxide: 4.2,
                pm2_5: 12.1,
                pm10: 18.6,
                us_epa_index: 2,
                gb_defra_index: 3,
            },
        },
        forecast: Forecast {
            days: vec![DailyForecast {
                date: "2021-06-19".into(),
                date_epoch: 1_624_060_800,
                day: DailyWeather {
                    max_temp_celsius: 29.3,
                    max_temp_fahrenheit: 84.7,
                    min_temp_celsius: 17.8,
                    min_temp_fahrenheit: 64.0,
                    avg_temp_celsius: 23.5,
                    avg_temp_fahrenheit: 74.3,
                    max_wind_mph: 9.2,
                    max_wind_kph: 14.8,
                    total_precipitation_mm: 0.0,
                    total_precipitation_in: 0.0,
                    avg_visibility_km: 10.0,
                    avg_visibility_miles: 6.0,
                    avg_humidity: 45,
                    chance_of_rain: 10,
                    chance_of_snow: 0,
                    condition: condition(),
                    uv_index: 8.0,
                },
                astrology: Astrology {
                    sunrise: "04:52 AM".into(),
                    sunset: "08:29 PM".into(),
                    moonrise: "01:35 PM".into(),
                    moonset: "01:31 AM".into(),
                    moon_phase: "Waxing Gibbous".into(),
                    moon_illumination: "64".into(),
                },
                hours: Vec::new(),
            }],
        },
    }
}
