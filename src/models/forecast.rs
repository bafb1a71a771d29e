use std::fmt;
use std::fmt::Formatter;
use chrono::{DateTime, Utc};
use chrono::serde::{ts_milliseconds, ts_seconds};
use serde::{Deserialize, Serialize};
use crate::models::weather_category::WeatherCategory;

/// Forecast summary for one calendar day
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayForecast {
    pub city_id: i64,
    /// Local solar noon of the day
    #[serde(with = "ts_milliseconds")]
    pub forecast_time: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub sunrise: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub sunset: DateTime<Utc>,
    pub weather_category: WeatherCategory,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    /// Aggregated PV energy for the day, set when the week has been reanalyzed
    pub energy: Option<f64>,
}

/// Forecast for one hour
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HourForecast {
    pub city_id: i64,
    #[serde(with = "ts_milliseconds")]
    pub forecast_time: DateTime<Utc>,
    pub weather_category: WeatherCategory,
    pub temperature: Option<f64>,
    pub radiation: f64,
    pub power: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CurrentWeather {
    pub city_id: i64,
    #[serde(with = "ts_seconds")]
    pub timestamp: DateTime<Utc>,
    pub weather_category: WeatherCategory,
    pub temperature: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    #[serde(with = "ts_seconds")]
    pub sunrise: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub sunset: DateTime<Utc>,
    pub timezone_seconds: i32,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for DayForecast {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} -> Sun {} - {}, Temp {:>5.1} / {:>5.1}, Energy {:>6.2}: {}",
               self.forecast_time.format("%Y-%m-%d"),
               self.sunrise.format("%H:%M"), self.sunset.format("%H:%M"),
               self.temperature_min.unwrap_or(f64::NAN), self.temperature_max.unwrap_or(f64::NAN),
               self.energy.unwrap_or(0.0), self.weather_category)
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for HourForecast {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} -> Temp {:>5.1}, Radiation {:>6.1}, Power {:>7.1}: {}",
               self.forecast_time.format("%Y-%m-%d %H:%M"),
               self.temperature.unwrap_or(f64::NAN), self.radiation, self.power, self.weather_category)
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for CurrentWeather {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} -> Temp {:>5.1}, Wind {:>4.1} ({:>3.0}): {}",
               self.timestamp.format("%Y-%m-%d %H:%M"),
               self.temperature, self.wind_speed, self.wind_direction, self.weather_category)
    }
}
