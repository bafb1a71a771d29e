use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use serde_json::Value;
use crate::errors::ExtractError;
use crate::models::forecast::{CurrentWeather, DayForecast, HourForecast};
use crate::models::open_meteo::{CurrentSection, DailySection, HourlySection};
use crate::models::weather_category::WeatherCategory;
use crate::production::SolarPlant;

/// Offset from the start of a day as reported by Open-Meteo to its solar noon
const NOON_OFFSET: TimeDelta = TimeDelta::hours(12);

/// Extracts day forecasts from the `daily` section of an Open-Meteo response.
///
/// Open-Meteo reports each day by its local midnight, the forecast time of the returned
/// records is moved to noon so that it can be used as the center of the day.
///
/// # Arguments
///
/// * 'section' - the `daily` section, None if the response didn't have one
/// * 'city_id' - id of the city the forecast belongs to
pub fn extract_week_forecast(section: Option<&Value>, city_id: i64) -> Result<Vec<DayForecast>, ExtractError> {
    let section = section.ok_or(ExtractError::MissingSection("daily"))?;
    let daily = DailySection::deserialize(section)?;

    let expected = daily.time.len();
    check_len("weathercode", daily.weathercode.len(), expected)?;
    check_len("temperature_2m_max", daily.temperature_2m_max.len(), expected)?;
    check_len("temperature_2m_min", daily.temperature_2m_min.len(), expected)?;
    check_len("sunrise", daily.sunrise.len(), expected)?;
    check_len("sunset", daily.sunset.len(), expected)?;

    let mut result: Vec<DayForecast> = Vec::with_capacity(expected);
    for i in 0..expected {
        result.push(DayForecast {
            city_id,
            forecast_time: from_unix(daily.time[i])?
                .checked_add_signed(NOON_OFFSET)
                .ok_or(ExtractError::Timestamp(daily.time[i]))?,
            sunrise: from_unix(daily.sunrise[i])?,
            sunset: from_unix(daily.sunset[i])?,
            weather_category: to_category(daily.weathercode[i]),
            temperature_max: daily.temperature_2m_max[i],
            temperature_min: daily.temperature_2m_min[i],
            energy: None,
        });
    }

    Ok(result)
}

/// Extracts hour forecasts from the `hourly` section of an Open-Meteo response.
///
/// The power of each hour is estimated from the forecasted shortwave radiation given the
/// plant of the city.
///
/// # Arguments
///
/// * 'section' - the `hourly` section, None if the response didn't have one
/// * 'city_id' - id of the city the forecast belongs to
/// * 'plant' - the PV plant of the city
pub fn extract_hourly_forecast(section: Option<&Value>, city_id: i64, plant: &SolarPlant) -> Result<Vec<HourForecast>, ExtractError> {
    let section = section.ok_or(ExtractError::MissingSection("hourly"))?;
    let hourly = HourlySection::deserialize(section)?;

    let expected = hourly.time.len();
    check_len("weathercode", hourly.weathercode.len(), expected)?;
    check_len("temperature_2m", hourly.temperature_2m.len(), expected)?;
    check_len("shortwave_radiation", hourly.shortwave_radiation.len(), expected)?;

    let mut result: Vec<HourForecast> = Vec::with_capacity(expected);
    for i in 0..expected {
        let radiation = hourly.shortwave_radiation[i];
        result.push(HourForecast {
            city_id,
            forecast_time: from_unix(hourly.time[i])?,
            weather_category: to_category(hourly.weathercode[i]),
            temperature: hourly.temperature_2m[i],
            radiation: radiation.unwrap_or(0.0),
            power: plant.get_power(radiation),
        });
    }

    Ok(result)
}

/// Extracts current conditions from the `current_weather` section of an Open-Meteo response.
///
/// Sunrise, sunset and time zone are not part of the section, they are left at the epoch
/// and zero respectively for the caller to fill in.
///
/// # Arguments
///
/// * 'section' - the `current_weather` section, None if the response didn't have one
/// * 'city_id' - id of the city the conditions belong to
pub fn extract_current_weather(section: Option<&Value>, city_id: i64) -> Result<CurrentWeather, ExtractError> {
    let section = section.ok_or(ExtractError::MissingSection("current_weather"))?;
    let current = CurrentSection::deserialize(section)?;

    Ok(CurrentWeather {
        city_id,
        timestamp: from_unix(current.time)?,
        weather_category: WeatherCategory::from_wmo_code(current.weathercode),
        temperature: current.temperature,
        wind_speed: current.windspeed,
        wind_direction: current.winddirection,
        sunrise: DateTime::default(),
        sunset: DateTime::default(),
        timezone_seconds: 0,
    })
}

/// Extracts the offset in seconds from UTC to the local time of the forecast location
///
/// # Arguments
///
/// * 'value' - the `utc_offset_seconds` value, None if the response didn't have one
pub fn extract_utc_offset(value: Option<&Value>) -> Result<i32, ExtractError> {
    let value = value.ok_or(ExtractError::MissingSection("utc_offset_seconds"))?;

    Ok(i32::deserialize(value)?)
}

fn check_len(field: &'static str, found: usize, expected: usize) -> Result<(), ExtractError> {
    if found != expected {
        Err(ExtractError::LengthMismatch { field, found, expected })
    } else {
        Ok(())
    }
}

fn from_unix(seconds: i64) -> Result<DateTime<Utc>, ExtractError> {
    DateTime::from_timestamp(seconds, 0).ok_or(ExtractError::Timestamp(seconds))
}

fn to_category(code: Option<i32>) -> WeatherCategory {
    code.map_or(WeatherCategory::Error, WeatherCategory::from_wmo_code)
}
