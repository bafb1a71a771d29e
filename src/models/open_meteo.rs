use serde::Deserialize;

/// The `daily` section of an Open-Meteo response requested with `timeformat=unixtime`
#[derive(Deserialize)]
pub struct DailySection {
    pub time: Vec<i64>,
    pub weathercode: Vec<Option<i32>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub sunrise: Vec<i64>,
    pub sunset: Vec<i64>,
}

/// The `hourly` section of an Open-Meteo response
#[derive(Deserialize)]
pub struct HourlySection {
    pub time: Vec<i64>,
    pub weathercode: Vec<Option<i32>>,
    pub temperature_2m: Vec<Option<f64>>,
    pub shortwave_radiation: Vec<Option<f64>>,
}

/// The `current_weather` section of an Open-Meteo response
#[derive(Deserialize)]
pub struct CurrentSection {
    pub time: i64,
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i32,
}
