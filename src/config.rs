use std::collections::HashSet;
use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::production::SolarPlant;

#[derive(Deserialize)]
pub struct City {
    pub city_id: i64,
    pub name: String,
    pub lat: f64,
    pub long: f64,
    pub response_file: String,
    pub plant: SolarPlant,
}

#[derive(Deserialize)]
pub struct Files {
    pub store_dir: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
    #[serde(default)]
    pub show_notices: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub general: General,
    pub files: Files,
    pub cities: Vec<City>,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses and validates a configuration document
///
/// # Arguments
///
/// * 'toml' - the configuration as a toml document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    let mut seen: HashSet<i64> = HashSet::new();
    for city in &config.cities {
        if !seen.insert(city.city_id) {
            return Err(ConfigError::Invalid(format!("duplicate city_id {}", city.city_id)));
        }
        if !city.plant.is_valid() {
            return Err(ConfigError::Invalid(format!("invalid plant parameters for {}", city.name)));
        }
    }

    Ok(config)
}
