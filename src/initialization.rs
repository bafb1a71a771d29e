use std::env;
use log::info;
use crate::config::{load_config, Config};
use crate::errors::InitError;
use crate::logging::setup_logger;
use crate::store::JsonFileStore;
use crate::view::ConsoleView;

/// Default configuration file if neither argument nor CONFIG_PATH is given
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Collaborators that processing of forecasts is done with
pub struct Mgr {
    pub store: JsonFileStore,
    pub view: ConsoleView,
}

/// Loads configuration, sets up logging and returns the config together with store and view
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file, falls back to CONFIG_PATH or config.toml
pub fn init(config_path: Option<String>) -> Result<(Config, Mgr), InitError> {
    let config_path = config_path
        .or_else(|| env::var("CONFIG_PATH").ok())
        .unwrap_or(DEFAULT_CONFIG_PATH.to_string());

    let config = load_config(&config_path)?;
    setup_logger(&config.general)?;

    // Print version
    info!("solforecast version: {}", env!("CARGO_PKG_VERSION"));
    info!("Using configuration {}", config_path);

    let store = JsonFileStore::new(&config.files.store_dir)?;
    let view = ConsoleView::new(config.general.show_notices);

    Ok((config, Mgr { store, view }))
}
