use std::env;
use std::fs;
use anyhow::Result;
use log::{error, info, warn};
use crate::initialization::init;
use crate::processing::Processor;
use crate::store::ForecastStore;

mod config;
mod errors;
mod initialization;
mod logging;
mod manager_open_meteo;
mod models;
mod processing;
mod production;
mod reconcile;
mod store;
mod view;

fn main() -> Result<()> {
    let (config, mgr) = init(env::args().nth(1))?;

    let processor = Processor::new(&mgr.store, &mgr.view);
    let mut failed: usize = 0;

    for city in &config.cities {
        info!("Processing forecast for {} ({:.4}, {:.4})", city.name, city.lat, city.long);

        let response = match fs::read_to_string(&city.response_file) {
            Ok(r) => r,
            Err(e) => {
                processor.process_failure(city.city_id, &e);
                failed += 1;
                present_stored(&processor, city.city_id, &city.name);
                continue;
            }
        };

        if let Err(e) = processor.process_success(&response, city.city_id, &city.plant) {
            error!("{}: {}", city.name, e);
            failed += 1;
            present_stored(&processor, city.city_id, &city.name);
        }
    }

    let keep = config.cities.iter().map(|c| c.city_id).collect::<Vec<i64>>();
    let removed = mgr.store.prune_cities(&keep)?;
    if !removed.is_empty() {
        info!("Removed stored forecasts for cities {:?}", removed);
    }

    if failed > 0 {
        warn!("{} of {} cities could not be updated", failed, config.cities.len());
    }

    Ok(())
}

/// Falls back on forecasts stored from earlier runs when a city couldn't be updated
///
/// # Arguments
///
/// * 'processor' - the processor to present through
/// * 'city_id' - id of the city
/// * 'name' - name of the city
fn present_stored(processor: &Processor, city_id: i64, name: &str) {
    match processor.present_stored(city_id) {
        Ok(true) => info!("{}: showing previously stored forecasts", name),
        Ok(false) => warn!("{}: no stored forecasts to show", name),
        Err(e) => error!("{}: {}", name, e),
    }
}
