use log::{debug, error, info};
use serde_json::Value;
use crate::errors::{ExtractError, ProcessError};
use crate::manager_open_meteo::{extract_current_weather, extract_hourly_forecast, extract_utc_offset, extract_week_forecast};
use crate::production::SolarPlant;
use crate::reconcile::reconcile;
use crate::store::ForecastStore;
use crate::view::ViewUpdater;

/// Notice shown when a response couldn't be turned into forecasts
pub const ERROR_CONVERT_TO_JSON: &str = "Unable to process the weather data received";

/// Notice shown when no response could be retrieved
pub const ERROR_FETCH_FORECAST: &str = "Unable to retrieve the weather forecast";

/// Processes Open-Meteo responses for one city into stored and presented forecasts
pub struct Processor<'a> {
    store: &'a dyn ForecastStore,
    view: &'a dyn ViewUpdater,
}

impl<'a> Processor<'a> {
    /// Returns a new Processor
    ///
    /// # Arguments
    ///
    /// * 'store' - where processed forecasts are persisted
    /// * 'view' - where processed forecasts are presented
    pub fn new(store: &'a dyn ForecastStore, view: &'a dyn ViewUpdater) -> Processor<'a> {
        Processor { store, view }
    }

    /// Converts a response into forecast records, reanalyzes the week, stores and presents them.
    ///
    /// If the response isn't json, or any section of it can't be extracted or holds no forecasts,
    /// the user is notified and nothing is stored. Previously stored data for the city is then
    /// left as is.
    ///
    /// Writes start only once everything is extracted and reanalyzed, hours first, then days
    /// and last current weather. A failed write skips the remaining writes and the view update.
    ///
    /// # Arguments
    ///
    /// * 'response' - the response body from Open-Meteo
    /// * 'city_id' - the city the response is for
    /// * 'plant' - the PV plant of the city
    pub fn process_success(&self, response: &str, city_id: i64, plant: &SolarPlant) -> Result<(), ProcessError> {
        let json: Value = serde_json::from_str(response).map_err(|e| {
            self.view.show_notice(ERROR_CONVERT_TO_JSON);
            ProcessError::Document(e)
        })?;

        let days = extract_week_forecast(json.get("daily"), city_id)
            .map_err(|e| self.extract_failed("daily", e))?;
        if days.is_empty() {
            return Err(self.empty("daily"));
        }

        let mut current = extract_current_weather(json.get("current_weather"), city_id)
            .map_err(|e| self.extract_failed("current_weather", e))?;
        current.sunrise = days[0].sunrise;
        current.sunset = days[0].sunset;
        current.timezone_seconds = extract_utc_offset(json.get("utc_offset_seconds"))
            .map_err(|e| self.extract_failed("utc_offset_seconds", e))?;

        let hours = extract_hourly_forecast(json.get("hourly"), city_id, plant)
            .map_err(|e| self.extract_failed("hourly", e))?;
        if hours.is_empty() {
            return Err(self.empty("hourly"));
        }
        debug!("City {}: extracted {} days and {} hours", city_id, days.len(), hours.len());

        let days = reconcile(days, &hours);

        self.store.replace_hourly_forecasts(city_id, &hours)?;
        self.store.replace_week_forecasts(city_id, &days)?;
        self.store.save_current_weather(&current)?;
        info!("City {}: forecasts updated", city_id);

        self.view.update_current_weather(&current);
        self.view.update_week_forecasts(&days);
        self.view.update_forecasts(&hours);

        Ok(())
    }

    /// Notifies the user that no forecast could be retrieved
    ///
    /// # Arguments
    ///
    /// * 'city_id' - the city the forecast was for
    /// * 'cause' - what went wrong
    pub fn process_failure(&self, city_id: i64, cause: &dyn std::fmt::Display) {
        error!("City {}: failed to retrieve forecast: {}", city_id, cause);
        self.view.show_notice(ERROR_FETCH_FORECAST);
    }

    /// Presents whatever is stored for the city from earlier runs, returns false if nothing was stored
    ///
    /// # Arguments
    ///
    /// * 'city_id' - the city to present stored forecasts for
    pub fn present_stored(&self, city_id: i64) -> Result<bool, ProcessError> {
        let current = self.store.load_current_weather(city_id)?;
        let days = self.store.load_week_forecasts(city_id)?;
        let hours = self.store.load_hourly_forecasts(city_id)?;

        if let Some(current) = &current {
            self.view.update_current_weather(current);
        }
        if let Some(days) = &days {
            self.view.update_week_forecasts(days);
        }
        if let Some(hours) = &hours {
            self.view.update_forecasts(hours);
        }

        Ok(current.is_some() || days.is_some() || hours.is_some())
    }

    fn extract_failed(&self, section: &'static str, source: ExtractError) -> ProcessError {
        self.view.show_notice(ERROR_CONVERT_TO_JSON);
        ProcessError::Extract { section, source }
    }

    fn empty(&self, section: &'static str) -> ProcessError {
        self.view.show_notice(ERROR_CONVERT_TO_JSON);
        ProcessError::Empty(section)
    }
}
