use log::{info, warn};
use crate::models::forecast::{CurrentWeather, DayForecast, HourForecast};

/// Receives freshly processed forecasts for presentation
pub trait ViewUpdater {
    fn update_current_weather(&self, current: &CurrentWeather);
    fn update_week_forecasts(&self, days: &[DayForecast]);
    fn update_forecasts(&self, hours: &[HourForecast]);
    /// Shows a notice to the user, e.g. that a forecast couldn't be processed
    fn show_notice(&self, msg: &str);
}

/// View that writes forecasts to the log, and notices to stderr when visible
pub struct ConsoleView {
    visible: bool,
}

impl ConsoleView {
    /// Returns a new ConsoleView
    ///
    /// # Arguments
    ///
    /// * 'visible' - whether notices shall be shown to the user or only be logged
    pub fn new(visible: bool) -> ConsoleView {
        ConsoleView { visible }
    }
}

impl ViewUpdater for ConsoleView {
    fn update_current_weather(&self, current: &CurrentWeather) {
        info!("City {}: Current: {}", current.city_id, current);
    }

    fn update_week_forecasts(&self, days: &[DayForecast]) {
        for day in days {
            info!("City {}: Day: {}", day.city_id, day);
        }
    }

    fn update_forecasts(&self, hours: &[HourForecast]) {
        for hour in hours.iter().filter(|h| h.power > 0.0) {
            info!("City {}: Hour: {}", hour.city_id, hour);
        }
    }

    fn show_notice(&self, msg: &str) {
        warn!("{}", msg);
        if self.visible {
            eprintln!("{}", msg);
        }
    }
}
