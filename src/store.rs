use std::fs;
use std::path::{Path, PathBuf};
use glob::{glob, Pattern};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::errors::StoreError;
use crate::models::forecast::{CurrentWeather, DayForecast, HourForecast};

const WEEK_SUFFIX: &str = "week";
const HOURLY_SUFFIX: &str = "hourly";
const CURRENT_SUFFIX: &str = "current";

/// Persistence of forecast records per city.
///
/// Every write replaces whatever was stored before for the city and record set.
pub trait ForecastStore {
    fn replace_week_forecasts(&self, city_id: i64, days: &[DayForecast]) -> Result<(), StoreError>;
    fn replace_hourly_forecasts(&self, city_id: i64, hours: &[HourForecast]) -> Result<(), StoreError>;
    fn save_current_weather(&self, current: &CurrentWeather) -> Result<(), StoreError>;
    fn load_week_forecasts(&self, city_id: i64) -> Result<Option<Vec<DayForecast>>, StoreError>;
    fn load_hourly_forecasts(&self, city_id: i64) -> Result<Option<Vec<HourForecast>>, StoreError>;
    fn load_current_weather(&self, city_id: i64) -> Result<Option<CurrentWeather>, StoreError>;
    /// Removes stored data for every city not in `keep`, returns the ids of removed cities
    fn prune_cities(&self, keep: &[i64]) -> Result<Vec<i64>, StoreError>;
}

/// Store keeping one json file per city and record set in a directory
pub struct JsonFileStore {
    store_dir: PathBuf,
}

impl JsonFileStore {
    /// Returns a new JsonFileStore, the directory is created if missing
    ///
    /// # Arguments
    ///
    /// * 'store_dir' - directory to keep the files in
    pub fn new(store_dir: &str) -> Result<JsonFileStore, StoreError> {
        let store_dir = PathBuf::from(store_dir);
        fs::create_dir_all(&store_dir)?;

        Ok(JsonFileStore { store_dir })
    }

    fn file_path(&self, city_id: i64, suffix: &str) -> PathBuf {
        self.store_dir.join(format!("{}_{}.json", city_id, suffix))
    }

    /// Writes through a temporary file that is then renamed into place
    fn write<T: Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, StoreError> {
        if path.exists() {
            let json = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&json)?))
        } else {
            Ok(None)
        }
    }
}

impl ForecastStore for JsonFileStore {
    fn replace_week_forecasts(&self, city_id: i64, days: &[DayForecast]) -> Result<(), StoreError> {
        self.write(&self.file_path(city_id, WEEK_SUFFIX), days)
    }

    fn replace_hourly_forecasts(&self, city_id: i64, hours: &[HourForecast]) -> Result<(), StoreError> {
        self.write(&self.file_path(city_id, HOURLY_SUFFIX), hours)
    }

    fn save_current_weather(&self, current: &CurrentWeather) -> Result<(), StoreError> {
        self.write(&self.file_path(current.city_id, CURRENT_SUFFIX), current)
    }

    fn load_week_forecasts(&self, city_id: i64) -> Result<Option<Vec<DayForecast>>, StoreError> {
        self.read(&self.file_path(city_id, WEEK_SUFFIX))
    }

    fn load_hourly_forecasts(&self, city_id: i64) -> Result<Option<Vec<HourForecast>>, StoreError> {
        self.read(&self.file_path(city_id, HOURLY_SUFFIX))
    }

    fn load_current_weather(&self, city_id: i64) -> Result<Option<CurrentWeather>, StoreError> {
        self.read(&self.file_path(city_id, CURRENT_SUFFIX))
    }

    fn prune_cities(&self, keep: &[i64]) -> Result<Vec<i64>, StoreError> {
        let mut removed: Vec<i64> = Vec::new();

        let dir = Pattern::escape(&self.store_dir.to_string_lossy());
        let pattern = format!("{}/*_*.json", dir);
        for entry in glob(&pattern)? {
            let path = entry?;
            let city_id = path.file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.split('_').next())
                .and_then(|id| id.parse::<i64>().ok());

            if let Some(city_id) = city_id {
                if !keep.contains(&city_id) {
                    fs::remove_file(&path)?;
                    if !removed.contains(&city_id) {
                        removed.push(city_id);
                    }
                }
            }
        }
        removed.sort();

        Ok(removed)
    }
}
