use chrono::{DateTime, TimeDelta, Utc};
use crate::models::forecast::{DayForecast, HourForecast};
use crate::models::weather_category::WeatherCategory;

/// Share of daylight hours that must be sunny for a day category to be refined
const SUN_SHARE_THRESHOLD: f64 = 0.2;

/// Half width of the energy aggregation window centered on solar noon
const HALF_DAY: TimeDelta = TimeDelta::hours(12);

/// Scale from summed hourly power to the day energy aggregate
const ENERGY_SCALE: f64 = 1000.0;

/// Reanalyzes day forecasts against the hourly forecasts for the same location.
///
/// Daily summary categories from the provider tend to report the worst weather of the day,
/// so a day that is only partly overcast or rainy shows up as entirely so. For days with such
/// a generic category the share of sunny hours between sunrise and sunset is computed, and if
/// it exceeds 20% the category is replaced with its showery/scattered counterpart.
///
/// Independent of that, every day gets its energy aggregate recomputed from the hourly power
/// values within 12 hours on either side of the day's solar noon.
///
/// # Arguments
///
/// * 'days' - day forecasts, returned in the same order
/// * 'hours' - hour forecasts covering at least the same time span as the days
pub fn reconcile(mut days: Vec<DayForecast>, hours: &[HourForecast]) -> Vec<DayForecast> {
    for day in days.iter_mut() {
        refine_weather_category(day, hours);
        day.energy = Some(aggregate_energy(day.forecast_time, hours));
    }

    days
}

/// Replaces a generic day category with a more specific one if enough daylight hours are sunny
///
/// # Arguments
///
/// * 'day' - the day forecast to refine
/// * 'hours' - all hour forecasts
fn refine_weather_category(day: &mut DayForecast, hours: &[HourForecast]) {
    let Some(refined) = refined_category(day.weather_category) else {
        return;
    };

    let (total_count, sun_count) = hours
        .iter()
        .filter(|h| h.forecast_time >= day.sunrise && h.forecast_time <= day.sunset)
        .fold((0usize, 0usize), |(total, sun), h| {
            (total + 1, sun + is_sunny(h.weather_category) as usize)
        });

    if total_count > 0 && sun_count as f64 / total_count as f64 > SUN_SHARE_THRESHOLD {
        day.weather_category = refined;
    }
}

/// Sums hourly power in the half-open window [noon - 12h, noon + 12h) and scales it.
/// The window is clamped to the representable range of instants.
///
/// # Arguments
///
/// * 'noon' - solar noon of the day
/// * 'hours' - all hour forecasts
fn aggregate_energy(noon: DateTime<Utc>, hours: &[HourForecast]) -> f64 {
    let start = noon.checked_sub_signed(HALF_DAY).unwrap_or(DateTime::<Utc>::MIN_UTC);
    let end = noon.checked_add_signed(HALF_DAY).unwrap_or(DateTime::<Utc>::MAX_UTC);

    let total_power = hours
        .iter()
        .filter(|h| h.forecast_time >= start && h.forecast_time < end)
        .map(|h| h.power)
        .sum::<f64>();

    total_power / ENERGY_SCALE
}

/// Returns the specific category a generic day category is refined into, if any.
/// No refined category is itself refinable, which keeps reanalysis idempotent.
///
/// # Arguments
///
/// * 'category' - the day category
fn refined_category(category: WeatherCategory) -> Option<WeatherCategory> {
    use WeatherCategory::*;

    match category {
        OvercastClouds | Mist => Some(ScatteredClouds),
        DrizzleRain | FreezingDrizzleRain | LightRain | LightFreezingRain => Some(LightShowerRain),
        ModerateRain | HeavyRain | FreezingRain => Some(ShowerRain),
        LightSnow => Some(LightShowerSnow),
        ModerateSnow | HeavySnow => Some(ShowerSnow),
        _ => None,
    }
}

fn is_sunny(category: WeatherCategory) -> bool {
    matches!(category,
        WeatherCategory::ClearSky | WeatherCategory::FewClouds | WeatherCategory::ScatteredClouds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: i64 = 3_600_000;

    fn at_ms(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    fn day(category: WeatherCategory, noon_ms: i64, sunrise_s: i64, sunset_s: i64) -> DayForecast {
        DayForecast {
            city_id: 1,
            forecast_time: at_ms(noon_ms),
            sunrise: DateTime::from_timestamp(sunrise_s, 0).unwrap(),
            sunset: DateTime::from_timestamp(sunset_s, 0).unwrap(),
            weather_category: category,
            temperature_max: Some(15.0),
            temperature_min: Some(5.0),
            energy: None,
        }
    }

    fn hour(ms: i64, category: WeatherCategory, power: f64) -> HourForecast {
        HourForecast {
            city_id: 1,
            forecast_time: at_ms(ms),
            weather_category: category,
            temperature: Some(10.0),
            radiation: 0.0,
            power,
        }
    }

    /// Five hourly samples between sunrise (0 s) and sunset (14400 s), the first `sunny` clear
    fn five_hours(sunny: usize) -> Vec<HourForecast> {
        (0..5)
            .map(|i| {
                let category = if i < sunny { WeatherCategory::ClearSky } else { WeatherCategory::OvercastClouds };
                hour(i as i64 * HOUR_MS, category, 0.0)
            })
            .collect()
    }

    #[test]
    fn test_overcast_day_with_sunny_hours_becomes_scattered() {
        let hours = (0..10)
            .map(|i| {
                let category = if i % 3 == 0 && i < 9 { WeatherCategory::ClearSky } else { WeatherCategory::OvercastClouds };
                hour(i * HOUR_MS, category, 0.0)
            })
            .collect::<Vec<HourForecast>>();
        assert_eq!(hours.iter().filter(|h| h.weather_category == WeatherCategory::ClearSky).count(), 3);

        let days = reconcile(vec![day(WeatherCategory::OvercastClouds, 5 * HOUR_MS, 0, 36000)], &hours);

        assert_eq!(days[0].weather_category, WeatherCategory::ScatteredClouds);
    }

    #[test]
    fn test_share_exactly_at_threshold_is_not_refined() {
        let days = reconcile(vec![day(WeatherCategory::LightRain, 2 * HOUR_MS, 0, 14400)], &five_hours(1));
        assert_eq!(days[0].weather_category, WeatherCategory::LightRain);
    }

    #[test]
    fn test_share_above_threshold_is_refined() {
        let days = reconcile(vec![day(WeatherCategory::LightRain, 2 * HOUR_MS, 0, 14400)], &five_hours(2));
        assert_eq!(days[0].weather_category, WeatherCategory::LightShowerRain);
    }

    #[test]
    fn test_refinement_table() {
        use WeatherCategory::*;

        let cases = [
            (Mist, ScatteredClouds),
            (DrizzleRain, LightShowerRain),
            (FreezingDrizzleRain, LightShowerRain),
            (LightFreezingRain, LightShowerRain),
            (ModerateRain, ShowerRain),
            (HeavyRain, ShowerRain),
            (FreezingRain, ShowerRain),
            (LightSnow, LightShowerSnow),
            (ModerateSnow, ShowerSnow),
            (HeavySnow, ShowerSnow),
        ];
        for (generic, specific) in cases {
            let days = reconcile(vec![day(generic, 2 * HOUR_MS, 0, 14400)], &five_hours(5));
            assert_eq!(days[0].weather_category, specific, "refining {:?}", generic);
        }
    }

    #[test]
    fn test_non_generic_category_is_never_refined() {
        use WeatherCategory::*;

        for category in [ClearSky, FewClouds, ScatteredClouds, ShowerRain, Thunderstorm, Error] {
            let days = reconcile(vec![day(category, 2 * HOUR_MS, 0, 14400)], &five_hours(5));
            assert_eq!(days[0].weather_category, category);
        }
    }

    #[test]
    fn test_daylight_window_is_inclusive() {
        // Sunny hours exactly at sunrise and sunset, three overcast hours in between
        let hours = vec![
            hour(-HOUR_MS, WeatherCategory::ClearSky, 0.0),
            hour(0, WeatherCategory::ClearSky, 0.0),
            hour(HOUR_MS, WeatherCategory::OvercastClouds, 0.0),
            hour(2 * HOUR_MS, WeatherCategory::OvercastClouds, 0.0),
            hour(3 * HOUR_MS, WeatherCategory::OvercastClouds, 0.0),
            hour(4 * HOUR_MS, WeatherCategory::FewClouds, 0.0),
            hour(5 * HOUR_MS, WeatherCategory::ClearSky, 0.0),
        ];

        // 2 sunny of 5 within [0, 4h]
        let days = reconcile(vec![day(WeatherCategory::OvercastClouds, 2 * HOUR_MS, 0, 14400)], &hours);
        assert_eq!(days[0].weather_category, WeatherCategory::ScatteredClouds);

        // Without the boundary hours only 0 of 3 would be sunny
        let inner = hours[2..5].to_vec();
        let days = reconcile(vec![day(WeatherCategory::OvercastClouds, 2 * HOUR_MS, 0, 14400)], &inner);
        assert_eq!(days[0].weather_category, WeatherCategory::OvercastClouds);
    }

    #[test]
    fn test_energy_is_scaled_sum() {
        let noon = 12 * HOUR_MS;
        let hours = vec![
            hour(noon - HOUR_MS, WeatherCategory::ClearSky, 500.0),
            hour(noon, WeatherCategory::ClearSky, 1000.0),
            hour(noon + HOUR_MS, WeatherCategory::ClearSky, 1500.0),
        ];

        let days = reconcile(vec![day(WeatherCategory::ClearSky, noon, 6 * 3600, 18 * 3600)], &hours);

        assert_eq!(days[0].energy, Some(3.0));
    }

    #[test]
    fn test_energy_window_is_half_open() {
        let noon = 36 * HOUR_MS;
        let hours = vec![
            hour(noon - 12 * HOUR_MS - 1, WeatherCategory::ClearSky, 100.0),
            hour(noon - 12 * HOUR_MS, WeatherCategory::ClearSky, 2000.0),
            hour(noon + 12 * HOUR_MS - 1, WeatherCategory::ClearSky, 1000.0),
            hour(noon + 12 * HOUR_MS, WeatherCategory::ClearSky, 400.0),
        ];

        let days = reconcile(vec![day(WeatherCategory::ClearSky, noon, 0, 0)], &hours);

        assert_eq!(days[0].energy, Some(3.0));
    }

    #[test]
    fn test_energy_window_at_range_limits() {
        let late = DateTime::<Utc>::MAX_UTC;
        let early = DateTime::<Utc>::MIN_UTC;
        let mut days = vec![
            day(WeatherCategory::ClearSky, 0, 0, 0),
            day(WeatherCategory::ClearSky, 0, 0, 0),
        ];
        days[0].forecast_time = late;
        days[1].forecast_time = early;

        let mut hours = vec![
            hour(0, WeatherCategory::ClearSky, 1000.0),
            hour(0, WeatherCategory::ClearSky, 3000.0),
        ];
        hours[0].forecast_time = late - TimeDelta::hours(1);
        hours[1].forecast_time = early;

        let days = reconcile(days, &hours);

        assert_eq!(days[0].energy, Some(1.0));
        assert_eq!(days[1].energy, Some(3.0));
    }

    #[test]
    fn test_energy_per_day() {
        let hours = (0..48)
            .map(|i| hour(i * HOUR_MS, WeatherCategory::ClearSky, if i < 24 { 1000.0 } else { 500.0 }))
            .collect::<Vec<HourForecast>>();
        let days = vec![
            day(WeatherCategory::ClearSky, 12 * HOUR_MS, 6 * 3600, 18 * 3600),
            day(WeatherCategory::ClearSky, 36 * HOUR_MS, 30 * 3600, 42 * 3600),
        ];

        let days = reconcile(days, &hours);

        assert_eq!(days[0].energy, Some(24.0));
        assert_eq!(days[1].energy, Some(12.0));
    }

    #[test]
    fn test_empty_hours() {
        let days = vec![
            day(WeatherCategory::HeavySnow, 12 * HOUR_MS, 6 * 3600, 18 * 3600),
            day(WeatherCategory::Mist, 36 * HOUR_MS, 30 * 3600, 42 * 3600),
        ];

        let days = reconcile(days, &[]);

        assert_eq!(days[0].weather_category, WeatherCategory::HeavySnow);
        assert_eq!(days[1].weather_category, WeatherCategory::Mist);
        assert!(days.iter().all(|d| d.energy == Some(0.0)));
    }

    #[test]
    fn test_energy_is_overwritten() {
        let mut stale = day(WeatherCategory::ClearSky, 12 * HOUR_MS, 6 * 3600, 18 * 3600);
        stale.energy = Some(42.0);

        let days = reconcile(vec![stale], &[]);

        assert_eq!(days[0].energy, Some(0.0));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let hours = (0..24)
            .map(|i| {
                let category = if i % 2 == 0 { WeatherCategory::ClearSky } else { WeatherCategory::ModerateRain };
                hour(i * HOUR_MS, category, 250.0)
            })
            .collect::<Vec<HourForecast>>();
        let days = vec![day(WeatherCategory::ModerateRain, 12 * HOUR_MS, 6 * 3600, 18 * 3600)];

        let once = reconcile(days, &hours);
        let twice = reconcile(once.clone(), &hours);

        assert_eq!(once[0].weather_category, WeatherCategory::ShowerRain);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_and_cardinality_preserved() {
        let days = (0..7)
            .map(|d| day(WeatherCategory::ClearSky, (d * 24 + 12) * HOUR_MS, 0, 0))
            .collect::<Vec<DayForecast>>();
        let expected = days.iter().map(|d| d.forecast_time).collect::<Vec<DateTime<Utc>>>();

        let days = reconcile(days, &[]);

        assert_eq!(days.iter().map(|d| d.forecast_time).collect::<Vec<DateTime<Utc>>>(), expected);
    }
}
