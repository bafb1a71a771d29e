use std::fmt;
use std::fmt::Formatter;
use serde::{Deserialize, Serialize};
use crate::errors::CategoryError;

/// Weather categories as stored and presented by the application.
///
/// The integer projection given by `num_val` follows the WMO code scheme used by the
/// Open-Meteo API and is stored as-is, so it must never change.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(into = "i32", try_from = "i32")]
pub enum WeatherCategory {
    Error,
    ClearSky,
    FewClouds,
    ScatteredClouds,
    OvercastClouds,
    Mist,
    DrizzleRain,
    FreezingDrizzleRain,
    LightRain,
    ModerateRain,
    HeavyRain,
    LightFreezingRain,
    FreezingRain,
    LightSnow,
    ModerateSnow,
    HeavySnow,
    LightShowerRain,
    ShowerRain,
    LightShowerSnow,
    ShowerSnow,
    Thunderstorm,
    ThunderstormHail,
}

impl WeatherCategory {
    /// Returns the integer value representing the category
    pub fn num_val(&self) -> i32 {
        match self {
            WeatherCategory::Error               => -1,
            WeatherCategory::ClearSky            => 0,
            WeatherCategory::FewClouds           => 1,
            WeatherCategory::ScatteredClouds     => 2,
            WeatherCategory::OvercastClouds      => 3,
            WeatherCategory::Mist                => 45,
            WeatherCategory::DrizzleRain         => 53,
            WeatherCategory::FreezingDrizzleRain => 57,
            WeatherCategory::LightRain           => 61,
            WeatherCategory::ModerateRain        => 63,
            WeatherCategory::HeavyRain           => 65,
            WeatherCategory::LightFreezingRain   => 66,
            WeatherCategory::FreezingRain        => 67,
            WeatherCategory::LightSnow           => 71,
            WeatherCategory::ModerateSnow        => 73,
            WeatherCategory::HeavySnow           => 75,
            WeatherCategory::LightShowerRain     => 80,
            WeatherCategory::ShowerRain          => 81,
            WeatherCategory::LightShowerSnow     => 85,
            WeatherCategory::ShowerSnow          => 86,
            WeatherCategory::Thunderstorm        => 95,
            WeatherCategory::ThunderstormHail    => 96,
        }
    }

    /// Translates a raw weather code from Open-Meteo into a category.
    ///
    /// Open-Meteo reports WMO weather interpretation codes
    /// (see https://open-meteo.com/en/docs#weathervariables). Several codes differ only in
    /// intensity or in fog/rime variants, those are collapsed into one category.
    /// Any code not known is reported as `Error`.
    ///
    /// # Arguments
    ///
    /// * 'code' - the WMO weather code
    pub fn from_wmo_code(code: i32) -> WeatherCategory {
        match code {
            0 => WeatherCategory::ClearSky,
            1 => WeatherCategory::FewClouds,
            2 => WeatherCategory::ScatteredClouds,
            3 => WeatherCategory::OvercastClouds,
            45 | 48 => WeatherCategory::Mist,
            51 | 53 | 55 => WeatherCategory::DrizzleRain,
            56 | 57 => WeatherCategory::FreezingDrizzleRain,
            61 => WeatherCategory::LightRain,
            63 => WeatherCategory::ModerateRain,
            65 => WeatherCategory::HeavyRain,
            66 => WeatherCategory::LightFreezingRain,
            67 => WeatherCategory::FreezingRain,
            71 | 77 => WeatherCategory::LightSnow,
            73 => WeatherCategory::ModerateSnow,
            75 => WeatherCategory::HeavySnow,
            80 => WeatherCategory::LightShowerRain,
            81 | 82 => WeatherCategory::ShowerRain,
            85 => WeatherCategory::LightShowerSnow,
            86 => WeatherCategory::ShowerSnow,
            95 => WeatherCategory::Thunderstorm,
            96 | 99 => WeatherCategory::ThunderstormHail,
            _ => WeatherCategory::Error,
        }
    }
}

impl From<WeatherCategory> for i32 {
    fn from(category: WeatherCategory) -> Self {
        category.num_val()
    }
}

impl TryFrom<i32> for WeatherCategory {
    type Error = CategoryError;

    fn try_from(value: i32) -> Result<Self, CategoryError> {
        // from_wmo_code collapses variants, only exact projections are accepted here
        let category = WeatherCategory::from_wmo_code(value);
        if category.num_val() == value {
            Ok(category)
        } else {
            Err(CategoryError(value))
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            WeatherCategory::Error               => "Error",
            WeatherCategory::ClearSky            => "Clear sky",
            WeatherCategory::FewClouds           => "Few clouds",
            WeatherCategory::ScatteredClouds     => "Scattered clouds",
            WeatherCategory::OvercastClouds      => "Overcast clouds",
            WeatherCategory::Mist                => "Mist",
            WeatherCategory::DrizzleRain         => "Drizzle",
            WeatherCategory::FreezingDrizzleRain => "Freezing drizzle",
            WeatherCategory::LightRain           => "Light rain",
            WeatherCategory::ModerateRain        => "Moderate rain",
            WeatherCategory::HeavyRain           => "Heavy rain",
            WeatherCategory::LightFreezingRain   => "Light freezing rain",
            WeatherCategory::FreezingRain        => "Freezing rain",
            WeatherCategory::LightSnow           => "Light snow",
            WeatherCategory::ModerateSnow        => "Moderate snow",
            WeatherCategory::HeavySnow           => "Heavy snow",
            WeatherCategory::LightShowerRain     => "Light showers",
            WeatherCategory::ShowerRain          => "Showers",
            WeatherCategory::LightShowerSnow     => "Light snow showers",
            WeatherCategory::ShowerSnow          => "Snow showers",
            WeatherCategory::Thunderstorm        => "Thunderstorm",
            WeatherCategory::ThunderstormHail    => "Thunderstorm with hail",
        };

        write!(f, "{}", name)
    }
}
