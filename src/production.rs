use serde::Deserialize;

/// Parameters of a PV plant used to estimate power output from forecasted radiation
///
/// The model is flat: the forecasted shortwave radiation is taken as the
/// irradiance on the cells, reduced by cell and inverter efficiencies and capped by
/// what the inverter can deliver.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SolarPlant {
    /// Total cell area in square meters
    pub cells_area: f64,
    /// Cell efficiency in percent
    pub cells_efficiency: f64,
    /// Inverter efficiency in percent
    pub inverter_efficiency: f64,
    /// Max AC output in watts
    pub inverter_power_limit: f64,
}

impl SolarPlant {
    /// Returns true if all parameters are within physically meaningful ranges
    pub fn is_valid(&self) -> bool {
        self.cells_area >= 0.0
            && (0.0..=100.0).contains(&self.cells_efficiency)
            && (0.0..=100.0).contains(&self.inverter_efficiency)
            && self.inverter_power_limit >= 0.0
    }

    /// Returns the estimated mean power output in watts for the hour
    ///
    /// # Arguments
    ///
    /// * 'radiation' - forecasted shortwave radiation in W/m2, None if the provider had no value
    pub fn get_power(&self, radiation: Option<f64>) -> f64 {
        let radiation = match radiation {
            Some(r) if r.is_finite() => r.max(0.0),
            _ => return 0.0,
        };

        let dc_power = radiation * self.cells_area * self.cells_efficiency / 100.0;
        let ac_power = dc_power * self.inverter_efficiency / 100.0;

        ac_power.min(self.inverter_power_limit)
    }
}
