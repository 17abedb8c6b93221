//! Temperature response parameters

use super::ensure_finite;
use escm_core::errors::{EscmError, EscmResult};
use escm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the temperature response to CO2.
///
/// The equilibrium anomaly follows the logarithmic forcing relationship
///
/// $$T_{eq} = S \log_2\left(\frac{C}{C_{pi}}\right)$$
///
/// and the carried anomaly relaxes toward it each year
///
/// $$T_{n+1} = T_n + k (T_{eq} - T_n)$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemperatureParameters {
    /// Temperature anomaly at the start of the run (degC).
    /// Default: 0.85
    pub initial_anomaly: FloatValue,

    /// Equilibrium warming per doubling of CO2 (degC).
    /// Default: 3.0
    pub climate_sensitivity: FloatValue,

    /// Pre-industrial CO2 concentration (ppm).
    /// Default: 280.0
    pub conc_pi: FloatValue,

    /// Fraction of the gap to equilibrium closed each year.
    ///
    /// Represents the delay from ocean heat uptake.
    /// Default: 0.05
    pub relaxation_rate: FloatValue,

    /// Warming from methane and other non-CO2 gases without policy (degC).
    ///
    /// Only added to the reported temperature, never to the carried anomaly.
    /// Default: 0.5
    pub methane_warming: FloatValue,

    /// Fractional reduction in methane warming per unit methane reduction lever.
    /// Default: 0.01
    pub methane_reduction_sensitivity: FloatValue,
}

impl Default for TemperatureParameters {
    fn default() -> Self {
        Self {
            initial_anomaly: 0.85,
            climate_sensitivity: 3.0,
            conc_pi: 280.0,
            relaxation_rate: 0.05,
            methane_warming: 0.5,
            methane_reduction_sensitivity: 0.01,
        }
    }
}

impl TemperatureParameters {
    pub fn validate(&self) -> EscmResult<()> {
        ensure_finite([
            ("temperature.initial_anomaly", self.initial_anomaly),
            ("temperature.climate_sensitivity", self.climate_sensitivity),
            ("temperature.conc_pi", self.conc_pi),
            ("temperature.relaxation_rate", self.relaxation_rate),
            ("temperature.methane_warming", self.methane_warming),
            (
                "temperature.methane_reduction_sensitivity",
                self.methane_reduction_sensitivity,
            ),
        ])?;
        if self.conc_pi <= 0.0 {
            return Err(EscmError::InvalidParameter(format!(
                "temperature.conc_pi must be positive, got {}",
                self.conc_pi
            )));
        }
        Ok(())
    }
}
