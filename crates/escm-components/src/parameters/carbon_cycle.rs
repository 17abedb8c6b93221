//! Carbon cycle parameters

use super::ensure_finite;
use escm_core::errors::{EscmError, EscmResult};
use escm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the atmospheric CO2 budget.
///
/// $$\Delta C = E \cdot k_{ppm} \cdot f_{af}$$
///
/// The share of emissions not retained in the atmosphere is taken up by
/// ocean and land sinks, which are not tracked separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarbonCycleParameters {
    /// Atmospheric CO2 concentration at the start of the run (ppm).
    /// Default: 370.0
    pub initial_concentration: FloatValue,

    /// Concentration change per GtCO2 added to the atmosphere (ppm / GtCO2).
    /// Default: 0.128
    pub ppm_per_gtco2: FloatValue,

    /// Fraction of emitted CO2 that remains in the atmosphere.
    /// Default: 0.45
    pub airborne_fraction: FloatValue,
}

impl Default for CarbonCycleParameters {
    fn default() -> Self {
        Self {
            initial_concentration: 370.0,
            ppm_per_gtco2: 0.128,
            airborne_fraction: 0.45,
        }
    }
}

impl CarbonCycleParameters {
    pub fn validate(&self) -> EscmResult<()> {
        ensure_finite([
            ("carbon_cycle.initial_concentration", self.initial_concentration),
            ("carbon_cycle.ppm_per_gtco2", self.ppm_per_gtco2),
            ("carbon_cycle.airborne_fraction", self.airborne_fraction),
        ])?;
        if self.initial_concentration <= 0.0 {
            return Err(EscmError::InvalidParameter(format!(
                "carbon_cycle.initial_concentration must be positive, got {}",
                self.initial_concentration
            )));
        }
        Ok(())
    }
}
