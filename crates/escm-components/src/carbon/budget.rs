use crate::parameters::CarbonCycleParameters;
use escm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Atmospheric CO2 budget
///
/// A fixed airborne fraction of each year's net emissions accumulates in the
/// atmosphere:
///
/// $$C_{n+1} = C_n + E \cdot k_{ppm} \cdot f_{af}$$
///
/// Net negative emissions lower the concentration. The concentration is
/// cumulative over the whole run and is never reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonCycle {
    parameters: CarbonCycleParameters,
}

impl CarbonCycle {
    pub fn new() -> Self {
        Self::from_parameters(CarbonCycleParameters::default())
    }

    pub fn from_parameters(parameters: CarbonCycleParameters) -> Self {
        Self { parameters }
    }

    /// Concentration at the start of a run (ppm)
    pub fn initial_concentration(&self) -> FloatValue {
        self.parameters.initial_concentration
    }

    /// Concentration change from one year of net emissions (ppm)
    pub fn concentration_change(&self, net_emissions: FloatValue) -> FloatValue {
        net_emissions * self.parameters.ppm_per_gtco2 * self.parameters.airborne_fraction
    }

    /// Concentration after one year of net emissions (ppm)
    pub fn step(&self, concentration: FloatValue, net_emissions: FloatValue) -> FloatValue {
        concentration + self.concentration_change(net_emissions)
    }

    pub fn parameters(&self) -> &CarbonCycleParameters {
        &self.parameters
    }
}

impl Default for CarbonCycle {
    fn default() -> Self {
        Self::new()
    }
}
