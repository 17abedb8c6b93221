//! Temperature response
//!
//! Global temperature is modelled as an anomaly that relaxes toward the
//! equilibrium implied by the current CO2 concentration. Non-CO2 warming
//! from methane is handled separately as an adder on the reported value.
//!
//! # Reported and carried temperature
//!
//! The methane adder is added to the reported temperature of a year but is
//! not part of the carried anomaly. Reducing methane therefore lowers that
//! year's reported figure without compounding into later years.

use crate::parameters::TemperatureParameters;
use escm_core::scenario::Scenario;
use escm_core::FloatValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureResponse {
    parameters: TemperatureParameters,
}

impl TemperatureResponse {
    pub fn new() -> Self {
        Self::from_parameters(TemperatureParameters::default())
    }

    pub fn from_parameters(parameters: TemperatureParameters) -> Self {
        Self { parameters }
    }

    /// Carried anomaly at the start of a run (degC)
    pub fn initial_anomaly(&self) -> FloatValue {
        self.parameters.initial_anomaly
    }

    /// Equilibrium anomaly for a CO2 concentration (degC)
    pub fn equilibrium(&self, concentration: FloatValue) -> FloatValue {
        self.parameters.climate_sensitivity * (concentration / self.parameters.conc_pi).log2()
    }

    /// Move the carried anomaly one year toward equilibrium
    pub fn relax(&self, anomaly: FloatValue, equilibrium: FloatValue) -> FloatValue {
        anomaly + self.parameters.relaxation_rate * (equilibrium - anomaly)
    }

    /// Carried anomaly after one year at the given concentration
    pub fn step(&self, anomaly: FloatValue, concentration: FloatValue) -> FloatValue {
        self.relax(anomaly, self.equilibrium(concentration))
    }

    /// Non-CO2 warming added to the reported temperature (degC)
    pub fn methane_adder(&self, scenario: &Scenario, strength: FloatValue) -> FloatValue {
        let p = &self.parameters;
        p.methane_warming
            * (1.0 - scenario.methane_reduction * p.methane_reduction_sensitivity * strength)
    }

    /// Temperature reported for a year (degC)
    pub fn reported(
        &self,
        anomaly: FloatValue,
        scenario: &Scenario,
        strength: FloatValue,
    ) -> FloatValue {
        anomaly + self.methane_adder(scenario, strength)
    }

    pub fn parameters(&self) -> &TemperatureParameters {
        &self.parameters
    }
}

impl Default for TemperatureResponse {
    fn default() -> Self {
        Self::new()
    }
}
