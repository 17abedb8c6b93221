//! Model configuration
//!
//! [`ModelParameters`] gathers the simulation horizon and the parameters of
//! every component. Defaults reproduce the calibrated model, and a TOML file
//! only needs to contain the values it overrides:
//!
//! ```toml
//! end_year = 2150
//!
//! [temperature]
//! climate_sensitivity = 4.0
//! ```

use escm_components::parameters::{
    CarbonCycleParameters, EnergySystemParameters, LandUseParameters, PolicyCouplingParameters,
    PolicyRampParameters, TemperatureParameters,
};
use escm_core::errors::{EscmError, EscmResult};
use escm_core::Year;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelParameters {
    /// First simulated year.
    /// Default: 2000
    pub start_year: Year,

    /// Last simulated year (inclusive).
    /// Default: 2100
    pub end_year: Year,

    pub policy_ramp: PolicyRampParameters,
    pub policy_coupling: PolicyCouplingParameters,
    pub energy_system: EnergySystemParameters,
    pub land_use: LandUseParameters,
    pub carbon_cycle: CarbonCycleParameters,
    pub temperature: TemperatureParameters,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            start_year: 2000,
            end_year: 2100,
            policy_ramp: PolicyRampParameters::default(),
            policy_coupling: PolicyCouplingParameters::default(),
            energy_system: EnergySystemParameters::default(),
            land_use: LandUseParameters::default(),
            carbon_cycle: CarbonCycleParameters::default(),
            temperature: TemperatureParameters::default(),
        }
    }
}

impl ModelParameters {
    /// Parse parameters from a TOML string
    ///
    /// The parameters are validated before being returned.
    pub fn from_toml_str(contents: &str) -> EscmResult<Self> {
        let parameters: Self =
            toml::from_str(contents).map_err(|e| EscmError::Parse(e.to_string()))?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Read parameters from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> EscmResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> EscmResult<String> {
        toml::to_string(self).map_err(|e| EscmError::Error(e.to_string()))
    }

    /// Check that the configuration describes a runnable model
    pub fn validate(&self) -> EscmResult<()> {
        if self.start_year > self.end_year {
            return Err(EscmError::InvalidYearRange {
                start: self.start_year,
                end: self.end_year,
            });
        }
        self.policy_ramp.validate()?;
        self.policy_coupling.validate()?;
        self.energy_system.validate()?;
        self.land_use.validate()?;
        self.carbon_cycle.validate()?;
        self.temperature.validate()?;
        Ok(())
    }
}
