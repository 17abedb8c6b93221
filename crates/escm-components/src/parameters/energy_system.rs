//! Energy system parameters

use super::ensure_finite;
use escm_core::errors::{EscmError, EscmResult};
use escm_core::sources::{EnergyMix, SourceOverrides, SourceTable};
use escm_core::FloatValue;
use serde::{Deserialize, Deserializer, Serialize};

/// Parameters for the energy mix update and energy-sector emissions.
///
/// Total demand responds to the economy and to efficiency measures through a
/// single multiplier applied to every source:
///
/// $$D = 1 + g \cdot k_g \cdot s - (e_t + e_b) \cdot k_e \cdot s$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergySystemParameters {
    /// Energy supply by source at the start of the run (EJ / yr).
    /// Default: coal 100, oil 150, gas 90, renewables 10, bio 40, nuclear 25,
    /// new_tech 0 (approximate values for 2000)
    #[serde(deserialize_with = "initial_energy_overrides")]
    pub initial_energy: EnergyMix,

    /// CO2 emitted per unit energy (GtCO2 / EJ).
    ///
    /// Renewables, bioenergy, nuclear and new technologies are treated as
    /// carbon neutral.
    /// Default: coal 0.095, oil 0.07, gas 0.05, others 0.0
    #[serde(deserialize_with = "emission_factor_overrides")]
    pub emission_factors: SourceTable,

    /// Demand change per unit economic growth lever ($k_g$).
    /// Default: 0.01
    pub economic_growth_sensitivity: FloatValue,

    /// Demand reduction per unit of combined transport and buildings
    /// efficiency ($k_e$).
    /// Default: 0.005
    pub efficiency_sensitivity: FloatValue,
}

fn default_initial_energy() -> EnergyMix {
    EnergyMix {
        coal: 100.0,
        oil: 150.0,
        gas: 90.0,
        renewables: 10.0,
        bio: 40.0,
        nuclear: 25.0,
        new_tech: 0.0,
    }
}

fn default_emission_factors() -> SourceTable {
    SourceTable {
        coal: 0.095,
        oil: 0.07,
        gas: 0.05,
        ..SourceTable::default()
    }
}

fn initial_energy_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<EnergyMix, D::Error> {
    Ok(SourceOverrides::deserialize(d)?.apply(default_initial_energy()))
}

fn emission_factor_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<SourceTable, D::Error> {
    Ok(SourceOverrides::deserialize(d)?.apply(default_emission_factors()))
}

impl Default for EnergySystemParameters {
    fn default() -> Self {
        Self {
            initial_energy: default_initial_energy(),
            emission_factors: default_emission_factors(),
            economic_growth_sensitivity: 0.01,
            efficiency_sensitivity: 0.005,
        }
    }
}

impl EnergySystemParameters {
    pub fn validate(&self) -> EscmResult<()> {
        if !self.initial_energy.is_finite() || !self.emission_factors.is_finite() {
            return Err(EscmError::InvalidParameter(
                "energy_system tables must be finite".to_string(),
            ));
        }
        if let Some((source, value)) = self.initial_energy.iter().find(|(_, v)| *v < 0.0) {
            return Err(EscmError::InvalidParameter(format!(
                "energy_system.initial_energy.{} must not be negative, got {}",
                source, value
            )));
        }
        ensure_finite([
            (
                "energy_system.economic_growth_sensitivity",
                self.economic_growth_sensitivity,
            ),
            (
                "energy_system.efficiency_sensitivity",
                self.efficiency_sensitivity,
            ),
        ])
    }
}
