//! Land use parameters

use super::ensure_finite;
use escm_core::errors::EscmResult;
use escm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for land use emissions and technological carbon removal.
///
/// $$E_{land} = E_0 (1 - d \cdot k_d \cdot s) - a \cdot k_a \cdot s$$
/// $$R = r \cdot k_r \cdot s$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandUseParameters {
    /// Land use emissions without policy (GtCO2 / yr).
    /// Default: 5.0
    pub baseline_emissions: FloatValue,

    /// Fractional reduction in land use emissions per unit deforestation lever.
    /// Default: 0.01
    pub deforestation_sensitivity: FloatValue,

    /// Sequestration per unit afforestation lever (GtCO2 / yr).
    /// Default: 0.05
    pub afforestation_sensitivity: FloatValue,

    /// Removal per unit technological removal lever (GtCO2 / yr).
    ///
    /// With the lever at 100 this caps removal at 10 GtCO2 / yr.
    /// Default: 0.1
    pub removal_sensitivity: FloatValue,
}

impl Default for LandUseParameters {
    fn default() -> Self {
        Self {
            baseline_emissions: 5.0,
            deforestation_sensitivity: 0.01,
            afforestation_sensitivity: 0.05,
            removal_sensitivity: 0.1,
        }
    }
}

impl LandUseParameters {
    pub fn validate(&self) -> EscmResult<()> {
        ensure_finite([
            ("land_use.baseline_emissions", self.baseline_emissions),
            (
                "land_use.deforestation_sensitivity",
                self.deforestation_sensitivity,
            ),
            (
                "land_use.afforestation_sensitivity",
                self.afforestation_sensitivity,
            ),
            ("land_use.removal_sensitivity", self.removal_sensitivity),
        ])
    }
}
