//! Policy parameters
//!
//! Parameters for the policy strength ramp and for the coupling of scenario
//! levers to energy source growth rates.

use super::ensure_finite;
use escm_core::errors::{EscmError, EscmResult};
use escm_core::sources::{SourceOverrides, SourceTable};
use escm_core::{FloatValue, Year};
use serde::{Deserialize, Deserializer, Serialize};

/// Parameters for the policy strength ramp.
///
/// Policies have no effect before `start_year` and then phase in linearly,
/// reaching full strength `ramp_years` later:
///
/// $$s(y) = \min\left(\frac{y - y_0}{\Delta y}, 1\right), \quad y \ge y_0$$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyRampParameters {
    /// First year in which policies can take effect.
    ///
    /// Strength is still zero in this year.
    /// Default: 2024
    pub start_year: Year,

    /// Years taken to reach full policy strength.
    /// Default: 10.0
    pub ramp_years: FloatValue,
}

impl Default for PolicyRampParameters {
    fn default() -> Self {
        Self {
            start_year: 2024,
            ramp_years: 10.0,
        }
    }
}

impl PolicyRampParameters {
    pub fn validate(&self) -> EscmResult<()> {
        ensure_finite([("policy_ramp.ramp_years", self.ramp_years)])?;
        if self.ramp_years <= 0.0 {
            return Err(EscmError::InvalidParameter(format!(
                "policy_ramp.ramp_years must be positive, got {}",
                self.ramp_years
            )));
        }
        Ok(())
    }
}

/// Sensitivities of energy source growth rates to scenario levers.
///
/// Each coefficient is the change in annual growth rate per unit lever at
/// full policy strength. They are calibrated so that a lever value of 100
/// changes the affected growth rate by roughly 20-50% of its baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyCouplingParameters {
    /// Business-as-usual annual growth rate of each source (1 / yr).
    ///
    /// The `new_tech` entry is unused; see `new_tech_floor`.
    /// Default: coal 0.015, oil 0.012, gas 0.02, renewables 0.05, bio 0.01,
    /// nuclear 0.005, new_tech 0.0
    #[serde(deserialize_with = "baseline_growth_overrides")]
    pub baseline_growth: SourceTable,

    /// Reduction in coal growth per unit coal tax.
    /// Default: 0.002
    pub coal_tax: FloatValue,

    /// Reduction in coal growth per unit carbon price.
    /// Default: 0.0005
    pub coal_carbon_price: FloatValue,

    /// Reduction in oil growth per unit oil tax.
    /// Default: 0.0015
    pub oil_tax: FloatValue,

    /// Reduction in oil growth per unit carbon price.
    /// Default: 0.0004
    pub oil_carbon_price: FloatValue,

    /// Reduction in oil growth per unit transport electrification.
    /// Default: 0.001
    pub oil_transport_electrification: FloatValue,

    /// Reduction in gas growth per unit gas tax.
    /// Default: 0.001
    pub gas_tax: FloatValue,

    /// Reduction in gas growth per unit carbon price.
    /// Default: 0.0003
    pub gas_carbon_price: FloatValue,

    /// Increase in renewables growth per unit renewables subsidy.
    /// Default: 0.002
    pub renewables_subsidy: FloatValue,

    /// Increase in renewables growth per unit carbon price.
    /// Default: 0.0002
    pub renewables_carbon_price: FloatValue,

    /// Reduction in bioenergy growth per unit bioenergy tax.
    /// Default: 0.001
    pub bioenergy_tax: FloatValue,

    /// Increase in nuclear growth per unit nuclear subsidy.
    /// Default: 0.001
    pub nuclear_subsidy: FloatValue,

    /// Growth rate of new technologies without any subsidy (1 / yr).
    /// Default: 0.02
    pub new_tech_floor: FloatValue,

    /// Increase in new technology growth per unit subsidy.
    /// Default: 0.003
    pub new_tech_subsidy: FloatValue,
}

fn default_baseline_growth() -> SourceTable {
    SourceTable {
        coal: 0.015,
        oil: 0.012,
        gas: 0.02,
        renewables: 0.05,
        bio: 0.01,
        nuclear: 0.005,
        new_tech: 0.0,
    }
}

fn baseline_growth_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<SourceTable, D::Error> {
    Ok(SourceOverrides::deserialize(d)?.apply(default_baseline_growth()))
}

impl Default for PolicyCouplingParameters {
    fn default() -> Self {
        Self {
            baseline_growth: default_baseline_growth(),
            coal_tax: 0.002,
            coal_carbon_price: 0.0005,
            oil_tax: 0.0015,
            oil_carbon_price: 0.0004,
            oil_transport_electrification: 0.001,
            gas_tax: 0.001,
            gas_carbon_price: 0.0003,
            renewables_subsidy: 0.002,
            renewables_carbon_price: 0.0002,
            bioenergy_tax: 0.001,
            nuclear_subsidy: 0.001,
            new_tech_floor: 0.02,
            new_tech_subsidy: 0.003,
        }
    }
}

impl PolicyCouplingParameters {
    pub fn validate(&self) -> EscmResult<()> {
        if !self.baseline_growth.is_finite() {
            return Err(EscmError::InvalidParameter(
                "policy_coupling.baseline_growth must be finite".to_string(),
            ));
        }
        ensure_finite([
            ("policy_coupling.coal_tax", self.coal_tax),
            ("policy_coupling.coal_carbon_price", self.coal_carbon_price),
            ("policy_coupling.oil_tax", self.oil_tax),
            ("policy_coupling.oil_carbon_price", self.oil_carbon_price),
            (
                "policy_coupling.oil_transport_electrification",
                self.oil_transport_electrification,
            ),
            ("policy_coupling.gas_tax", self.gas_tax),
            ("policy_coupling.gas_carbon_price", self.gas_carbon_price),
            ("policy_coupling.renewables_subsidy", self.renewables_subsidy),
            (
                "policy_coupling.renewables_carbon_price",
                self.renewables_carbon_price,
            ),
            ("policy_coupling.bioenergy_tax", self.bioenergy_tax),
            ("policy_coupling.nuclear_subsidy", self.nuclear_subsidy),
            ("policy_coupling.new_tech_floor", self.new_tech_floor),
            ("policy_coupling.new_tech_subsidy", self.new_tech_subsidy),
        ])
    }
}
