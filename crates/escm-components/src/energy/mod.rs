//! Energy system component
//!
//! Advances the energy mix by one year and calculates the CO2 emitted by the
//! energy sector.
//!
//! # What This Component Does
//!
//! 1. Calculates a demand multiplier from economic growth and efficiency levers
//! 2. Grows each source by its coupled growth rate and the demand multiplier
//! 3. Floors every source at zero
//! 4. Sums emissions over sources using fixed emission factors
//!
//! # Simplifications
//!
//! - **Uniform demand response**: the demand multiplier applies equally to
//!   every source; there is no source-specific elasticity.
//! - **No inter-fuel substitution**: taxing one source does not directly
//!   raise the growth of others.
//! - **Carbon neutral non-fossil sources**: renewables, bioenergy, nuclear
//!   and new technologies have zero emission factors.

use crate::parameters::EnergySystemParameters;
use escm_core::scenario::Scenario;
use escm_core::sources::{EnergyMix, SourceTable};
use escm_core::FloatValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergySystem {
    parameters: EnergySystemParameters,
}

impl EnergySystem {
    pub fn new() -> Self {
        Self::from_parameters(EnergySystemParameters::default())
    }

    pub fn from_parameters(parameters: EnergySystemParameters) -> Self {
        Self { parameters }
    }

    /// A fresh copy of the energy mix at the start of a run
    pub fn initial_mix(&self) -> EnergyMix {
        self.parameters.initial_energy
    }

    /// Multiplier on total energy demand for a year
    ///
    /// Economic growth raises demand, transport and buildings efficiency
    /// lower it. Both act in proportion to the policy strength.
    pub fn demand_multiplier(&self, scenario: &Scenario, strength: FloatValue) -> FloatValue {
        let growth =
            1.0 + scenario.economic_growth * self.parameters.economic_growth_sensitivity * strength;
        let efficiency = (scenario.transport_efficiency + scenario.buildings_efficiency)
            * self.parameters.efficiency_sensitivity
            * strength;
        growth - efficiency
    }

    /// Advance the energy mix by one year in place
    ///
    /// $$Q_{i,n+1} = \max\left(0, Q_{i,n} (1 + r_i) D\right)$$
    ///
    /// No source can become negative, whatever the growth rates.
    pub fn advance(&self, mix: &mut EnergyMix, growth_rates: &SourceTable, demand: FloatValue) {
        *mix = mix.map(|source, quantity| {
            (quantity * ((1.0 + growth_rates.get(source)) * demand)).max(0.0)
        });
    }

    /// Energy-sector CO2 emissions for the given mix (GtCO2 / yr)
    pub fn emissions(&self, mix: &EnergyMix) -> FloatValue {
        mix.dot(&self.parameters.emission_factors)
    }

    pub fn parameters(&self) -> &EnergySystemParameters {
        &self.parameters
    }
}

impl Default for EnergySystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escm_core::sources::EnergySource;

    #[test]
    fn neutral_demand() {
        let system = EnergySystem::new();
        assert_eq!(system.demand_multiplier(&Scenario::default(), 1.0), 1.0);

        let scenario = Scenario {
            economic_growth: 50.0,
            transport_efficiency: 100.0,
            ..Default::default()
        };
        assert_eq!(system.demand_multiplier(&scenario, 0.0), 1.0);
    }

    #[test]
    fn efficiency_reduces_demand() {
        let system = EnergySystem::new();
        let scenario = Scenario {
            transport_efficiency: 20.0,
            buildings_efficiency: 20.0,
            ..Default::default()
        };
        let demand = system.demand_multiplier(&scenario, 1.0);
        assert!((demand - 0.8).abs() < 1e-12, "Got demand {}", demand);
    }

    #[test]
    fn economic_growth_raises_demand() {
        let system = EnergySystem::new();
        let scenario = Scenario {
            economic_growth: 10.0,
            ..Default::default()
        };
        let demand = system.demand_multiplier(&scenario, 0.5);
        assert!((demand - 1.05).abs() < 1e-12, "Got demand {}", demand);
    }

    #[test]
    fn advance_applies_growth_and_demand() {
        let system = EnergySystem::new();
        let mut mix = system.initial_mix();
        let rates = SourceTable::from_fn(|_| 0.1);

        system.advance(&mut mix, &rates, 0.5);

        let initial = system.initial_mix();
        for source in EnergySource::ALL {
            let expected = initial.get(source) * 1.1 * 0.5;
            assert!(
                (mix.get(source) - expected).abs() < 1e-10,
                "{}: expected {}, got {}",
                source,
                expected,
                mix.get(source)
            );
        }
    }

    #[test]
    fn advance_scales_quantity_by_combined_factor() {
        let system = EnergySystem::new();
        let rates = SourceTable {
            coal: 0.013,
            oil: -0.021,
            ..SourceTable::default()
        };
        let demand = 1.0 + 37.0 * 0.01 - 13.0 * 0.005;

        let mut mix = system.initial_mix();
        let mut coal: FloatValue = 100.0;
        let mut oil: FloatValue = 150.0;
        for _ in 0..101 {
            system.advance(&mut mix, &rates, demand);
            coal *= (1.0 + 0.013) * demand;
            oil *= (1.0 + -0.021) * demand;
            assert_eq!(mix.coal.to_bits(), coal.to_bits());
            assert_eq!(mix.oil.to_bits(), oil.to_bits());
        }
    }

    #[test]
    fn advance_floors_at_zero() {
        let system = EnergySystem::new();
        let mut mix = system.initial_mix();
        let rates = SourceTable {
            coal: -5.0,
            ..SourceTable::default()
        };

        system.advance(&mut mix, &rates, 1.0);
        assert_eq!(mix.coal, 0.0);
        assert_eq!(mix.oil, 150.0);

        // Negative demand cannot push quantities below zero either
        system.advance(&mut mix, &SourceTable::default(), -1.0);
        assert!(mix.iter().all(|(_, q)| q >= 0.0));
    }

    #[test]
    fn emissions_from_fossil_sources_only() {
        let system = EnergySystem::new();
        let mix = system.initial_mix();

        let expected = 100.0 * 0.095 + 150.0 * 0.07 + 90.0 * 0.05;
        assert!((system.emissions(&mix) - expected).abs() < 1e-10);

        let clean = EnergyMix {
            renewables: 500.0,
            bio: 100.0,
            nuclear: 100.0,
            new_tech: 100.0,
            ..EnergyMix::default()
        };
        assert_eq!(system.emissions(&clean), 0.0);
    }
}
