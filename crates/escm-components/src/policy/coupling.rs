use crate::parameters::PolicyCouplingParameters;
use escm_core::scenario::Scenario;
use escm_core::sources::SourceTable;
use escm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Maps scenario levers to annual growth rates of each energy source
///
/// Starting from the baseline growth rates, each lever adds a linear term
/// scaled by the current policy strength $s$:
///
/// $$r_i = r_{i,0} - \sum_j L_j \, k_{ij} \, s$$
///
/// Taxes and the carbon price reduce fossil growth. Subsidies, and the carbon
/// price via improved competitiveness, raise low-carbon growth. New
/// technologies do not use the baseline table: their growth is a fixed floor
/// plus a subsidy term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyCoupling {
    parameters: PolicyCouplingParameters,
}

impl PolicyCoupling {
    pub fn new() -> Self {
        Self::from_parameters(PolicyCouplingParameters::default())
    }

    pub fn from_parameters(parameters: PolicyCouplingParameters) -> Self {
        Self { parameters }
    }

    /// Growth rates for a year with the given policy strength
    ///
    /// Pure; must be evaluated every year as the strength changes.
    pub fn growth_rates(&self, scenario: &Scenario, strength: FloatValue) -> SourceTable {
        let p = &self.parameters;
        let s = scenario;
        let mut rates = p.baseline_growth;

        rates.coal -= s.coal_tax * p.coal_tax * strength;
        rates.coal -= s.carbon_price * p.coal_carbon_price * strength;

        rates.oil -= s.oil_tax * p.oil_tax * strength;
        rates.oil -= s.carbon_price * p.oil_carbon_price * strength;
        rates.oil -= s.transport_electrification * p.oil_transport_electrification * strength;

        rates.gas -= s.gas_tax * p.gas_tax * strength;
        rates.gas -= s.carbon_price * p.gas_carbon_price * strength;

        rates.renewables += s.renewables_subsidy * p.renewables_subsidy * strength;
        rates.renewables += s.carbon_price * p.renewables_carbon_price * strength;

        // Negative tax values act as a subsidy
        rates.bio -= s.bioenergy_tax * p.bioenergy_tax * strength;

        rates.nuclear += s.nuclear_subsidy * p.nuclear_subsidy * strength;

        rates.new_tech = p.new_tech_floor + s.new_tech_subsidy * p.new_tech_subsidy * strength;

        rates
    }

    pub fn parameters(&self) -> &PolicyCouplingParameters {
        &self.parameters
    }
}

impl Default for PolicyCoupling {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escm_core::sources::EnergySource;

    fn baseline_with_floor() -> SourceTable {
        let params = PolicyCouplingParameters::default();
        SourceTable {
            new_tech: params.new_tech_floor,
            ..params.baseline_growth
        }
    }

    #[test]
    fn neutral_scenario_keeps_baseline() {
        let coupling = PolicyCoupling::new();
        for strength in [0.0, 0.5, 1.0] {
            let rates = coupling.growth_rates(&Scenario::default(), strength);
            assert_eq!(
                rates,
                baseline_with_floor(),
                "Neutral levers should not change growth at strength {}",
                strength
            );
        }
    }

    #[test]
    fn zero_strength_ignores_levers() {
        let coupling = PolicyCoupling::new();
        let scenario = Scenario {
            coal_tax: 100.0,
            renewables_subsidy: 100.0,
            carbon_price: 200.0,
            new_tech_subsidy: 100.0,
            ..Default::default()
        };
        assert_eq!(
            coupling.growth_rates(&scenario, 0.0),
            baseline_with_floor()
        );
    }

    #[test]
    fn taxes_reduce_fossil_growth() {
        let coupling = PolicyCoupling::new();
        let scenario = Scenario {
            coal_tax: 100.0,
            oil_tax: 100.0,
            gas_tax: 100.0,
            ..Default::default()
        };
        let rates = coupling.growth_rates(&scenario, 1.0);
        let baseline = baseline_with_floor();

        assert!((rates.coal - (0.015 - 0.2)).abs() < 1e-12);
        assert!((rates.oil - (0.012 - 0.15)).abs() < 1e-12);
        assert!((rates.gas - (0.02 - 0.1)).abs() < 1e-12);
        for source in [
            EnergySource::Renewables,
            EnergySource::Bio,
            EnergySource::Nuclear,
            EnergySource::NewTech,
        ] {
            assert_eq!(rates.get(source), baseline.get(source));
        }
    }

    #[test]
    fn carbon_price_shifts_towards_renewables() {
        let coupling = PolicyCoupling::new();
        let scenario = Scenario {
            carbon_price: 100.0,
            ..Default::default()
        };
        let rates = coupling.growth_rates(&scenario, 1.0);
        let baseline = baseline_with_floor();

        assert!(rates.coal < baseline.coal);
        assert!(rates.oil < baseline.oil);
        assert!(rates.gas < baseline.gas);
        assert!(rates.renewables > baseline.renewables);
        assert!((rates.renewables - (0.05 + 0.02)).abs() < 1e-12);
    }

    #[test]
    fn electrification_displaces_oil() {
        let coupling = PolicyCoupling::new();
        let scenario = Scenario {
            transport_electrification: 50.0,
            ..Default::default()
        };
        let rates = coupling.growth_rates(&scenario, 0.5);
        assert!((rates.oil - (0.012 - 50.0 * 0.001 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn subsidies_raise_low_carbon_growth() {
        let coupling = PolicyCoupling::new();
        let scenario = Scenario {
            renewables_subsidy: 100.0,
            nuclear_subsidy: 100.0,
            new_tech_subsidy: 100.0,
            ..Default::default()
        };
        let rates = coupling.growth_rates(&scenario, 1.0);

        assert!((rates.renewables - 0.25).abs() < 1e-12);
        assert!((rates.nuclear - 0.105).abs() < 1e-12);
        assert!((rates.new_tech - 0.32).abs() < 1e-12);
    }

    #[test]
    fn negative_bioenergy_tax_is_a_subsidy() {
        let coupling = PolicyCoupling::new();
        let scenario = Scenario {
            bioenergy_tax: -50.0,
            ..Default::default()
        };
        let rates = coupling.growth_rates(&scenario, 1.0);
        assert!((rates.bio - 0.06).abs() < 1e-12);
    }

    #[test]
    fn parameters_deserialise_from_partial_toml() {
        let params: PolicyCouplingParameters = toml::from_str("coal_tax = 0.004").unwrap();
        assert_eq!(params.coal_tax, 0.004);
        assert_eq!(params.oil_tax, 0.0015);

        let coupling = PolicyCoupling::from_parameters(params);
        let scenario = Scenario {
            coal_tax: 10.0,
            ..Default::default()
        };
        let rates = coupling.growth_rates(&scenario, 1.0);
        assert!((rates.coal - (0.015 - 0.04)).abs() < 1e-12);
    }
}
