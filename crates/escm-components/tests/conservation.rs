//! Conservation tests for the carbon cycle and energy components.
//!
//! These tests chain components over many years and check that bookkeeping
//! holds across steps:
//! - Atmospheric CO2 change equals the retained share of cumulative emissions
//! - Energy supply stays non-negative under arbitrary growth rates

use approx::assert_relative_eq;
use escm_components::carbon::{CarbonCycle, LandUse};
use escm_components::energy::EnergySystem;
use escm_components::parameters::CarbonCycleParameters;
use escm_core::scenario::Scenario;
use escm_core::sources::SourceTable;

mod carbon_cycle_conservation {
    use super::*;

    /// Concentration change over a run depends only on cumulative emissions.
    #[test]
    fn test_concentration_tracks_cumulative_emissions() {
        let params = CarbonCycleParameters::default();
        let cycle = CarbonCycle::from_parameters(params.clone());

        let emissions: Vec<f64> = (0..100).map(|i| 40.0 - 0.6 * i as f64).collect();
        let mut conc = cycle.initial_concentration();
        for e in &emissions {
            conc = cycle.step(conc, *e);
        }

        let cumulative: f64 = emissions.iter().sum();
        let expected = params.initial_concentration
            + cumulative * params.ppm_per_gtco2 * params.airborne_fraction;
        assert_relative_eq!(conc, expected, max_relative = 1e-12);
    }

    /// Emitting and then removing the same amount returns to the start.
    #[test]
    fn test_removal_reverses_emissions() {
        let cycle = CarbonCycle::new();
        let land_use = LandUse::new();
        let scenario = Scenario {
            technological_carbon_removal: 50.0,
            ..Default::default()
        };
        let removal = land_use.removal(&scenario, 1.0);

        let start = 400.0;
        let up = cycle.step(start, removal);
        let down = cycle.step(up, -removal);
        assert_relative_eq!(down, start, epsilon = 1e-10);
    }
}

mod energy_conservation {
    use super::*;

    /// Supply stays non-negative even with rates below -100%.
    #[test]
    fn test_supply_non_negative() {
        let system = EnergySystem::new();
        let mut mix = system.initial_mix();
        let rates = SourceTable {
            coal: -3.0,
            oil: -1.5,
            gas: -0.9,
            renewables: 0.5,
            bio: -1.0,
            nuclear: -0.01,
            new_tech: 0.02,
        };

        for _ in 0..50 {
            system.advance(&mut mix, &rates, 1.0);
            for (source, quantity) in mix.iter() {
                assert!(quantity >= 0.0, "{} went negative: {}", source, quantity);
            }
        }
        assert_eq!(mix.coal, 0.0);
        assert!(mix.renewables > 0.0);
    }

    /// Emissions scale with the fossil share of supply.
    #[test]
    fn test_emissions_scale_with_supply() {
        let system = EnergySystem::new();
        let mix = system.initial_mix();
        let doubled = mix.map(|_, q| 2.0 * q);
        assert_relative_eq!(
            system.emissions(&doubled),
            2.0 * system.emissions(&mix),
            max_relative = 1e-12
        );
    }
}
