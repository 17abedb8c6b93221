use crate::parameters::LandUseParameters;
use escm_core::scenario::Scenario;
use escm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Land use emissions and technological carbon removal
///
/// Reduced deforestation scales the baseline land use source down, while
/// afforestation subtracts a sequestration term. Either can push land use
/// emissions below zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandUse {
    parameters: LandUseParameters,
}

impl LandUse {
    pub fn new() -> Self {
        Self::from_parameters(LandUseParameters::default())
    }

    pub fn from_parameters(parameters: LandUseParameters) -> Self {
        Self { parameters }
    }

    /// Net land use emissions (GtCO2 / yr)
    pub fn emissions(&self, scenario: &Scenario, strength: FloatValue) -> FloatValue {
        let p = &self.parameters;
        let retained = 1.0 - scenario.deforestation * p.deforestation_sensitivity * strength;
        p.baseline_emissions * retained
            - scenario.afforestation * p.afforestation_sensitivity * strength
    }

    /// CO2 removed by technology (GtCO2 / yr)
    pub fn removal(&self, scenario: &Scenario, strength: FloatValue) -> FloatValue {
        scenario.technological_carbon_removal * self.parameters.removal_sensitivity * strength
    }

    pub fn parameters(&self) -> &LandUseParameters {
        &self.parameters
    }
}

impl Default for LandUse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_without_policy() {
        let land_use = LandUse::new();
        assert_eq!(land_use.emissions(&Scenario::default(), 1.0), 5.0);
        assert_eq!(land_use.removal(&Scenario::default(), 1.0), 0.0);
    }

    #[test]
    fn deforestation_scales_baseline() {
        let land_use = LandUse::new();
        let scenario = Scenario {
            deforestation: 50.0,
            ..Default::default()
        };
        assert!((land_use.emissions(&scenario, 1.0) - 2.5).abs() < 1e-12);
        assert!((land_use.emissions(&scenario, 0.5) - 3.75).abs() < 1e-12);
    }

    #[test]
    fn afforestation_can_make_land_a_sink() {
        let land_use = LandUse::new();
        let scenario = Scenario {
            deforestation: 100.0,
            afforestation: 100.0,
            ..Default::default()
        };
        let emissions = land_use.emissions(&scenario, 1.0);
        assert!(
            (emissions - -5.0).abs() < 1e-12,
            "Land should be a net sink of 5 GtCO2, got {}",
            emissions
        );
    }

    #[test]
    fn removal_caps_at_ten_gigatonnes() {
        let land_use = LandUse::new();
        let scenario = Scenario {
            technological_carbon_removal: 100.0,
            ..Default::default()
        };
        assert!((land_use.removal(&scenario, 1.0) - 10.0).abs() < 1e-12);
        assert_eq!(land_use.removal(&scenario, 0.0), 0.0);
    }
}
