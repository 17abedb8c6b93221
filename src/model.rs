//! The simulation engine.
//!
//! A [`ClimateModel`] integrates the energy system and the climate response
//! forward in annual steps. For each year in the horizon:
//!
//! 1. the policy ramp gives the policy strength and the coupling turns the
//!    scenario levers into growth rates for each energy source;
//! 2. the energy mix grows by those rates and a common demand multiplier,
//!    flooring every source at zero;
//! 3. net emissions are the energy-sector emissions plus land use emissions
//!    minus technological removal;
//! 4. the CO2 budget updates the concentration and the temperature anomaly
//!    relaxes toward the new equilibrium;
//! 5. one row is appended to the projection.
//!
//! Runs are deterministic and share no state: every call to
//! [`ClimateModel::run`] owns a fresh working state and the model itself is
//! never mutated, so one model can serve any number of concurrent callers.

use crate::parameters::ModelParameters;
use escm_components::carbon::{CarbonCycle, LandUse};
use escm_components::climate::TemperatureResponse;
use escm_components::energy::EnergySystem;
use escm_components::policy::{PolicyCoupling, PolicyRamp};
use escm_core::errors::EscmResult;
use escm_core::projection::{Projection, ProjectionBuilder, ProjectionRow};
use escm_core::scenario::Scenario;
use escm_core::sources::EnergyMix;
use escm_core::{FloatValue, Year};
use tracing::{debug, trace};

/// Working state carried from one year to the next
#[derive(Debug, Clone)]
struct ModelState {
    energy: EnergyMix,
    co2_concentration: FloatValue,
    /// Anomaly without the methane adder
    temperature_anomaly: FloatValue,
}

#[derive(Debug, Clone)]
pub struct ClimateModel {
    start_year: Year,
    end_year: Year,
    ramp: PolicyRamp,
    coupling: PolicyCoupling,
    energy_system: EnergySystem,
    land_use: LandUse,
    carbon_cycle: CarbonCycle,
    temperature: TemperatureResponse,
}

impl ClimateModel {
    /// Create a model from validated parameters
    pub fn new(parameters: ModelParameters) -> EscmResult<Self> {
        parameters.validate()?;
        Ok(Self::from_parameters(parameters))
    }

    fn from_parameters(parameters: ModelParameters) -> Self {
        Self {
            start_year: parameters.start_year,
            end_year: parameters.end_year,
            ramp: PolicyRamp::from_parameters(parameters.policy_ramp),
            coupling: PolicyCoupling::from_parameters(parameters.policy_coupling),
            energy_system: EnergySystem::from_parameters(parameters.energy_system),
            land_use: LandUse::from_parameters(parameters.land_use),
            carbon_cycle: CarbonCycle::from_parameters(parameters.carbon_cycle),
            temperature: TemperatureResponse::from_parameters(parameters.temperature),
        }
    }

    pub fn builder() -> ModelBuilder {
        ModelBuilder::new()
    }

    pub fn start_year(&self) -> Year {
        self.start_year
    }

    pub fn end_year(&self) -> Year {
        self.end_year
    }

    /// The simulated years, in order
    pub fn years(&self) -> impl Iterator<Item = Year> {
        self.start_year..=self.end_year
    }

    /// Parameters the model was built from
    pub fn parameters(&self) -> ModelParameters {
        ModelParameters {
            start_year: self.start_year,
            end_year: self.end_year,
            policy_ramp: self.ramp.parameters().clone(),
            policy_coupling: self.coupling.parameters().clone(),
            energy_system: self.energy_system.parameters().clone(),
            land_use: self.land_use.parameters().clone(),
            carbon_cycle: self.carbon_cycle.parameters().clone(),
            temperature: self.temperature.parameters().clone(),
        }
    }

    /// Run a scenario over the full horizon
    ///
    /// The scenario is not validated. Non-finite levers propagate into every
    /// subsequent year; callers accepting external input should call
    /// [`Scenario::validate`] first.
    pub fn run(&self, scenario: &Scenario) -> Projection {
        debug!(
            start_year = self.start_year,
            end_year = self.end_year,
            neutral = scenario.is_neutral(),
            "Running scenario"
        );

        let mut state = ModelState {
            energy: self.energy_system.initial_mix(),
            co2_concentration: self.carbon_cycle.initial_concentration(),
            temperature_anomaly: self.temperature.initial_anomaly(),
        };
        let mut builder = ProjectionBuilder::with_capacity(self.years().count());

        for year in self.years() {
            let row = self.step(&mut state, scenario, year);
            trace!(
                year,
                emissions = row.emissions,
                co2_concentration = row.co2_concentration,
                global_temp = row.global_temp,
                "Solved year"
            );
            builder.push(row);
        }

        let projection = builder.finish();
        if let Some(last) = projection.last() {
            debug!(
                year = last.year,
                emissions = last.emissions,
                co2_concentration = last.co2_concentration,
                global_temp = last.global_temp,
                "Finished scenario"
            );
        }
        projection
    }

    /// Advance the working state by one year and return the output row
    fn step(&self, state: &mut ModelState, scenario: &Scenario, year: Year) -> ProjectionRow {
        let strength = self.ramp.strength(year);

        // Energy system
        let growth_rates = self.coupling.growth_rates(scenario, strength);
        let demand = self.energy_system.demand_multiplier(scenario, strength);
        self.energy_system
            .advance(&mut state.energy, &growth_rates, demand);

        // Emissions
        let energy_emissions = self.energy_system.emissions(&state.energy);
        let land_emissions = self.land_use.emissions(scenario, strength);
        let removal = self.land_use.removal(scenario, strength);
        let net_emissions = energy_emissions + land_emissions - removal;

        // Carbon cycle and climate response
        state.co2_concentration = self
            .carbon_cycle
            .step(state.co2_concentration, net_emissions);
        state.temperature_anomaly = self
            .temperature
            .step(state.temperature_anomaly, state.co2_concentration);

        ProjectionRow {
            year,
            energy: state.energy,
            emissions: net_emissions,
            co2_concentration: state.co2_concentration,
            global_temp: self
                .temperature
                .reported(state.temperature_anomaly, scenario, strength),
        }
    }
}

impl Default for ClimateModel {
    fn default() -> Self {
        Self::from_parameters(ModelParameters::default())
    }
}

/// Build a [`ClimateModel`] from parameters and overrides
///
/// ```
/// use escm::model::ClimateModel;
///
/// let model = ClimateModel::builder()
///     .with_year_range(2000, 2050)
///     .build()
///     .unwrap();
/// assert_eq!(model.years().count(), 51);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    parameters: ModelParameters,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all parameters
    pub fn with_parameters(mut self, parameters: ModelParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the simulated horizon, both ends inclusive
    pub fn with_year_range(mut self, start_year: Year, end_year: Year) -> Self {
        self.parameters.start_year = start_year;
        self.parameters.end_year = end_year;
        self
    }

    /// Set the year in which policies start to phase in
    pub fn with_policy_start(mut self, start_year: Year) -> Self {
        self.parameters.policy_ramp.start_year = start_year;
        self
    }

    pub fn build(self) -> EscmResult<ClimateModel> {
        ClimateModel::new(self.parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escm_core::errors::EscmError;
    use escm_core::sources::EnergySource;

    #[test]
    fn first_year_applies_one_step() {
        let model = ClimateModel::default();
        let projection = model.run(&Scenario::default());
        let first = projection.row(0).unwrap();

        assert_eq!(first.year, 2000);
        assert!((first.energy.coal - 100.0 * 1.015).abs() < 1e-10);
        assert!((first.energy.oil - 150.0 * 1.012).abs() < 1e-10);
        assert_eq!(first.energy.new_tech, 0.0);

        let expected_emissions = 101.5 * 0.095 + 151.8 * 0.07 + 91.8 * 0.05 + 5.0;
        assert!(
            (first.emissions - expected_emissions).abs() < 1e-10,
            "Expected {} GtCO2, got {}",
            expected_emissions,
            first.emissions
        );

        let expected_conc = 370.0 + expected_emissions * 0.128 * 0.45;
        assert!((first.co2_concentration - expected_conc).abs() < 1e-10);

        let equilibrium = 3.0 * (expected_conc / 280.0).log2();
        let anomaly = 0.85 + 0.05 * (equilibrium - 0.85);
        assert!((first.global_temp - (anomaly + 0.5)).abs() < 1e-10);
    }

    #[test]
    fn methane_adder_does_not_compound() {
        let model = ClimateModel::default();
        let baseline = model.run(&Scenario::default());
        let reduced = model.run(&Scenario {
            methane_reduction: 100.0,
            ..Default::default()
        });

        assert_eq!(baseline.co2_concentration(), reduced.co2_concentration());

        // Difference is exactly the adder for the year, not an accumulated effect
        let ramp = PolicyRamp::new();
        for (i, year) in baseline.years().iter().enumerate() {
            let difference = baseline.global_temp()[i] - reduced.global_temp()[i];
            let expected = 0.5 * ramp.strength(*year);
            assert!(
                (difference - expected).abs() < 1e-10,
                "{}: difference {} should equal adder reduction {}",
                year,
                difference,
                expected
            );
        }
    }

    #[test]
    fn builder_validates() {
        let result = ClimateModel::builder().with_year_range(2050, 2000).build();
        assert!(matches!(result, Err(EscmError::InvalidYearRange { .. })));
    }

    #[test]
    fn single_year_horizon() {
        let model = ClimateModel::builder()
            .with_year_range(2030, 2030)
            .build()
            .unwrap();
        let projection = model.run(&Scenario::default());
        assert_eq!(projection.years(), &[2030]);
    }

    #[test]
    fn parameters_round_trip_through_model() {
        let parameters = ModelParameters {
            end_year: 2060,
            ..Default::default()
        };
        let model = ClimateModel::new(parameters.clone()).unwrap();
        assert_eq!(model.parameters(), parameters);
    }

    #[test]
    fn delayed_policy_start() {
        let scenario = Scenario {
            coal_tax: 100.0,
            ..Default::default()
        };
        let early = ClimateModel::default().run(&scenario);
        let late = ClimateModel::builder()
            .with_policy_start(2060)
            .build()
            .unwrap()
            .run(&scenario);

        let coal_2050_early = early.row_for_year(2050).unwrap().energy.get(EnergySource::Coal);
        let coal_2050_late = late.row_for_year(2050).unwrap().energy.get(EnergySource::Coal);
        assert!(coal_2050_early < coal_2050_late);
    }
}
