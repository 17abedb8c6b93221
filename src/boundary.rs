//! Request boundary
//!
//! Converts between serialised requests and the model. This is where
//! untrusted input enters, so scenarios are checked here:
//!
//! - non-finite levers are rejected, as the model would otherwise propagate
//!   NaN or infinity through every year;
//! - levers outside their documented range are accepted with a warning. The
//!   model performs no clamping.

use crate::model::ClimateModel;
use escm_core::errors::{EscmError, EscmResult};
use escm_core::projection::{Projection, ProjectionSummary};
use escm_core::scenario::Scenario;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A request to simulate a single scenario
///
/// Every lever is optional and defaults to `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationRequest {
    pub scenario: Scenario,
}

/// The result of a simulation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    #[serde(flatten)]
    pub projection: Projection,
    pub summary: Option<ProjectionSummary>,
}

/// Check a scenario received from outside the process
pub fn check_scenario(scenario: &Scenario) -> EscmResult<()> {
    scenario.validate()?;
    for (lever, value) in scenario.out_of_range_levers() {
        if let Some((lower, upper)) = Scenario::lever_range(lever) {
            warn!(
                lever,
                value, lower, upper, "Lever outside documented range; results may be extreme"
            );
        }
    }
    Ok(())
}

/// Validate and run a scenario
pub fn simulate(model: &ClimateModel, request: &SimulationRequest) -> EscmResult<SimulationResponse> {
    check_scenario(&request.scenario)?;
    let projection = model.run(&request.scenario);
    let summary = projection.summary();
    Ok(SimulationResponse {
        projection,
        summary,
    })
}

/// Parse a JSON scenario, run it and serialise the response as JSON
pub fn simulate_json(model: &ClimateModel, request: &str) -> EscmResult<String> {
    let request: SimulationRequest =
        serde_json::from_str(request).map_err(|e| EscmError::Parse(e.to_string()))?;
    let response = simulate(model, &request)?;
    serde_json::to_string(&response).map_err(|e| EscmError::Error(e.to_string()))
}
