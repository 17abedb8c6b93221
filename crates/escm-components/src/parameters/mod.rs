//! Component parameters
//!
//! Each component has a parameter struct with defaults matching the
//! calibrated model. All structs deserialise with `#[serde(default)]` so a
//! configuration file only needs to list the values it overrides. Per-source
//! tables are merged entry by entry onto their defaults. Unknown keys are
//! rejected.

mod carbon_cycle;
mod energy_system;
mod land_use;
mod policy;
mod temperature;

pub use carbon_cycle::CarbonCycleParameters;
pub use energy_system::EnergySystemParameters;
pub use land_use::LandUseParameters;
pub use policy::{PolicyCouplingParameters, PolicyRampParameters};
pub use temperature::TemperatureParameters;

use escm_core::errors::{EscmError, EscmResult};
use escm_core::FloatValue;

/// Check that each named parameter value is finite
pub(crate) fn ensure_finite<'a>(
    values: impl IntoIterator<Item = (&'a str, FloatValue)>,
) -> EscmResult<()> {
    for (name, value) in values {
        if !value.is_finite() {
            return Err(EscmError::InvalidParameter(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
    }
    Ok(())
}
