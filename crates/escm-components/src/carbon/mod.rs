//! Carbon cycle components
//!
//! - [`LandUse`]: land use emissions and technological carbon removal
//! - [`CarbonCycle`]: CO2 budget that turns net emissions into concentration

mod budget;
mod land_use;

pub use budget::CarbonCycle;
pub use land_use::LandUse;
