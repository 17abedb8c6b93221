//! Energy scenario climate model
//!
//! Projects the global primary-energy mix, greenhouse gas emissions,
//! atmospheric CO2 concentration and temperature anomaly over a century
//! under a scenario of policy levers.
//!
//! ```
//! use escm::model::ClimateModel;
//! use escm::scenario::Scenario;
//!
//! let model = ClimateModel::default();
//! let projection = model.run(&Scenario {
//!     carbon_price: 100.0,
//!     renewables_subsidy: 50.0,
//!     ..Default::default()
//! });
//! assert_eq!(projection.len(), 101);
//! ```

pub mod boundary;
pub mod model;
pub mod parameters;
#[cfg(feature = "python")]
pub mod python;

pub use escm_components as components;
pub use escm_core::{errors, projection, scenario, sources, FloatValue, Year};
