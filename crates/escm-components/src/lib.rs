//! Components of the energy scenario climate model
//!
//! Each component implements one step of the yearly model update and is
//! configured by a parameter struct from the [`parameters`] module.
//!
//! # Module Organisation
//!
//! - `policy`: policy strength ramp and the coupling of levers to growth rates
//! - `energy`: demand response, energy mix update and energy-sector emissions
//! - `carbon`: land use emissions, carbon removal and the CO2 budget
//! - `climate`: temperature response to CO2 concentration
//!
//! Components are pure: they hold only their parameters and every method
//! takes the current state explicitly, so a single instance can be shared by
//! any number of model runs.

pub mod carbon;
pub mod climate;
pub mod energy;
pub mod parameters;
pub mod policy;
