//! Core types for the energy scenario climate model (ESCM).
//!
//! This crate holds the data that flows between the policy, energy and climate
//! components: the [`scenario::Scenario`] of policy levers, the fixed set of
//! [`sources::EnergySource`]s and their per-source [`sources::SourceTable`], and
//! the [`projection::Projection`] returned by a model run.

pub mod errors;
pub mod projection;
pub mod scenario;
pub mod sources;

/// Floating point type used for all model quantities
pub type FloatValue = f64;

/// Calendar year of a simulation step
pub type Year = i32;
