//! Policy components
//!
//! Policies are phased in over time by a [`PolicyRamp`] and act on the
//! energy system by modifying the annual growth rate of each source through
//! the [`PolicyCoupling`].

mod coupling;
mod ramp;

pub use coupling::PolicyCoupling;
pub use ramp::PolicyRamp;
