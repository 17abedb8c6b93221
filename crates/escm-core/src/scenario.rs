//! Policy scenarios
//!
//! A [`Scenario`] is a flat set of named policy levers. Every lever defaults
//! to `0.0`, which represents "no policy". The model trusts callers to supply
//! levers inside their documented ranges; values outside those ranges are
//! accepted and simply produce extreme trajectories.

use crate::errors::{EscmError, EscmResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Documented range of a lever, as `(lower, upper)` inclusive bounds
pub type LeverRange = (FloatValue, FloatValue);

/// Range of levers expressed as a percentage intensity or percentage change
const PERCENT: LeverRange = (-100.0, 100.0);

macro_rules! define_scenario {
    ($($(#[$doc:meta])* $lever:ident: $range:expr),+ $(,)?) => {
        /// Policy lever settings for a single model run
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct Scenario {
            $($(#[$doc])* pub $lever: FloatValue,)+
        }

        impl Scenario {
            /// Lever names and their documented ranges, in declaration order
            pub const LEVERS: &'static [(&'static str, LeverRange)] =
                &[$((stringify!($lever), $range),)+];

            /// Iterate over `(name, value)` pairs for every lever
            pub fn levers(&self) -> impl Iterator<Item = (&'static str, FloatValue)> {
                [$((stringify!($lever), self.$lever),)+].into_iter()
            }

            /// Get the value of a lever by name
            pub fn lever(&self, name: &str) -> Option<FloatValue> {
                match name {
                    $(stringify!($lever) => Some(self.$lever),)+
                    _ => None,
                }
            }

            /// Set the value of a lever by name
            pub fn set_lever(&mut self, name: &str, value: FloatValue) -> EscmResult<()> {
                match name {
                    $(stringify!($lever) => self.$lever = value,)+
                    _ => return Err(EscmError::UnknownLever(name.to_string())),
                }
                Ok(())
            }
        }
    };
}

define_scenario! {
    /// Tax on coal (percent intensity)
    coal_tax: PERCENT,
    /// Tax on oil (percent intensity)
    oil_tax: PERCENT,
    /// Tax on natural gas (percent intensity)
    gas_tax: PERCENT,
    /// Tax on bioenergy. Negative values act as a subsidy.
    bioenergy_tax: PERCENT,
    /// Subsidy for renewables (percent intensity)
    renewables_subsidy: PERCENT,
    /// Subsidy for nuclear (percent intensity)
    nuclear_subsidy: PERCENT,
    /// Subsidy for new zero-carbon technologies (percent intensity)
    new_tech_subsidy: PERCENT,
    /// Uniform carbon price
    /// unit: currency / tCO2
    carbon_price: (0.0, 250.0),
    /// Energy efficiency of transport (percent change)
    transport_efficiency: PERCENT,
    /// Electrification of transport (percent change)
    transport_electrification: PERCENT,
    /// Energy efficiency of buildings and industry (percent change)
    buildings_efficiency: PERCENT,
    /// Electrification of buildings and industry (percent change)
    ///
    /// Accepted for completeness; it is not coupled to the energy system.
    buildings_electrification: PERCENT,
    /// Population growth modifier (percent change)
    ///
    /// Accepted for completeness; it is not coupled to the energy system.
    population_growth: PERCENT,
    /// Economic growth modifier (percent change)
    economic_growth: PERCENT,
    /// Reduction of deforestation (percent)
    deforestation: PERCENT,
    /// Afforestation effort (percent)
    afforestation: PERCENT,
    /// Reduction of methane and other gases (percent)
    methane_reduction: PERCENT,
    /// Technological carbon removal as a percentage of the maximum removal rate
    technological_carbon_removal: (0.0, 100.0),
}

impl Scenario {
    /// The documented range of a lever
    pub fn lever_range(name: &str) -> Option<LeverRange> {
        Self::LEVERS
            .iter()
            .find(|(lever, _)| *lever == name)
            .map(|(_, range)| *range)
    }

    /// Check that every lever is a finite number
    ///
    /// The model performs no validation of its own, so NaN or infinite
    /// values would otherwise propagate through every simulated year.
    pub fn validate(&self) -> EscmResult<()> {
        match self.levers().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(EscmError::NonFiniteLever {
                name: name.to_string(),
                value,
            }),
            None => Ok(()),
        }
    }

    /// Levers with values outside their documented range
    pub fn out_of_range_levers(&self) -> Vec<(&'static str, FloatValue)> {
        self.levers()
            .zip(Self::LEVERS.iter())
            .filter(|((_, value), (_, (lower, upper)))| *value < *lower || *value > *upper)
            .map(|(lever, _)| lever)
            .collect()
    }

    /// Whether every lever is at its neutral value
    pub fn is_neutral(&self) -> bool {
        self.levers().all(|(_, value)| value == 0.0)
    }
}
