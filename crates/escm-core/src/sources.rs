//! Energy sources and per-source tables
//!
//! The model tracks a fixed set of seven primary-energy sources. Any quantity
//! that is defined per source (energy supply, growth rates, emission factors)
//! is stored in a [`SourceTable`], a record with one named field per source.
//! [`EnergySource::ALL`] gives the canonical iteration order used for every
//! output row.

use crate::errors::EscmError;
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A primary-energy source
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Coal,
    Oil,
    Gas,
    Renewables,
    Bio,
    Nuclear,
    /// Synthetic source for emerging technologies.
    ///
    /// Has no baseline supply and only grows through subsidy driven creation.
    NewTech,
}

impl EnergySource {
    /// All sources in the fixed order used for iteration and output
    pub const ALL: [EnergySource; 7] = [
        EnergySource::Coal,
        EnergySource::Oil,
        EnergySource::Gas,
        EnergySource::Renewables,
        EnergySource::Bio,
        EnergySource::Nuclear,
        EnergySource::NewTech,
    ];

    /// Key used for this source in configuration files and outputs
    pub fn name(&self) -> &'static str {
        match self {
            EnergySource::Coal => "coal",
            EnergySource::Oil => "oil",
            EnergySource::Gas => "gas",
            EnergySource::Renewables => "renewables",
            EnergySource::Bio => "bio",
            EnergySource::Nuclear => "nuclear",
            EnergySource::NewTech => "new_tech",
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnergySource {
    type Err = EscmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnergySource::ALL
            .iter()
            .find(|source| source.name() == s)
            .copied()
            .ok_or_else(|| EscmError::UnknownEnergySource(s.to_string()))
    }
}

/// One value for each [`EnergySource`]
///
/// Used for the energy mix (EJ / yr), annual growth rates (1 / yr) and
/// emission factors (GtCO2 / EJ).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceTable {
    pub coal: FloatValue,
    pub oil: FloatValue,
    pub gas: FloatValue,
    pub renewables: FloatValue,
    pub bio: FloatValue,
    pub nuclear: FloatValue,
    pub new_tech: FloatValue,
}

/// Energy supply per source (EJ / yr)
pub type EnergyMix = SourceTable;

impl SourceTable {
    /// Build a table by evaluating `f` for every source
    pub fn from_fn(mut f: impl FnMut(EnergySource) -> FloatValue) -> Self {
        Self {
            coal: f(EnergySource::Coal),
            oil: f(EnergySource::Oil),
            gas: f(EnergySource::Gas),
            renewables: f(EnergySource::Renewables),
            bio: f(EnergySource::Bio),
            nuclear: f(EnergySource::Nuclear),
            new_tech: f(EnergySource::NewTech),
        }
    }

    pub fn get(&self, source: EnergySource) -> FloatValue {
        match source {
            EnergySource::Coal => self.coal,
            EnergySource::Oil => self.oil,
            EnergySource::Gas => self.gas,
            EnergySource::Renewables => self.renewables,
            EnergySource::Bio => self.bio,
            EnergySource::Nuclear => self.nuclear,
            EnergySource::NewTech => self.new_tech,
        }
    }

    pub fn get_mut(&mut self, source: EnergySource) -> &mut FloatValue {
        match source {
            EnergySource::Coal => &mut self.coal,
            EnergySource::Oil => &mut self.oil,
            EnergySource::Gas => &mut self.gas,
            EnergySource::Renewables => &mut self.renewables,
            EnergySource::Bio => &mut self.bio,
            EnergySource::Nuclear => &mut self.nuclear,
            EnergySource::NewTech => &mut self.new_tech,
        }
    }

    /// Iterate over `(source, value)` pairs in [`EnergySource::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (EnergySource, FloatValue)> + '_ {
        EnergySource::ALL
            .iter()
            .map(move |source| (*source, self.get(*source)))
    }

    /// Apply `f` to every value, keeping the source association
    pub fn map(&self, mut f: impl FnMut(EnergySource, FloatValue) -> FloatValue) -> Self {
        Self::from_fn(|source| f(source, self.get(source)))
    }

    /// Element-wise product with another table, summed over all sources
    pub fn dot(&self, other: &SourceTable) -> FloatValue {
        self.iter()
            .map(|(source, value)| value * other.get(source))
            .sum()
    }

    pub fn sum(&self) -> FloatValue {
        self.iter().map(|(_, value)| value).sum()
    }

    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, value)| value.is_finite())
    }
}

/// A partially specified [`SourceTable`]
///
/// Configuration files may give only some sources of a table. The missing
/// entries are filled from a base table with [`SourceOverrides::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceOverrides {
    pub coal: Option<FloatValue>,
    pub oil: Option<FloatValue>,
    pub gas: Option<FloatValue>,
    pub renewables: Option<FloatValue>,
    pub bio: Option<FloatValue>,
    pub nuclear: Option<FloatValue>,
    pub new_tech: Option<FloatValue>,
}

impl SourceOverrides {
    fn get(&self, source: EnergySource) -> Option<FloatValue> {
        match source {
            EnergySource::Coal => self.coal,
            EnergySource::Oil => self.oil,
            EnergySource::Gas => self.gas,
            EnergySource::Renewables => self.renewables,
            EnergySource::Bio => self.bio,
            EnergySource::Nuclear => self.nuclear,
            EnergySource::NewTech => self.new_tech,
        }
    }

    /// Replace the entries of `base` that are given here
    pub fn apply(&self, mut base: SourceTable) -> SourceTable {
        for source in EnergySource::ALL {
            if let Some(value) = self.get(source) {
                *base.get_mut(source) = value;
            }
        }
        base
    }
}
