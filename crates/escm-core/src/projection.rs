//! Model output
//!
//! A [`Projection`] is the complete year-indexed result of one model run.
//! Every series is index-aligned with [`Projection::years`]. Projections are
//! assembled row by row with a [`ProjectionBuilder`] and are immutable once
//! built.

use crate::sources::{EnergyMix, EnergySource};
use crate::{FloatValue, Year};
use serde::{Deserialize, Serialize};

/// The state of the model recorded for a single year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: Year,
    /// Energy supply after the year's update
    /// unit: EJ / yr
    pub energy: EnergyMix,
    /// Net emissions including land use and removals
    /// unit: GtCO2 / yr
    pub emissions: FloatValue,
    /// Atmospheric CO2 concentration
    /// unit: ppm
    pub co2_concentration: FloatValue,
    /// Reported global temperature anomaly
    /// unit: degC
    pub global_temp: FloatValue,
}

/// Time series produced by a model run
///
/// The serialised field names are the ones used by the simulation API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    years: Vec<Year>,
    energy_coal: Vec<FloatValue>,
    energy_oil: Vec<FloatValue>,
    energy_gas: Vec<FloatValue>,
    energy_renewables: Vec<FloatValue>,
    energy_bio: Vec<FloatValue>,
    energy_nuclear: Vec<FloatValue>,
    energy_new_tech: Vec<FloatValue>,
    emissions: Vec<FloatValue>,
    co2_concentration: Vec<FloatValue>,
    global_temp: Vec<FloatValue>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Energy supply of a single source for every year (EJ / yr)
    pub fn energy(&self, source: EnergySource) -> &[FloatValue] {
        match source {
            EnergySource::Coal => &self.energy_coal,
            EnergySource::Oil => &self.energy_oil,
            EnergySource::Gas => &self.energy_gas,
            EnergySource::Renewables => &self.energy_renewables,
            EnergySource::Bio => &self.energy_bio,
            EnergySource::Nuclear => &self.energy_nuclear,
            EnergySource::NewTech => &self.energy_new_tech,
        }
    }

    /// Net annual emissions (GtCO2 / yr)
    pub fn emissions(&self) -> &[FloatValue] {
        &self.emissions
    }

    /// Atmospheric CO2 concentration (ppm)
    pub fn co2_concentration(&self) -> &[FloatValue] {
        &self.co2_concentration
    }

    /// Reported temperature anomaly (degC)
    pub fn global_temp(&self) -> &[FloatValue] {
        &self.global_temp
    }

    pub fn row(&self, index: usize) -> Option<ProjectionRow> {
        let year = *self.years.get(index)?;
        Some(ProjectionRow {
            year,
            energy: EnergyMix::from_fn(|source| self.energy(source)[index]),
            emissions: self.emissions[index],
            co2_concentration: self.co2_concentration[index],
            global_temp: self.global_temp[index],
        })
    }

    pub fn row_for_year(&self, year: Year) -> Option<ProjectionRow> {
        let index = self.years.iter().position(|y| *y == year)?;
        self.row(index)
    }

    pub fn last(&self) -> Option<ProjectionRow> {
        self.len().checked_sub(1).and_then(|index| self.row(index))
    }

    pub fn rows(&self) -> impl Iterator<Item = ProjectionRow> + '_ {
        (0..self.len()).filter_map(move |index| self.row(index))
    }

    /// Headline figures for the projection
    ///
    /// Returns `None` for an empty projection.
    pub fn summary(&self) -> Option<ProjectionSummary> {
        let last = self.last()?;
        let (peak_index, peak_temp) = self
            .global_temp
            .iter()
            .copied()
            .enumerate()
            .fold((0, FloatValue::NEG_INFINITY), |(best_i, best), (i, t)| {
                if t > best {
                    (i, t)
                } else {
                    (best_i, best)
                }
            });

        Some(ProjectionSummary {
            final_year: last.year,
            final_temperature: last.global_temp,
            final_co2_concentration: last.co2_concentration,
            final_emissions: last.emissions,
            final_energy_total: last.energy.sum(),
            peak_temperature: peak_temp,
            peak_temperature_year: self.years[peak_index],
            cumulative_emissions: self.emissions.iter().sum(),
        })
    }
}

/// Headline figures derived from a [`Projection`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub final_year: Year,
    /// unit: degC
    pub final_temperature: FloatValue,
    /// unit: ppm
    pub final_co2_concentration: FloatValue,
    /// unit: GtCO2 / yr
    pub final_emissions: FloatValue,
    /// unit: EJ / yr
    pub final_energy_total: FloatValue,
    /// unit: degC
    pub peak_temperature: FloatValue,
    pub peak_temperature_year: Year,
    /// Sum of net annual emissions over the whole projection
    /// unit: GtCO2
    pub cumulative_emissions: FloatValue,
}

/// Assembles a [`Projection`] one year at a time
#[derive(Debug, Default)]
pub struct ProjectionBuilder {
    projection: Projection,
}

impl ProjectionBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            projection: Projection {
                years: Vec::with_capacity(capacity),
                energy_coal: Vec::with_capacity(capacity),
                energy_oil: Vec::with_capacity(capacity),
                energy_gas: Vec::with_capacity(capacity),
                energy_renewables: Vec::with_capacity(capacity),
                energy_bio: Vec::with_capacity(capacity),
                energy_nuclear: Vec::with_capacity(capacity),
                energy_new_tech: Vec::with_capacity(capacity),
                emissions: Vec::with_capacity(capacity),
                co2_concentration: Vec::with_capacity(capacity),
                global_temp: Vec::with_capacity(capacity),
            },
        }
    }

    /// Append the next year of output
    pub fn push(&mut self, row: ProjectionRow) {
        let projection = &mut self.projection;

        projection.years.push(row.year);
        projection.energy_coal.push(row.energy.coal);
        projection.energy_oil.push(row.energy.oil);
        projection.energy_gas.push(row.energy.gas);
        projection.energy_renewables.push(row.energy.renewables);
        projection.energy_bio.push(row.energy.bio);
        projection.energy_nuclear.push(row.energy.nuclear);
        projection.energy_new_tech.push(row.energy.new_tech);
        projection.emissions.push(row.emissions);
        projection.co2_concentration.push(row.co2_concentration);
        projection.global_temp.push(row.global_temp);
    }

    pub fn finish(self) -> Projection {
        self.projection
    }
}
