//! Reproductive impact outputs.
use livestock_macros::Series;
use serde::{Deserialize, Serialize};

use super::constants::{ADOPTION_DECIMALS, CALVINGS_DECIMALS, RATE_DECIMALS};
use super::params::SupplementType;
use crate::animal::AnimalCategory;
use crate::conversion::round_to;

/// One year of the adoption-curve projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Series)]
pub struct ProjectionYear {
    pub year: f64,
    /// Share of the long-run improvement realised [-].
    pub adoption: f64,
    /// [%].
    pub calving_rate: f64,
    /// [months].
    pub time_to_calf: f64,
    pub calvings_per_year: f64,
}

impl ProjectionYear {
    pub fn rounded(&self) -> Self {
        Self {
            year: self.year,
            adoption: round_to(self.adoption, ADOPTION_DECIMALS),
            calving_rate: round_to(self.calving_rate, RATE_DECIMALS),
            time_to_calf: round_to(self.time_to_calf, RATE_DECIMALS),
            calvings_per_year: round_to(self.calvings_per_year, CALVINGS_DECIMALS),
        }
    }
}

/// Breakdown of where the improvement comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactors {
    /// Flat supplement effect on calving rate [points].
    pub supplement_calving_effect: f64,
    /// Flat supplement effect on time-to-calf [months].
    pub supplement_interval_effect: f64,
    /// Energy-balance effect before weighting [points].
    pub energy_impact: f64,
    /// Protein effect before weighting [points].
    pub protein_impact: f64,
    pub species_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReproductiveMetrics {
    pub category: AnimalCategory,
    pub supplement_type: SupplementType,
    pub current_calving_rate: f64,
    pub projected_calving_rate: f64,
    /// Single-year estimate before the ceiling is applied [points].
    pub calving_rate_improvement: f64,
    pub current_time_to_calf: f64,
    pub projected_time_to_calf: f64,
    /// Single-year estimate before the floor is applied [months].
    pub time_to_calf_improvement: f64,
    pub current_calvings_per_year: f64,
    pub projected_calvings_per_year: f64,
    pub contributing_factors: ContributingFactors,
    /// Years 1 through 10.
    pub projections: Vec<ProjectionYear>,
}

impl ReproductiveMetrics {
    /// Projection as columns, one vector per field.
    pub fn projection_series(&self) -> ProjectionYearSeries {
        ProjectionYearSeries::from_rows(&self.projections)
    }

    pub fn rounded(&self) -> Self {
        let f = &self.contributing_factors;
        Self {
            category: self.category,
            supplement_type: self.supplement_type,
            current_calving_rate: round_to(self.current_calving_rate, RATE_DECIMALS),
            projected_calving_rate: round_to(self.projected_calving_rate, RATE_DECIMALS),
            calving_rate_improvement: round_to(self.calving_rate_improvement, RATE_DECIMALS),
            current_time_to_calf: round_to(self.current_time_to_calf, RATE_DECIMALS),
            projected_time_to_calf: round_to(self.projected_time_to_calf, RATE_DECIMALS),
            time_to_calf_improvement: round_to(self.time_to_calf_improvement, CALVINGS_DECIMALS),
            current_calvings_per_year: round_to(self.current_calvings_per_year, CALVINGS_DECIMALS),
            projected_calvings_per_year: round_to(
                self.projected_calvings_per_year,
                CALVINGS_DECIMALS,
            ),
            contributing_factors: ContributingFactors {
                supplement_calving_effect: round_to(f.supplement_calving_effect, CALVINGS_DECIMALS),
                supplement_interval_effect: round_to(
                    f.supplement_interval_effect,
                    CALVINGS_DECIMALS,
                ),
                energy_impact: round_to(f.energy_impact, CALVINGS_DECIMALS),
                protein_impact: round_to(f.protein_impact, CALVINGS_DECIMALS),
                species_factor: f.species_factor,
            },
            projections: self.projections.iter().map(ProjectionYear::rounded).collect(),
        }
    }
}
