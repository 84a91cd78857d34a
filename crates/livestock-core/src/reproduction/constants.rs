//! Reproductive impact constants.
use super::params::SupplementType;
use crate::animal::AnimalType;

// -- Supplement base effects --

/// Flat improvement from a supplement type: (calving-rate points, months off time-to-calf).
pub fn supplement_base(supplement: SupplementType) -> (f64, f64) {
    match supplement {
        SupplementType::None => (0.0, 0.0),
        SupplementType::Mineral => (3.0, 0.5),
        SupplementType::Protein => (5.0, 1.0),
        SupplementType::Energy => (6.0, 1.2),
        SupplementType::Complete => (10.0, 2.0),
    }
}

// -- Diet effects --

/// Energy effect = scale x sqrt(energy-balance gain), capped.
pub const ENERGY_EFFECT_SCALE: f64 = 3.0;
pub const ENERGY_EFFECT_CAP: f64 = 10.0;

/// Protein gain [percentage points] where the response flattens.
pub const PROTEIN_BREAKPOINT: f64 = 4.0;
pub const PROTEIN_SLOPE_BELOW: f64 = 1.5;
pub const PROTEIN_SLOPE_ABOVE: f64 = 0.5;

/// Weights of the diet effects in the calving-rate improvement.
pub const CALVING_ENERGY_WEIGHT: f64 = 0.5;
pub const CALVING_PROTEIN_WEIGHT: f64 = 1.0;

/// Weights of the diet effects in the time-to-calf improvement.
pub const INTERVAL_ENERGY_WEIGHT: f64 = 0.1;
pub const INTERVAL_PROTEIN_WEIGHT: f64 = 0.05;

// -- Species --

/// Reproductive responsiveness relative to cattle.
pub fn species_factor(animal_type: AnimalType) -> f64 {
    match animal_type {
        AnimalType::Cattle => 1.0,
        AnimalType::Buffalo => 0.85,
    }
}

/// Biological floor on the calving interval [months].
pub fn min_time_to_calf(animal_type: AnimalType) -> f64 {
    match animal_type {
        AnimalType::Cattle => 11.5,
        AnimalType::Buffalo => 13.0,
    }
}

/// Biological ceiling on the calving rate [%].
pub const MAX_CALVING_RATE: f64 = 95.0;

// -- Projection --

pub const PROJECTION_YEARS: usize = 10;

/// Rate constant of the adoption curve 1 - exp(-k * year).
pub const ADOPTION_RATE: f64 = 0.3;

/// Achievable long-run improvement relative to the single-year estimate.
pub const LONG_RUN_MULTIPLIER: f64 = 1.5;

pub const MONTHS_PER_YEAR: f64 = 12.0;

pub const RATE_DECIMALS: i32 = 1;
pub const CALVINGS_DECIMALS: i32 = 2;
pub const ADOPTION_DECIMALS: i32 = 3;
