//! Energy engine coefficients.
//!
//! Lookup tables keyed by species, category and diet bucket. Cattle values
//! follow IPCC 2006 Vol. 4 Ch. 10; buffalo values are the river/swamp
//! adaptations used throughout this crate.
use crate::animal::{AnimalCategory, AnimalType, DietType};

// -- Maintenance --

/// Exponent on body weight for metabolic weight (BW^0.75).
pub const METABOLIC_EXPONENT: f64 = 0.75;

/// Maintenance coefficient Cfi [MJ / day / kg^0.75].
pub fn maintenance_coefficient(category: AnimalCategory) -> f64 {
    match category {
        AnimalCategory::Dairy => 0.386,
        AnimalCategory::Beef => 0.322,
        AnimalCategory::Water => 0.370,
        AnimalCategory::Swamp => 0.350,
    }
}

// -- Lactation --

/// Energy per kg of milk at the reference fat percentage [MJ / kg].
pub fn lactation_coefficient(category: AnimalCategory) -> f64 {
    match category {
        AnimalCategory::Dairy => 3.07,
        AnimalCategory::Beef => 2.90,
        AnimalCategory::Water => 4.60,
        AnimalCategory::Swamp => 4.40,
    }
}

/// Per-species growth, pregnancy and milk-fat constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesEnergy {
    /// Net energy per kg of live-weight gain [MJ / kg].
    pub growth_coefficient: f64,
    /// Flat net energy for pregnancy [MJ / day].
    pub pregnancy_energy: f64,
    /// Milk energy formula: intercept + slope x fat%.
    pub fat_intercept: f64,
    pub fat_slope: f64,
    /// Fat percentage at which the lactation coefficient is defined.
    pub reference_fat_percent: f64,
    /// Fat percentage assumed when the caller leaves it unset.
    pub default_fat_percent: f64,
}

pub const CATTLE: SpeciesEnergy = SpeciesEnergy {
    growth_coefficient: 22.02,
    pregnancy_energy: 2.8,
    fat_intercept: 1.47,
    fat_slope: 0.40,
    reference_fat_percent: 4.0,
    default_fat_percent: 4.0,
};

pub const BUFFALO: SpeciesEnergy = SpeciesEnergy {
    growth_coefficient: 21.0,
    pregnancy_energy: 3.2,
    fat_intercept: 1.47,
    fat_slope: 0.45,
    reference_fat_percent: 7.0,
    default_fat_percent: 7.0,
};

pub fn species_energy(animal_type: AnimalType) -> &'static SpeciesEnergy {
    match animal_type {
        AnimalType::Cattle => &CATTLE,
        AnimalType::Buffalo => &BUFFALO,
    }
}

// -- Net-to-gross conversion --

/// REM = a + b*DE + c*DE^2 + d/DE, with DE in percent.
pub const REM_COEFFS: [f64; 4] = [1.123, -4.092e-3, 1.126e-5, -25.4];

/// REG = a + b*DE + c*DE^2 + d/DE, with DE in percent.
pub const REG_COEFFS: [f64; 4] = [1.164, -5.160e-3, 1.308e-5, -37.4];

/// Net-to-gross efficiency for lactation [-].
pub const LACTATION_EFFICIENCY: f64 = 0.65;

/// Net-to-gross efficiency for pregnancy [-].
pub const PREGNANCY_EFFICIENCY: f64 = 0.13;

// -- Methane and feed --

/// Methane conversion factor Ym [% of gross energy].
pub fn methane_conversion_factor(animal_type: AnimalType, diet: DietType) -> f64 {
    match (animal_type, diet) {
        (AnimalType::Cattle, DietType::HighForage) => 6.5,
        (AnimalType::Cattle, DietType::Mixed) => 6.0,
        (AnimalType::Cattle, DietType::HighGrain) => 4.0,
        (AnimalType::Buffalo, DietType::HighForage) => 7.5,
        (AnimalType::Buffalo, DietType::Mixed) => 6.9,
        (AnimalType::Buffalo, DietType::HighGrain) => 4.8,
    }
}

/// Gross energy of dry matter [MJ / kg DM]; scaled by digestibility as a
/// linear proxy for dietary energy density.
pub const GROSS_ENERGY_PER_KG_DM: f64 = 18.45;

// -- Display precision --

pub const ENERGY_DECIMALS: i32 = 1;
pub const RATIO_DECIMALS: i32 = 3;
pub const DAILY_METHANE_DECIMALS: i32 = 3;
pub const FEED_DECIMALS: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffalo_ym_higher_than_cattle_in_every_bucket() {
        for diet in [DietType::HighForage, DietType::Mixed, DietType::HighGrain] {
            assert!(
                methane_conversion_factor(AnimalType::Buffalo, diet)
                    > methane_conversion_factor(AnimalType::Cattle, diet)
            );
        }
    }

    #[test]
    fn forage_diets_have_highest_ym() {
        for species in [AnimalType::Cattle, AnimalType::Buffalo] {
            let forage = methane_conversion_factor(species, DietType::HighForage);
            let mixed = methane_conversion_factor(species, DietType::Mixed);
            let grain = methane_conversion_factor(species, DietType::HighGrain);
            assert!(forage > mixed && mixed > grain);
        }
    }

    #[test]
    fn default_fat_matches_reference() {
        assert_eq!(CATTLE.default_fat_percent, 4.0);
        assert_eq!(BUFFALO.default_fat_percent, 7.0);
    }
}
