//! Buffalo species table and production constants.
use serde::{Deserialize, Serialize};

use super::params::{BuffaloType, Gender, ProductionSystem};
use crate::emissions::outputs::EmissionAdjustment;
use crate::reproduction::params::{DietBalance, SupplementType};

/// Standard lactation length [days].
pub const LACTATION_DAYS: f64 = 305.0;

/// Whole-lactation milk yield range [kg].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LactationRange {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl LactationRange {
    /// Average daily yield over a standard lactation [kg/day].
    pub fn daily_average(&self) -> f64 {
        self.average / LACTATION_DAYS
    }

    /// Whether a 305-day yield [kg] lies within the recorded species range.
    pub fn contains(&self, lactation_yield: f64) -> bool {
        (self.min..=self.max).contains(&lactation_yield)
    }
}

/// Physiological adaptation indices relative to cattle (1.0 = cattle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalAdaptation {
    pub water_requirement: f64,
    pub heat_tolerance: f64,
    pub disease_resistance: f64,
}

/// One row of the species table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuffaloProfile {
    /// [kg].
    pub female_weight: f64,
    /// [kg].
    pub male_weight: f64,
    pub lactation: LactationRange,
    /// [%].
    pub milk_fat_percent: f64,
    /// [%].
    pub calving_rate: f64,
    /// [months].
    pub time_to_calf: f64,
    /// [months].
    pub age_at_first_calving: f64,
    pub adaptation: EnvironmentalAdaptation,
}

impl BuffaloProfile {
    pub fn base_weight(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Female => self.female_weight,
            Gender::Male => self.male_weight,
        }
    }
}

pub const WATER_BUFFALO: BuffaloProfile = BuffaloProfile {
    female_weight: 550.0,
    male_weight: 700.0,
    lactation: LactationRange {
        average: 1800.0,
        min: 1000.0,
        max: 3500.0,
    },
    milk_fat_percent: 7.0,
    calving_rate: 55.0,
    time_to_calf: 16.0,
    age_at_first_calving: 40.0,
    adaptation: EnvironmentalAdaptation {
        water_requirement: 1.4,
        heat_tolerance: 0.75,
        disease_resistance: 1.15,
    },
};

pub const SWAMP_BUFFALO: BuffaloProfile = BuffaloProfile {
    female_weight: 400.0,
    male_weight: 500.0,
    lactation: LactationRange {
        average: 500.0,
        min: 300.0,
        max: 800.0,
    },
    milk_fat_percent: 8.0,
    calving_rate: 50.0,
    time_to_calf: 18.0,
    age_at_first_calving: 48.0,
    adaptation: EnvironmentalAdaptation {
        water_requirement: 1.3,
        heat_tolerance: 0.8,
        disease_resistance: 1.2,
    },
};

pub fn buffalo_profile(buffalo_type: BuffaloType) -> &'static BuffaloProfile {
    match buffalo_type {
        BuffaloType::WaterBuffalo => &WATER_BUFFALO,
        BuffaloType::SwampBuffalo => &SWAMP_BUFFALO,
    }
}

// -- Adjustments relative to cattle --

pub const EMISSION_ADJUSTMENT: EmissionAdjustment = EmissionAdjustment {
    enteric: 1.15,
    manure_ch4: 1.10,
    manure_n2o: 0.95,
};

pub const ROUGHAGE_UTILIZATION: f64 = 1.2;
pub const CONCENTRATE_RESPONSE: f64 = 0.85;

// -- Growth --

/// Upper age bound of the growing bracket [months].
pub const GROWING_AGE: f64 = 24.0;
/// Age from which an animal counts as mature [months].
pub const MATURE_AGE: f64 = 36.0;

/// Live-weight gain by age bracket and management [kg/day].
pub fn weight_gain(age_months: f64, system: ProductionSystem) -> f64 {
    let by_system = if age_months < GROWING_AGE {
        [0.6, 0.45, 0.3]
    } else if age_months < MATURE_AGE {
        [0.35, 0.25, 0.15]
    } else {
        [0.1, 0.05, 0.0]
    };
    match system {
        ProductionSystem::Intensive => by_system[0],
        ProductionSystem::SemiIntensive => by_system[1],
        ProductionSystem::Traditional => by_system[2],
    }
}

// -- Reproduction --

/// Baseline and improved diet assumed for each production system.
pub fn diet_pair(system: ProductionSystem) -> (DietBalance, DietBalance) {
    match system {
        ProductionSystem::Intensive => (DietBalance::new(0.0, 12.0), DietBalance::new(8.0, 16.0)),
        ProductionSystem::SemiIntensive => {
            (DietBalance::new(-2.0, 10.0), DietBalance::new(4.0, 13.0))
        }
        ProductionSystem::Traditional => (DietBalance::new(-5.0, 7.0), DietBalance::new(0.0, 9.0)),
    }
}

pub fn supplement_for(system: ProductionSystem) -> SupplementType {
    match system {
        ProductionSystem::Intensive => SupplementType::Complete,
        ProductionSystem::SemiIntensive => SupplementType::Protein,
        ProductionSystem::Traditional => SupplementType::Mineral,
    }
}

// -- Milk --

/// 4 % fat-corrected milk: FCM = milk x (0.4 + 0.15 x fat%).
pub const FCM_INTERCEPT: f64 = 0.4;
pub const FCM_FAT_SLOPE: f64 = 0.15;

// -- Meat --

/// Carcass weight as a share of live weight [-].
pub const DRESSING_FRACTION: f64 = 0.48;

// -- Draft --

/// Sustained drawbar pull as a share of body weight [-].
pub const DRAFT_PULL_FRACTION: f64 = 0.10;
/// [m/s2].
pub const GRAVITY: f64 = 9.81;
/// Walking speed under load [m/s].
pub const DRAFT_SPEED: f64 = 0.8;
/// [hours/day].
pub const WORKING_HOURS: f64 = 6.0;
/// [MJ/kWh].
pub const MJ_PER_KWH: f64 = 3.6;

// -- Display precision --

pub const YIELD_DECIMALS: i32 = 2;
pub const RATIO_DECIMALS: i32 = 2;
pub const PERCENT_DECIMALS: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_gain_brackets() {
        assert_eq!(weight_gain(12.0, ProductionSystem::Intensive), 0.6);
        assert_eq!(weight_gain(24.0, ProductionSystem::SemiIntensive), 0.25);
        assert_eq!(weight_gain(35.9, ProductionSystem::Traditional), 0.15);
        assert_eq!(weight_gain(36.0, ProductionSystem::Traditional), 0.0);
    }

    #[test]
    fn improved_diet_is_never_worse() {
        for system in [
            ProductionSystem::Intensive,
            ProductionSystem::SemiIntensive,
            ProductionSystem::Traditional,
        ] {
            let (base, improved) = diet_pair(system);
            assert!(improved.energy_balance >= base.energy_balance);
            assert!(improved.protein_percent >= base.protein_percent);
        }
    }

    #[test]
    fn swamp_smaller_than_water() {
        assert!(SWAMP_BUFFALO.female_weight < WATER_BUFFALO.female_weight);
        assert!(SWAMP_BUFFALO.lactation.average < WATER_BUFFALO.lactation.average);
    }

    #[test]
    fn lactation_range_is_inclusive() {
        let range = WATER_BUFFALO.lactation;
        assert!(range.contains(range.min));
        assert!(range.contains(range.average));
        assert!(range.contains(range.max));
        assert!(!range.contains(range.max + 1.0));
        assert!(!SWAMP_BUFFALO.lactation.contains(1800.0));
    }
}
