//! Emission factor tables for manure and feed production.
use super::params::{FeedSystem, ManureSystem};
use crate::animal::AnimalType;

// -- Manure methane --

/// Body weight at which the manure CH4 factors are defined [kg].
pub const REFERENCE_BODY_WEIGHT: f64 = 500.0;

/// Manure CH4 emission factor at the reference weight [kg CH4 / head / year].
pub fn manure_methane_factor(animal_type: AnimalType, system: ManureSystem) -> f64 {
    match (animal_type, system) {
        (AnimalType::Cattle, ManureSystem::LiquidSlurry) => 35.0,
        (AnimalType::Cattle, ManureSystem::SolidStorage) => 8.0,
        (AnimalType::Cattle, ManureSystem::DryLot) => 5.0,
        (AnimalType::Cattle, ManureSystem::Pasture) => 2.0,
        (AnimalType::Cattle, ManureSystem::DailySpread) => 1.5,
        (AnimalType::Cattle, ManureSystem::AnaerobicDigestion) => 4.0,
        (AnimalType::Buffalo, ManureSystem::LiquidSlurry) => 40.0,
        (AnimalType::Buffalo, ManureSystem::SolidStorage) => 10.0,
        (AnimalType::Buffalo, ManureSystem::DryLot) => 6.0,
        (AnimalType::Buffalo, ManureSystem::Pasture) => 2.5,
        (AnimalType::Buffalo, ManureSystem::DailySpread) => 2.0,
        (AnimalType::Buffalo, ManureSystem::AnaerobicDigestion) => 5.0,
    }
}

// -- Manure nitrous oxide --

/// Nitrogen excretion [kg N / 1000 kg body weight / day].
pub fn nitrogen_excretion_rate(animal_type: AnimalType) -> f64 {
    match animal_type {
        AnimalType::Cattle => 0.44,
        AnimalType::Buffalo => 0.32,
    }
}

/// Direct N2O emission factor EF3 [kg N2O-N / kg N excreted].
pub fn n2o_emission_factor(system: ManureSystem) -> f64 {
    match system {
        ManureSystem::LiquidSlurry => 0.005,
        ManureSystem::SolidStorage => 0.010,
        ManureSystem::DryLot => 0.020,
        ManureSystem::Pasture => 0.020,
        ManureSystem::DailySpread => 0.0,
        ManureSystem::AnaerobicDigestion => 0.0006,
    }
}

// -- Feed production --

/// Embodied emissions of feed [kg CO2e / kg DM].
pub fn feed_emission_factor(system: FeedSystem) -> f64 {
    match system {
        FeedSystem::Grazing => 0.5,
        FeedSystem::Mixed => 0.8,
        FeedSystem::Intensive => 1.2,
    }
}

pub const TOTAL_DECIMALS: i32 = 1;
pub const DETAIL_DECIMALS: i32 = 2;
pub const FACTOR_DECIMALS: i32 = 4;
