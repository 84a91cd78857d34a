//! JSON scenario files.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use livestock_core::buffalo::params::{BuffaloParams, CattleParams};
use livestock_core::emissions::params::{EmissionsParams, EntericInput, FeedSystem, ManureSystem};
use livestock_core::energy::params::EnergyParams;
use livestock_core::energy::run as energy;
use livestock_core::reproduction::params::ReproductiveParams;
use livestock_core::traits::ModelParams;

/// Emissions scenario: the animal is run through the energy engine first.
///
/// System names are free text; unknown names fall back to dry_lot manure
/// and intensive feed factors.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmissionsScenario {
    pub animal: EnergyParams,
    pub manure_system: String,
    pub production_system: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareScenario {
    pub buffalo: BuffaloParams,
    /// Defaults to the cattle profile equivalent to the buffalo.
    #[serde(default)]
    pub cattle: Option<CattleParams>,
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    let value = serde_json::from_str(&text)
        .with_context(|| format!("invalid scenario {}", path.display()))?;
    debug!("loaded scenario {}", path.display());
    Ok(value)
}

pub fn load_energy(path: &Path) -> Result<EnergyParams> {
    load(path)
}

pub fn load_reproduction(path: &Path) -> Result<ReproductiveParams> {
    load(path)
}

pub fn load_buffalo(path: &Path) -> Result<BuffaloParams> {
    load(path)
}

pub fn load_emissions(path: &Path) -> Result<EmissionsParams> {
    let scenario: EmissionsScenario = load(path)?;
    emissions_params(&scenario)
}

/// Resolve an emissions scenario into aggregator parameters.
///
/// The enteric figures come from the unrounded energy chain.
pub fn emissions_params(scenario: &EmissionsScenario) -> Result<EmissionsParams> {
    let animal = &scenario.animal;
    animal.validate().context("invalid animal in emissions scenario")?;
    let enteric = energy::evaluate(animal);
    Ok(EmissionsParams::new(
        animal.animal_type(),
        EntericInput::from(&enteric),
        ManureSystem::from_str_lossy(&scenario.manure_system),
        animal.body_weight,
        FeedSystem::from_str_lossy(&scenario.production_system),
    ))
}

pub fn load_compare(path: &Path) -> Result<(BuffaloParams, CattleParams)> {
    let scenario: CompareScenario = load(path)?;
    let cattle = match scenario.cattle {
        Some(c) => c,
        None => {
            let gain = livestock_core::buffalo::constants::weight_gain(
                scenario.buffalo.age_months,
                scenario.buffalo.production_system,
            );
            CattleParams::equivalent_to(&scenario.buffalo, gain)
        }
    };
    Ok((scenario.buffalo, cattle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use livestock_core::animal::{AnimalCategory, DietInfo, DietType};

    fn scenario(animal: EnergyParams) -> EmissionsScenario {
        EmissionsScenario {
            animal,
            manure_system: "pasture".to_string(),
            production_system: "grazing".to_string(),
        }
    }

    #[test]
    fn enteric_input_keeps_full_precision() {
        let mut animal = EnergyParams::new(AnimalCategory::Beef, 437.0);
        animal.weight_gain = 0.83;
        animal.diet = DietInfo::new(0.63, DietType::HighForage);
        let expected = energy::evaluate(&animal);

        let p = emissions_params(&scenario(animal)).unwrap();
        assert_eq!(p.enteric.methane_annual, expected.methane_annual);
        assert_eq!(p.enteric.methane_annual_co2e, expected.methane_annual_co2e);
        assert_eq!(p.enteric.daily_feed_intake, expected.daily_feed_intake);
    }

    #[test]
    fn invalid_animal_is_rejected() {
        let mut animal = EnergyParams::new(AnimalCategory::Dairy, 600.0);
        animal.diet = DietInfo::new(0.30, DietType::HighForage);
        assert!(emissions_params(&scenario(animal)).is_err());
    }
}
