//! Example scenario files for `livestock-ghg sample <kind>`.
use anyhow::Result;

use livestock_core::animal::{AnimalCategory, DietInfo, DietType};
use livestock_core::buffalo::params::{
    BuffaloParams, BuffaloType, CattleParams, CattleReproduction, Gender, ProductionSystem,
};
use livestock_core::emissions::params::{FeedSystem, ManureSystem};
use livestock_core::energy::params::EnergyParams;
use livestock_core::reproduction::params::{DietBalance, ReproductiveParams, SupplementType};

use crate::scenario::{CompareScenario, EmissionsScenario};

fn dairy_cow() -> EnergyParams {
    let mut p = EnergyParams::new(AnimalCategory::Dairy, 600.0);
    p.milk_production = 25.0;
    p.diet = DietInfo::new(0.68, DietType::Mixed);
    p
}

fn water_buffalo() -> BuffaloParams {
    let mut p = BuffaloParams::new(BuffaloType::WaterBuffalo, Gender::Female, 48.0);
    p.body_weight = Some(650.0);
    p.production_system = ProductionSystem::Traditional;
    p.is_lactating = true;
    p.milk_production = Some(5.0);
    p.diet = DietInfo::new(0.60, DietType::HighForage);
    p.manure_system = ManureSystem::DryLot;
    p
}

pub fn energy() -> Result<String> {
    Ok(serde_json::to_string_pretty(&dairy_cow())?)
}

pub fn reproduction() -> Result<String> {
    let p = ReproductiveParams {
        category: AnimalCategory::Water,
        current_calving_rate: 55.0,
        current_time_to_calf: 16.0,
        baseline_diet: DietBalance::new(-2.0, 10.0),
        improved_diet: DietBalance::new(4.0, 13.0),
        supplement_type: SupplementType::Protein,
    };
    Ok(serde_json::to_string_pretty(&p)?)
}

pub fn emissions() -> Result<String> {
    let s = EmissionsScenario {
        animal: dairy_cow(),
        manure_system: ManureSystem::LiquidSlurry.to_string(),
        production_system: FeedSystem::Mixed.to_string(),
    };
    Ok(serde_json::to_string_pretty(&s)?)
}

pub fn buffalo() -> Result<String> {
    Ok(serde_json::to_string_pretty(&water_buffalo())?)
}

pub fn compare() -> Result<String> {
    let mut energy = EnergyParams::new(AnimalCategory::Dairy, 550.0);
    energy.milk_production = 15.0;
    energy.diet = DietInfo::new(0.60, DietType::HighForage);
    let mut cattle = CattleParams::new(energy, ManureSystem::DryLot, FeedSystem::Grazing);
    cattle.reproduction = Some(CattleReproduction {
        calving_rate: 60.0,
        time_to_calf: 14.0,
        baseline_diet: DietBalance::new(-5.0, 7.0),
        improved_diet: DietBalance::new(0.0, 9.0),
        supplement_type: SupplementType::Mineral,
    });
    let s = CompareScenario {
        buffalo: water_buffalo(),
        cattle: Some(cattle),
    };
    Ok(serde_json::to_string_pretty(&s)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::emissions_params;

    #[test]
    fn samples_parse_back() {
        let _: EnergyParams = serde_json::from_str(&energy().unwrap()).unwrap();
        let _: ReproductiveParams = serde_json::from_str(&reproduction().unwrap()).unwrap();
        let _: BuffaloParams = serde_json::from_str(&buffalo().unwrap()).unwrap();
        let c: CompareScenario = serde_json::from_str(&compare().unwrap()).unwrap();
        assert!(c.cattle.is_some());
    }

    #[test]
    fn emissions_sample_resolves() {
        let s: EmissionsScenario = serde_json::from_str(&emissions().unwrap()).unwrap();
        let p = emissions_params(&s).unwrap();
        assert_eq!(p.manure_system, ManureSystem::LiquidSlurry);
        assert_eq!(p.feed_system, FeedSystem::Mixed);
    }

    #[test]
    fn unknown_manure_system_falls_back() {
        let s = EmissionsScenario {
            animal: dairy_cow(),
            manure_system: "lagoon".to_string(),
            production_system: "feedlot".to_string(),
        };
        let p = emissions_params(&s).unwrap();
        assert_eq!(p.manure_system, ManureSystem::DryLot);
        assert_eq!(p.feed_system, FeedSystem::Intensive);
    }
}
