/// Energy engine inputs.
///
/// Only the category and body weight are required; everything else starts
/// from the engine defaults (no gain, no milk, species fat %, not pregnant,
/// activity 1.0, 65 % digestible mixed diet).
use serde::{Deserialize, Serialize};

use super::constants::species_energy;
use crate::animal::{AnimalCategory, AnimalType, DietInfo, DIGESTIBILITY_BOUNDS};
use crate::traits::{Bounds, ModelParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyParams {
    pub category: AnimalCategory,
    /// Live weight [kg].
    pub body_weight: f64,
    /// Live-weight gain [kg / day].
    #[serde(default)]
    pub weight_gain: f64,
    /// Milk yield [kg / day].
    #[serde(default)]
    pub milk_production: f64,
    /// Milk fat [%]. `None` uses the species default.
    #[serde(default)]
    pub milk_fat_percent: Option<f64>,
    #[serde(default)]
    pub is_pregnant: bool,
    /// Multiplier on maintenance for grazing/walking animals [-].
    #[serde(default = "default_activity_factor")]
    pub activity_factor: f64,
    #[serde(default)]
    pub diet: DietInfo,
}

fn default_activity_factor() -> f64 {
    1.0
}

impl EnergyParams {
    pub fn new(category: AnimalCategory, body_weight: f64) -> Self {
        Self {
            category,
            body_weight,
            weight_gain: 0.0,
            milk_production: 0.0,
            milk_fat_percent: None,
            is_pregnant: false,
            activity_factor: default_activity_factor(),
            diet: DietInfo::default(),
        }
    }

    pub fn animal_type(&self) -> AnimalType {
        self.category.animal_type()
    }

    /// Milk fat with the species default applied.
    pub fn resolved_fat_percent(&self) -> f64 {
        self.milk_fat_percent
            .unwrap_or(species_energy(self.animal_type()).default_fat_percent)
    }
}

impl ModelParams for EnergyParams {
    const PARAM_NAMES: &'static [&'static str] = &[
        "body_weight",
        "weight_gain",
        "milk_production",
        "milk_fat_percent",
        "activity_factor",
        "diet_info.digestibility",
    ];
    const PARAM_BOUNDS: &'static [Bounds] = &[
        Bounds::positive(),
        Bounds::non_negative(),
        Bounds::non_negative(),
        Bounds::closed(0.0, 100.0),
        Bounds::positive(),
        DIGESTIBILITY_BOUNDS,
    ];

    fn to_array(&self) -> Vec<f64> {
        vec![
            self.body_weight,
            self.weight_gain,
            self.milk_production,
            self.resolved_fat_percent(),
            self.activity_factor,
            self.diet.digestibility,
        ]
    }
}
