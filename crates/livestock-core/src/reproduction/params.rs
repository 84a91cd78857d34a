/// Reproductive impact inputs.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::animal::{AnimalCategory, AnimalType};
use crate::error::ModelError;
use crate::traits::{Bounds, ModelParams};

/// Supplementation programme applied alongside the improved diet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementType {
    #[default]
    None,
    Mineral,
    Protein,
    Energy,
    Complete,
}

impl SupplementType {
    pub fn as_str(self) -> &'static str {
        match self {
            SupplementType::None => "none",
            SupplementType::Mineral => "mineral",
            SupplementType::Protein => "protein",
            SupplementType::Energy => "energy",
            SupplementType::Complete => "complete",
        }
    }
}

impl FromStr for SupplementType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SupplementType::None),
            "mineral" => Ok(SupplementType::Mineral),
            "protein" => Ok(SupplementType::Protein),
            "energy" => Ok(SupplementType::Energy),
            "complete" => Ok(SupplementType::Complete),
            other => Err(ModelError::unknown("supplement type", other)),
        }
    }
}

impl fmt::Display for SupplementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutritional status of a diet, as seen by the reproductive model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DietBalance {
    /// Net energy balance [MJ/day]; negative means the animal is in deficit.
    pub energy_balance: f64,
    /// Crude protein [% of DM].
    pub protein_percent: f64,
}

impl DietBalance {
    pub const fn new(energy_balance: f64, protein_percent: f64) -> Self {
        Self {
            energy_balance,
            protein_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReproductiveParams {
    pub category: AnimalCategory,
    /// Current calving rate [%].
    pub current_calving_rate: f64,
    /// Current calving interval [months].
    pub current_time_to_calf: f64,
    pub baseline_diet: DietBalance,
    pub improved_diet: DietBalance,
    #[serde(default)]
    pub supplement_type: SupplementType,
}

impl ReproductiveParams {
    pub fn animal_type(&self) -> AnimalType {
        self.category.animal_type()
    }
}

impl ModelParams for ReproductiveParams {
    const PARAM_NAMES: &'static [&'static str] = &[
        "current_calving_rate",
        "current_time_to_calf",
        "baseline_diet.energy_balance",
        "baseline_diet.protein_percent",
        "improved_diet.energy_balance",
        "improved_diet.protein_percent",
    ];
    const PARAM_BOUNDS: &'static [Bounds] = &[
        Bounds::closed(0.0, 100.0),
        Bounds::positive(),
        Bounds::closed(f64::NEG_INFINITY, f64::INFINITY),
        Bounds::closed(0.0, 100.0),
        Bounds::closed(f64::NEG_INFINITY, f64::INFINITY),
        Bounds::closed(0.0, 100.0),
    ];

    fn to_array(&self) -> Vec<f64> {
        vec![
            self.current_calving_rate,
            self.current_time_to_calf,
            self.baseline_diet.energy_balance,
            self.baseline_diet.protein_percent,
            self.improved_diet.energy_balance,
            self.improved_diet.protein_percent,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ReproductiveParams {
        ReproductiveParams {
            category: AnimalCategory::Dairy,
            current_calving_rate: 70.0,
            current_time_to_calf: 14.0,
            baseline_diet: DietBalance::new(-2.0, 10.0),
            improved_diet: DietBalance::new(3.0, 14.0),
            supplement_type: SupplementType::Protein,
        }
    }

    #[test]
    fn valid_params() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn negative_energy_balance_allowed() {
        let mut p = params();
        p.improved_diet.energy_balance = -8.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn calving_rate_above_100_rejected() {
        let mut p = params();
        p.current_calving_rate = 120.0;
        assert_eq!(p.validate().unwrap_err().field(), "current_calving_rate");
    }

    #[test]
    fn zero_time_to_calf_rejected() {
        let mut p = params();
        p.current_time_to_calf = 0.0;
        assert_eq!(p.validate().unwrap_err().field(), "current_time_to_calf");
    }

    #[test]
    fn supplement_parse() {
        assert_eq!(
            "Complete".parse::<SupplementType>().unwrap(),
            SupplementType::Complete
        );
        assert!("vitamin".parse::<SupplementType>().is_err());
    }
}
