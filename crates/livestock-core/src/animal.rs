//! Species, category and diet descriptors shared by every component.
//!
//! Tagged variants replace free-form strings: an unknown name is rejected
//! when parsed instead of degrading into NaN downstream.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::traits::{Bounds, ModelParams};

/// Ruminant species covered by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalType {
    Cattle,
    Buffalo,
}

impl AnimalType {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimalType::Cattle => "cattle",
            AnimalType::Buffalo => "buffalo",
        }
    }
}

impl FromStr for AnimalType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cattle" => Ok(AnimalType::Cattle),
            "buffalo" => Ok(AnimalType::Buffalo),
            other => Err(ModelError::unknown("animal type", other)),
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Species-specific subtype. Each category belongs to exactly one species,
/// so a category/species mismatch cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimalCategory {
    /// Dairy cattle.
    Dairy,
    /// Beef cattle.
    Beef,
    /// River-type water buffalo.
    Water,
    /// Swamp buffalo.
    Swamp,
}

impl AnimalCategory {
    pub fn animal_type(self) -> AnimalType {
        match self {
            AnimalCategory::Dairy | AnimalCategory::Beef => AnimalType::Cattle,
            AnimalCategory::Water | AnimalCategory::Swamp => AnimalType::Buffalo,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnimalCategory::Dairy => "dairy",
            AnimalCategory::Beef => "beef",
            AnimalCategory::Water => "water",
            AnimalCategory::Swamp => "swamp",
        }
    }
}

impl FromStr for AnimalCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dairy" => Ok(AnimalCategory::Dairy),
            "beef" => Ok(AnimalCategory::Beef),
            "water" | "water_buffalo" => Ok(AnimalCategory::Water),
            "swamp" | "swamp_buffalo" => Ok(AnimalCategory::Swamp),
            other => Err(ModelError::unknown("animal category", other)),
        }
    }
}

impl fmt::Display for AnimalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diet composition bucket used for the methane conversion factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    HighForage,
    #[default]
    Mixed,
    HighGrain,
}

impl DietType {
    pub fn as_str(self) -> &'static str {
        match self {
            DietType::HighForage => "high_forage",
            DietType::Mixed => "mixed",
            DietType::HighGrain => "high_grain",
        }
    }
}

impl FromStr for DietType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high_forage" => Ok(DietType::HighForage),
            "mixed" => Ok(DietType::Mixed),
            "high_grain" => Ok(DietType::HighGrain),
            other => Err(ModelError::unknown("diet type", other)),
        }
    }
}

/// Accepted digestible-energy fraction [-]. REM/REG fall towards zero and
/// turn negative below DE 45 %; feedlot diets top out around DE 90 %.
pub const DIGESTIBILITY_BOUNDS: Bounds = Bounds::closed(0.45, 0.90);

/// Diet quality: digestibility fraction and composition bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DietInfo {
    /// Digestible energy fraction of gross energy [-], within `DIGESTIBILITY_BOUNDS`.
    pub digestibility: f64,
    #[serde(rename = "type")]
    pub diet_type: DietType,
}

impl DietInfo {
    pub fn new(digestibility: f64, diet_type: DietType) -> Self {
        Self {
            digestibility,
            diet_type,
        }
    }

    /// Digestibility as a percentage (DE%).
    pub fn digestibility_percent(&self) -> f64 {
        self.digestibility * 100.0
    }
}

impl Default for DietInfo {
    fn default() -> Self {
        Self::new(0.65, DietType::Mixed)
    }
}

impl ModelParams for DietInfo {
    const PARAM_NAMES: &'static [&'static str] = &["diet_info.digestibility"];
    const PARAM_BOUNDS: &'static [Bounds] = &[DIGESTIBILITY_BOUNDS];

    fn to_array(&self) -> Vec<f64> {
        vec![self.digestibility]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_maps_to_species() {
        assert_eq!(AnimalCategory::Dairy.animal_type(), AnimalType::Cattle);
        assert_eq!(AnimalCategory::Beef.animal_type(), AnimalType::Cattle);
        assert_eq!(AnimalCategory::Water.animal_type(), AnimalType::Buffalo);
        assert_eq!(AnimalCategory::Swamp.animal_type(), AnimalType::Buffalo);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Cattle".parse::<AnimalType>().unwrap(), AnimalType::Cattle);
        assert_eq!(
            " HIGH_GRAIN ".parse::<DietType>().unwrap(),
            DietType::HighGrain
        );
        assert_eq!(
            "swamp_buffalo".parse::<AnimalCategory>().unwrap(),
            AnimalCategory::Swamp
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!("goat".parse::<AnimalType>().is_err());
        assert!("veal".parse::<AnimalCategory>().is_err());
        let err = "silage".parse::<DietType>().unwrap_err();
        assert_eq!(err.field(), "diet type");
    }

    #[test]
    fn default_diet() {
        let d = DietInfo::default();
        assert_eq!(d.digestibility, 0.65);
        assert_eq!(d.diet_type, DietType::Mixed);
    }

    #[test]
    fn digestibility_limited_to_calibrated_range() {
        assert!(DietInfo::new(0.0, DietType::Mixed).validate().is_err());
        assert!(DietInfo::new(0.379, DietType::HighForage).validate().is_err());
        assert!(DietInfo::new(1.0, DietType::Mixed).validate().is_err());
        assert!(DietInfo::new(0.45, DietType::HighForage).validate().is_ok());
        assert!(DietInfo::new(0.6, DietType::Mixed).validate().is_ok());
        assert!(DietInfo::new(0.90, DietType::HighGrain).validate().is_ok());
    }

    #[test]
    fn diet_serde_uses_type_key() {
        let json = serde_json::to_string(&DietInfo::new(0.6, DietType::HighForage)).unwrap();
        assert_eq!(json, r#"{"digestibility":0.6,"type":"high_forage"}"#);
    }
}
