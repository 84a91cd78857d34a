/// Buffalo profile and cattle comparison inputs.
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use super::constants::{buffalo_profile, BuffaloProfile};
use crate::animal::{AnimalCategory, AnimalType, DietInfo, DIGESTIBILITY_BOUNDS};
use crate::emissions::params::{FeedSystem, ManureSystem};
use crate::energy::params::EnergyParams;
use crate::error::ModelError;
use crate::reproduction::params::{DietBalance, ReproductiveParams, SupplementType};
use crate::traits::{Bounds, ModelParams};

/// Buffalo type; selects the row of the species table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffaloType {
    /// River buffalo (Murrah, Nili-Ravi, Mediterranean).
    #[default]
    WaterBuffalo,
    SwampBuffalo,
}

impl BuffaloType {
    pub fn as_str(self) -> &'static str {
        match self {
            BuffaloType::WaterBuffalo => "water_buffalo",
            BuffaloType::SwampBuffalo => "swamp_buffalo",
        }
    }

    /// Energy-engine category for this type.
    pub fn category(self) -> AnimalCategory {
        match self {
            BuffaloType::WaterBuffalo => AnimalCategory::Water,
            BuffaloType::SwampBuffalo => AnimalCategory::Swamp,
        }
    }

    /// Parse a type name, falling back to water buffalo for anything unknown.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!("unknown buffalo type `{}`, using water_buffalo constants", s);
            BuffaloType::WaterBuffalo
        })
    }
}

impl FromStr for BuffaloType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "water_buffalo" | "water" => Ok(BuffaloType::WaterBuffalo),
            "swamp_buffalo" | "swamp" => Ok(BuffaloType::SwampBuffalo),
            other => Err(ModelError::unknown("buffalo type", other)),
        }
    }
}

impl fmt::Display for BuffaloType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            other => Err(ModelError::unknown("gender", other)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Management intensity of a buffalo holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionSystem {
    Intensive,
    #[default]
    SemiIntensive,
    Traditional,
}

impl ProductionSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductionSystem::Intensive => "intensive",
            ProductionSystem::SemiIntensive => "semi_intensive",
            ProductionSystem::Traditional => "traditional",
        }
    }

    /// Feed-production system used by the emissions aggregator.
    pub fn feed_system(self) -> FeedSystem {
        match self {
            ProductionSystem::Intensive => FeedSystem::Intensive,
            ProductionSystem::SemiIntensive => FeedSystem::Mixed,
            ProductionSystem::Traditional => FeedSystem::Grazing,
        }
    }
}

impl FromStr for ProductionSystem {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "intensive" => Ok(ProductionSystem::Intensive),
            "semi_intensive" => Ok(ProductionSystem::SemiIntensive),
            "traditional" => Ok(ProductionSystem::Traditional),
            other => Err(ModelError::unknown("production system", other)),
        }
    }
}

impl fmt::Display for ProductionSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reproductive history; unset fields take the species default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReproductiveInfo {
    /// [%].
    #[serde(default)]
    pub calving_rate: Option<f64>,
    /// [months].
    #[serde(default)]
    pub time_to_calf: Option<f64>,
    /// [months].
    #[serde(default)]
    pub age_at_first_calving: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffaloParams {
    #[serde(default)]
    pub buffalo_type: BuffaloType,
    #[serde(default)]
    pub gender: Gender,
    /// Live weight [kg]. `None` uses the species/gender default.
    #[serde(default)]
    pub body_weight: Option<f64>,
    /// [months].
    pub age_months: f64,
    #[serde(default)]
    pub production_system: ProductionSystem,
    #[serde(default)]
    pub is_lactating: bool,
    /// Daily milk yield [kg/day]. `None` while lactating uses the
    /// species lactation average over 305 days.
    #[serde(default)]
    pub milk_production: Option<f64>,
    /// [%]. `None` uses the species default.
    #[serde(default)]
    pub milk_fat_percent: Option<f64>,
    #[serde(default)]
    pub is_pregnant: bool,
    #[serde(default = "default_activity_factor")]
    pub activity_factor: f64,
    #[serde(default)]
    pub diet: DietInfo,
    #[serde(default)]
    pub manure_system: ManureSystem,
    #[serde(default)]
    pub reproductive_info: ReproductiveInfo,
}

fn default_activity_factor() -> f64 {
    1.0
}

impl BuffaloParams {
    pub fn new(buffalo_type: BuffaloType, gender: Gender, age_months: f64) -> Self {
        Self {
            buffalo_type,
            gender,
            body_weight: None,
            age_months,
            production_system: ProductionSystem::default(),
            is_lactating: false,
            milk_production: None,
            milk_fat_percent: None,
            is_pregnant: false,
            activity_factor: default_activity_factor(),
            diet: DietInfo::default(),
            manure_system: ManureSystem::default(),
            reproductive_info: ReproductiveInfo::default(),
        }
    }

    pub fn profile(&self) -> &'static BuffaloProfile {
        buffalo_profile(self.buffalo_type)
    }

    pub fn resolved_body_weight(&self) -> f64 {
        self.body_weight
            .unwrap_or_else(|| self.profile().base_weight(self.gender))
    }

    pub fn resolved_fat_percent(&self) -> f64 {
        self.milk_fat_percent
            .unwrap_or(self.profile().milk_fat_percent)
    }

    pub fn resolved_calving_rate(&self) -> f64 {
        self.reproductive_info
            .calving_rate
            .unwrap_or(self.profile().calving_rate)
    }

    pub fn resolved_time_to_calf(&self) -> f64 {
        self.reproductive_info
            .time_to_calf
            .unwrap_or(self.profile().time_to_calf)
    }

    pub fn resolved_age_at_first_calving(&self) -> f64 {
        self.reproductive_info
            .age_at_first_calving
            .unwrap_or(self.profile().age_at_first_calving)
    }

    /// Daily milk yield fed to the energy engine [kg/day]; zero when dry.
    pub fn resolved_milk_production(&self) -> f64 {
        if !self.is_lactating {
            return 0.0;
        }
        self.milk_production
            .unwrap_or_else(|| self.profile().lactation.daily_average())
    }

    /// Female that has reached age at first calving.
    pub fn is_breeding_female(&self) -> bool {
        self.gender == Gender::Female && self.age_months >= self.resolved_age_at_first_calving()
    }
}

impl ModelParams for BuffaloParams {
    const PARAM_NAMES: &'static [&'static str] = &[
        "body_weight",
        "age_months",
        "milk_production",
        "milk_fat_percent",
        "activity_factor",
        "diet_info.digestibility",
        "reproductive_info.calving_rate",
        "reproductive_info.time_to_calf",
        "reproductive_info.age_at_first_calving",
    ];
    const PARAM_BOUNDS: &'static [Bounds] = &[
        Bounds::positive(),
        Bounds::non_negative(),
        Bounds::non_negative(),
        Bounds::closed(0.0, 100.0),
        Bounds::positive(),
        DIGESTIBILITY_BOUNDS,
        Bounds::closed(0.0, 100.0),
        Bounds::positive(),
        Bounds::positive(),
    ];

    fn to_array(&self) -> Vec<f64> {
        vec![
            self.resolved_body_weight(),
            self.age_months,
            self.milk_production.unwrap_or(0.0),
            self.resolved_fat_percent(),
            self.activity_factor,
            self.diet.digestibility,
            self.resolved_calving_rate(),
            self.resolved_time_to_calf(),
            self.resolved_age_at_first_calving(),
        ]
    }
}

/// Optional reproductive scenario for the cattle side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CattleReproduction {
    /// [%].
    pub calving_rate: f64,
    /// [months].
    pub time_to_calf: f64,
    pub baseline_diet: DietBalance,
    pub improved_diet: DietBalance,
    #[serde(default)]
    pub supplement_type: SupplementType,
}

/// Cattle profile compared against a buffalo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CattleParams {
    /// Must be a cattle category (`dairy` or `beef`).
    pub energy: EnergyParams,
    #[serde(default)]
    pub manure_system: ManureSystem,
    #[serde(default)]
    pub feed_system: FeedSystem,
    #[serde(default)]
    pub reproduction: Option<CattleReproduction>,
}

impl CattleParams {
    pub fn new(energy: EnergyParams, manure_system: ManureSystem, feed_system: FeedSystem) -> Self {
        Self {
            energy,
            manure_system,
            feed_system,
            reproduction: None,
        }
    }

    /// Cattle counterpart of a buffalo: same weight, gain, milk, diet and
    /// manure handling; dairy when lactating, beef otherwise.
    pub fn equivalent_to(buffalo: &BuffaloParams, weight_gain: f64) -> Self {
        let category = if buffalo.is_lactating {
            AnimalCategory::Dairy
        } else {
            AnimalCategory::Beef
        };
        let mut energy = EnergyParams::new(category, buffalo.resolved_body_weight());
        energy.weight_gain = weight_gain;
        energy.milk_production = buffalo.resolved_milk_production();
        energy.is_pregnant = buffalo.is_pregnant;
        energy.activity_factor = buffalo.activity_factor;
        energy.diet = buffalo.diet;
        Self::new(
            energy,
            buffalo.manure_system,
            buffalo.production_system.feed_system(),
        )
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.energy.animal_type() != AnimalType::Cattle {
            return Err(ModelError::unknown(
                "cattle category",
                self.energy.category.as_str(),
            ));
        }
        self.energy.validate()?;
        if let Some(r) = self.reproductive_params() {
            r.validate()?;
        }
        Ok(())
    }

    /// Reproductive-model input for the cattle scenario, if one was given.
    pub fn reproductive_params(&self) -> Option<ReproductiveParams> {
        self.reproduction.map(|r| ReproductiveParams {
            category: self.energy.category,
            current_calving_rate: r.calving_rate,
            current_time_to_calf: r.time_to_calf,
            baseline_diet: r.baseline_diet,
            improved_diet: r.improved_diet,
            supplement_type: r.supplement_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Enums --

    #[test]
    fn buffalo_type_parse() {
        assert_eq!(
            "swamp_buffalo".parse::<BuffaloType>().unwrap(),
            BuffaloType::SwampBuffalo
        );
        assert!("river".parse::<BuffaloType>().is_err());
        assert_eq!(BuffaloType::from_str_lossy("river"), BuffaloType::WaterBuffalo);
    }

    #[test]
    fn production_system_maps_to_feed_system() {
        assert_eq!(ProductionSystem::Intensive.feed_system(), FeedSystem::Intensive);
        assert_eq!(ProductionSystem::SemiIntensive.feed_system(), FeedSystem::Mixed);
        assert_eq!(ProductionSystem::Traditional.feed_system(), FeedSystem::Grazing);
        assert_eq!(
            "semi-intensive".parse::<ProductionSystem>().unwrap(),
            ProductionSystem::SemiIntensive
        );
    }

    // -- Defaults --

    #[test]
    fn defaults_come_from_species_table() {
        let p = BuffaloParams::new(BuffaloType::WaterBuffalo, Gender::Male, 30.0);
        assert_eq!(p.resolved_body_weight(), 700.0);
        let p = BuffaloParams::new(BuffaloType::SwampBuffalo, Gender::Female, 30.0);
        assert_eq!(p.resolved_body_weight(), 400.0);
        assert_eq!(p.resolved_time_to_calf(), 18.0);
        assert_eq!(p.resolved_age_at_first_calving(), 48.0);
    }

    #[test]
    fn milk_defaults_to_lactation_average() {
        let mut p = BuffaloParams::new(BuffaloType::WaterBuffalo, Gender::Female, 60.0);
        assert_eq!(p.resolved_milk_production(), 0.0);
        p.is_lactating = true;
        assert_eq!(p.resolved_milk_production(), 1800.0 / 305.0);
        p.milk_production = Some(5.0);
        assert_eq!(p.resolved_milk_production(), 5.0);
    }

    #[test]
    fn breeding_female_threshold() {
        let mut p = BuffaloParams::new(BuffaloType::WaterBuffalo, Gender::Female, 39.0);
        assert!(!p.is_breeding_female());
        p.age_months = 40.0;
        assert!(p.is_breeding_female());
        p.gender = Gender::Male;
        assert!(!p.is_breeding_female());
    }

    // -- Validation --

    #[test]
    fn rejects_digestibility_of_one() {
        let mut p = BuffaloParams::new(BuffaloType::WaterBuffalo, Gender::Female, 48.0);
        p.diet.digestibility = 1.0;
        assert_eq!(p.validate().unwrap_err().field(), "diet_info.digestibility");
    }

    #[test]
    fn cattle_params_must_be_cattle() {
        let energy = EnergyParams::new(AnimalCategory::Water, 500.0);
        let c = CattleParams::new(energy, ManureSystem::DryLot, FeedSystem::Mixed);
        assert!(matches!(
            c.validate(),
            Err(ModelError::UnknownVariant { field: "cattle category", .. })
        ));
    }

    #[test]
    fn equivalent_cattle_follows_lactation() {
        let mut b = BuffaloParams::new(BuffaloType::WaterBuffalo, Gender::Female, 48.0);
        b.body_weight = Some(650.0);
        assert_eq!(
            CattleParams::equivalent_to(&b, 0.0).energy.category,
            AnimalCategory::Beef
        );
        b.is_lactating = true;
        let c = CattleParams::equivalent_to(&b, 0.0);
        assert_eq!(c.energy.category, AnimalCategory::Dairy);
        assert_eq!(c.energy.body_weight, 650.0);
        assert_eq!(c.energy.milk_fat_percent, None);
        assert!(c.validate().is_ok());
    }
}
