/// Emissions aggregator inputs.
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::animal::AnimalType;
use crate::energy::outputs::EnergyMetrics;
use crate::error::ModelError;
use crate::traits::{Bounds, ModelParams};

/// Manure management system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManureSystem {
    LiquidSlurry,
    SolidStorage,
    #[default]
    DryLot,
    Pasture,
    DailySpread,
    AnaerobicDigestion,
}

impl ManureSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            ManureSystem::LiquidSlurry => "liquid_slurry",
            ManureSystem::SolidStorage => "solid_storage",
            ManureSystem::DryLot => "dry_lot",
            ManureSystem::Pasture => "pasture",
            ManureSystem::DailySpread => "daily_spread",
            ManureSystem::AnaerobicDigestion => "anaerobic_digestion",
        }
    }

    /// Parse a system name, falling back to `DryLot` for anything unknown.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!("unknown manure system `{}`, using dry_lot factors", s);
            ManureSystem::DryLot
        })
    }
}

impl FromStr for ManureSystem {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "liquid_slurry" => Ok(ManureSystem::LiquidSlurry),
            "solid_storage" => Ok(ManureSystem::SolidStorage),
            "dry_lot" => Ok(ManureSystem::DryLot),
            "pasture" => Ok(ManureSystem::Pasture),
            "daily_spread" => Ok(ManureSystem::DailySpread),
            "anaerobic_digestion" => Ok(ManureSystem::AnaerobicDigestion),
            other => Err(ModelError::unknown("manure system", other)),
        }
    }
}

impl fmt::Display for ManureSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Production system that determines the embodied emissions of feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSystem {
    Grazing,
    #[default]
    Mixed,
    Intensive,
}

impl FeedSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedSystem::Grazing => "grazing",
            FeedSystem::Mixed => "mixed",
            FeedSystem::Intensive => "intensive",
        }
    }

    /// Parse a system name; anything other than grazing/mixed is intensive.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!("unknown production system `{}`, using intensive feed factor", s);
            FeedSystem::Intensive
        })
    }
}

impl FromStr for FeedSystem {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grazing" => Ok(FeedSystem::Grazing),
            "mixed" => Ok(FeedSystem::Mixed),
            "intensive" => Ok(FeedSystem::Intensive),
            other => Err(ModelError::unknown("production system", other)),
        }
    }
}

impl fmt::Display for FeedSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The energy-engine figures the aggregator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntericInput {
    /// [kg CH4/year].
    pub methane_annual: f64,
    /// [kg CO2e/year].
    pub methane_annual_co2e: f64,
    /// [kg DM/day].
    pub daily_feed_intake: f64,
}

impl From<&EnergyMetrics> for EntericInput {
    fn from(m: &EnergyMetrics) -> Self {
        Self {
            methane_annual: m.methane_annual,
            methane_annual_co2e: m.methane_annual_co2e,
            daily_feed_intake: m.daily_feed_intake,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsParams {
    pub animal_type: AnimalType,
    /// Enteric methane and feed intake from the energy engine.
    pub enteric: EntericInput,
    #[serde(default)]
    pub manure_system: ManureSystem,
    /// Live weight [kg].
    pub body_weight: f64,
    #[serde(default)]
    pub feed_system: FeedSystem,
}

impl EmissionsParams {
    pub fn new(
        animal_type: AnimalType,
        enteric: EntericInput,
        manure_system: ManureSystem,
        body_weight: f64,
        feed_system: FeedSystem,
    ) -> Self {
        Self {
            animal_type,
            enteric,
            manure_system,
            body_weight,
            feed_system,
        }
    }
}

impl ModelParams for EmissionsParams {
    const PARAM_NAMES: &'static [&'static str] = &[
        "body_weight",
        "enteric.methane_annual",
        "enteric.methane_annual_co2e",
        "enteric.daily_feed_intake",
    ];
    const PARAM_BOUNDS: &'static [Bounds] = &[
        Bounds::positive(),
        Bounds::non_negative(),
        Bounds::non_negative(),
        Bounds::non_negative(),
    ];

    fn to_array(&self) -> Vec<f64> {
        vec![
            self.body_weight,
            self.enteric.methane_annual,
            self.enteric.methane_annual_co2e,
            self.enteric.daily_feed_intake,
        ]
    }
}
