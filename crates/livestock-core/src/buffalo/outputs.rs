//! Buffalo profile outputs.
use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{EnvironmentalAdaptation, PERCENT_DECIMALS, RATIO_DECIMALS, YIELD_DECIMALS};
use super::params::{BuffaloType, Gender, ProductionSystem};
use crate::conversion::{round_opt, round_to};
use crate::emissions::outputs::EmissionsMetrics;
use crate::energy::outputs::EnergyMetrics;
use crate::reproduction::outputs::ReproductiveMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatQuality {
    Premium,
    Standard,
    Economy,
}

impl MeatQuality {
    pub fn for_system(system: ProductionSystem) -> Self {
        match system {
            ProductionSystem::Intensive => MeatQuality::Premium,
            ProductionSystem::SemiIntensive => MeatQuality::Standard,
            ProductionSystem::Traditional => MeatQuality::Economy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MeatQuality::Premium => "premium",
            MeatQuality::Standard => "standard",
            MeatQuality::Economy => "economy",
        }
    }
}

impl fmt::Display for MeatQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilkMetrics {
    /// [kg/day].
    pub daily_yield: f64,
    /// 305-day yield [kg].
    pub lactation_yield: f64,
    /// [%].
    pub fat_percent: f64,
    /// [kg/day].
    pub fat_yield: f64,
    /// 4 % fat-corrected milk [kg/day].
    pub fat_corrected_milk: f64,
    /// Lactation yield inside the species min/max range.
    pub within_species_range: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeatMetrics {
    /// [kg/day].
    pub daily_gain: f64,
    /// [kg/year].
    pub annual_live_weight_gain: f64,
    /// [kg/year].
    pub annual_carcass_gain: f64,
    /// Carcass weight at current live weight [kg].
    pub carcass_weight: f64,
    /// [%].
    pub dressing_percentage: f64,
    pub quality: MeatQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftMetrics {
    /// [kg force].
    pub drawbar_pull: f64,
    /// [kW].
    pub power_output: f64,
    /// [hours/day].
    pub working_hours: f64,
    /// [MJ/day].
    pub daily_work_energy: f64,
}

/// Active production metrics; unset entries do not apply to this animal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionMetrics {
    pub milk_production: Option<MilkMetrics>,
    pub meat_production: Option<MeatMetrics>,
    pub draft_capability: Option<DraftMetrics>,
}

impl ProductionMetrics {
    fn rounded(&self) -> Self {
        let y = YIELD_DECIMALS;
        Self {
            milk_production: self.milk_production.map(|m| MilkMetrics {
                daily_yield: round_to(m.daily_yield, y),
                lactation_yield: round_to(m.lactation_yield, y),
                fat_percent: m.fat_percent,
                fat_yield: round_to(m.fat_yield, 3),
                fat_corrected_milk: round_to(m.fat_corrected_milk, y),
                within_species_range: m.within_species_range,
            }),
            meat_production: self.meat_production.map(|m| MeatMetrics {
                daily_gain: m.daily_gain,
                annual_live_weight_gain: round_to(m.annual_live_weight_gain, y),
                annual_carcass_gain: round_to(m.annual_carcass_gain, y),
                carcass_weight: round_to(m.carcass_weight, y),
                dressing_percentage: m.dressing_percentage,
                quality: m.quality,
            }),
            draft_capability: self.draft_capability.map(|d| DraftMetrics {
                drawbar_pull: round_to(d.drawbar_pull, y),
                power_output: round_to(d.power_output, 3),
                working_hours: d.working_hours,
                daily_work_energy: round_to(d.daily_work_energy, y),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedEfficiency {
    /// [kg DM/day].
    pub dry_matter_intake: f64,
    /// [kg DM / kg gain].
    pub feed_conversion_ratio: Option<f64>,
    /// Roughage utilization relative to cattle [-].
    pub roughage_utilization: f64,
    /// Response to concentrate relative to cattle [-].
    pub concentrate_response: f64,
    /// [kg DM / kg milk].
    pub dry_matter_per_kg_milk: Option<f64>,
    /// [kg DM / kg live-weight gain].
    pub dry_matter_per_kg_gain: Option<f64>,
}

impl FeedEfficiency {
    fn rounded(&self) -> Self {
        Self {
            dry_matter_intake: round_to(self.dry_matter_intake, YIELD_DECIMALS),
            feed_conversion_ratio: round_opt(self.feed_conversion_ratio, YIELD_DECIMALS),
            roughage_utilization: self.roughage_utilization,
            concentrate_response: self.concentrate_response,
            dry_matter_per_kg_milk: round_opt(self.dry_matter_per_kg_milk, YIELD_DECIMALS),
            dry_matter_per_kg_gain: round_opt(self.dry_matter_per_kg_gain, YIELD_DECIMALS),
        }
    }
}

/// Headline figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuffaloSummary {
    /// [kg].
    pub body_weight: f64,
    /// [kg CH4/day].
    pub daily_methane: f64,
    /// Adjusted total [kg CO2e/year].
    pub annual_emissions: f64,
    /// [kg CO2e / kg body weight].
    pub emissions_intensity: f64,
    /// [kg/day].
    pub milk_yield: Option<f64>,
    /// Total of the equivalent cattle profile [kg CO2e/year].
    pub cattle_equivalent_emissions: f64,
    /// Buffalo total relative to the equivalent cattle profile [%].
    pub emissions_comparison_to_cattle: f64,
}

impl BuffaloSummary {
    fn rounded(&self) -> Self {
        Self {
            body_weight: round_to(self.body_weight, PERCENT_DECIMALS),
            daily_methane: round_to(self.daily_methane, 3),
            annual_emissions: round_to(self.annual_emissions, PERCENT_DECIMALS),
            emissions_intensity: round_to(self.emissions_intensity, RATIO_DECIMALS),
            milk_yield: round_opt(self.milk_yield, YIELD_DECIMALS),
            cattle_equivalent_emissions: round_to(
                self.cattle_equivalent_emissions,
                PERCENT_DECIMALS,
            ),
            emissions_comparison_to_cattle: round_to(
                self.emissions_comparison_to_cattle,
                PERCENT_DECIMALS,
            ),
        }
    }
}

/// Full buffalo profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffaloMetrics {
    pub buffalo_type: BuffaloType,
    pub gender: Gender,
    /// [months].
    pub age_months: f64,
    pub production_system: ProductionSystem,
    /// Derived from age and production system [kg/day].
    pub weight_gain: f64,
    pub energy_metrics: EnergyMetrics,
    /// Buffalo-adjusted, with product emission intensity attached.
    pub emissions_metrics: EmissionsMetrics,
    /// Present only for females at or past age at first calving.
    pub reproductive_metrics: Option<ReproductiveMetrics>,
    pub production_metrics: ProductionMetrics,
    pub feed_efficiency: FeedEfficiency,
    pub environmental_adaptation: EnvironmentalAdaptation,
    pub summary: BuffaloSummary,
}

impl BuffaloMetrics {
    pub fn rounded(&self) -> Self {
        Self {
            buffalo_type: self.buffalo_type,
            gender: self.gender,
            age_months: self.age_months,
            production_system: self.production_system,
            weight_gain: self.weight_gain,
            energy_metrics: self.energy_metrics.rounded(),
            emissions_metrics: self.emissions_metrics.rounded(),
            reproductive_metrics: self.reproductive_metrics.as_ref().map(|r| r.rounded()),
            production_metrics: self.production_metrics.rounded(),
            feed_efficiency: self.feed_efficiency.rounded(),
            environmental_adaptation: self.environmental_adaptation,
            summary: self.summary.rounded(),
        }
    }
}
