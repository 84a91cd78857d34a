//! Energy engine outputs.
use serde::{Deserialize, Serialize};

use super::constants::{DAILY_METHANE_DECIMALS, ENERGY_DECIMALS, FEED_DECIMALS, RATIO_DECIMALS};
use crate::animal::AnimalCategory;
use crate::conversion::{round_opt, round_to};

/// Energy requirements, enteric methane and feed metrics for one animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyMetrics {
    pub category: AnimalCategory,
    /// NEm [MJ/day].
    pub maintenance_energy: f64,
    /// NEg [MJ/day].
    pub growth_energy: f64,
    /// NEl [MJ/day].
    pub lactation_energy: f64,
    /// NEp [MJ/day].
    pub pregnancy_energy: f64,
    pub total_net_energy: f64,
    /// GE [MJ/day].
    pub gross_energy_intake: f64,
    pub rem: f64,
    pub reg: f64,
    /// Ym [% of GE].
    pub methane_conversion_factor: f64,
    /// [kg CH4/day].
    pub methane_daily: f64,
    /// [kg CH4/year].
    pub methane_annual: f64,
    /// [kg CO2e/year].
    pub methane_annual_co2e: f64,
    /// [MJ/kg DM].
    pub diet_energy_density: f64,
    /// [kg DM/day].
    pub daily_feed_intake: f64,
    /// [kg DM/kg gain]; `None` when the animal is not gaining weight.
    pub feed_conversion_ratio: Option<f64>,
    /// Net energy retained as a share of gross energy [%].
    pub energy_efficiency: f64,
    /// Gross energy lost as methane [%].
    pub methane_energy_loss: f64,
}

impl EnergyMetrics {
    /// Copy with display precision applied.
    pub fn rounded(&self) -> Self {
        Self {
            category: self.category,
            maintenance_energy: round_to(self.maintenance_energy, ENERGY_DECIMALS),
            growth_energy: round_to(self.growth_energy, ENERGY_DECIMALS),
            lactation_energy: round_to(self.lactation_energy, ENERGY_DECIMALS),
            pregnancy_energy: round_to(self.pregnancy_energy, ENERGY_DECIMALS),
            total_net_energy: round_to(self.total_net_energy, ENERGY_DECIMALS),
            gross_energy_intake: round_to(self.gross_energy_intake, ENERGY_DECIMALS),
            rem: round_to(self.rem, RATIO_DECIMALS),
            reg: round_to(self.reg, RATIO_DECIMALS),
            methane_conversion_factor: round_to(self.methane_conversion_factor, FEED_DECIMALS),
            methane_daily: round_to(self.methane_daily, DAILY_METHANE_DECIMALS),
            methane_annual: round_to(self.methane_annual, ENERGY_DECIMALS),
            methane_annual_co2e: round_to(self.methane_annual_co2e, ENERGY_DECIMALS),
            diet_energy_density: round_to(self.diet_energy_density, FEED_DECIMALS),
            daily_feed_intake: round_to(self.daily_feed_intake, FEED_DECIMALS),
            feed_conversion_ratio: round_opt(self.feed_conversion_ratio, FEED_DECIMALS),
            energy_efficiency: round_to(self.energy_efficiency, ENERGY_DECIMALS),
            methane_energy_loss: round_to(self.methane_energy_loss, FEED_DECIMALS),
        }
    }
}
