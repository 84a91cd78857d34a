//! Emissions aggregator outputs.
use serde::{Deserialize, Serialize};

use super::constants::{DETAIL_DECIMALS, FACTOR_DECIMALS, TOTAL_DECIMALS};
use super::params::{FeedSystem, ManureSystem};
use super::processes::percentage;
use crate::animal::AnimalType;
use crate::conversion::{round_opt, round_to};

/// One value per emission source [kg CO2e/year or %].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceBreakdown {
    pub enteric: f64,
    pub manure_ch4: f64,
    pub manure_n2o: f64,
    pub feed_production: f64,
}

impl SourceBreakdown {
    pub fn total(&self) -> f64 {
        self.enteric + self.manure_ch4 + self.manure_n2o + self.feed_production
    }

    /// Each source as a share of `total` [%].
    pub fn percentages_of(&self, total: f64) -> Self {
        Self {
            enteric: percentage(self.enteric, total),
            manure_ch4: percentage(self.manure_ch4, total),
            manure_n2o: percentage(self.manure_n2o, total),
            feed_production: percentage(self.feed_production, total),
        }
    }

    fn rounded(&self, decimals: i32) -> Self {
        Self {
            enteric: round_to(self.enteric, decimals),
            manure_ch4: round_to(self.manure_ch4, decimals),
            manure_n2o: round_to(self.manure_n2o, decimals),
            feed_production: round_to(self.feed_production, decimals),
        }
    }
}

/// Species multipliers applied on top of the per-source totals.
///
/// Feed production is never adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionAdjustment {
    pub enteric: f64,
    pub manure_ch4: f64,
    pub manure_n2o: f64,
}

impl EmissionAdjustment {
    pub const IDENTITY: Self = Self {
        enteric: 1.0,
        manure_ch4: 1.0,
        manure_n2o: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for EmissionAdjustment {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntericDetail {
    /// [kg CH4/year].
    pub methane: f64,
    pub co2e: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManureMethaneDetail {
    /// Factor at 500 kg [kg CH4/head/year].
    pub emission_factor: f64,
    /// [kg CH4/year].
    pub methane: f64,
    pub co2e: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManureN2oDetail {
    /// [kg N/year].
    pub nitrogen_excretion: f64,
    /// [kg N2O-N / kg N].
    pub emission_factor: f64,
    /// [kg N2O/year].
    pub n2o: f64,
    pub co2e: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedProductionDetail {
    /// [kg DM/year].
    pub annual_feed_intake: f64,
    /// [kg CO2e / kg DM].
    pub emission_factor: f64,
    pub co2e: f64,
}

/// Per-source sub-metrics of the unadjusted calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionDetails {
    pub enteric: EntericDetail,
    pub manure_ch4: ManureMethaneDetail,
    pub manure_n2o: ManureN2oDetail,
    pub feed_production: FeedProductionDetail,
}

impl EmissionDetails {
    fn rounded(&self) -> Self {
        let d = DETAIL_DECIMALS;
        Self {
            enteric: EntericDetail {
                methane: round_to(self.enteric.methane, d),
                co2e: round_to(self.enteric.co2e, d),
            },
            manure_ch4: ManureMethaneDetail {
                emission_factor: self.manure_ch4.emission_factor,
                methane: round_to(self.manure_ch4.methane, d),
                co2e: round_to(self.manure_ch4.co2e, d),
            },
            manure_n2o: ManureN2oDetail {
                nitrogen_excretion: round_to(self.manure_n2o.nitrogen_excretion, d),
                emission_factor: self.manure_n2o.emission_factor,
                n2o: round_to(self.manure_n2o.n2o, FACTOR_DECIMALS),
                co2e: round_to(self.manure_n2o.co2e, d),
            },
            feed_production: FeedProductionDetail {
                annual_feed_intake: round_to(self.feed_production.annual_feed_intake, d),
                emission_factor: self.feed_production.emission_factor,
                co2e: round_to(self.feed_production.co2e, d),
            },
        }
    }
}

/// Emissions per unit of product [kg CO2e / kg].
///
/// Only the figure matching the animal's active production metric is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductEmissionIntensity {
    pub per_kg_milk: Option<f64>,
    pub per_kg_live_weight_gain: Option<f64>,
    pub per_kg_carcass_gain: Option<f64>,
}

impl ProductEmissionIntensity {
    pub fn rounded(&self) -> Self {
        Self {
            per_kg_milk: round_opt(self.per_kg_milk, DETAIL_DECIMALS),
            per_kg_live_weight_gain: round_opt(self.per_kg_live_weight_gain, DETAIL_DECIMALS),
            per_kg_carcass_gain: round_opt(self.per_kg_carcass_gain, DETAIL_DECIMALS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsMetrics {
    pub animal_type: AnimalType,
    pub manure_system: ManureSystem,
    pub feed_system: FeedSystem,
    /// [kg].
    pub body_weight: f64,
    /// [kg CO2e/year].
    pub total_annual_emissions: f64,
    pub emissions_by_source: SourceBreakdown,
    /// [%], sums to 100 when anything is emitted.
    pub emissions_percentages: SourceBreakdown,
    pub details: EmissionDetails,
    /// Multipliers already applied to `emissions_by_source`.
    pub adjustment: EmissionAdjustment,
    /// [kg CO2e / kg body weight / year].
    pub emissions_intensity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_emission_intensity: Option<ProductEmissionIntensity>,
}

impl EmissionsMetrics {
    /// Assemble totals, shares and intensity from the per-source values.
    pub fn from_sources(
        animal_type: AnimalType,
        manure_system: ManureSystem,
        feed_system: FeedSystem,
        body_weight: f64,
        sources: SourceBreakdown,
        details: EmissionDetails,
        adjustment: EmissionAdjustment,
    ) -> Self {
        let total = sources.total();
        Self {
            animal_type,
            manure_system,
            feed_system,
            body_weight,
            total_annual_emissions: total,
            emissions_by_source: sources,
            emissions_percentages: sources.percentages_of(total),
            details,
            adjustment,
            emissions_intensity: total / body_weight,
            product_emission_intensity: None,
        }
    }

    /// New metrics with species multipliers applied to the enteric, manure
    /// CH4 and manure N2O totals; the total and shares are re-derived.
    ///
    /// `self` is left untouched so the unadjusted figures stay available.
    pub fn adjusted(&self, factors: EmissionAdjustment) -> Self {
        let base = &self.emissions_by_source;
        let sources = SourceBreakdown {
            enteric: base.enteric * factors.enteric,
            manure_ch4: base.manure_ch4 * factors.manure_ch4,
            manure_n2o: base.manure_n2o * factors.manure_n2o,
            feed_production: base.feed_production,
        };
        let applied = EmissionAdjustment {
            enteric: self.adjustment.enteric * factors.enteric,
            manure_ch4: self.adjustment.manure_ch4 * factors.manure_ch4,
            manure_n2o: self.adjustment.manure_n2o * factors.manure_n2o,
        };
        let mut out = Self::from_sources(
            self.animal_type,
            self.manure_system,
            self.feed_system,
            self.body_weight,
            sources,
            self.details,
            applied,
        );
        out.product_emission_intensity = self.product_emission_intensity;
        out
    }

    pub fn with_product_intensity(mut self, intensity: ProductEmissionIntensity) -> Self {
        self.product_emission_intensity = Some(intensity);
        self
    }

    pub fn rounded(&self) -> Self {
        Self {
            animal_type: self.animal_type,
            manure_system: self.manure_system,
            feed_system: self.feed_system,
            body_weight: self.body_weight,
            total_annual_emissions: round_to(self.total_annual_emissions, TOTAL_DECIMALS),
            emissions_by_source: self.emissions_by_source.rounded(TOTAL_DECIMALS),
            emissions_percentages: self.emissions_percentages.rounded(TOTAL_DECIMALS),
            details: self.details.rounded(),
            adjustment: self.adjustment,
            emissions_intensity: round_to(self.emissions_intensity, DETAIL_DECIMALS),
            product_emission_intensity: self
                .product_emission_intensity
                .map(|p| p.rounded()),
        }
    }
}
