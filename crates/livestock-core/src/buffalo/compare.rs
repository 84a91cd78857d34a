/// Buffalo-versus-cattle comparison.
///
/// The buffalo side goes through the full profile layer; the cattle side
/// runs the energy engine and emissions aggregator directly, without any
/// species adjustment. Ratios are buffalo / cattle.
use log::debug;
use serde::{Deserialize, Serialize};

use super::constants::{buffalo_profile, PERCENT_DECIMALS, RATIO_DECIMALS};
use super::outputs::BuffaloMetrics;
use super::params::{BuffaloParams, CattleParams};
use super::run::{self as buffalo, evaluate_cattle};
use crate::conversion::{percent_difference, round_opt, round_to, safe_ratio};
use crate::emissions::outputs::EmissionsMetrics;
use crate::energy::outputs::EnergyMetrics;
use crate::error::ModelError;
use crate::reproduction::outputs::ReproductiveMetrics;
use crate::reproduction::run as reproduction;
use crate::traits::ModelParams;

pub const BUFFALO_ADVANTAGES: &[&str] = &[
    "Better utilization of low-quality roughage",
    "Higher milk fat content",
    "Greater disease resistance",
    "Longer productive life",
    "Suited to wet and marshy terrain",
];

pub const CATTLE_ADVANTAGES: &[&str] = &[
    "Higher milk volume per lactation",
    "Shorter calving interval",
    "Earlier age at first calving",
    "Better heat tolerance",
    "Lower water requirement",
];

/// One metric on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub buffalo: f64,
    pub cattle: f64,
    pub ratio: f64,
    /// (ratio - 1) x 100 [%].
    pub percent_difference: f64,
}

impl MetricComparison {
    /// `None` when the cattle value is zero.
    pub fn between(buffalo: f64, cattle: f64) -> Option<Self> {
        safe_ratio(buffalo, cattle).map(|ratio| Self {
            buffalo,
            cattle,
            ratio,
            percent_difference: percent_difference(ratio),
        })
    }

    fn rounded(&self) -> Self {
        Self {
            buffalo: round_to(self.buffalo, RATIO_DECIMALS),
            cattle: round_to(self.cattle, RATIO_DECIMALS),
            ratio: round_to(self.ratio, RATIO_DECIMALS),
            percent_difference: round_to(self.percent_difference, PERCENT_DECIMALS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReproductiveComparison {
    /// [points].
    pub buffalo_calving_rate_improvement: f64,
    pub cattle_calving_rate_improvement: f64,
    pub calving_rate_improvement_ratio: Option<f64>,
    /// [months].
    pub buffalo_time_to_calf_improvement: f64,
    pub cattle_time_to_calf_improvement: f64,
    pub time_to_calf_improvement_ratio: Option<f64>,
}

impl ReproductiveComparison {
    fn between(buffalo: &ReproductiveMetrics, cattle: &ReproductiveMetrics) -> Self {
        Self {
            buffalo_calving_rate_improvement: buffalo.calving_rate_improvement,
            cattle_calving_rate_improvement: cattle.calving_rate_improvement,
            calving_rate_improvement_ratio: safe_ratio(
                buffalo.calving_rate_improvement,
                cattle.calving_rate_improvement,
            ),
            buffalo_time_to_calf_improvement: buffalo.time_to_calf_improvement,
            cattle_time_to_calf_improvement: cattle.time_to_calf_improvement,
            time_to_calf_improvement_ratio: safe_ratio(
                buffalo.time_to_calf_improvement,
                cattle.time_to_calf_improvement,
            ),
        }
    }

    fn rounded(&self) -> Self {
        Self {
            buffalo_calving_rate_improvement: round_to(
                self.buffalo_calving_rate_improvement,
                RATIO_DECIMALS,
            ),
            cattle_calving_rate_improvement: round_to(
                self.cattle_calving_rate_improvement,
                RATIO_DECIMALS,
            ),
            calving_rate_improvement_ratio: round_opt(
                self.calving_rate_improvement_ratio,
                RATIO_DECIMALS,
            ),
            buffalo_time_to_calf_improvement: round_to(
                self.buffalo_time_to_calf_improvement,
                RATIO_DECIMALS,
            ),
            cattle_time_to_calf_improvement: round_to(
                self.cattle_time_to_calf_improvement,
                RATIO_DECIMALS,
            ),
            time_to_calf_improvement_ratio: round_opt(
                self.time_to_calf_improvement_ratio,
                RATIO_DECIMALS,
            ),
        }
    }
}

/// Resource-use ratios, buffalo / cattle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    pub water_use_ratio: f64,
    pub land_use_ratio: f64,
    pub ghg_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub buffalo: BuffaloMetrics,
    pub cattle_energy: EnergyMetrics,
    pub cattle_emissions: EmissionsMetrics,
    pub cattle_reproduction: Option<ReproductiveMetrics>,
    pub emissions_comparison: MetricComparison,
    pub energy_comparison: MetricComparison,
    pub methane_comparison: MetricComparison,
    /// Only when both animals are gaining weight.
    pub feed_efficiency_comparison: Option<MetricComparison>,
    pub reproductive_comparison: Option<ReproductiveComparison>,
    pub environmental_impact: EnvironmentalImpact,
    pub buffalo_advantages: Vec<String>,
    pub cattle_advantages: Vec<String>,
}

impl ComparisonResult {
    pub fn rounded(&self) -> Self {
        let env = &self.environmental_impact;
        Self {
            buffalo: self.buffalo.rounded(),
            cattle_energy: self.cattle_energy.rounded(),
            cattle_emissions: self.cattle_emissions.rounded(),
            cattle_reproduction: self.cattle_reproduction.as_ref().map(|r| r.rounded()),
            emissions_comparison: self.emissions_comparison.rounded(),
            energy_comparison: self.energy_comparison.rounded(),
            methane_comparison: self.methane_comparison.rounded(),
            feed_efficiency_comparison: self.feed_efficiency_comparison.map(|c| c.rounded()),
            reproductive_comparison: self.reproductive_comparison.map(|c| c.rounded()),
            environmental_impact: EnvironmentalImpact {
                water_use_ratio: round_to(env.water_use_ratio, RATIO_DECIMALS),
                land_use_ratio: round_to(env.land_use_ratio, RATIO_DECIMALS),
                ghg_ratio: round_to(env.ghg_ratio, RATIO_DECIMALS),
            },
            buffalo_advantages: self.buffalo_advantages.clone(),
            cattle_advantages: self.cattle_advantages.clone(),
        }
    }
}

/// Full-precision comparison for already-validated parameters.
///
/// Cattle energy and emissions are strictly positive for a validated
/// profile, so only the feed-conversion and reproductive ratios can be
/// undefined.
pub fn evaluate(buffalo_params: &BuffaloParams, cattle: &CattleParams) -> ComparisonResult {
    let b = buffalo::evaluate(buffalo_params);
    let (cattle_energy, cattle_emissions) = evaluate_cattle(cattle);
    let cattle_reproduction = cattle
        .reproductive_params()
        .map(|r| reproduction::evaluate(&r));

    let metric = |buffalo: f64, cattle: f64| {
        MetricComparison::between(buffalo, cattle).unwrap_or(MetricComparison {
            buffalo,
            cattle,
            ratio: 0.0,
            percent_difference: 0.0,
        })
    };
    let emissions_comparison = metric(
        b.emissions_metrics.total_annual_emissions,
        cattle_emissions.total_annual_emissions,
    );
    let energy_comparison = metric(
        b.energy_metrics.gross_energy_intake,
        cattle_energy.gross_energy_intake,
    );
    let methane_comparison = metric(b.energy_metrics.methane_annual, cattle_energy.methane_annual);
    let feed_efficiency_comparison = match (
        b.energy_metrics.feed_conversion_ratio,
        cattle_energy.feed_conversion_ratio,
    ) {
        (Some(bf), Some(cf)) => MetricComparison::between(bf, cf),
        _ => None,
    };

    let reproductive_comparison = match (&b.reproductive_metrics, &cattle_reproduction) {
        (Some(br), Some(cr)) => Some(ReproductiveComparison::between(br, cr)),
        _ => None,
    };

    let weight_ratio = b.summary.body_weight / cattle.energy.body_weight;
    let water_requirement = buffalo_profile(buffalo_params.buffalo_type)
        .adaptation
        .water_requirement;
    let environmental_impact = EnvironmentalImpact {
        water_use_ratio: water_requirement * weight_ratio,
        land_use_ratio: safe_ratio(
            b.energy_metrics.daily_feed_intake,
            cattle_energy.daily_feed_intake,
        )
        .unwrap_or(0.0),
        ghg_ratio: emissions_comparison.ratio,
    };

    debug!(
        "compare {} vs {}: emissions x{:.2}, gross energy x{:.2}, methane x{:.2}",
        buffalo_params.buffalo_type,
        cattle.energy.category,
        emissions_comparison.ratio,
        energy_comparison.ratio,
        methane_comparison.ratio
    );

    ComparisonResult {
        buffalo: b,
        cattle_energy,
        cattle_emissions,
        cattle_reproduction,
        emissions_comparison,
        energy_comparison,
        methane_comparison,
        feed_efficiency_comparison,
        reproductive_comparison,
        environmental_impact,
        buffalo_advantages: BUFFALO_ADVANTAGES.iter().map(|s| s.to_string()).collect(),
        cattle_advantages: CATTLE_ADVANTAGES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Compare a buffalo profile with a cattle profile.
pub fn compare_buffalo_to_cattle(
    buffalo_params: &BuffaloParams,
    cattle: &CattleParams,
) -> Result<ComparisonResult, ModelError> {
    buffalo_params.validate()?;
    cattle.validate()?;
    Ok(evaluate(buffalo_params, cattle).rounded())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::{AnimalCategory, DietInfo, DietType};
    use crate::buffalo::params::{BuffaloType, CattleReproduction, Gender, ProductionSystem};
    use crate::emissions::params::{FeedSystem, ManureSystem};
    use crate::energy::params::EnergyParams;
    use crate::reproduction::params::{DietBalance, SupplementType};
    use approx::assert_relative_eq;

    fn buffalo() -> BuffaloParams {
        let mut p = BuffaloParams::new(BuffaloType::WaterBuffalo, Gender::Female, 48.0);
        p.body_weight = Some(650.0);
        p.production_system = ProductionSystem::Traditional;
        p.is_lactating = true;
        p.milk_production = Some(5.0);
        p.diet = DietInfo::new(0.60, DietType::HighForage);
        p
    }

    fn cattle() -> CattleParams {
        let mut e = EnergyParams::new(AnimalCategory::Dairy, 550.0);
        e.milk_production = 15.0;
        e.diet = DietInfo::new(0.65, DietType::Mixed);
        CattleParams::new(e, ManureSystem::DryLot, FeedSystem::Grazing)
    }

    // -- Ratios --

    #[test]
    fn emissions_ratio_matches_separate_totals() {
        let r = compare_buffalo_to_cattle(&buffalo(), &cattle()).unwrap();
        let independent = r.buffalo.emissions_metrics.total_annual_emissions
            / r.cattle_emissions.total_annual_emissions;
        assert!((r.emissions_comparison.ratio - independent).abs() <= 0.01);
        assert_eq!(r.environmental_impact.ghg_ratio, r.emissions_comparison.ratio);
    }

    #[test]
    fn ratios_are_buffalo_over_cattle() {
        let r = evaluate(&buffalo(), &cattle());
        assert_relative_eq!(
            r.energy_comparison.ratio,
            r.buffalo.energy_metrics.gross_energy_intake / r.cattle_energy.gross_energy_intake,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            r.methane_comparison.percent_difference,
            (r.methane_comparison.ratio - 1.0) * 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn cattle_side_is_not_adjusted() {
        let r = evaluate(&buffalo(), &cattle());
        assert!(r.cattle_emissions.adjustment.is_identity());
        assert!(!r.buffalo.emissions_metrics.adjustment.is_identity());
    }

    // -- Environmental impact --

    #[test]
    fn water_use_scales_with_weight() {
        let r = evaluate(&buffalo(), &cattle());
        assert_relative_eq!(
            r.environmental_impact.water_use_ratio,
            1.4 * 650.0 / 550.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            r.environmental_impact.land_use_ratio,
            r.buffalo.energy_metrics.daily_feed_intake / r.cattle_energy.daily_feed_intake,
            epsilon = 1e-12
        );
    }

    // -- Optional sections --

    #[test]
    fn fcr_comparison_needs_gain_on_both_sides() {
        let r = evaluate(&buffalo(), &cattle());
        assert!(r.feed_efficiency_comparison.is_none());

        let mut young = BuffaloParams::new(BuffaloType::WaterBuffalo, Gender::Male, 18.0);
        young.production_system = ProductionSystem::Intensive;
        let mut c = cattle();
        c.energy = EnergyParams::new(AnimalCategory::Beef, 400.0);
        c.energy.weight_gain = 1.0;
        let r = evaluate(&young, &c);
        let fcr = r.feed_efficiency_comparison.unwrap();
        assert_relative_eq!(fcr.ratio, fcr.buffalo / fcr.cattle, epsilon = 1e-12);
    }

    #[test]
    fn reproduction_compared_when_both_present() {
        let r = evaluate(&buffalo(), &cattle());
        assert!(r.cattle_reproduction.is_none());
        assert!(r.reproductive_comparison.is_none());

        let mut c = cattle();
        c.reproduction = Some(CattleReproduction {
            calving_rate: 60.0,
            time_to_calf: 14.0,
            baseline_diet: DietBalance::new(-5.0, 7.0),
            improved_diet: DietBalance::new(0.0, 9.0),
            supplement_type: SupplementType::Mineral,
        });
        let r = evaluate(&buffalo(), &c);
        let cmp = r.reproductive_comparison.unwrap();
        // Same diet change and supplement: buffalo responds at 0.85 of cattle
        assert_relative_eq!(cmp.calving_rate_improvement_ratio.unwrap(), 0.85, epsilon = 1e-12);
    }

    #[test]
    fn advantage_lists_are_static() {
        let r = evaluate(&buffalo(), &cattle());
        assert_eq!(r.buffalo_advantages.len(), BUFFALO_ADVANTAGES.len());
        assert_eq!(r.cattle_advantages[0], CATTLE_ADVANTAGES[0]);
    }

    // -- Validation --

    #[test]
    fn rejects_buffalo_on_cattle_side() {
        let mut c = cattle();
        c.energy.category = AnimalCategory::Swamp;
        assert!(compare_buffalo_to_cattle(&buffalo(), &c).is_err());
    }

    #[test]
    fn rejects_bad_cattle_reproduction() {
        let mut c = cattle();
        c.reproduction = Some(CattleReproduction {
            calving_rate: 120.0,
            time_to_calf: 14.0,
            baseline_diet: DietBalance::new(0.0, 10.0),
            improved_diet: DietBalance::new(0.0, 10.0),
            supplement_type: SupplementType::None,
        });
        let err = compare_buffalo_to_cattle(&buffalo(), &c).unwrap_err();
        assert_eq!(err.field(), "current_calving_rate");
    }

    #[test]
    fn rejects_invalid_cattle_diet_balance() {
        let scenario = |baseline: DietBalance, improved: DietBalance| CattleReproduction {
            calving_rate: 60.0,
            time_to_calf: 14.0,
            baseline_diet: baseline,
            improved_diet: improved,
            supplement_type: SupplementType::None,
        };

        let mut c = cattle();
        c.reproduction = Some(scenario(
            DietBalance::new(f64::NAN, 7.0),
            DietBalance::new(0.0, 9.0),
        ));
        let err = compare_buffalo_to_cattle(&buffalo(), &c).unwrap_err();
        assert_eq!(err.field(), "baseline_diet.energy_balance");

        c.reproduction = Some(scenario(
            DietBalance::new(-5.0, 7.0),
            DietBalance::new(0.0, 250.0),
        ));
        let err = compare_buffalo_to_cattle(&buffalo(), &c).unwrap_err();
        assert_eq!(err.field(), "improved_diet.protein_percent");
    }

    #[test]
    fn rejects_poor_cattle_digestibility() {
        let mut c = cattle();
        c.energy.diet = DietInfo::new(0.30, DietType::HighForage);
        let err = compare_buffalo_to_cattle(&buffalo(), &c).unwrap_err();
        assert_eq!(err.field(), "diet_info.digestibility");
    }
}
