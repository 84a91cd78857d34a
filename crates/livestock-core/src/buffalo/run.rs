/// Buffalo profile orchestration.
///
/// Resolves species defaults, runs the energy engine, the reproductive
/// model (breeding females only) and the emissions aggregator at full
/// precision, applies the buffalo emission multipliers, and rounds once
/// at the end.
use log::{debug, warn};

use super::constants::{
    buffalo_profile, diet_pair, supplement_for, weight_gain, CONCENTRATE_RESPONSE,
    DRESSING_FRACTION, EMISSION_ADJUSTMENT, MATURE_AGE, ROUGHAGE_UTILIZATION, WORKING_HOURS,
};
use super::outputs::{
    BuffaloMetrics, BuffaloSummary, DraftMetrics, FeedEfficiency, MeatMetrics, MeatQuality,
    MilkMetrics, ProductionMetrics,
};
use super::params::{BuffaloParams, BuffaloType, CattleParams, Gender};
use super::processes;
use crate::animal::AnimalType;
use crate::conversion::{percent_difference, safe_ratio};
use crate::emissions::outputs::{EmissionsMetrics, ProductEmissionIntensity};
use crate::emissions::params::{EmissionsParams, EntericInput};
use crate::emissions::run as emissions;
use crate::energy::outputs::EnergyMetrics;
use crate::energy::params::EnergyParams;
use crate::energy::run as energy;
use crate::error::ModelError;
use crate::reproduction::outputs::ReproductiveMetrics;
use crate::reproduction::params::ReproductiveParams;
use crate::reproduction::run as reproduction;
use crate::traits::ModelParams;

/// Energy-engine input for a buffalo with every default resolved.
pub fn energy_params(params: &BuffaloParams, gain: f64) -> EnergyParams {
    let mut e = EnergyParams::new(params.buffalo_type.category(), params.resolved_body_weight());
    e.weight_gain = gain;
    e.milk_production = params.resolved_milk_production();
    e.milk_fat_percent = Some(params.resolved_fat_percent());
    e.is_pregnant = params.is_pregnant;
    e.activity_factor = params.activity_factor;
    e.diet = params.diet;
    e
}

/// Reproductive-model input, or `None` when the animal is not a breeding female.
pub fn reproductive_params(params: &BuffaloParams) -> Option<ReproductiveParams> {
    if !params.is_breeding_female() {
        return None;
    }
    let (baseline_diet, improved_diet) = diet_pair(params.production_system);
    Some(ReproductiveParams {
        category: params.buffalo_type.category(),
        current_calving_rate: params.resolved_calving_rate(),
        current_time_to_calf: params.resolved_time_to_calf(),
        baseline_diet,
        improved_diet,
        supplement_type: supplement_for(params.production_system),
    })
}

/// Energy and unadjusted emissions for a cattle profile, full precision.
pub fn evaluate_cattle(cattle: &CattleParams) -> (EnergyMetrics, EmissionsMetrics) {
    let energy_metrics = energy::evaluate(&cattle.energy);
    let emissions_metrics = emissions::evaluate(&EmissionsParams::new(
        AnimalType::Cattle,
        EntericInput::from(&energy_metrics),
        cattle.manure_system,
        cattle.energy.body_weight,
        cattle.feed_system,
    ));
    (energy_metrics, emissions_metrics)
}

fn production_metrics(params: &BuffaloParams, body_weight: f64, gain: f64) -> ProductionMetrics {
    let milk_production = params.is_lactating.then(|| {
        let daily = params.resolved_milk_production();
        let fat = params.resolved_fat_percent();
        let lactation_yield = processes::lactation_yield(daily);
        let range = buffalo_profile(params.buffalo_type).lactation;
        let within_species_range = range.contains(lactation_yield);
        if !within_species_range {
            warn!(
                "{} lactation yield {:.0} kg outside species range {:.0}-{:.0} kg",
                params.buffalo_type, lactation_yield, range.min, range.max
            );
        }
        MilkMetrics {
            daily_yield: daily,
            lactation_yield,
            fat_percent: fat,
            fat_yield: processes::fat_yield(daily, fat),
            fat_corrected_milk: processes::fat_corrected_milk(daily, fat),
            within_species_range,
        }
    });

    // Males and females that have not yet calved
    let meat_production = (!params.is_breeding_female()).then(|| {
        let annual = processes::annual_gain(gain);
        MeatMetrics {
            daily_gain: gain,
            annual_live_weight_gain: annual,
            annual_carcass_gain: processes::carcass(annual),
            carcass_weight: processes::carcass(body_weight),
            dressing_percentage: DRESSING_FRACTION * 100.0,
            quality: MeatQuality::for_system(params.production_system),
        }
    });

    let is_draft_animal = params.buffalo_type == BuffaloType::SwampBuffalo
        && params.gender == Gender::Male
        && params.age_months >= MATURE_AGE;
    let draft_capability = is_draft_animal.then(|| {
        let pull = processes::drawbar_pull(body_weight);
        let power = processes::draft_power(pull);
        DraftMetrics {
            drawbar_pull: pull,
            power_output: power,
            working_hours: WORKING_HOURS,
            daily_work_energy: processes::daily_work_energy(power, WORKING_HOURS),
        }
    });

    ProductionMetrics {
        milk_production,
        meat_production,
        draft_capability,
    }
}

fn product_intensity(total: f64, production: &ProductionMetrics) -> ProductEmissionIntensity {
    let mut intensity = ProductEmissionIntensity::default();
    if let Some(milk) = &production.milk_production {
        intensity.per_kg_milk = processes::per_unit(total, milk.lactation_yield);
    }
    if let Some(meat) = &production.meat_production {
        intensity.per_kg_live_weight_gain =
            processes::per_unit(total, meat.annual_live_weight_gain);
        intensity.per_kg_carcass_gain = processes::per_unit(total, meat.annual_carcass_gain);
    }
    intensity
}

fn feed_efficiency(energy_metrics: &EnergyMetrics, production: &ProductionMetrics) -> FeedEfficiency {
    let dmi = energy_metrics.daily_feed_intake;
    FeedEfficiency {
        dry_matter_intake: dmi,
        feed_conversion_ratio: energy_metrics.feed_conversion_ratio,
        roughage_utilization: ROUGHAGE_UTILIZATION,
        concentrate_response: CONCENTRATE_RESPONSE,
        dry_matter_per_kg_milk: production
            .milk_production
            .and_then(|m| processes::per_unit(dmi, m.daily_yield)),
        dry_matter_per_kg_gain: production
            .meat_production
            .and_then(|m| processes::per_unit(dmi, m.daily_gain)),
    }
}

/// Full-precision buffalo profile for already-validated parameters.
pub fn evaluate(params: &BuffaloParams) -> BuffaloMetrics {
    // 1-4. Species defaults and derived inputs
    let profile = buffalo_profile(params.buffalo_type);
    let body_weight = params.resolved_body_weight();
    let gain = weight_gain(params.age_months, params.production_system);

    // 5. Energy
    let energy_metrics = energy::evaluate(&energy_params(params, gain));

    // 6. Reproduction
    let reproductive_metrics: Option<ReproductiveMetrics> =
        reproductive_params(params).map(|r| reproduction::evaluate(&r));

    // 7. Production
    let production_metrics = production_metrics(params, body_weight, gain);

    // 8. Emissions, then the buffalo multipliers as a new value
    let unadjusted = emissions::evaluate(&EmissionsParams::new(
        AnimalType::Buffalo,
        EntericInput::from(&energy_metrics),
        params.manure_system,
        body_weight,
        params.production_system.feed_system(),
    ));
    let adjusted = unadjusted.adjusted(EMISSION_ADJUSTMENT);

    // 9. Product intensity
    let total = adjusted.total_annual_emissions;
    let emissions_metrics =
        adjusted.with_product_intensity(product_intensity(total, &production_metrics));

    // 10. Feed efficiency
    let feed_efficiency = feed_efficiency(&energy_metrics, &production_metrics);

    // Equivalent cattle profile for the summary comparison
    let (_, cattle_emissions) = evaluate_cattle(&CattleParams::equivalent_to(params, gain));
    let cattle_total = cattle_emissions.total_annual_emissions;
    let comparison = safe_ratio(total, cattle_total).map_or(0.0, percent_difference);

    debug!(
        "buffalo {} {} ({}): {:.1} kg, total {:.1} kg CO2e/year, {:+.1} % vs cattle",
        params.buffalo_type, params.gender, params.production_system, body_weight, total, comparison
    );

    let summary = BuffaloSummary {
        body_weight,
        daily_methane: energy_metrics.methane_daily,
        annual_emissions: total,
        emissions_intensity: emissions_metrics.emissions_intensity,
        milk_yield: production_metrics.milk_production.map(|m| m.daily_yield),
        cattle_equivalent_emissions: cattle_total,
        emissions_comparison_to_cattle: comparison,
    };

    BuffaloMetrics {
        buffalo_type: params.buffalo_type,
        gender: params.gender,
        age_months: params.age_months,
        production_system: params.production_system,
        weight_gain: gain,
        energy_metrics,
        emissions_metrics,
        reproductive_metrics,
        production_metrics,
        feed_efficiency,
        environmental_adaptation: profile.adaptation,
        summary,
    }
}

/// Full buffalo profile: energy, emissions, reproduction and production metrics.
pub fn calculate_buffalo_metrics(params: &BuffaloParams) -> Result<BuffaloMetrics, ModelError> {
    params.validate()?;
    Ok(evaluate(params).rounded())
}
