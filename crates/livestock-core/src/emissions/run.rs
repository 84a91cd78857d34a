/// Emissions aggregator orchestration.
///
/// - `evaluate()`: full-precision metrics for already-validated parameters
/// - `calculate_total_emissions()`: validated public entry point
use log::debug;

use super::constants::{
    feed_emission_factor, manure_methane_factor, n2o_emission_factor, nitrogen_excretion_rate,
};
use super::outputs::{
    EmissionAdjustment, EmissionDetails, EmissionsMetrics, EntericDetail, FeedProductionDetail,
    ManureMethaneDetail, ManureN2oDetail, SourceBreakdown,
};
use super::params::EmissionsParams;
use super::processes;
use crate::conversion::{GWP_CH4, GWP_N2O};
use crate::error::ModelError;
use crate::traits::ModelParams;

pub fn evaluate(params: &EmissionsParams) -> EmissionsMetrics {
    let animal_type = params.animal_type;
    let bw = params.body_weight;

    // Enteric, as supplied by the energy engine
    let enteric = EntericDetail {
        methane: params.enteric.methane_annual,
        co2e: params.enteric.methane_annual_co2e,
    };

    // 1. Manure CH4
    let ch4_factor = manure_methane_factor(animal_type, params.manure_system);
    let manure_methane = processes::manure_methane(ch4_factor, bw);
    let manure_ch4 = ManureMethaneDetail {
        emission_factor: ch4_factor,
        methane: manure_methane,
        co2e: manure_methane * GWP_CH4,
    };

    // 2-3. Manure N2O
    let n_excretion = processes::nitrogen_excretion(nitrogen_excretion_rate(animal_type), bw);
    let n2o_factor = n2o_emission_factor(params.manure_system);
    let n2o = processes::manure_n2o(n_excretion, n2o_factor);
    let manure_n2o = ManureN2oDetail {
        nitrogen_excretion: n_excretion,
        emission_factor: n2o_factor,
        n2o,
        co2e: n2o * GWP_N2O,
    };

    // 4. Feed production
    let annual_feed = processes::annual_feed_intake(params.enteric.daily_feed_intake);
    let feed_factor = feed_emission_factor(params.feed_system);
    let feed_production = FeedProductionDetail {
        annual_feed_intake: annual_feed,
        emission_factor: feed_factor,
        co2e: processes::feed_production(annual_feed, feed_factor),
    };

    // 5. Totals
    let sources = SourceBreakdown {
        enteric: enteric.co2e,
        manure_ch4: manure_ch4.co2e,
        manure_n2o: manure_n2o.co2e,
        feed_production: feed_production.co2e,
    };
    let details = EmissionDetails {
        enteric,
        manure_ch4,
        manure_n2o,
        feed_production,
    };

    let metrics = EmissionsMetrics::from_sources(
        animal_type,
        params.manure_system,
        params.feed_system,
        bw,
        sources,
        details,
        EmissionAdjustment::IDENTITY,
    );

    debug!(
        "emissions {} ({}, {}): total {:.1} kg CO2e/year, enteric {:.1}, manure CH4 {:.1}, manure N2O {:.1}, feed {:.1}",
        animal_type,
        params.manure_system,
        params.feed_system,
        metrics.total_annual_emissions,
        sources.enteric,
        sources.manure_ch4,
        sources.manure_n2o,
        sources.feed_production
    );

    metrics
}

/// Total annual emissions broken down by source.
pub fn calculate_total_emissions(params: &EmissionsParams) -> Result<EmissionsMetrics, ModelError> {
    params.validate()?;
    Ok(evaluate(params).rounded())
}
