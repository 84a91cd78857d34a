/// Reproductive impact orchestration.
///
/// - `evaluate()`: full-precision metrics for already-validated parameters
/// - `calculate_reproductive_impact()`: validated public entry point
use log::debug;

use super::constants::{min_time_to_calf, species_factor, supplement_base, PROJECTION_YEARS};
use super::outputs::{ContributingFactors, ReproductiveMetrics};
use super::params::ReproductiveParams;
use super::processes;
use crate::error::ModelError;
use crate::traits::ModelParams;

pub fn evaluate(params: &ReproductiveParams) -> ReproductiveMetrics {
    let animal_type = params.animal_type();

    // 1. Supplement base
    let (base_calving, base_interval) = supplement_base(params.supplement_type);

    // 2-3. Diet effects (positive changes only)
    let energy = processes::energy_effect(
        params.baseline_diet.energy_balance,
        params.improved_diet.energy_balance,
    );
    let protein = processes::protein_effect(
        params.baseline_diet.protein_percent,
        params.improved_diet.protein_percent,
    );

    // 4. Species responsiveness
    let factor = species_factor(animal_type);
    let floor = min_time_to_calf(animal_type);

    // 5-6. Single-year improvement with biological bounds
    let calving_improvement =
        processes::calving_rate_improvement(base_calving, energy, protein, factor);
    let interval_improvement =
        processes::time_to_calf_improvement(base_interval, energy, protein, factor);
    let projected_calving_rate =
        processes::projected_calving_rate(params.current_calving_rate, calving_improvement);
    let projected_time_to_calf = processes::projected_time_to_calf(
        params.current_time_to_calf,
        interval_improvement,
        floor,
    );

    // 7. Ten-year adoption curve
    let projections = (1..=PROJECTION_YEARS as u32)
        .map(|year| {
            processes::projection_year(
                year,
                params.current_calving_rate,
                params.current_time_to_calf,
                calving_improvement,
                interval_improvement,
                floor,
            )
        })
        .collect();

    debug!(
        "reproduction {} ({}): calving rate {:.1} -> {:.1} %, time to calf {:.1} -> {:.1} months",
        params.category,
        params.supplement_type,
        params.current_calving_rate,
        projected_calving_rate,
        params.current_time_to_calf,
        projected_time_to_calf
    );

    ReproductiveMetrics {
        category: params.category,
        supplement_type: params.supplement_type,
        current_calving_rate: params.current_calving_rate,
        projected_calving_rate,
        calving_rate_improvement: calving_improvement,
        current_time_to_calf: params.current_time_to_calf,
        projected_time_to_calf,
        time_to_calf_improvement: interval_improvement,
        current_calvings_per_year: processes::calvings_per_year(params.current_time_to_calf),
        projected_calvings_per_year: processes::calvings_per_year(projected_time_to_calf),
        contributing_factors: ContributingFactors {
            supplement_calving_effect: base_calving,
            supplement_interval_effect: base_interval,
            energy_impact: energy,
            protein_impact: protein,
            species_factor: factor,
        },
        projections,
    }
}

/// Calving-rate and calving-interval projection for a diet/supplement change.
pub fn calculate_reproductive_impact(
    params: &ReproductiveParams,
) -> Result<ReproductiveMetrics, ModelError> {
    params.validate()?;
    Ok(evaluate(params).rounded())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::AnimalCategory;
    use crate::reproduction::params::{DietBalance, SupplementType};
    use approx::assert_relative_eq;

    fn params(category: AnimalCategory) -> ReproductiveParams {
        ReproductiveParams {
            category,
            current_calving_rate: 60.0,
            current_time_to_calf: 16.0,
            baseline_diet: DietBalance::new(-4.0, 8.0),
            improved_diet: DietBalance::new(0.0, 11.0),
            supplement_type: SupplementType::Protein,
        }
    }

    #[test]
    fn buffalo_improvement_known_value() {
        let m = evaluate(&params(AnimalCategory::Water));
        // energy = 3*sqrt(4) = 6, protein = 1.5*3 = 4.5, base = (5, 1)
        let calving = (5.0 + 0.5 * 6.0 + 4.5) * 0.85;
        let interval = (1.0 + 0.1 * 6.0 + 0.05 * 4.5) * 0.85;
        assert_relative_eq!(m.calving_rate_improvement, calving, epsilon = 1e-12);
        assert_relative_eq!(m.time_to_calf_improvement, interval, epsilon = 1e-12);
        assert_relative_eq!(m.projected_calving_rate, 60.0 + calving, epsilon = 1e-12);
        assert_relative_eq!(m.projected_time_to_calf, 16.0 - interval, epsilon = 1e-12);
        assert_eq!(m.contributing_factors.energy_impact, 6.0);
        assert_eq!(m.contributing_factors.species_factor, 0.85);
    }

    #[test]
    fn cattle_respond_more_than_buffalo() {
        let cattle = evaluate(&params(AnimalCategory::Dairy));
        let buffalo = evaluate(&params(AnimalCategory::Water));
        assert!(cattle.calving_rate_improvement > buffalo.calving_rate_improvement);
    }

    #[test]
    fn no_diet_change_leaves_only_supplement_base() {
        let mut p = params(AnimalCategory::Beef);
        p.improved_diet = p.baseline_diet;
        p.supplement_type = SupplementType::Mineral;
        let m = evaluate(&p);
        assert_eq!(m.calving_rate_improvement, 3.0);
        assert_eq!(m.time_to_calf_improvement, 0.5);
    }

    #[test]
    fn worse_diet_counts_as_no_change() {
        let mut p = params(AnimalCategory::Beef);
        p.improved_diet = DietBalance::new(-10.0, 5.0);
        p.supplement_type = SupplementType::None;
        let m = evaluate(&p);
        assert_eq!(m.calving_rate_improvement, 0.0);
        assert_eq!(m.projected_calving_rate, 60.0);
    }

    #[test]
    fn projections_cover_ten_years_and_approach_long_run() {
        let m = evaluate(&params(AnimalCategory::Dairy));
        assert_eq!(m.projections.len(), 10);
        assert_eq!(m.projections[0].year, 1.0);
        assert_eq!(m.projections[9].year, 10.0);
        for pair in m.projections.windows(2) {
            assert!(pair[1].calving_rate >= pair[0].calving_rate);
            assert!(pair[1].time_to_calf <= pair[0].time_to_calf);
        }
        let long_run = 60.0 + 1.5 * m.calving_rate_improvement;
        assert!(m.projections[9].calving_rate < long_run);
        assert!(m.projections[9].calving_rate > m.projected_calving_rate);
    }

    #[test]
    fn bounds_hold_everywhere() {
        let mut p = params(AnimalCategory::Water);
        p.current_calving_rate = 90.0;
        p.current_time_to_calf = 13.5;
        p.baseline_diet = DietBalance::new(-20.0, 5.0);
        p.improved_diet = DietBalance::new(20.0, 18.0);
        p.supplement_type = SupplementType::Complete;
        let m = evaluate(&p);
        assert_eq!(m.projected_calving_rate, 95.0);
        assert_eq!(m.projected_time_to_calf, 13.0);
        for y in &m.projections {
            assert!(y.calving_rate <= 95.0);
            assert!(y.time_to_calf >= 13.0);
        }

        p.category = AnimalCategory::Dairy;
        p.current_time_to_calf = 12.0;
        let m = evaluate(&p);
        assert_eq!(m.projected_time_to_calf, 11.5);
        assert!(m.projections.iter().all(|y| y.time_to_calf >= 11.5));
    }

    #[test]
    fn projection_series_matches_rows() {
        let m = calculate_reproductive_impact(&params(AnimalCategory::Swamp)).unwrap();
        let series = m.projection_series();
        assert_eq!(series.len(), 10);
        assert_eq!(series.get(4), Some(m.projections[4]));
        assert_eq!(series.calving_rate[9], m.projections[9].calving_rate);
    }

    #[test]
    fn entry_point_validates() {
        let mut p = params(AnimalCategory::Dairy);
        p.current_calving_rate = -1.0;
        assert!(calculate_reproductive_impact(&p).is_err());
    }
}
