//! Reproductive impact process functions.
use super::constants::{
    ADOPTION_RATE, CALVING_ENERGY_WEIGHT, CALVING_PROTEIN_WEIGHT, ENERGY_EFFECT_CAP,
    ENERGY_EFFECT_SCALE, INTERVAL_ENERGY_WEIGHT, INTERVAL_PROTEIN_WEIGHT, LONG_RUN_MULTIPLIER,
    MAX_CALVING_RATE, MONTHS_PER_YEAR, PROTEIN_BREAKPOINT, PROTEIN_SLOPE_ABOVE,
    PROTEIN_SLOPE_BELOW,
};
use super::outputs::ProjectionYear;

/// Energy-balance effect: square-root response to the positive gain only,
/// capped at `ENERGY_EFFECT_CAP` points.
pub fn energy_effect(baseline: f64, improved: f64) -> f64 {
    let gain = (improved - baseline).max(0.0);
    (ENERGY_EFFECT_SCALE * gain.sqrt()).min(ENERGY_EFFECT_CAP)
}

/// Protein effect: linear up to the breakpoint, shallower beyond it.
pub fn protein_effect(baseline: f64, improved: f64) -> f64 {
    let gain = (improved - baseline).max(0.0);
    if gain <= PROTEIN_BREAKPOINT {
        PROTEIN_SLOPE_BELOW * gain
    } else {
        PROTEIN_SLOPE_BELOW * PROTEIN_BREAKPOINT + PROTEIN_SLOPE_ABOVE * (gain - PROTEIN_BREAKPOINT)
    }
}

/// Calving-rate improvement [percentage points].
pub fn calving_rate_improvement(
    supplement_base: f64,
    energy: f64,
    protein: f64,
    species_factor: f64,
) -> f64 {
    (supplement_base + CALVING_ENERGY_WEIGHT * energy + CALVING_PROTEIN_WEIGHT * protein)
        * species_factor
}

/// Time-to-calf improvement [months].
pub fn time_to_calf_improvement(
    supplement_base: f64,
    energy: f64,
    protein: f64,
    species_factor: f64,
) -> f64 {
    (supplement_base + INTERVAL_ENERGY_WEIGHT * energy + INTERVAL_PROTEIN_WEIGHT * protein)
        * species_factor
}

/// Apply the biological ceiling.
pub fn projected_calving_rate(current: f64, improvement: f64) -> f64 {
    (current + improvement).min(MAX_CALVING_RATE)
}

/// Apply the biological floor.
pub fn projected_time_to_calf(current: f64, improvement: f64, floor: f64) -> f64 {
    (current - improvement).max(floor)
}

/// Calvings per female per year from a calving interval in months.
pub fn calvings_per_year(time_to_calf: f64) -> f64 {
    MONTHS_PER_YEAR / time_to_calf
}

/// Share of the long-run improvement realised after `year` years.
pub fn adoption(year: f64) -> f64 {
    1.0 - (-ADOPTION_RATE * year).exp()
}

/// One year of the projection, against the long-run (1.5x) improvement.
pub fn projection_year(
    year: u32,
    current_calving_rate: f64,
    current_time_to_calf: f64,
    calving_improvement: f64,
    interval_improvement: f64,
    floor: f64,
) -> ProjectionYear {
    let year = f64::from(year);
    let share = adoption(year);
    let calving_rate = projected_calving_rate(
        current_calving_rate,
        LONG_RUN_MULTIPLIER * calving_improvement * share,
    );
    let time_to_calf = projected_time_to_calf(
        current_time_to_calf,
        LONG_RUN_MULTIPLIER * interval_improvement * share,
        floor,
    );
    ProjectionYear {
        year,
        adoption: share,
        calving_rate,
        time_to_calf,
        calvings_per_year: calvings_per_year(time_to_calf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -- Energy effect --

    #[test]
    fn energy_effect_ignores_worse_diet() {
        assert_eq!(energy_effect(5.0, 2.0), 0.0);
        assert_eq!(energy_effect(3.0, 3.0), 0.0);
    }

    #[test]
    fn energy_effect_square_root() {
        assert_relative_eq!(energy_effect(0.0, 4.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn energy_effect_capped() {
        assert_eq!(energy_effect(0.0, 100.0), 10.0);
    }

    #[test]
    fn energy_effect_diminishing_returns() {
        for gain in [0.5, 1.0, 2.0, 4.0, 8.0] {
            let single = energy_effect(0.0, gain);
            let double = energy_effect(0.0, 2.0 * gain);
            assert!(double <= 2.0 * single + 1e-12);
            assert!(double >= single);
        }
    }

    // -- Protein effect --

    #[test]
    fn protein_effect_below_breakpoint() {
        assert_relative_eq!(protein_effect(10.0, 12.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(protein_effect(10.0, 14.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn protein_effect_above_breakpoint() {
        assert_relative_eq!(protein_effect(10.0, 16.0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn protein_marginal_rate_drops_past_breakpoint() {
        let below = protein_effect(0.0, 3.0) - protein_effect(0.0, 2.0);
        let above = protein_effect(0.0, 7.0) - protein_effect(0.0, 6.0);
        assert!(above < below);
    }

    #[test]
    fn protein_effect_ignores_lower_protein() {
        assert_eq!(protein_effect(14.0, 9.0), 0.0);
    }

    // -- Improvements and bounds --

    #[test]
    fn improvement_weights() {
        // (5 + 0.5*6 + 3) * 0.85
        assert_relative_eq!(
            calving_rate_improvement(5.0, 6.0, 3.0, 0.85),
            11.0 * 0.85,
            epsilon = 1e-12
        );
        // (1 + 0.1*6 + 0.05*3) * 1.0
        assert_relative_eq!(
            time_to_calf_improvement(1.0, 6.0, 3.0, 1.0),
            1.75,
            epsilon = 1e-12
        );
    }

    #[test]
    fn calving_rate_ceiling() {
        assert_eq!(projected_calving_rate(90.0, 12.0), 95.0);
        assert_eq!(projected_calving_rate(60.0, 5.0), 65.0);
    }

    #[test]
    fn time_to_calf_floor() {
        assert_eq!(projected_time_to_calf(14.0, 4.0, 13.0), 13.0);
        assert_eq!(projected_time_to_calf(14.0, 4.0, 11.5), 11.5);
        assert_eq!(projected_time_to_calf(16.0, 1.0, 13.0), 15.0);
    }

    // -- Projection --

    #[test]
    fn adoption_curve() {
        assert_eq!(adoption(0.0), 0.0);
        assert_relative_eq!(adoption(1.0), 1.0 - (-0.3f64).exp(), epsilon = 1e-12);
        assert!(adoption(10.0) > 0.95 && adoption(10.0) < 1.0);
    }

    #[test]
    fn projection_year_uses_long_run_improvement() {
        let y = projection_year(10, 60.0, 16.0, 10.0, 1.0, 13.0);
        let share = adoption(10.0);
        assert_relative_eq!(y.calving_rate, 60.0 + 15.0 * share, epsilon = 1e-12);
        assert_relative_eq!(y.time_to_calf, 16.0 - 1.5 * share, epsilon = 1e-12);
        assert_relative_eq!(y.calvings_per_year, 12.0 / y.time_to_calf, epsilon = 1e-12);
        assert_eq!(y.year, 10.0);
    }
}
