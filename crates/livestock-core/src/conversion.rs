//! Shared greenhouse-gas conversion constants and helpers.
//!
//! 100-year global warming potentials (IPCC AR5) and the unit
//! conversions used by more than one component.

/// Global warming potential of methane [kg CO2e / kg CH4].
pub const GWP_CH4: f64 = 28.0;

/// Global warming potential of nitrous oxide [kg CO2e / kg N2O].
pub const GWP_N2O: f64 = 265.0;

/// Energy content of methane [MJ / kg CH4].
pub const METHANE_ENERGY_DENSITY: f64 = 55.65;

/// N2O-N to N2O molecular-weight conversion (44/28).
pub const N2O_N_TO_N2O: f64 = 44.0 / 28.0;

/// Days per year used for annualisation.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Round to a fixed number of decimals for display.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round an optional value, keeping `None`.
#[inline]
pub fn round_opt(value: Option<f64>, decimals: i32) -> Option<f64> {
    value.map(|v| round_to(v, decimals))
}

/// Ratio `a / b`, `None` when `b` is zero or either side is not finite.
#[inline]
pub fn safe_ratio(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 || !a.is_finite() || !b.is_finite() {
        None
    } else {
        Some(a / b)
    }
}

/// Percent difference of a ratio relative to parity: (ratio - 1) x 100.
#[inline]
pub fn percent_difference(ratio: f64) -> f64 {
    (ratio - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_to_decimals() {
        assert_eq!(round_to(12.3456, 1), 12.3);
        assert_eq!(round_to(12.3456, 2), 12.35);
        assert_eq!(round_to(0.0004, 3), 0.0);
    }

    #[test]
    fn round_opt_keeps_none() {
        assert_eq!(round_opt(None, 2), None);
        assert_eq!(round_opt(Some(1.005), 1), Some(1.0));
    }

    #[test]
    fn n2o_conversion_factor() {
        assert_relative_eq!(N2O_N_TO_N2O, 1.5714285714285714, epsilon = 1e-12);
    }

    #[test]
    fn safe_ratio_guards_zero_denominator() {
        assert_eq!(safe_ratio(1.0, 0.0), None);
        assert_eq!(safe_ratio(3.0, 2.0), Some(1.5));
    }

    #[test]
    fn percent_difference_from_ratio() {
        assert_relative_eq!(percent_difference(1.25), 25.0, epsilon = 1e-12);
        assert_relative_eq!(percent_difference(0.8), -20.0, epsilon = 1e-12);
    }
}
