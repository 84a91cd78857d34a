//! Emission equations, one function per source.
//!
//! Masses are annual per head; CO2e uses the 100-year GWPs in
//! [`crate::conversion`].
use super::constants::REFERENCE_BODY_WEIGHT;
use crate::conversion::{DAYS_PER_YEAR, N2O_N_TO_N2O};

/// Manure CH4 scaled linearly from the 500 kg reference animal [kg CH4/year].
#[inline]
pub fn manure_methane(factor_at_reference: f64, body_weight: f64) -> f64 {
    factor_at_reference * body_weight / REFERENCE_BODY_WEIGHT
}

/// Annual nitrogen excretion [kg N/year].
///
/// `rate` is per 1000 kg of body weight per day.
#[inline]
pub fn nitrogen_excretion(rate: f64, body_weight: f64) -> f64 {
    rate * body_weight * DAYS_PER_YEAR / 1000.0
}

/// Direct manure N2O [kg N2O/year] from excreted N and EF3.
#[inline]
pub fn manure_n2o(n_excretion: f64, emission_factor: f64) -> f64 {
    n_excretion * emission_factor * N2O_N_TO_N2O
}

/// Annual dry-matter intake [kg DM/year].
#[inline]
pub fn annual_feed_intake(daily_feed_intake: f64) -> f64 {
    daily_feed_intake * DAYS_PER_YEAR
}

/// Embodied feed emissions [kg CO2e/year].
#[inline]
pub fn feed_production(annual_feed_intake: f64, emission_factor: f64) -> f64 {
    annual_feed_intake * emission_factor
}

/// Share of `part` in `total` [%]; zero when nothing is emitted.
#[inline]
pub fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}
