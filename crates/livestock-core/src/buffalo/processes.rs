//! Milk, meat and draft equations for the buffalo layer.
use super::constants::{
    DRAFT_PULL_FRACTION, DRAFT_SPEED, DRESSING_FRACTION, FCM_FAT_SLOPE, FCM_INTERCEPT, GRAVITY,
    LACTATION_DAYS, MJ_PER_KWH,
};
use crate::conversion::{safe_ratio, DAYS_PER_YEAR};

// -- Milk --

/// Whole-lactation yield [kg].
#[inline]
pub fn lactation_yield(daily_yield: f64) -> f64 {
    daily_yield * LACTATION_DAYS
}

/// Milk fat [kg/day].
#[inline]
pub fn fat_yield(daily_yield: f64, fat_percent: f64) -> f64 {
    daily_yield * fat_percent / 100.0
}

/// 4 % fat-corrected milk [kg/day].
#[inline]
pub fn fat_corrected_milk(daily_yield: f64, fat_percent: f64) -> f64 {
    daily_yield * (FCM_INTERCEPT + FCM_FAT_SLOPE * fat_percent)
}

// -- Meat --

#[inline]
pub fn annual_gain(daily_gain: f64) -> f64 {
    daily_gain * DAYS_PER_YEAR
}

/// Carcass share of a live-weight quantity [kg].
#[inline]
pub fn carcass(live_weight: f64) -> f64 {
    live_weight * DRESSING_FRACTION
}

// -- Draft --

/// Sustained drawbar pull [kg force].
#[inline]
pub fn drawbar_pull(body_weight: f64) -> f64 {
    body_weight * DRAFT_PULL_FRACTION
}

/// Power at walking speed [kW].
#[inline]
pub fn draft_power(pull_kg: f64) -> f64 {
    pull_kg * GRAVITY * DRAFT_SPEED / 1000.0
}

/// Mechanical work delivered per day [MJ].
#[inline]
pub fn daily_work_energy(power_kw: f64, hours: f64) -> f64 {
    power_kw * hours * MJ_PER_KWH
}

// -- Intensities --

/// Quantity per unit of product, `None` when nothing is produced.
#[inline]
pub fn per_unit(quantity: f64, product: f64) -> Option<f64> {
    if product > 0.0 {
        safe_ratio(quantity, product)
    } else {
        None
    }
}
