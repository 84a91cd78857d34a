//! Energy engine process functions.
//!
//! Pure functions, one per step of the bioenergetic chain. All inputs and
//! outputs are f64 in MJ/day, kg/day or dimensionless ratios.
use super::constants::{
    SpeciesEnergy, GROSS_ENERGY_PER_KG_DM, LACTATION_EFFICIENCY, METABOLIC_EXPONENT,
    PREGNANCY_EFFICIENCY, REG_COEFFS, REM_COEFFS,
};
use crate::conversion::METHANE_ENERGY_DENSITY;

/// Step 1: Net energy for maintenance (NEm).
///
/// NEm = Cfi x BW^0.75 x activity.
pub fn maintenance_energy(body_weight: f64, coefficient: f64, activity_factor: f64) -> f64 {
    coefficient * body_weight.powf(METABOLIC_EXPONENT) * activity_factor
}

/// Step 2: Net energy for growth (NEg). Zero when not gaining weight.
pub fn growth_energy(weight_gain: f64, growth_coefficient: f64) -> f64 {
    if weight_gain > 0.0 {
        weight_gain * growth_coefficient
    } else {
        0.0
    }
}

/// Milk-fat adjustment ratio relative to the species reference fat content.
pub fn fat_adjustment(fat_percent: f64, species: &SpeciesEnergy) -> f64 {
    let actual = species.fat_intercept + species.fat_slope * fat_percent;
    let reference = species.fat_intercept + species.fat_slope * species.reference_fat_percent;
    actual / reference
}

/// Step 3: Net energy for lactation (NEl). Zero when not lactating.
pub fn lactation_energy(milk_production: f64, coefficient: f64, fat_ratio: f64) -> f64 {
    if milk_production > 0.0 {
        milk_production * coefficient * fat_ratio
    } else {
        0.0
    }
}

/// Step 4: Net energy for pregnancy (NEp).
pub fn pregnancy_energy(is_pregnant: bool, species: &SpeciesEnergy) -> f64 {
    if is_pregnant {
        species.pregnancy_energy
    } else {
        0.0
    }
}

fn curvilinear(coeffs: &[f64; 4], de_percent: f64) -> f64 {
    coeffs[0] + coeffs[1] * de_percent + coeffs[2] * de_percent * de_percent
        + coeffs[3] / de_percent
}

/// Ratio of net energy available for maintenance to digestible energy (REM).
pub fn rem(de_percent: f64) -> f64 {
    curvilinear(&REM_COEFFS, de_percent)
}

/// Ratio of net energy available for growth to digestible energy (REG).
pub fn reg(de_percent: f64) -> f64 {
    curvilinear(&REG_COEFFS, de_percent)
}

/// Gross energy contributions of each net energy component [MJ/day].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrossComponents {
    pub maintenance: f64,
    pub growth: f64,
    pub lactation: f64,
    pub pregnancy: f64,
}

impl GrossComponents {
    pub fn total(&self) -> f64 {
        self.maintenance + self.growth + self.lactation + self.pregnancy
    }
}

/// Step 6: Convert each net energy component to gross energy.
pub fn gross_energy(
    nem: f64,
    neg: f64,
    nel: f64,
    nep: f64,
    rem: f64,
    reg: f64,
) -> GrossComponents {
    GrossComponents {
        maintenance: nem / rem,
        growth: neg / reg,
        lactation: nel / LACTATION_EFFICIENCY,
        pregnancy: nep / PREGNANCY_EFFICIENCY,
    }
}

/// Step 8: Daily enteric methane [kg CH4 / day].
pub fn daily_methane(gross_energy_intake: f64, ym_percent: f64) -> f64 {
    gross_energy_intake * (ym_percent / 100.0) / METHANE_ENERGY_DENSITY
}

/// Step 9a: Dietary energy density [MJ / kg DM].
pub fn diet_energy_density(digestibility: f64) -> f64 {
    GROSS_ENERGY_PER_KG_DM * digestibility
}

/// Step 9b: Dry-matter intake [kg DM / day].
pub fn daily_feed_intake(gross_energy_intake: f64, energy_density: f64) -> f64 {
    gross_energy_intake / energy_density
}

/// Step 10: Feed conversion ratio [kg DM / kg gain]; only defined while gaining.
pub fn feed_conversion_ratio(daily_feed_intake: f64, weight_gain: f64) -> Option<f64> {
    if weight_gain > 0.0 {
        Some(daily_feed_intake / weight_gain)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::constants::{BUFFALO, CATTLE};
    use approx::assert_relative_eq;

    // -- Maintenance --

    #[test]
    fn maintenance_scales_with_metabolic_weight() {
        // 16^0.75 = 8
        assert_relative_eq!(maintenance_energy(16.0, 0.5, 1.0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(maintenance_energy(16.0, 0.5, 1.2), 4.8, epsilon = 1e-12);
    }

    #[test]
    fn maintenance_strictly_increases_with_weight() {
        let mut previous = 0.0;
        for bw in [200.0, 350.0, 500.0, 650.0, 800.0] {
            let nem = maintenance_energy(bw, 0.386, 1.0);
            assert!(nem > previous);
            previous = nem;
        }
    }

    // -- Growth --

    #[test]
    fn growth_zero_without_gain() {
        assert_eq!(growth_energy(0.0, CATTLE.growth_coefficient), 0.0);
    }

    #[test]
    fn growth_linear_in_gain() {
        assert_relative_eq!(growth_energy(0.5, 22.02), 11.01, epsilon = 1e-12);
    }

    // -- Lactation --

    #[test]
    fn fat_adjustment_is_one_at_reference() {
        assert_relative_eq!(fat_adjustment(4.0, &CATTLE), 1.0, epsilon = 1e-12);
        assert_relative_eq!(fat_adjustment(7.0, &BUFFALO), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn richer_milk_costs_more_energy() {
        assert!(fat_adjustment(5.0, &CATTLE) > 1.0);
        assert!(fat_adjustment(6.0, &BUFFALO) < 1.0);
    }

    #[test]
    fn cattle_fat_adjustment_known_value() {
        // (1.47 + 0.40*5) / (1.47 + 0.40*4) = 3.47 / 3.07
        assert_relative_eq!(fat_adjustment(5.0, &CATTLE), 3.47 / 3.07, epsilon = 1e-12);
    }

    #[test]
    fn lactation_zero_when_dry() {
        assert_eq!(lactation_energy(0.0, 3.07, 1.0), 0.0);
        assert_relative_eq!(lactation_energy(20.0, 3.07, 1.0), 61.4, epsilon = 1e-10);
    }

    // -- Pregnancy --

    #[test]
    fn pregnancy_is_flat() {
        assert_eq!(pregnancy_energy(false, &CATTLE), 0.0);
        assert_eq!(pregnancy_energy(true, &CATTLE), 2.8);
        assert_eq!(pregnancy_energy(true, &BUFFALO), 3.2);
    }

    // -- REM / REG --

    #[test]
    fn rem_reg_known_values_at_65_percent() {
        let de = 65.0;
        let expected_rem = 1.123 - 4.092e-3 * de + 1.126e-5 * de * de - 25.4 / de;
        let expected_reg = 1.164 - 5.160e-3 * de + 1.308e-5 * de * de - 37.4 / de;
        assert_relative_eq!(rem(de), expected_rem, epsilon = 1e-12);
        assert_relative_eq!(reg(de), expected_reg, epsilon = 1e-12);
        assert_relative_eq!(rem(de), 0.5138, epsilon = 1e-3);
        assert_relative_eq!(reg(de), 0.3085, epsilon = 1e-3);
    }

    #[test]
    fn efficiencies_rise_with_digestibility() {
        assert!(rem(70.0) > rem(55.0));
        assert!(reg(70.0) > reg(55.0));
    }

    #[test]
    fn efficiencies_positive_over_accepted_diets() {
        let bounds = crate::animal::DIGESTIBILITY_BOUNDS;
        let mut de = bounds.min * 100.0;
        while de <= bounds.max * 100.0 {
            assert!(rem(de) > 0.35, "REM {} at DE {de}", rem(de));
            assert!(reg(de) > 0.1, "REG {} at DE {de}", reg(de));
            de += 0.5;
        }
        assert!(reg(38.0) < 0.02);
        assert!(rem(20.0) < 0.0);
    }

    // -- Gross energy --

    #[test]
    fn gross_components_divide_by_efficiencies() {
        let g = gross_energy(10.0, 5.0, 6.5, 1.3, 0.5, 0.25);
        assert_relative_eq!(g.maintenance, 20.0, epsilon = 1e-12);
        assert_relative_eq!(g.growth, 20.0, epsilon = 1e-12);
        assert_relative_eq!(g.lactation, 10.0, epsilon = 1e-12);
        assert_relative_eq!(g.pregnancy, 10.0, epsilon = 1e-12);
        assert_relative_eq!(g.total(), 60.0, epsilon = 1e-12);
    }

    // -- Methane and feed --

    #[test]
    fn methane_from_gross_energy() {
        // 200 MJ x 6.5 % / 55.65 MJ/kg
        assert_relative_eq!(daily_methane(200.0, 6.5), 13.0 / 55.65, epsilon = 1e-12);
    }

    #[test]
    fn feed_intake_from_density() {
        assert_relative_eq!(diet_energy_density(0.6), 11.07, epsilon = 1e-12);
        assert_relative_eq!(daily_feed_intake(110.7, 11.07), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn fcr_only_when_gaining() {
        assert_eq!(feed_conversion_ratio(10.0, 0.0), None);
        assert_eq!(feed_conversion_ratio(10.0, 0.5), Some(20.0));
    }
}
