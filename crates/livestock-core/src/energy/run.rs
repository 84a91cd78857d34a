/// Energy engine orchestration.
///
/// - `evaluate()`: full-precision metrics for already-validated parameters
/// - `calculate_animal_energy()`: validated public entry point, display-rounded
use log::debug;

use super::constants::{
    lactation_coefficient, maintenance_coefficient, methane_conversion_factor, species_energy,
};
use super::outputs::EnergyMetrics;
use super::params::EnergyParams;
use super::processes;
use crate::conversion::{DAYS_PER_YEAR, GWP_CH4};
use crate::error::ModelError;
use crate::traits::ModelParams;

/// Run the full energy chain without rounding.
///
/// Callers are expected to have validated `params`; the buffalo layer and
/// the comparison use this to compose components at full precision.
pub fn evaluate(params: &EnergyParams) -> EnergyMetrics {
    let animal_type = params.animal_type();
    let species = species_energy(animal_type);

    // 1-4. Net energy components
    let nem = processes::maintenance_energy(
        params.body_weight,
        maintenance_coefficient(params.category),
        params.activity_factor,
    );
    let neg = processes::growth_energy(params.weight_gain, species.growth_coefficient);
    let fat_ratio = processes::fat_adjustment(params.resolved_fat_percent(), species);
    let nel = processes::lactation_energy(
        params.milk_production,
        lactation_coefficient(params.category),
        fat_ratio,
    );
    let nep = processes::pregnancy_energy(params.is_pregnant, species);

    // 5. Total net energy
    let total_net_energy = nem + neg + nel + nep;

    // 6. Net-to-gross conversion
    let de_percent = params.diet.digestibility_percent();
    let rem = processes::rem(de_percent);
    let reg = processes::reg(de_percent);
    let gross = processes::gross_energy(nem, neg, nel, nep, rem, reg);
    let gross_energy_intake = gross.total();

    // 7-8. Enteric methane
    let ym = methane_conversion_factor(animal_type, params.diet.diet_type);
    let methane_daily = processes::daily_methane(gross_energy_intake, ym);
    let methane_annual = methane_daily * DAYS_PER_YEAR;
    let methane_annual_co2e = methane_annual * GWP_CH4;

    // 9-10. Feed
    let diet_energy_density = processes::diet_energy_density(params.diet.digestibility);
    let daily_feed_intake = processes::daily_feed_intake(gross_energy_intake, diet_energy_density);
    let feed_conversion_ratio =
        processes::feed_conversion_ratio(daily_feed_intake, params.weight_gain);

    debug!(
        "energy {}: {:.1} kg BW, GE {:.2} MJ/day, CH4 {:.3} kg/day, DMI {:.2} kg/day",
        params.category, params.body_weight, gross_energy_intake, methane_daily, daily_feed_intake
    );

    EnergyMetrics {
        category: params.category,
        maintenance_energy: nem,
        growth_energy: neg,
        lactation_energy: nel,
        pregnancy_energy: nep,
        total_net_energy,
        gross_energy_intake,
        rem,
        reg,
        methane_conversion_factor: ym,
        methane_daily,
        methane_annual,
        methane_annual_co2e,
        diet_energy_density,
        daily_feed_intake,
        feed_conversion_ratio,
        energy_efficiency: total_net_energy / gross_energy_intake * 100.0,
        methane_energy_loss: ym,
    }
}

/// Energy, methane and feed metrics for either species.
///
/// Fails fast with `ModelError::InvalidParameter` on out-of-range input.
pub fn calculate_animal_energy(params: &EnergyParams) -> Result<EnergyMetrics, ModelError> {
    params.validate()?;
    Ok(evaluate(params).rounded())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::{AnimalCategory, DietInfo, DietType};
    use crate::conversion::METHANE_ENERGY_DENSITY;
    use approx::assert_relative_eq;

    fn dairy_cow() -> EnergyParams {
        let mut p = EnergyParams::new(AnimalCategory::Dairy, 600.0);
        p.milk_production = 25.0;
        p
    }

    // -- Full chain --

    #[test]
    fn dairy_cow_chain_is_consistent() {
        let m = evaluate(&dairy_cow());
        let nem = 0.386 * 600f64.powf(0.75);
        let nel = 25.0 * 3.07;
        assert_relative_eq!(m.maintenance_energy, nem, epsilon = 1e-10);
        assert_relative_eq!(m.lactation_energy, nel, epsilon = 1e-10);
        assert_eq!(m.growth_energy, 0.0);
        assert_eq!(m.pregnancy_energy, 0.0);
        assert_relative_eq!(m.total_net_energy, nem + nel, epsilon = 1e-10);

        let ge = nem / m.rem + nel / 0.65;
        assert_relative_eq!(m.gross_energy_intake, ge, epsilon = 1e-10);
        assert_relative_eq!(m.methane_daily, ge * 0.06 / METHANE_ENERGY_DENSITY, epsilon = 1e-12);
        assert_relative_eq!(m.methane_annual, m.methane_daily * 365.0, epsilon = 1e-10);
        assert_relative_eq!(m.methane_annual_co2e, m.methane_annual * 28.0, epsilon = 1e-9);
        assert_relative_eq!(m.daily_feed_intake, ge / (18.45 * 0.65), epsilon = 1e-10);
    }

    #[test]
    fn dairy_cow_magnitudes_are_plausible() {
        let m = evaluate(&dairy_cow());
        assert!(m.gross_energy_intake > 200.0 && m.gross_energy_intake < 220.0);
        assert!(m.methane_annual > 75.0 && m.methane_annual < 90.0);
        assert!(m.daily_feed_intake > 16.0 && m.daily_feed_intake < 19.0);
    }

    #[test]
    fn methane_loss_equals_ym() {
        let m = evaluate(&dairy_cow());
        let loss = m.methane_daily * METHANE_ENERGY_DENSITY / m.gross_energy_intake * 100.0;
        assert_relative_eq!(m.methane_energy_loss, loss, epsilon = 1e-9);
    }

    // -- Monotonicity --

    #[test]
    fn heavier_animal_needs_more_energy() {
        let mut light = dairy_cow();
        light.body_weight = 450.0;
        let mut heavy = dairy_cow();
        heavy.body_weight = 451.0;
        let a = evaluate(&light);
        let b = evaluate(&heavy);
        assert!(b.maintenance_energy > a.maintenance_energy);
        assert!(b.gross_energy_intake > a.gross_energy_intake);
    }

    // -- Null fields --

    #[test]
    fn fcr_none_without_gain() {
        let m = calculate_animal_energy(&dairy_cow()).unwrap();
        assert_eq!(m.feed_conversion_ratio, None);
    }

    #[test]
    fn fcr_defined_with_gain() {
        let mut p = EnergyParams::new(AnimalCategory::Beef, 400.0);
        p.weight_gain = 1.2;
        p.diet = DietInfo::new(0.72, DietType::HighGrain);
        let m = evaluate(&p);
        assert_relative_eq!(
            m.feed_conversion_ratio.unwrap(),
            m.daily_feed_intake / 1.2,
            epsilon = 1e-12
        );
    }

    // -- Species --

    #[test]
    fn buffalo_emits_more_per_unit_energy() {
        let cattle = evaluate(&EnergyParams::new(AnimalCategory::Beef, 500.0));
        let buffalo = evaluate(&EnergyParams::new(AnimalCategory::Water, 500.0));
        assert!(
            buffalo.methane_daily / buffalo.gross_energy_intake
                > cattle.methane_daily / cattle.gross_energy_intake
        );
    }

    #[test]
    fn pregnancy_adds_gross_energy() {
        let open = evaluate(&EnergyParams::new(AnimalCategory::Water, 550.0));
        let mut p = EnergyParams::new(AnimalCategory::Water, 550.0);
        p.is_pregnant = true;
        let pregnant = evaluate(&p);
        assert_relative_eq!(
            pregnant.gross_energy_intake - open.gross_energy_intake,
            3.2 / 0.13,
            epsilon = 1e-9
        );
    }

    // -- Entry point --

    #[test]
    fn entry_point_rounds_for_display() {
        let m = calculate_animal_energy(&dairy_cow()).unwrap();
        assert_eq!(m.gross_energy_intake, crate::conversion::round_to(m.gross_energy_intake, 1));
        assert_eq!(m.methane_daily, crate::conversion::round_to(m.methane_daily, 3));
    }

    #[test]
    fn entry_point_rejects_bad_input() {
        let err = calculate_animal_energy(&EnergyParams::new(AnimalCategory::Dairy, -1.0))
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { field: "body_weight", .. }));
    }

    #[test]
    fn entry_point_rejects_diet_below_conversion_range() {
        for digestibility in [0.20, 0.379] {
            let mut p = EnergyParams::new(AnimalCategory::Beef, 400.0);
            p.weight_gain = 1.0;
            p.diet = DietInfo::new(digestibility, DietType::HighForage);
            let err = calculate_animal_energy(&p).unwrap_err();
            assert_eq!(err.field(), "diet_info.digestibility");
        }
    }

    #[test]
    fn poorest_accepted_diet_stays_finite_and_positive() {
        let mut p = EnergyParams::new(AnimalCategory::Beef, 400.0);
        p.weight_gain = 1.0;
        p.diet = DietInfo::new(0.45, DietType::HighForage);
        let m = calculate_animal_energy(&p).unwrap();
        assert!(m.rem > 0.0 && m.reg > 0.0);
        assert!(m.gross_energy_intake.is_finite() && m.gross_energy_intake > 0.0);
        assert!(m.methane_annual_co2e > 0.0);
    }

    #[test]
    fn deterministic() {
        let p = dairy_cow();
        assert_eq!(calculate_animal_energy(&p), calculate_animal_energy(&p));
    }
}
