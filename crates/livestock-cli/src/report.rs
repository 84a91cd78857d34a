//! Plain-text reports.
use std::fmt::{self, Write};

use livestock_core::buffalo::compare::{ComparisonResult, MetricComparison};
use livestock_core::buffalo::outputs::BuffaloMetrics;
use livestock_core::emissions::outputs::EmissionsMetrics;
use livestock_core::energy::outputs::EnergyMetrics;
use livestock_core::reproduction::outputs::ReproductiveMetrics;

const RULE: &str = "------------------------------------------------------------";

fn opt(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{} {}", v, unit),
        None => "n/a".to_string(),
    }
}

pub fn energy(m: &EnergyMetrics) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Energy ({})", m.category)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{:<28} {:>10} MJ/day", "Maintenance (NEm)", m.maintenance_energy)?;
    writeln!(out, "{:<28} {:>10} MJ/day", "Growth (NEg)", m.growth_energy)?;
    writeln!(out, "{:<28} {:>10} MJ/day", "Lactation (NEl)", m.lactation_energy)?;
    writeln!(out, "{:<28} {:>10} MJ/day", "Pregnancy (NEp)", m.pregnancy_energy)?;
    writeln!(out, "{:<28} {:>10} MJ/day", "Total net energy", m.total_net_energy)?;
    writeln!(out, "{:<28} {:>10} MJ/day", "Gross energy intake", m.gross_energy_intake)?;
    writeln!(out, "{:<28} {:>10} %", "Ym", m.methane_conversion_factor)?;
    writeln!(out, "{:<28} {:>10} kg/day", "Enteric CH4", m.methane_daily)?;
    writeln!(out, "{:<28} {:>10} kg/year", "Enteric CH4", m.methane_annual)?;
    writeln!(out, "{:<28} {:>10} kg CO2e/year", "Enteric CH4", m.methane_annual_co2e)?;
    writeln!(out, "{:<28} {:>10} kg DM/day", "Dry-matter intake", m.daily_feed_intake)?;
    writeln!(
        out,
        "{:<28} {:>10}",
        "Feed conversion ratio",
        opt(m.feed_conversion_ratio, "kg DM/kg")
    )?;
    write!(out, "{:<28} {:>10} %", "Energy efficiency", m.energy_efficiency)?;
    Ok(out)
}

pub fn reproduction(m: &ReproductiveMetrics) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Reproduction ({}, {} supplement)", m.category, m.supplement_type)?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "Calving rate    {:>6} % -> {:>6} %",
        m.current_calving_rate, m.projected_calving_rate
    )?;
    writeln!(
        out,
        "Time to calf    {:>6} mo -> {:>5} mo",
        m.current_time_to_calf, m.projected_time_to_calf
    )?;
    writeln!(
        out,
        "Calvings/year   {:>6} -> {:>8}",
        m.current_calvings_per_year, m.projected_calvings_per_year
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "{:>4} {:>9} {:>13} {:>13} {:>14}",
        "Year", "Adoption", "Calving (%)", "TTC (months)", "Calvings/year"
    )?;
    for p in &m.projections {
        writeln!(
            out,
            "{:>4} {:>9} {:>13} {:>13} {:>14}",
            p.year, p.adoption, p.calving_rate, p.time_to_calf, p.calvings_per_year
        )?;
    }
    Ok(out.trim_end().to_string())
}

pub fn emissions(m: &EmissionsMetrics) -> Result<String, fmt::Error> {
    let s = &m.emissions_by_source;
    let p = &m.emissions_percentages;
    let mut out = String::new();
    writeln!(
        out,
        "Emissions ({}, {}, {} feed)",
        m.animal_type, m.manure_system, m.feed_system
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{:<20} {:>12} {:>8}", "Source", "kg CO2e/yr", "%")?;
    for (name, value, share) in [
        ("Enteric CH4", s.enteric, p.enteric),
        ("Manure CH4", s.manure_ch4, p.manure_ch4),
        ("Manure N2O", s.manure_n2o, p.manure_n2o),
        ("Feed production", s.feed_production, p.feed_production),
    ] {
        writeln!(out, "{:<20} {:>12} {:>8}", name, value, share)?;
    }
    writeln!(out, "{:<20} {:>12}", "Total", m.total_annual_emissions)?;
    write!(
        out,
        "Intensity: {} kg CO2e per kg body weight",
        m.emissions_intensity
    )?;
    if let Some(i) = &m.product_emission_intensity {
        if let Some(v) = i.per_kg_milk {
            write!(out, "\nPer kg milk: {} kg CO2e", v)?;
        }
        if let Some(v) = i.per_kg_live_weight_gain {
            write!(out, "\nPer kg live-weight gain: {} kg CO2e", v)?;
        }
        if let Some(v) = i.per_kg_carcass_gain {
            write!(out, "\nPer kg carcass gain: {} kg CO2e", v)?;
        }
    }
    Ok(out)
}

pub fn buffalo(m: &BuffaloMetrics) -> Result<String, fmt::Error> {
    let s = &m.summary;
    let mut out = String::new();
    writeln!(
        out,
        "Buffalo: {} {}, {} months, {}",
        m.buffalo_type, m.gender, m.age_months, m.production_system
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Body weight          {} kg", s.body_weight)?;
    writeln!(out, "Weight gain          {} kg/day", m.weight_gain)?;
    writeln!(out, "Enteric CH4          {} kg/day", s.daily_methane)?;
    writeln!(out, "Total emissions      {} kg CO2e/year", s.annual_emissions)?;
    writeln!(
        out,
        "Cattle equivalent    {} kg CO2e/year ({:+} %)",
        s.cattle_equivalent_emissions, s.emissions_comparison_to_cattle
    )?;

    let production = &m.production_metrics;
    if let Some(milk) = &production.milk_production {
        writeln!(
            out,
            "Milk                 {} kg/day, {} kg/lactation, {} kg FCM/day",
            milk.daily_yield, milk.lactation_yield, milk.fat_corrected_milk
        )?;
    }
    if let Some(meat) = &production.meat_production {
        writeln!(
            out,
            "Meat                 {} kg carcass/year, {} quality",
            meat.annual_carcass_gain, meat.quality
        )?;
    }
    if let Some(draft) = &production.draft_capability {
        writeln!(
            out,
            "Draft                {} kg pull, {} kW, {} MJ/day",
            draft.drawbar_pull, draft.power_output, draft.daily_work_energy
        )?;
    }
    if let Some(r) = &m.reproductive_metrics {
        writeln!(
            out,
            "Calving rate         {} % -> {} %",
            r.current_calving_rate, r.projected_calving_rate
        )?;
    }
    writeln!(out, "{}", RULE)?;
    out.push_str(&emissions(&m.emissions_metrics)?);
    Ok(out)
}

fn comparison_row(out: &mut String, name: &str, c: &MetricComparison) -> fmt::Result {
    writeln!(
        out,
        "{:<22} {:>10} {:>10} {:>7} {:>+8}",
        name, c.buffalo, c.cattle, c.ratio, c.percent_difference
    )
}

pub fn comparison(r: &ComparisonResult) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{} vs {} cattle",
        r.buffalo.buffalo_type, r.cattle_energy.category
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "{:<22} {:>10} {:>10} {:>7} {:>8}",
        "Metric", "Buffalo", "Cattle", "Ratio", "Diff %"
    )?;
    comparison_row(&mut out, "Total emissions", &r.emissions_comparison)?;
    comparison_row(&mut out, "Gross energy intake", &r.energy_comparison)?;
    comparison_row(&mut out, "Annual methane", &r.methane_comparison)?;
    if let Some(fcr) = &r.feed_efficiency_comparison {
        comparison_row(&mut out, "Feed conversion ratio", fcr)?;
    }
    if let Some(rc) = &r.reproductive_comparison {
        writeln!(
            out,
            "Calving improvement    {} vs {} points",
            rc.buffalo_calving_rate_improvement, rc.cattle_calving_rate_improvement
        )?;
    }
    let env = &r.environmental_impact;
    writeln!(
        out,
        "Water {}x, land {}x, GHG {}x",
        env.water_use_ratio, env.land_use_ratio, env.ghg_ratio
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Buffalo advantages:")?;
    for a in &r.buffalo_advantages {
        writeln!(out, "  - {}", a)?;
    }
    writeln!(out, "Cattle advantages:")?;
    for a in &r.cattle_advantages {
        writeln!(out, "  - {}", a)?;
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use livestock_core::animal::AnimalCategory;
    use livestock_core::energy::params::EnergyParams;
    use livestock_core::energy::run::calculate_animal_energy;

    #[test]
    fn energy_report_mentions_fcr_na() {
        let m = calculate_animal_energy(&EnergyParams::new(AnimalCategory::Dairy, 600.0)).unwrap();
        let text = energy(&m).unwrap();
        assert!(text.starts_with("Energy (dairy)"));
        assert!(text.contains("n/a"));
    }

    #[test]
    fn comparison_report_lists_both_sides() {
        use livestock_core::buffalo::compare::compare_buffalo_to_cattle;
        use livestock_core::buffalo::params::{BuffaloParams, BuffaloType, CattleParams, Gender};

        let mut b = BuffaloParams::new(BuffaloType::WaterBuffalo, Gender::Female, 48.0);
        b.is_lactating = true;
        let c = CattleParams::equivalent_to(&b, 0.0);
        let r = compare_buffalo_to_cattle(&b, &c).unwrap();
        let text = comparison(&r).unwrap();
        assert!(text.starts_with("water_buffalo vs dairy cattle"));
        assert!(text.contains("Total emissions"));
        assert!(text.ends_with(&format!("  - {}", r.cattle_advantages[4])));
    }
}
