use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{model_err, parse, set_optional};
use crate::emissions::emissions_dict;
use crate::energy::energy_dict;
use crate::reproduction::reproduction_dict;
use livestock_core::animal::{AnimalCategory, DietInfo, DietType};
use livestock_core::buffalo::compare::{self, ComparisonResult, MetricComparison};
use livestock_core::buffalo::outputs::BuffaloMetrics;
use livestock_core::buffalo::params::{
    BuffaloParams, BuffaloType, CattleParams, Gender, ProductionSystem, ReproductiveInfo,
};
use livestock_core::buffalo::run;
use livestock_core::emissions::params::ManureSystem;

fn production_dict<'py>(py: Python<'py>, m: &BuffaloMetrics) -> PyResult<Bound<'py, PyDict>> {
    let p = &m.production_metrics;
    let dict = PyDict::new(py);

    let milk = match &p.milk_production {
        Some(milk) => Some(fields_to_dict!(
            py, milk,
            daily_yield, lactation_yield, fat_percent, fat_yield, fat_corrected_milk,
            within_species_range,
        )),
        None => None,
    };
    set_optional(&dict, "milk_production", milk)?;

    let meat = match &p.meat_production {
        Some(meat) => {
            let d = fields_to_dict!(
                py, meat,
                daily_gain, annual_live_weight_gain, annual_carcass_gain,
                carcass_weight, dressing_percentage,
            );
            d.set_item("quality", meat.quality.as_str())?;
            Some(d)
        }
        None => None,
    };
    set_optional(&dict, "meat_production", meat)?;

    let draft = match &p.draft_capability {
        Some(draft) => Some(fields_to_dict!(
            py, draft,
            drawbar_pull, power_output, working_hours, daily_work_energy,
        )),
        None => None,
    };
    set_optional(&dict, "draft_capability", draft)?;
    Ok(dict)
}

fn buffalo_dict<'py>(py: Python<'py>, m: &BuffaloMetrics) -> PyResult<Bound<'py, PyDict>> {
    let dict = fields_to_dict!(py, m, age_months, weight_gain);
    dict.set_item("buffalo_type", m.buffalo_type.as_str())?;
    dict.set_item("gender", m.gender.as_str())?;
    dict.set_item("production_system", m.production_system.as_str())?;
    dict.set_item("energy_metrics", energy_dict(py, &m.energy_metrics)?)?;
    dict.set_item("emissions_metrics", emissions_dict(py, &m.emissions_metrics)?)?;

    let reproduction = match &m.reproductive_metrics {
        Some(r) => Some(reproduction_dict(py, r)?),
        None => None,
    };
    set_optional(&dict, "reproductive_metrics", reproduction)?;

    dict.set_item("production_metrics", production_dict(py, m)?)?;
    dict.set_item(
        "feed_efficiency",
        fields_to_dict!(
            py, m.feed_efficiency,
            dry_matter_intake, feed_conversion_ratio, roughage_utilization,
            concentrate_response, dry_matter_per_kg_milk, dry_matter_per_kg_gain,
        ),
    )?;
    dict.set_item(
        "environmental_adaptation",
        fields_to_dict!(
            py, m.environmental_adaptation,
            water_requirement, heat_tolerance, disease_resistance,
        ),
    )?;
    dict.set_item(
        "summary",
        fields_to_dict!(
            py, m.summary,
            body_weight, daily_methane, annual_emissions, emissions_intensity, milk_yield,
            cattle_equivalent_emissions, emissions_comparison_to_cattle,
        ),
    )?;
    Ok(dict)
}

fn metric_dict<'py>(py: Python<'py>, c: &MetricComparison) -> PyResult<Bound<'py, PyDict>> {
    Ok(fields_to_dict!(py, c, buffalo, cattle, ratio, percent_difference))
}

fn comparison_dict<'py>(py: Python<'py>, r: &ComparisonResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("buffalo", buffalo_dict(py, &r.buffalo)?)?;
    dict.set_item("cattle_energy", energy_dict(py, &r.cattle_energy)?)?;
    dict.set_item("cattle_emissions", emissions_dict(py, &r.cattle_emissions)?)?;
    let cattle_reproduction = match &r.cattle_reproduction {
        Some(m) => Some(reproduction_dict(py, m)?),
        None => None,
    };
    set_optional(&dict, "cattle_reproduction", cattle_reproduction)?;

    dict.set_item("emissions_comparison", metric_dict(py, &r.emissions_comparison)?)?;
    dict.set_item("energy_comparison", metric_dict(py, &r.energy_comparison)?)?;
    dict.set_item("methane_comparison", metric_dict(py, &r.methane_comparison)?)?;
    let fcr = match &r.feed_efficiency_comparison {
        Some(c) => Some(metric_dict(py, c)?),
        None => None,
    };
    set_optional(&dict, "feed_efficiency_comparison", fcr)?;

    let reproduction = match &r.reproductive_comparison {
        Some(c) => Some(fields_to_dict!(
            py, c,
            buffalo_calving_rate_improvement, cattle_calving_rate_improvement,
            calving_rate_improvement_ratio, buffalo_time_to_calf_improvement,
            cattle_time_to_calf_improvement, time_to_calf_improvement_ratio,
        )),
        None => None,
    };
    set_optional(&dict, "reproductive_comparison", reproduction)?;

    dict.set_item(
        "environmental_impact",
        fields_to_dict!(
            py, r.environmental_impact,
            water_use_ratio, land_use_ratio, ghg_ratio,
        ),
    )?;
    dict.set_item("buffalo_advantages", r.buffalo_advantages.clone())?;
    dict.set_item("cattle_advantages", r.cattle_advantages.clone())?;
    Ok(dict)
}

/// Unknown buffalo types fall back to water buffalo constants.
#[allow(clippy::too_many_arguments)]
fn build_params(
    buffalo_type: &str,
    gender: &str,
    age_months: f64,
    body_weight: Option<f64>,
    production_system: &str,
    is_lactating: bool,
    milk_production: Option<f64>,
    milk_fat_percent: Option<f64>,
    is_pregnant: bool,
    activity_factor: f64,
    digestibility: f64,
    diet_type: &str,
    manure_system: &str,
    calving_rate: Option<f64>,
    time_to_calf: Option<f64>,
    age_at_first_calving: Option<f64>,
) -> PyResult<BuffaloParams> {
    let mut p = BuffaloParams::new(
        BuffaloType::from_str_lossy(buffalo_type),
        parse::<Gender>(gender)?,
        age_months,
    );
    p.body_weight = body_weight;
    p.production_system = parse::<ProductionSystem>(production_system)?;
    p.is_lactating = is_lactating;
    p.milk_production = milk_production;
    p.milk_fat_percent = milk_fat_percent;
    p.is_pregnant = is_pregnant;
    p.activity_factor = activity_factor;
    p.diet = DietInfo::new(digestibility, parse::<DietType>(diet_type)?);
    p.manure_system = ManureSystem::from_str_lossy(manure_system);
    p.reproductive_info = ReproductiveInfo {
        calving_rate,
        time_to_calf,
        age_at_first_calving,
    };
    Ok(p)
}

#[pyfunction]
#[pyo3(signature = (
    age_months,
    buffalo_type="water_buffalo",
    gender="female",
    body_weight=None,
    production_system="semi_intensive",
    is_lactating=false,
    milk_production=None,
    milk_fat_percent=None,
    is_pregnant=false,
    activity_factor=1.0,
    digestibility=0.65,
    diet_type="mixed",
    manure_system="dry_lot",
    calving_rate=None,
    time_to_calf=None,
    age_at_first_calving=None,
))]
#[allow(clippy::too_many_arguments)]
fn calculate_buffalo_metrics<'py>(
    py: Python<'py>,
    age_months: f64,
    buffalo_type: &str,
    gender: &str,
    body_weight: Option<f64>,
    production_system: &str,
    is_lactating: bool,
    milk_production: Option<f64>,
    milk_fat_percent: Option<f64>,
    is_pregnant: bool,
    activity_factor: f64,
    digestibility: f64,
    diet_type: &str,
    manure_system: &str,
    calving_rate: Option<f64>,
    time_to_calf: Option<f64>,
    age_at_first_calving: Option<f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let p = build_params(
        buffalo_type,
        gender,
        age_months,
        body_weight,
        production_system,
        is_lactating,
        milk_production,
        milk_fat_percent,
        is_pregnant,
        activity_factor,
        digestibility,
        diet_type,
        manure_system,
        calving_rate,
        time_to_calf,
        age_at_first_calving,
    )?;
    let metrics = run::calculate_buffalo_metrics(&p).map_err(model_err)?;
    buffalo_dict(py, &metrics)
}

/// Compare a buffalo with a cattle profile. Cattle inputs left unset copy
/// the buffalo's weight, milk and diet.
#[pyfunction]
#[pyo3(signature = (
    age_months,
    buffalo_type="water_buffalo",
    gender="female",
    body_weight=None,
    production_system="semi_intensive",
    is_lactating=false,
    milk_production=None,
    digestibility=0.65,
    diet_type="mixed",
    manure_system="dry_lot",
    cattle_category=None,
    cattle_body_weight=None,
    cattle_weight_gain=None,
    cattle_milk_production=None,
    cattle_digestibility=None,
))]
#[allow(clippy::too_many_arguments)]
fn compare_buffalo_to_cattle<'py>(
    py: Python<'py>,
    age_months: f64,
    buffalo_type: &str,
    gender: &str,
    body_weight: Option<f64>,
    production_system: &str,
    is_lactating: bool,
    milk_production: Option<f64>,
    digestibility: f64,
    diet_type: &str,
    manure_system: &str,
    cattle_category: Option<&str>,
    cattle_body_weight: Option<f64>,
    cattle_weight_gain: Option<f64>,
    cattle_milk_production: Option<f64>,
    cattle_digestibility: Option<f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let b = build_params(
        buffalo_type,
        gender,
        age_months,
        body_weight,
        production_system,
        is_lactating,
        milk_production,
        None,
        false,
        1.0,
        digestibility,
        diet_type,
        manure_system,
        None,
        None,
        None,
    )?;

    let gain = cattle_weight_gain.unwrap_or(0.0);
    let mut c = CattleParams::equivalent_to(&b, gain);
    if let Some(category) = cattle_category {
        c.energy.category = parse::<AnimalCategory>(category)?;
    }
    if let Some(bw) = cattle_body_weight {
        c.energy.body_weight = bw;
    }
    if let Some(milk) = cattle_milk_production {
        c.energy.milk_production = milk;
    }
    if let Some(dig) = cattle_digestibility {
        c.energy.diet.digestibility = dig;
    }

    let result = compare::compare_buffalo_to_cattle(&b, &c).map_err(model_err)?;
    comparison_dict(py, &result)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "buffalo")?;
    m.add_function(wrap_pyfunction!(calculate_buffalo_metrics, &m)?)?;
    m.add_function(wrap_pyfunction!(compare_buffalo_to_cattle, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
