use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{model_err, parse, set_optional};
use livestock_core::animal::AnimalType;
use livestock_core::emissions::outputs::{EmissionsMetrics, SourceBreakdown};
use livestock_core::emissions::params::{EmissionsParams, EntericInput, FeedSystem, ManureSystem};
use livestock_core::emissions::run;

fn sources_dict<'py>(py: Python<'py>, s: &SourceBreakdown) -> PyResult<Bound<'py, PyDict>> {
    Ok(fields_to_dict!(py, s, enteric, manure_ch4, manure_n2o, feed_production))
}

pub fn emissions_dict<'py>(py: Python<'py>, m: &EmissionsMetrics) -> PyResult<Bound<'py, PyDict>> {
    let dict = fields_to_dict!(py, m, body_weight, total_annual_emissions, emissions_intensity);
    dict.set_item("animal_type", m.animal_type.as_str())?;
    dict.set_item("manure_system", m.manure_system.as_str())?;
    dict.set_item("feed_system", m.feed_system.as_str())?;
    dict.set_item("emissions_by_source", sources_dict(py, &m.emissions_by_source)?)?;
    dict.set_item("emissions_percentages", sources_dict(py, &m.emissions_percentages)?)?;

    let d = &m.details;
    let details = PyDict::new(py);
    details.set_item("enteric", fields_to_dict!(py, d.enteric, methane, co2e))?;
    details.set_item(
        "manure_ch4",
        fields_to_dict!(py, d.manure_ch4, emission_factor, methane, co2e),
    )?;
    details.set_item(
        "manure_n2o",
        fields_to_dict!(py, d.manure_n2o, nitrogen_excretion, emission_factor, n2o, co2e),
    )?;
    details.set_item(
        "feed_production",
        fields_to_dict!(py, d.feed_production, annual_feed_intake, emission_factor, co2e),
    )?;
    dict.set_item("details", details)?;

    dict.set_item(
        "adjustment",
        fields_to_dict!(py, m.adjustment, enteric, manure_ch4, manure_n2o),
    )?;

    let intensity = match &m.product_emission_intensity {
        Some(p) => Some(fields_to_dict!(
            py, p,
            per_kg_milk, per_kg_live_weight_gain, per_kg_carcass_gain,
        )),
        None => None,
    };
    set_optional(&dict, "product_emission_intensity", intensity)?;
    Ok(dict)
}

/// Unknown manure or production systems fall back to dry_lot / intensive
/// factors, matching the core's lossy parsers.
#[pyfunction]
#[pyo3(signature = (
    animal_type,
    body_weight,
    methane_annual,
    methane_annual_co2e,
    daily_feed_intake,
    manure_system="dry_lot",
    production_system="intensive",
))]
#[allow(clippy::too_many_arguments)]
fn calculate_total_emissions<'py>(
    py: Python<'py>,
    animal_type: &str,
    body_weight: f64,
    methane_annual: f64,
    methane_annual_co2e: f64,
    daily_feed_intake: f64,
    manure_system: &str,
    production_system: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let p = EmissionsParams::new(
        parse::<AnimalType>(animal_type)?,
        EntericInput {
            methane_annual,
            methane_annual_co2e,
            daily_feed_intake,
        },
        ManureSystem::from_str_lossy(manure_system),
        body_weight,
        FeedSystem::from_str_lossy(production_system),
    );
    let metrics = run::calculate_total_emissions(&p).map_err(model_err)?;
    emissions_dict(py, &metrics)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "emissions")?;
    m.add_function(wrap_pyfunction!(calculate_total_emissions, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
