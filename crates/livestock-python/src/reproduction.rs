use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{model_err, parse};
use livestock_core::animal::AnimalCategory;
use livestock_core::reproduction::outputs::ReproductiveMetrics;
use livestock_core::reproduction::params::{DietBalance, ReproductiveParams, SupplementType};
use livestock_core::reproduction::run;

define_series_result! {
    /// Ten-year adoption projection with typed numpy array attributes.
    pub struct Projection from livestock_core::reproduction::outputs::ProjectionYearSeries {
        year, adoption, calving_rate, time_to_calf, calvings_per_year,
    }
}

pub fn reproduction_dict<'py>(
    py: Python<'py>,
    m: &ReproductiveMetrics,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = fields_to_dict!(
        py, m,
        current_calving_rate, projected_calving_rate, calving_rate_improvement,
        current_time_to_calf, projected_time_to_calf, time_to_calf_improvement,
        current_calvings_per_year, projected_calvings_per_year,
    );
    dict.set_item("category", m.category.as_str())?;
    dict.set_item("supplement_type", m.supplement_type.as_str())?;

    let factors = fields_to_dict!(
        py, m.contributing_factors,
        supplement_calving_effect, supplement_interval_effect, energy_impact,
        protein_impact, species_factor,
    );
    dict.set_item("contributing_factors", factors)?;

    let series = m.projection_series();
    let projections = series_to_dict!(
        py, series,
        year, adoption, calving_rate, time_to_calf, calvings_per_year,
    );
    dict.set_item("projections", projections)?;
    Ok(dict)
}

#[allow(clippy::too_many_arguments)]
fn build_params(
    category: &str,
    current_calving_rate: f64,
    current_time_to_calf: f64,
    baseline_energy_balance: f64,
    baseline_protein_percent: f64,
    improved_energy_balance: f64,
    improved_protein_percent: f64,
    supplement_type: &str,
) -> PyResult<ReproductiveParams> {
    Ok(ReproductiveParams {
        category: parse::<AnimalCategory>(category)?,
        current_calving_rate,
        current_time_to_calf,
        baseline_diet: DietBalance::new(baseline_energy_balance, baseline_protein_percent),
        improved_diet: DietBalance::new(improved_energy_balance, improved_protein_percent),
        supplement_type: parse::<SupplementType>(supplement_type)?,
    })
}

#[pyfunction]
#[pyo3(signature = (
    category,
    current_calving_rate,
    current_time_to_calf,
    baseline_energy_balance,
    baseline_protein_percent,
    improved_energy_balance,
    improved_protein_percent,
    supplement_type="none",
))]
#[allow(clippy::too_many_arguments)]
fn calculate_reproductive_impact<'py>(
    py: Python<'py>,
    category: &str,
    current_calving_rate: f64,
    current_time_to_calf: f64,
    baseline_energy_balance: f64,
    baseline_protein_percent: f64,
    improved_energy_balance: f64,
    improved_protein_percent: f64,
    supplement_type: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let p = build_params(
        category,
        current_calving_rate,
        current_time_to_calf,
        baseline_energy_balance,
        baseline_protein_percent,
        improved_energy_balance,
        improved_protein_percent,
        supplement_type,
    )?;
    let metrics = run::calculate_reproductive_impact(&p).map_err(model_err)?;
    reproduction_dict(py, &metrics)
}

/// Projection only, as a typed object of numpy arrays.
#[pyfunction]
#[pyo3(signature = (
    category,
    current_calving_rate,
    current_time_to_calf,
    baseline_energy_balance,
    baseline_protein_percent,
    improved_energy_balance,
    improved_protein_percent,
    supplement_type="none",
))]
#[allow(clippy::too_many_arguments)]
fn reproductive_projection(
    py: Python<'_>,
    category: &str,
    current_calving_rate: f64,
    current_time_to_calf: f64,
    baseline_energy_balance: f64,
    baseline_protein_percent: f64,
    improved_energy_balance: f64,
    improved_protein_percent: f64,
    supplement_type: &str,
) -> PyResult<Projection> {
    let p = build_params(
        category,
        current_calving_rate,
        current_time_to_calf,
        baseline_energy_balance,
        baseline_protein_percent,
        improved_energy_balance,
        improved_protein_percent,
        supplement_type,
    )?;
    let metrics = run::calculate_reproductive_impact(&p).map_err(model_err)?;
    Ok(Projection::from_series(py, metrics.projection_series()))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "reproduction")?;
    m.add_function(wrap_pyfunction!(calculate_reproductive_impact, &m)?)?;
    m.add_function(wrap_pyfunction!(reproductive_projection, &m)?)?;
    m.add_class::<Projection>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
