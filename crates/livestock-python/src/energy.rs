use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{model_err, parse};
use livestock_core::animal::{AnimalCategory, DietInfo, DietType};
use livestock_core::energy::outputs::EnergyMetrics;
use livestock_core::energy::params::EnergyParams;
use livestock_core::energy::run;

pub fn energy_dict<'py>(py: Python<'py>, m: &EnergyMetrics) -> PyResult<Bound<'py, PyDict>> {
    let dict = fields_to_dict!(
        py, m,
        maintenance_energy, growth_energy, lactation_energy, pregnancy_energy,
        total_net_energy, gross_energy_intake, rem, reg, methane_conversion_factor,
        methane_daily, methane_annual, methane_annual_co2e, diet_energy_density,
        daily_feed_intake, feed_conversion_ratio, energy_efficiency, methane_energy_loss,
    );
    dict.set_item("category", m.category.as_str())?;
    Ok(dict)
}

#[pyfunction]
#[pyo3(signature = (
    category,
    body_weight,
    weight_gain=0.0,
    milk_production=0.0,
    milk_fat_percent=None,
    is_pregnant=false,
    activity_factor=1.0,
    digestibility=0.65,
    diet_type="mixed",
))]
#[allow(clippy::too_many_arguments)]
fn calculate_animal_energy<'py>(
    py: Python<'py>,
    category: &str,
    body_weight: f64,
    weight_gain: f64,
    milk_production: f64,
    milk_fat_percent: Option<f64>,
    is_pregnant: bool,
    activity_factor: f64,
    digestibility: f64,
    diet_type: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let mut p = EnergyParams::new(parse::<AnimalCategory>(category)?, body_weight);
    p.weight_gain = weight_gain;
    p.milk_production = milk_production;
    p.milk_fat_percent = milk_fat_percent;
    p.is_pregnant = is_pregnant;
    p.activity_factor = activity_factor;
    p.diet = DietInfo::new(digestibility, parse::<DietType>(diet_type)?);

    let metrics = run::calculate_animal_energy(&p).map_err(model_err)?;
    energy_dict(py, &metrics)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "energy")?;
    m.add_function(wrap_pyfunction!(calculate_animal_energy, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
