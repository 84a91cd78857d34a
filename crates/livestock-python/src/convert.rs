use std::str::FromStr;

use livestock_core::ModelError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Every core error surfaces in Python as `ValueError`.
pub fn model_err(err: ModelError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Parse a string enum argument strictly.
pub fn parse<T>(value: &str) -> PyResult<T>
where
    T: FromStr<Err = ModelError>,
{
    value.parse().map_err(model_err)
}

/// Put an optional nested dict under `key`, or `None`.
pub fn set_optional<'py>(
    dict: &Bound<'py, pyo3::types::PyDict>,
    key: &str,
    value: Option<Bound<'py, pyo3::types::PyDict>>,
) -> PyResult<()> {
    match value {
        Some(v) => dict.set_item(key, v),
        None => dict.set_item(key, dict.py().None()),
    }
}
