/// Generate a frozen `#[pyclass]` struct where each field is a `Py<PyArray1<f64>>`.
///
/// Also generates a `from_series()` method that converts from a
/// `#[derive(Series)]` column struct such as `ProjectionYearSeries`.
macro_rules! define_series_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: Py<numpy::PyArray1<f64>>,
            )+
        }

        impl $name {
            pub fn from_series(py: pyo3::Python<'_>, series: $core_type) -> Self {
                Self {
                    $(
                        $field: numpy::PyArray1::from_vec(py, series.$field).unbind(),
                    )+
                }
            }
        }
    };
}

/// Convert a `*Series` column struct into a `PyDict` of numpy arrays.
macro_rules! series_to_dict {
    ($py:expr, $series:expr, $($field:ident),+ $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        $(
            dict.set_item(stringify!($field), numpy::PyArray1::from_vec($py, $series.$field))?;
        )+
        dict
    }};
}

/// Copy scalar (or `Option` scalar) fields of a result struct into a `PyDict`.
macro_rules! fields_to_dict {
    ($py:expr, $value:expr, $($field:ident),+ $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        $(
            dict.set_item(stringify!($field), $value.$field)?;
        )+
        dict
    }};
}
