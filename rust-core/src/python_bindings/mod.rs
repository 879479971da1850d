//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::TransformError;

mod spectrum_bindings;
mod transform_bindings;

impl From<TransformError> for PyErr {
    fn from(err: TransformError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn spectral_transform(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<transform_bindings::PyDirection>()?;

    m.add_function(wrap_pyfunction!(transform_bindings::forward_transform, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::inverse_transform, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::transform, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::arbitrary_transform, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::forward_2d, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::inverse_2d, m)?)?;

    m.add_function(wrap_pyfunction!(spectrum_bindings::resample, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::resample_real, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::analytic_signal, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::harmonic_conjugate, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::mean_frequency, m)?)?;

    Ok(())
}
