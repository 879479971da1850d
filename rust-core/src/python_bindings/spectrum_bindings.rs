//! Python bindings for resampling and the Hilbert transform

use numpy::{PyArray1, PyReadonlyArray1};
use num_complex::Complex64;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::spectrum::{self, SpectralAnalysisConfig};

fn not_contiguous<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Band-limited resampling of a complex signal
///
/// Args:
///     data: complex128 input array
///     output_len: Target number of samples
///
/// Returns:
///     Resampled complex128 array
#[pyfunction]
pub fn resample<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<Complex64>,
    output_len: usize,
) -> PyResult<&'py PyArray1<Complex64>> {
    let input = data.as_slice().map_err(not_contiguous)?;
    let output = spectrum::resample(input, output_len)?;
    Ok(PyArray1::from_vec(py, output))
}

/// Band-limited resampling of a real signal
#[pyfunction]
pub fn resample_real<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    output_len: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let input = data.as_slice().map_err(not_contiguous)?;
    let output = spectrum::resample_real(input, output_len)?;
    Ok(PyArray1::from_vec(py, output))
}

/// Analytic signal x + i·H(x) of a real signal
///
/// Returns:
///     complex128 array of the same length
#[pyfunction]
pub fn analytic_signal<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let input = signal.as_slice().map_err(not_contiguous)?;
    let output = spectrum::analytic_signal(input)?;
    Ok(PyArray1::from_vec(py, output))
}

/// Hilbert transform H(x) of a real signal
#[pyfunction]
pub fn harmonic_conjugate<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let input = signal.as_slice().map_err(not_contiguous)?;
    let output = spectrum::harmonic_conjugate(input)?;
    Ok(PyArray1::from_vec(py, output))
}

/// Spectral centroid in Hz
///
/// Args:
///     signal: Real input signal
///     sample_rate: Sample rate in Hz (default: 48000)
#[pyfunction]
#[pyo3(signature = (signal, sample_rate=48000.0))]
pub fn mean_frequency(signal: PyReadonlyArray1<f64>, sample_rate: f64) -> PyResult<f64> {
    let input = signal.as_slice().map_err(not_contiguous)?;
    let config = SpectralAnalysisConfig { sample_rate };
    Ok(spectrum::mean_frequency(input, &config)?)
}
