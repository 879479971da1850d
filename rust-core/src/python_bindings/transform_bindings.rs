//! Python bindings for the DFT kernels
//!
//! One-dimensional and 2D transforms run in place on the caller's
//! `complex128` array, matching the Rust API.

use numpy::{PyArray1, PyReadonlyArray1, PyReadwriteArray1, PyReadwriteArray2};
use num_complex::Complex64;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::TransformError;
use crate::transform::{self as dft, Direction};

/// Transform direction exposed to Python
#[pyclass(name = "Direction")]
#[derive(Clone)]
pub enum PyDirection {
    Forward,
    Inverse,
}

impl From<PyDirection> for Direction {
    fn from(py_dir: PyDirection) -> Self {
        match py_dir {
            PyDirection::Forward => Direction::Forward,
            PyDirection::Inverse => Direction::Inverse,
        }
    }
}

fn not_contiguous<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Unitary forward FFT in place
///
/// Args:
///     data: complex128 array, length a power of two
#[pyfunction]
pub fn forward_transform(mut data: PyReadwriteArray1<Complex64>) -> PyResult<()> {
    let buf = data.as_slice_mut().map_err(not_contiguous)?;
    dft::forward_transform(buf)?;
    Ok(())
}

/// Unitary inverse FFT in place
///
/// Args:
///     data: complex128 array, length a power of two
#[pyfunction]
pub fn inverse_transform(mut data: PyReadwriteArray1<Complex64>) -> PyResult<()> {
    let buf = data.as_slice_mut().map_err(not_contiguous)?;
    dft::inverse_transform(buf)?;
    Ok(())
}

/// Unitary DFT of any length in place
///
/// Args:
///     data: complex128 array
///     direction: Direction.Forward or Direction.Inverse
#[pyfunction]
#[pyo3(signature = (data, direction=PyDirection::Forward))]
pub fn transform(mut data: PyReadwriteArray1<Complex64>, direction: PyDirection) -> PyResult<()> {
    let buf = data.as_slice_mut().map_err(not_contiguous)?;
    dft::transform_in_place(buf, direction.into())?;
    Ok(())
}

/// Arbitrary-length DFT with a different output length
///
/// Args:
///     data: complex128 input array
///     output_len: Number of output bins
///     direction: Direction.Forward or Direction.Inverse
///
/// Returns:
///     New complex128 array of output_len bins
#[pyfunction]
#[pyo3(signature = (data, output_len, direction=PyDirection::Forward))]
pub fn arbitrary_transform<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<Complex64>,
    output_len: usize,
    direction: PyDirection,
) -> PyResult<&'py PyArray1<Complex64>> {
    let input = data.as_slice().map_err(not_contiguous)?;
    let mut output = vec![Complex64::new(0.0, 0.0); output_len];
    dft::arbitrary_transform(input, &mut output, direction.into())?;

    Ok(PyArray1::from_vec(py, output))
}

/// Forward 2D FFT of a square grid in place
#[pyfunction]
pub fn forward_2d(mut data: PyReadwriteArray2<Complex64>) -> PyResult<()> {
    let side = square_side(data.shape())?;
    let buf = data.as_slice_mut().map_err(not_contiguous)?;
    dft::forward_2d(buf, side)?;
    Ok(())
}

/// Inverse 2D FFT of a square grid in place
#[pyfunction]
pub fn inverse_2d(mut data: PyReadwriteArray2<Complex64>) -> PyResult<()> {
    let side = square_side(data.shape())?;
    let buf = data.as_slice_mut().map_err(not_contiguous)?;
    dft::inverse_2d(buf, side)?;
    Ok(())
}

fn square_side(shape: &[usize]) -> Result<usize, TransformError> {
    let (rows, cols) = (shape[0], shape[1]);
    if rows != cols {
        return Err(TransformError::NotSquare { rows, cols });
    }
    Ok(rows)
}
