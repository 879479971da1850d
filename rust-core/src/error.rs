//! Argument errors shared by every transform entry point

use thiserror::Error;

/// Invalid arguments passed to a transform.
///
/// Every variant is a programming error on the caller's side. Entry points
/// validate before touching any buffer, so an `Err` leaves the caller's data
/// unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("length {len} is not a power of two")]
    NotPowerOfTwo { len: usize },

    #[error("buffer length mismatch: expected {expected}, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("interleaved complex buffer has odd length {0}")]
    OddInterleavedLength(usize),

    #[error("transform input or output is empty")]
    EmptyInput,

    #[error("grid is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("grid is not laid out contiguously in row-major order")]
    NonContiguous,
}

impl TransformError {
    /// All variants belong to the invalid-argument class.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

pub(crate) fn ensure_power_of_two(len: usize) -> Result<(), TransformError> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(TransformError::NotPowerOfTwo { len })
    }
}

pub(crate) fn ensure_non_empty(len: usize) -> Result<(), TransformError> {
    if len == 0 {
        Err(TransformError::EmptyInput)
    } else {
        Ok(())
    }
}

pub(crate) fn ensure_len(expected: usize, actual: usize) -> Result<(), TransformError> {
    if expected == actual {
        Ok(())
    } else {
        Err(TransformError::LengthMismatch { expected, actual })
    }
}
