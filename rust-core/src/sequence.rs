//! Complex sequence buffers and elementwise helpers
//!
//! Transforms operate in place on `&mut [Complex64]`. [`ComplexSequence`] is the
//! owned form, with conversions to and from the interleaved `(re, im, ...)`
//! layout used by external sample buffers.

use num_complex::Complex64;

use crate::error::TransformError;

/// Owned complex sequence of `n` samples
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexSequence {
    samples: Vec<Complex64>,
}

impl ComplexSequence {
    /// Create a sequence of `len` zeros
    pub fn zeros(len: usize) -> Self {
        Self {
            samples: vec![Complex64::new(0.0, 0.0); len],
        }
    }

    /// Build from interleaved `(re, im)` pairs
    ///
    /// # Arguments
    /// * `data` - Flat buffer of `2n` values
    ///
    /// # Returns
    /// Sequence of `n` samples, or an error if `data` has odd length
    pub fn from_interleaved(data: &[f64]) -> Result<Self, TransformError> {
        if data.len() % 2 != 0 {
            return Err(TransformError::OddInterleavedLength(data.len()));
        }

        let samples = data
            .chunks_exact(2)
            .map(|pair| Complex64::new(pair[0], pair[1]))
            .collect();

        Ok(Self { samples })
    }

    /// Build from real samples (imaginary parts zero)
    pub fn from_real(data: &[f64]) -> Self {
        Self {
            samples: real_to_complex(data),
        }
    }

    /// Flatten into interleaved `(re, im)` pairs
    pub fn to_interleaved(&self) -> Vec<f64> {
        self.samples.iter().flat_map(|c| [c.re, c.im]).collect()
    }

    /// Real parts of every sample
    pub fn real_parts(&self) -> Vec<f64> {
        complex_to_real(&self.samples)
    }

    /// Number of complex samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.samples
    }

    pub fn into_vec(self) -> Vec<Complex64> {
        self.samples
    }
}

impl From<Vec<Complex64>> for ComplexSequence {
    fn from(samples: Vec<Complex64>) -> Self {
        Self { samples }
    }
}

/// Conjugate every sample in place
pub fn conjugate_in_place(buf: &mut [Complex64]) {
    for c in buf.iter_mut() {
        c.im = -c.im;
    }
}

/// Widen real samples to complex with zero imaginary parts
pub fn real_to_complex(data: &[f64]) -> Vec<Complex64> {
    data.iter().map(|&re| Complex64::new(re, 0.0)).collect()
}

/// Keep only the real part of each sample
pub fn complex_to_real(data: &[Complex64]) -> Vec<f64> {
    data.iter().map(|c| c.re).collect()
}

pub(crate) fn scale_in_place(buf: &mut [Complex64], factor: f64) {
    for c in buf.iter_mut() {
        *c *= factor;
    }
}

pub(crate) fn rotate_in_place(buf: &mut [Complex64], factor: Complex64) {
    for c in buf.iter_mut() {
        *c *= factor;
    }
}

/// `a[i] *= b[i]` over the shorter of the two
pub(crate) fn multiply_in_place(a: &mut [Complex64], b: &[Complex64]) {
    for (x, &y) in a.iter_mut().zip(b.iter()) {
        *x *= y;
    }
}
