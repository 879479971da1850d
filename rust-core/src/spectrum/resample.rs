//! Band-limited resampling by spectral zero-padding and truncation
//!
//! The forward spectrum of the n-sample input is split into its non-negative
//! and negative frequency halves. Growing to m > n leaves the new middle bins
//! zero; shrinking to m < n drops the middle (out-of-band) bins. The inverse
//! transform of length m is then rescaled by sqrt(m/n) so amplitudes survive the
//! change of unitary normalization length.

use num_complex::Complex64;

use crate::error::{ensure_non_empty, TransformError};
use crate::sequence::{complex_to_real, real_to_complex, scale_in_place};
use crate::transform::{transform_in_place, Direction};

/// Resample a complex sequence to `output_len` samples
///
/// # Arguments
/// * `input` - n samples (any non-zero length)
/// * `output_len` - target length m (non-zero)
///
/// # Returns
/// m samples; an exact copy of `input` when m = n
pub fn resample(input: &[Complex64], output_len: usize) -> Result<Vec<Complex64>, TransformError> {
    ensure_non_empty(input.len())?;
    ensure_non_empty(output_len)?;

    let n = input.len();
    let m = output_len;

    if n == m {
        tracing::trace!(n, "resample identity");
        return Ok(input.to_vec());
    }

    let mut spectrum = input.to_vec();
    transform_in_place(&mut spectrum, Direction::Forward)?;

    let mut output = vec![Complex64::new(0.0, 0.0); m];
    let (low, high) = band_split(n.min(m));

    output[..low].copy_from_slice(&spectrum[..low]);
    output[m - high..].copy_from_slice(&spectrum[n - high..]);

    transform_in_place(&mut output, Direction::Inverse)?;
    scale_in_place(&mut output, (m as f64 / n as f64).sqrt());

    tracing::trace!(n, m, low, high, "resampled");
    Ok(output)
}

/// Resample a real sequence to `output_len` samples
///
/// The input is widened with zero imaginary parts; imaginary parts of the
/// result are discarded.
pub fn resample_real(input: &[f64], output_len: usize) -> Result<Vec<f64>, TransformError> {
    ensure_non_empty(input.len())?;
    ensure_non_empty(output_len)?;

    if input.len() == output_len {
        return Ok(input.to_vec());
    }

    let resampled = resample(&real_to_complex(input), output_len)?;
    Ok(complex_to_real(&resampled))
}

/// Number of bins kept from the non-negative and negative frequency sides
///
/// For an even count the Nyquist bin lands on the negative side.
fn band_split(kept: usize) -> (usize, usize) {
    let low = kept.div_ceil(2);
    (low, kept - low)
}
