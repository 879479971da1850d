//! Analytic signal and Hilbert transform via spectral masking
//!
//! Bin layout for length n (n = 9: `0 +1 +2 +3 +4 -4 -3 -2 -1`,
//! n = 8: `0 +1 +2 +3 N -3 -2 -1`). Both operations zero the DC bin and, for
//! even n, the Nyquist bin `N`: the Hilbert transform is only defined up to a
//! constant, and has no defined value at Nyquist.
//!
//! # Undefined input
//!
//! An even-length alternating signal `[1, -1, 1, -1, ...]` carries all of its
//! energy in the Nyquist bin. Its Hilbert transform is mathematically undefined
//! and callers must not rely on any particular output for it.

use num_complex::Complex64;

use crate::error::{ensure_non_empty, TransformError};
use crate::sequence::{complex_to_real, real_to_complex, rotate_in_place, scale_in_place};
use crate::transform::{transform_in_place, Direction};

/// Analytic signal `x + i·H(x)`
///
/// Positive-frequency bins are doubled and negative-frequency bins cleared.
/// The real part reproduces the input minus its DC and Nyquist components.
///
/// # Arguments
/// * `signal` - Real samples, any non-zero length
pub fn analytic_signal(signal: &[f64]) -> Result<Vec<Complex64>, TransformError> {
    let (mut spectrum, half) = masked_spectrum(signal)?;
    let n = spectrum.len();

    scale_in_place(&mut spectrum[1..=half], 2.0);
    spectrum[n - half..].fill(Complex64::new(0.0, 0.0));

    transform_in_place(&mut spectrum, Direction::Inverse)?;
    Ok(spectrum)
}

/// Hilbert transform `H(x)` by a ±90° rotation of every bin
///
/// Positive frequencies are multiplied by `-i`, negative ones by `+i`, so
/// `H(cos) = sin` and `H(sin) = -cos`.
pub fn harmonic_conjugate(signal: &[f64]) -> Result<Vec<f64>, TransformError> {
    let (mut spectrum, half) = masked_spectrum(signal)?;
    let n = spectrum.len();

    rotate_in_place(&mut spectrum[1..=half], Complex64::new(0.0, -1.0));
    rotate_in_place(&mut spectrum[n - half..], Complex64::new(0.0, 1.0));

    transform_in_place(&mut spectrum, Direction::Inverse)?;
    Ok(complex_to_real(&spectrum))
}

/// Envelope `|x + i·H(x)|`
pub fn instantaneous_amplitude(signal: &[f64]) -> Result<Vec<f64>, TransformError> {
    let analytic = analytic_signal(signal)?;
    Ok(analytic.iter().map(|c| c.norm()).collect())
}

/// Phase `arg(x + i·H(x))` in (-π, π]
pub fn instantaneous_phase(signal: &[f64]) -> Result<Vec<f64>, TransformError> {
    let analytic = analytic_signal(signal)?;
    Ok(analytic.iter().map(|c| c.arg()).collect())
}

/// Forward spectrum with DC (and Nyquist) cleared, plus the count of strictly
/// positive frequency bins `(n - 1) / 2`
fn masked_spectrum(signal: &[f64]) -> Result<(Vec<Complex64>, usize), TransformError> {
    ensure_non_empty(signal.len())?;

    let n = signal.len();
    let mut spectrum = real_to_complex(signal);
    transform_in_place(&mut spectrum, Direction::Forward)?;

    let zero = Complex64::new(0.0, 0.0);
    spectrum[0] = zero;
    if n % 2 == 0 {
        spectrum[n / 2] = zero;
    }

    Ok((spectrum, (n - 1) / 2))
}
