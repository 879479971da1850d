//! Circular convolution through the convolution theorem

use num_complex::Complex64;

use super::radix2;
use crate::error::{ensure_len, ensure_power_of_two, TransformError};
use crate::sequence::{multiply_in_place, scale_in_place};

/// Circular convolution `b ← a ⊛ b`
///
/// Both inputs must share one power-of-two length. `a` is used as scratch and
/// holds its own unitary spectrum on return.
pub fn circular_convolve(a: &mut [Complex64], b: &mut [Complex64]) -> Result<(), TransformError> {
    ensure_power_of_two(a.len())?;
    ensure_len(a.len(), b.len())?;

    convolve_unchecked(a, b);
    Ok(())
}

pub(crate) fn convolve_unchecked(a: &mut [Complex64], b: &mut [Complex64]) {
    let n = a.len();

    radix2::forward_unchecked(a);
    radix2::forward_unchecked(b);
    multiply_in_place(b, a);
    radix2::inverse_unchecked(b);

    // Two forward passes and one inverse leave a net 1/sqrt(n)
    scale_in_place(b, (n as f64).sqrt());
}
