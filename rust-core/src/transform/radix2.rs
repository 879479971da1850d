//! Iterative in-place radix-2 FFT
//!
//! Decimation in time: bit-reversal permutation followed by log2(n) butterfly
//! passes. Twiddle factors come from an incremental complex recurrence that is
//! resynchronized to an exact evaluation every [`RESYNC_INTERVAL`] steps.
//! Output is scaled by 1/sqrt(n) so forward and inverse share one unitary factor.

use std::f64::consts::PI;

use num_complex::Complex64;

use super::{Direction, RESYNC_INTERVAL};
use crate::error::{ensure_power_of_two, TransformError};
use crate::sequence::{conjugate_in_place, scale_in_place};

/// Unitary forward DFT in place
///
/// # Arguments
/// * `buf` - Samples to transform; length must be a power of two
///
/// # Returns
/// `NotPowerOfTwo` without touching `buf` if the length is invalid
pub fn forward_transform(buf: &mut [Complex64]) -> Result<(), TransformError> {
    ensure_power_of_two(buf.len())?;
    forward_unchecked(buf);
    Ok(())
}

/// Unitary inverse DFT in place (length must be a power of two)
pub fn inverse_transform(buf: &mut [Complex64]) -> Result<(), TransformError> {
    ensure_power_of_two(buf.len())?;
    inverse_unchecked(buf);
    Ok(())
}

pub(crate) fn transform_unchecked(buf: &mut [Complex64], direction: Direction) {
    match direction {
        Direction::Forward => forward_unchecked(buf),
        Direction::Inverse => inverse_unchecked(buf),
    }
}

pub(crate) fn forward_unchecked(buf: &mut [Complex64]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());

    bit_reverse_permute(buf);

    let mut s = 2;
    while s <= n {
        butterfly_pass(buf, s);
        s *= 2;
    }

    scale_in_place(buf, 1.0 / (n as f64).sqrt());
}

// conj(F(conj(x))) is the inverse because both directions share 1/sqrt(n)
pub(crate) fn inverse_unchecked(buf: &mut [Complex64]) {
    conjugate_in_place(buf);
    forward_unchecked(buf);
    conjugate_in_place(buf);
}

fn bit_reverse_permute(buf: &mut [Complex64]) {
    let n = buf.len();
    let mut j = 0;

    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;

        if i < j {
            buf.swap(i, j);
        }
    }
}

/// Combine every block of size `s` from its two halves of size `s/2`
fn butterfly_pass(buf: &mut [Complex64], s: usize) {
    let half = s / 2;
    let phi = 2.0 * PI / s as f64;
    let step = Complex64::from_polar(1.0, phi);

    for block in buf.chunks_exact_mut(s) {
        let (lower, upper) = block.split_at_mut(half);

        // w = exp(i*phi*j)
        let mut w = Complex64::new(1.0, 0.0);

        for (j, (u, v)) in lower.iter_mut().zip(upper.iter_mut()).enumerate() {
            let vw = *v * w.conj();
            let a = *u;
            *u = a + vw;
            *v = a - vw;

            let next = j + 1;
            w = if next % RESYNC_INTERVAL == 0 {
                Complex64::from_polar(1.0, phi * next as f64)
            } else {
                w * step
            };
        }
    }
}
