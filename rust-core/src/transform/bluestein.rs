//! Arbitrary-length DFT via Bluestein's chirp z-transform
//!
//! Rewrites `jk = (j² + k² - (k-j)²) / 2`, turning the DFT into a chirp
//! multiply, a linear convolution with the conjugated chirp, and a second chirp
//! multiply. The convolution runs as a power-of-two circular convolution padded
//! far enough that it never wraps.
//!
//! For input length n and output length m the chirp modulus is M = max(n, m):
//! `b[k] = 1/sqrt(m) · Σ_{j<n} a[j]·exp(∓2πi·jk/M)` for k < m.

use num_complex::Complex64;

use super::chirp::chirp_sequence;
use super::{convolution, radix2, Direction};
use crate::error::{ensure_non_empty, TransformError};
use crate::sequence::{conjugate_in_place, multiply_in_place, scale_in_place};

/// DFT of `input` written to `output`, whose length may differ
///
/// # Arguments
/// * `input` - n samples
/// * `output` - m samples, overwritten with the transform
/// * `direction` - Forward or inverse kernel
///
/// # Returns
/// `EmptyInput` if either buffer is empty
pub fn arbitrary_transform(
    input: &[Complex64],
    output: &mut [Complex64],
    direction: Direction,
) -> Result<(), TransformError> {
    ensure_non_empty(input.len())?;
    ensure_non_empty(output.len())?;

    let n = input.len();
    if n == output.len() && n.is_power_of_two() {
        tracing::trace!(n, "power-of-two length, radix-2 fallback");
        output.copy_from_slice(input);
        radix2::transform_unchecked(output, direction);
        return Ok(());
    }

    let spectrum = chirp_z_transform(input, output.len(), direction);
    output.copy_from_slice(&spectrum);
    Ok(())
}

/// Same-length DFT with input and output sharing one buffer
pub fn arbitrary_transform_in_place(
    buf: &mut [Complex64],
    direction: Direction,
) -> Result<(), TransformError> {
    ensure_non_empty(buf.len())?;

    if buf.len().is_power_of_two() {
        tracing::trace!(n = buf.len(), "power-of-two length, radix-2 fallback");
        radix2::transform_unchecked(buf, direction);
        return Ok(());
    }

    let spectrum = chirp_z_transform(buf, buf.len(), direction);
    buf.copy_from_slice(&spectrum);
    Ok(())
}

fn chirp_z_transform(input: &[Complex64], m: usize, direction: Direction) -> Vec<Complex64> {
    let n = input.len();
    let modulus = n.max(m);
    // Linear convolution of lengths n and M fits without wraparound
    let padded = (2 * modulus - 1).next_power_of_two();

    tracing::trace!(n, m, modulus, padded, ?direction, "chirp z-transform");

    let mut z = chirp_sequence(modulus, modulus);
    if direction == Direction::Inverse {
        conjugate_in_place(&mut z);
    }

    let zero = Complex64::new(0.0, 0.0);

    let mut aa = vec![zero; padded];
    aa[..n].copy_from_slice(input);
    multiply_in_place(&mut aa[..n], &z[..n]);

    // Kernel conj(z[|i|]) laid out circularly for i in (-M, M)
    let mut bb = vec![zero; padded];
    for (slot, zi) in bb.iter_mut().zip(z.iter()) {
        *slot = zi.conj();
    }
    for i in 1..modulus {
        bb[padded - i] = bb[i];
    }

    convolution::convolve_unchecked(&mut aa, &mut bb);

    bb.truncate(m);
    multiply_in_place(&mut bb, &z[..m]);
    scale_in_place(&mut bb, 1.0 / (m as f64).sqrt());
    bb
}
