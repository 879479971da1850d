//! Unitary complex DFT kernels
//!
//! Every transform here is scaled by 1/sqrt(n) in both directions, so the
//! inverse is the conjugated forward transform and signal energy is preserved.

pub mod bluestein;
pub mod chirp;
pub mod convolution;
pub mod radix2;
pub mod square2d;

pub use bluestein::{arbitrary_transform, arbitrary_transform_in_place};
pub use chirp::chirp_sequence;
pub use convolution::circular_convolve;
pub use radix2::{forward_transform, inverse_transform};
pub use square2d::{forward_2d, forward_2d_array, inverse_2d, inverse_2d_array};

use num_complex::Complex64;

use crate::error::{ensure_non_empty, TransformError};

/// Steps between exact trigonometric evaluations in the twiddle and chirp
/// recurrences. Bounds the drift of repeated complex multiplication.
pub const RESYNC_INTERVAL: usize = 64;

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Kernel exp(-2πi·jk/n)
    Forward,

    /// Kernel exp(+2πi·jk/n)
    Inverse,
}

impl Direction {
    /// +1 for forward, -1 for inverse
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Inverse => -1,
        }
    }

    /// Parse a `+1` / `-1` direction flag
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            1 => Some(Direction::Forward),
            -1 => Some(Direction::Inverse),
            _ => None,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        }
    }
}

/// Unitary DFT of any non-empty length, in place
///
/// Power-of-two lengths run the radix-2 kernel directly; everything else goes
/// through the chirp z-transform.
pub fn transform_in_place(
    buf: &mut [Complex64],
    direction: Direction,
) -> Result<(), TransformError> {
    ensure_non_empty(buf.len())?;

    if buf.len().is_power_of_two() {
        radix2::transform_unchecked(buf, direction);
        return Ok(());
    }

    tracing::debug!(len = buf.len(), ?direction, "routing to chirp z-transform");
    arbitrary_transform_in_place(buf, direction)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Direction;
    use num_complex::Complex64;
    use std::f64::consts::PI;

    /// Direct O(n²) unitary DFT
    pub fn naive_dft(input: &[Complex64], direction: Direction) -> Vec<Complex64> {
        naive_dft_sized(input, input.len(), input.len(), direction)
    }

    /// `X[k] = 1/sqrt(m) · Σ x[j]·exp(∓2πi·jk/modulus)` for k < m
    pub fn naive_dft_sized(
        input: &[Complex64],
        m: usize,
        modulus: usize,
        direction: Direction,
    ) -> Vec<Complex64> {
        let sign = -(direction.sign() as f64);
        let scale = 1.0 / (m as f64).sqrt();

        (0..m)
            .map(|k| {
                let sum: Complex64 = input
                    .iter()
                    .enumerate()
                    .map(|(j, &x)| {
                        let phase = ((j * k) % modulus) as f64 / modulus as f64;
                        x * Complex64::from_polar(1.0, sign * 2.0 * PI * phase)
                    })
                    .sum();
                sum * scale
            })
            .collect()
    }

    /// Deterministic pseudo-random samples in [-1, 1)
    pub fn test_signal(n: usize, seed: u64) -> Vec<Complex64> {
        let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
        let mut next = move || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 11) as f64 / (1u64 << 52) as f64 - 1.0
        };

        (0..n).map(|_| Complex64::new(next(), next())).collect()
    }

    pub fn max_abs_diff(a: &[Complex64], b: &[Complex64]) -> f64 {
        assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).norm())
            .fold(0.0, f64::max)
    }
}
