//! 2D unitary DFT on square power-of-two grids
//!
//! Row transforms, in-place transpose, row transforms, transpose back.
//! Only square grids are supported: in-place transposition of an n×m matrix
//! needs cycle-following and no caller has a use for it.

use ndarray::Array2;
use num_complex::Complex64;

use super::radix2;
use crate::error::{ensure_len, ensure_power_of_two, TransformError};
use crate::sequence::conjugate_in_place;

/// Forward 2D transform of a row-major `side × side` grid
pub fn forward_2d(buf: &mut [Complex64], side: usize) -> Result<(), TransformError> {
    validate_grid(buf.len(), side)?;
    forward_2d_unchecked(buf, side);
    Ok(())
}

/// Inverse 2D transform of a row-major `side × side` grid
pub fn inverse_2d(buf: &mut [Complex64], side: usize) -> Result<(), TransformError> {
    validate_grid(buf.len(), side)?;
    inverse_2d_unchecked(buf, side);
    Ok(())
}

/// Forward 2D transform of a square standard-layout array
pub fn forward_2d_array(grid: &mut Array2<Complex64>) -> Result<(), TransformError> {
    let side = validate_array(grid)?;
    let buf = grid.as_slice_mut().ok_or(TransformError::NonContiguous)?;
    forward_2d_unchecked(buf, side);
    Ok(())
}

/// Inverse 2D transform of a square standard-layout array
pub fn inverse_2d_array(grid: &mut Array2<Complex64>) -> Result<(), TransformError> {
    let side = validate_array(grid)?;
    let buf = grid.as_slice_mut().ok_or(TransformError::NonContiguous)?;
    inverse_2d_unchecked(buf, side);
    Ok(())
}

fn validate_grid(len: usize, side: usize) -> Result<(), TransformError> {
    ensure_power_of_two(side)?;
    let expected = side.checked_mul(side).unwrap_or(usize::MAX);
    ensure_len(expected, len)
}

fn validate_array(grid: &Array2<Complex64>) -> Result<usize, TransformError> {
    let (rows, cols) = grid.dim();
    if rows != cols {
        return Err(TransformError::NotSquare { rows, cols });
    }
    ensure_power_of_two(rows)?;
    if !grid.is_standard_layout() {
        return Err(TransformError::NonContiguous);
    }
    Ok(rows)
}

fn forward_2d_unchecked(buf: &mut [Complex64], side: usize) {
    transform_rows(buf, side);
    transpose_square(buf, side);
    transform_rows(buf, side);
    transpose_square(buf, side);
}

fn inverse_2d_unchecked(buf: &mut [Complex64], side: usize) {
    conjugate_in_place(buf);
    forward_2d_unchecked(buf, side);
    conjugate_in_place(buf);
}

fn transform_rows(buf: &mut [Complex64], side: usize) {
    for row in buf.chunks_exact_mut(side) {
        radix2::forward_unchecked(row);
    }
}

fn transpose_square(buf: &mut [Complex64], side: usize) {
    for i in 0..side {
        for j in 0..i {
            buf.swap(i * side + j, j * side + i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::{max_abs_diff, test_signal};
    use crate::transform::Direction;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn naive_dft_2d(input: &[Complex64], side: usize, direction: Direction) -> Vec<Complex64> {
        let sign = -(direction.sign() as f64);
        let scale = 1.0 / side as f64;
        let mut out = vec![Complex64::new(0.0, 0.0); side * side];

        for (u, v) in (0..side).flat_map(|u| (0..side).map(move |v| (u, v))) {
            let mut sum = Complex64::new(0.0, 0.0);
            for (y, x) in (0..side).flat_map(|y| (0..side).map(move |x| (y, x))) {
                let phase = ((u * y + v * x) % side) as f64 / side as f64;
                sum += input[y * side + x] * Complex64::from_polar(1.0, sign * 2.0 * PI * phase);
            }
            out[u * side + v] = sum * scale;
        }
        out
    }

    #[test]
    fn test_constant_grid() {
        let side = 4;
        let mut buf = vec![Complex64::new(1.0, 0.0); side * side];

        forward_2d(&mut buf, side).unwrap();

        assert_abs_diff_eq!(buf[0].re, side as f64, epsilon = 1e-12);
        assert_abs_diff_eq!(buf[0].im, 0.0, epsilon = 1e-12);
        for bin in &buf[1..] {
            assert!(bin.norm() < 1e-12);
        }
    }

    #[test]
    fn test_matches_direct_2d_dft() {
        let side = 8;
        let signal = test_signal(side * side, 31);

        let mut buf = signal.clone();
        forward_2d(&mut buf, side).unwrap();
        assert!(max_abs_diff(&buf, &naive_dft_2d(&signal, side, Direction::Forward)) < 1e-10);

        let mut buf = signal.clone();
        inverse_2d(&mut buf, side).unwrap();
        assert!(max_abs_diff(&buf, &naive_dft_2d(&signal, side, Direction::Inverse)) < 1e-10);
    }

    #[test]
    fn test_round_trip() {
        let side = 32;
        let signal = test_signal(side * side, 2);
        let mut buf = signal.clone();

        forward_2d(&mut buf, side).unwrap();
        inverse_2d(&mut buf, side).unwrap();

        assert!(max_abs_diff(&buf, &signal) < 1e-10);
    }

    #[test]
    fn test_transpose_square() {
        let side = 3;
        let mut buf: Vec<Complex64> = (0..9).map(|i| Complex64::new(i as f64, 0.0)).collect();
        transpose_square(&mut buf, side);

        let expected = [0.0, 3.0, 6.0, 1.0, 4.0, 7.0, 2.0, 5.0, 8.0];
        for (c, &e) in buf.iter().zip(expected.iter()) {
            assert_eq!(c.re, e);
        }
    }

    #[test]
    fn test_array_matches_slice() {
        let side = 16;
        let signal = test_signal(side * side, 6);

        let mut grid = Array2::from_shape_vec((side, side), signal.clone()).unwrap();
        forward_2d_array(&mut grid).unwrap();

        let mut buf = signal;
        forward_2d(&mut buf, side).unwrap();

        assert_eq!(grid.as_slice().unwrap(), buf.as_slice());
    }

    #[test]
    fn test_array_rejects_invalid_grids() {
        let mut rect = Array2::<Complex64>::zeros((4, 8));
        assert_eq!(
            forward_2d_array(&mut rect),
            Err(TransformError::NotSquare { rows: 4, cols: 8 })
        );

        let mut odd = Array2::<Complex64>::zeros((6, 6));
        assert_eq!(
            inverse_2d_array(&mut odd),
            Err(TransformError::NotPowerOfTwo { len: 6 })
        );

        // Column-major view of a square grid
        let mut transposed = Array2::<Complex64>::zeros((4, 4)).reversed_axes();
        assert_eq!(
            forward_2d_array(&mut transposed),
            Err(TransformError::NonContiguous)
        );
    }

    #[test]
    fn test_rejects_bad_side() {
        let mut buf = vec![Complex64::new(0.0, 0.0); 16];
        assert_eq!(
            forward_2d(&mut buf, 3),
            Err(TransformError::NotPowerOfTwo { len: 3 })
        );
        assert_eq!(
            forward_2d(&mut buf, 8),
            Err(TransformError::LengthMismatch { expected: 64, actual: 16 })
        );
    }
}
