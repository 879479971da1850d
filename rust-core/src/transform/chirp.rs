//! Chirp sequence `z[j] = exp(-iπ·j²/M)` for the chirp z-transform

use std::f64::consts::PI;

use num_complex::Complex64;

use super::RESYNC_INTERVAL;

/// Build `len` samples of the chirp with modulus `modulus`
///
/// Uses the ratio recurrence
/// `z[j] = z[j-1]·u[j]`, `u[j] = exp(-iπ(2j-1)/M)`, `u[j] = u[j-1]·exp(-2iπ/M)`,
/// resynchronizing both `z` and `u` to exact values every [`RESYNC_INTERVAL`]
/// samples.
pub fn chirp_sequence(len: usize, modulus: usize) -> Vec<Complex64> {
    debug_assert!(modulus > 0);

    let mut z = Vec::with_capacity(len);
    if len == 0 {
        return z;
    }

    let ratio = unit_phase(2, modulus);
    let mut step = unit_phase(1, modulus);
    let mut current = Complex64::new(1.0, 0.0);
    z.push(current);

    for j in 1..len {
        if j % RESYNC_INTERVAL == 0 {
            let j = j as u128;
            step = unit_phase(2 * j - 1, modulus);
            current = unit_phase(j * j, modulus);
        } else {
            if j > 1 {
                step *= ratio;
            }
            current *= step;
        }
        z.push(current);
    }

    z
}

/// `exp(-iπ·q/M)` with `q` reduced modulo `2M` before leaving integer arithmetic
fn unit_phase(q: u128, modulus: usize) -> Complex64 {
    let period = 2 * modulus as u128;
    let reduced = (q % period) as f64;
    Complex64::from_polar(1.0, -PI * reduced / modulus as f64)
}
