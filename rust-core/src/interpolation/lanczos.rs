//! Lanczos windowed-sinc resampling
//!
//! A time-domain alternative to spectral resampling: no periodicity
//! assumption, at the cost of an O(m·q) kernel sum.

use std::f64::consts::PI;

/// Lanczos resampler configuration
#[derive(Debug, Clone)]
pub struct LanczosConfig {
    /// Kernel half-width `q` in input samples
    pub lobes: usize,
}

impl Default for LanczosConfig {
    fn default() -> Self {
        Self { lobes: 12 }
    }
}

/// Lanczos kernel `sinc(x)·sinc(x/q)` for |x| < q, zero outside
pub fn lanczos_kernel(x: f64, lobes: usize) -> f64 {
    let q = lobes as f64;
    if x == 0.0 {
        return 1.0;
    }
    if x.abs() >= q {
        return 0.0;
    }

    let px = PI * x;
    q * px.sin() * (px / q).sin() / (px * px)
}

/// Resample `input` to `output_len` samples
///
/// # Arguments
/// * `input` - Source samples
/// * `output_len` - Target length m
/// * `config` - Kernel width
///
/// # Returns
/// m samples; output sample j sits at input position `j·n/m`. Positions that
/// fall exactly on an input sample copy it.
pub fn lanczos_resample(input: &[f64], output_len: usize, config: &LanczosConfig) -> Vec<f64> {
    let n = input.len();
    let m = output_len;

    if n == m {
        return input.to_vec();
    }
    if n == 0 {
        return vec![0.0; m];
    }

    let q = config.lobes as isize;

    (0..m)
        .map(|j| {
            let t = j as f64 / m as f64 * n as f64;
            let i = t.round();
            if i == t {
                return input[i as usize];
            }

            let i = i as isize;
            (-q..=q)
                .map(|k| i + k)
                .filter(|&idx| idx >= 0 && (idx as usize) < n)
                .map(|idx| input[idx as usize] * lanczos_kernel(idx as f64 - t, config.lobes))
                .sum()
        })
        .collect()
}
