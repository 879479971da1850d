//! Spectral centroid and pitch-class helpers

use crate::error::{ensure_non_empty, TransformError};
use crate::sequence::real_to_complex;
use crate::transform::{transform_in_place, Direction};

/// Reference for [`mean_pitch`]: C8 in Hz
pub const C8_HZ: f64 = 4434.0;

/// Spectral analysis configuration
#[derive(Debug, Clone)]
pub struct SpectralAnalysisConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,
}

impl Default for SpectralAnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000.0,
        }
    }
}

/// Power-weighted mean frequency (spectral centroid)
///
/// # Arguments
/// * `signal` - Real samples, any non-zero length
/// * `config` - Sample rate used to convert bins to Hz
///
/// # Returns
/// Centroid over bins `1..n/2` in Hz (0 to sample_rate/2), or 0 for a signal
/// with no energy outside DC
pub fn mean_frequency(
    signal: &[f64],
    config: &SpectralAnalysisConfig,
) -> Result<f64, TransformError> {
    ensure_non_empty(signal.len())?;

    let n = signal.len();
    let mut spectrum = real_to_complex(signal);
    transform_in_place(&mut spectrum, Direction::Forward)?;

    let (weighted, total) = spectrum
        .iter()
        .enumerate()
        .take(n.div_ceil(2))
        .skip(1)
        .fold((0.0, 0.0), |(weighted, total), (bin, c)| {
            let power = c.norm_sqr();
            (weighted + bin as f64 * power, total + power)
        });

    if total == 0.0 {
        return Ok(0.0);
    }

    Ok(weighted / total / n as f64 * config.sample_rate)
}

/// Position of `freq_hz` within its octave, relative to C8
///
/// # Returns
/// Value in `[0, 1)` mapping to 0..360 degrees on a pitch wheel, or 0 for
/// non-positive frequencies
pub fn mean_pitch(freq_hz: f64) -> f64 {
    if freq_hz <= 0.0 || !freq_hz.is_finite() {
        return 0.0;
    }

    let pitch = (freq_hz / C8_HZ).log2().rem_euclid(1.0);
    if pitch >= 1.0 {
        0.0
    } else {
        pitch
    }
}
