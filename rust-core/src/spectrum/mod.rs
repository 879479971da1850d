//! Frequency-domain signal operations built on the transform kernels

pub mod analysis;
pub mod analytic;
pub mod resample;

pub use analysis::{mean_frequency, mean_pitch, SpectralAnalysisConfig};
pub use analytic::{analytic_signal, harmonic_conjugate, instantaneous_amplitude, instantaneous_phase};
pub use resample::{resample, resample_real};
