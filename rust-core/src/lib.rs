//! Spectral Transform - Unitary DFT Core
//! 
//! In-place complex DFT kernels (radix-2, Bluestein, square 2D) and the
//! spectral operations built on them: band-limited resampling and the
//! Hilbert transform. Pure computation over caller-owned buffers; no state is
//! kept between calls.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod interpolation;
pub mod sequence;
pub mod spectrum;
pub mod transform;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use num_complex::Complex64;

pub use error::TransformError;
pub use sequence::{conjugate_in_place, ComplexSequence};
pub use spectrum::{analytic_signal, harmonic_conjugate, resample, resample_real};
pub use transform::{
    arbitrary_transform, arbitrary_transform_in_place, circular_convolve, forward_2d,
    forward_transform, inverse_2d, inverse_transform, transform_in_place, Direction,
    RESYNC_INTERVAL,
};
