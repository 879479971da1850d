//! Time-domain interpolation

pub mod lanczos;

pub use lanczos::{lanczos_kernel, lanczos_resample, LanczosConfig};
