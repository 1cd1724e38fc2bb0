//! Band optics for the BUGSrad radiative transfer scheme.
//!
//! Two independent calculations are provided, both per spectral band and
//! vectorized over atmospheric columns:
//!
//! - [`planck`]: blackbody emission for the infrared bands, from a polynomial
//!   fit to the Planck function
//! - [`rayleigh`]: Rayleigh scattering optical depth and single scattering
//!   albedo for the shortwave bands
//!
//! Everything is pure and stateless. Batch calls run on the current rayon
//! thread pool, one column at a time per task.
//!
//! NOTE: the Python interface lives in the `python` module, behind the
//! `python` feature. The other modules do not use `pyo3`.

pub mod band;
pub mod constants;
pub mod error;
pub mod planck;
#[cfg(feature = "python")]
mod python;
pub mod rayleigh;

pub use band::{IrBand, SpectralRegion, SwBand};
pub use error::BugsradError;
pub use planck::{compute_onelayer_emis, compute_onelayer_emis_array, planck_function};
pub use rayleigh::{compute_rayleigh, rayleigh_factor, RayleighOptics};
