//! Rayleigh scattering optical depth and single scattering albedo.
//!
//! Based on Kurucz (1995), with the cross sections updated from Anderson et
//! al. (2000).

use log::{debug, info};
use ndarray::{Array2, ArrayView2, Zip};

use crate::band::SwBand;
use crate::constants::{GRAVITY, MW_DRY_AIR, N_AVOGADRO, RAYLEIGH_CROSS_SECTION};
use crate::error::BugsradError;

/// Rayleigh optical properties, each with shape (`n_columns`, `n_layers`).
#[derive(Debug, Clone, PartialEq)]
pub struct RayleighOptics {
    /// Single scattering albedo. Rayleigh scattering is conservative, so this
    /// is always 1.
    pub ssa: Array2<f64>,
    /// Optical depth of each layer.
    pub opd: Array2<f64>,
}

/// Optical depth per hPa of pressure difference for the shortwave `band`.
///
/// The factor of ten converts from g/cm² to kg/m² and accounts for the
/// pressure being in hPa.
pub fn rayleigh_factor(band: SwBand) -> f64 {
    RAYLEIGH_CROSS_SECTION[band.index()] * N_AVOGADRO / (MW_DRY_AIR * GRAVITY) * 10.
}

/// Compute the Rayleigh single scattering albedo and optical depth.
///
/// `pressure_levels` is the pressure in hPa at the layer interfaces, with
/// shape (`n_columns`, `n_levels`). Only levels `1..n_layers` are read (and
/// level 1 even for a single layer), so `n_levels` must be at least
/// `max(2, n_layers)`.
///
/// The optical depth of layer 0 is taken from the pressure at level 1, and
/// layer `i` from the pressure difference between levels `i + 1` and `i`, for
/// `i` up to `n_layers - 2`. The last layer of a multi-layer profile is left
/// at zero.
///
/// `band` is an [`SwBand`], so negative indices are rejected when it is built
/// rather than counting back from the last band.
pub fn compute_rayleigh(
    n_columns: usize,
    n_layers: usize,
    band: SwBand,
    pressure_levels: ArrayView2<'_, f64>,
) -> Result<RayleighOptics, BugsradError> {
    if n_columns == 0 {
        return Err(BugsradError::InconsistentInputs("n_columns"));
    }
    if n_layers == 0 {
        return Err(BugsradError::InconsistentInputs("n_layers"));
    }
    let (num_rows, num_levels) = pressure_levels.dim();
    if num_rows != n_columns || num_levels < n_layers.max(2) {
        return Err(BugsradError::InconsistentInputs("pressure_levels"));
    }

    let fact = rayleigh_factor(band);
    debug!("Rayleigh factor for SW band {} is {fact:e}", band.index());
    info!("Computing Rayleigh optics for {n_columns} columns and {n_layers} layers");

    let ssa: Array2<f64> = Array2::ones((n_columns, n_layers));
    let mut opd: Array2<f64> = Array2::zeros((n_columns, n_layers));

    Zip::from(opd.rows_mut())
        .and(pressure_levels.rows())
        .par_for_each(|mut opd, p| {
            // Top level
            opd[0] = p[1] * fact;

            for i in 1..n_layers.saturating_sub(1) {
                opd[i] = (p[i + 1] - p[i]) * fact;
            }
        });

    Ok(RayleighOptics { ssa, opd })
}
