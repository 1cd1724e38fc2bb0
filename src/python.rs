//! Python interface.
//!
//! The real work happens in the other modules; this only converts arguments
//! and results, and checks the band arguments the way Python callers expect.

use numpy::{
    AllowTypeChange, IntoPyArray, PyArray2, PyArrayLikeDyn, PyReadonlyArray1, PyReadonlyArray2,
};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyInt};

use crate::band::{IrBand, SpectralRegion, SwBand};
use crate::constants::{N_IR_BANDS, N_SW_BANDS};
use crate::error::BugsradError;
use crate::{planck, rayleigh};

impl From<BugsradError> for PyErr {
    fn from(e: BugsradError) -> Self {
        match e {
            BugsradError::BandNotInteger { .. } => PyTypeError::new_err(e.to_string()),
            BugsradError::BandOutOfRange { .. } => PyValueError::new_err(e.to_string()),
            BugsradError::InconsistentInputs(_) => PyValueError::new_err(e.to_string()),
        }
    }
}

/// Get the band index out of a Python object.
///
/// Only an `int` is accepted, so `5.0` is rejected just like `[5, 10]` is.
/// `bool` is a subclass of `int` and is rejected too.
fn band_index(band: &Bound<'_, PyAny>, region: SpectralRegion) -> PyResult<i64> {
    if !band.is_exact_instance_of::<PyInt>() {
        return Err(BugsradError::BandNotInteger { region }.into());
    }
    // Anything that doesn't fit in an i64 is out of range anyway
    match band.extract::<i64>() {
        Ok(band) => Ok(band),
        Err(_) if band.lt(0)? => Ok(i64::MIN),
        Err(_) => Ok(i64::MAX),
    }
}

fn thread_pool(num_threads: Option<usize>) -> PyResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads.unwrap_or(0))
        .build()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Compute the blackbody emission in W/m² for a single layer.
///
/// `temperature` is in K, and is either a scalar (the result is a `float`) or
/// anything numpy can turn into a float64 array, such as a list or an integer
/// array (the result is an array with the same shape).
///
/// `band` is the IR band index, an `int` from 0 to 11.
#[pyfunction]
fn compute_onelayer_emis<'py>(
    py: Python<'py>,
    temperature: &Bound<'py, PyAny>,
    band: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyAny>> {
    let band = IrBand::new(band_index(band, SpectralRegion::Infrared)?)?;

    if temperature.is_instance_of::<PyFloat>() || temperature.is_instance_of::<PyInt>() {
        let emis = planck::compute_onelayer_emis(temperature.extract()?, band);
        return Ok(PyFloat::new(py, emis).into_any());
    }

    let temperature: PyArrayLikeDyn<'py, f64, AllowTypeChange> = temperature.extract()?;
    let emis = planck::compute_onelayer_emis_array(&temperature.as_array(), band);
    Ok(emis.into_pyarray(py).into_any())
}

/// Compute the blackbody emission in W/m² for a set of profiles.
///
/// `surf_temp` is the surface temperature in K with shape (`n_columns`, ).
///
/// `atm_layer_temp` is the layer temperature in K with shape (`n_columns`,
/// `n_layers`).
///
/// The result has shape (`n_columns`, `n_layers`).
///
/// The number of worker threads is controlled by `num_threads`. It must be a
/// positive integer, or `None` to automatically choose the number of threads.
#[pyfunction]
#[pyo3(signature = (n_columns, n_layers, band, surf_temp, atm_layer_temp, num_threads=None))]
fn planck_function<'py>(
    py: Python<'py>,
    n_columns: usize,
    n_layers: usize,
    band: &Bound<'py, PyAny>,
    surf_temp: PyReadonlyArray1<'py, f64>,
    atm_layer_temp: PyReadonlyArray2<'py, f64>,
    num_threads: Option<usize>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let band = IrBand::new(band_index(band, SpectralRegion::Infrared)?)?;
    let surf_temp = surf_temp.as_array();
    let atm_layer_temp = atm_layer_temp.as_array();
    let pool = thread_pool(num_threads)?;

    let bb_emis = py.allow_threads(|| {
        pool.install(|| {
            planck::planck_function(n_columns, n_layers, band, surf_temp, atm_layer_temp)
        })
    })?;

    Ok(bb_emis.into_pyarray(py))
}

/// Compute the Rayleigh single scattering albedo and optical depth.
///
/// `pressure_levels` is the pressure in hPa at each layer interface, with
/// shape (`n_columns`, `n_levels`).
///
/// `band` is the SW band index, an `int` from 0 to 5.
///
/// Returns the tuple (`ssa`, `opd`), each with shape (`n_columns`,
/// `n_layers`).
///
/// The number of worker threads is controlled by `num_threads`, the same as
/// for `planck_function`.
#[pyfunction]
#[pyo3(signature = (n_columns, n_layers, band, pressure_levels, num_threads=None))]
#[allow(clippy::type_complexity)]
fn compute_rayleigh<'py>(
    py: Python<'py>,
    n_columns: usize,
    n_layers: usize,
    band: &Bound<'py, PyAny>,
    pressure_levels: PyReadonlyArray2<'py, f64>,
    num_threads: Option<usize>,
) -> PyResult<(Bound<'py, PyArray2<f64>>, Bound<'py, PyArray2<f64>>)> {
    let band = SwBand::new(band_index(band, SpectralRegion::Shortwave)?)?;
    let pressure_levels = pressure_levels.as_array();
    let pool = thread_pool(num_threads)?;

    let rayleigh::RayleighOptics { ssa, opd } = py.allow_threads(|| {
        pool.install(|| rayleigh::compute_rayleigh(n_columns, n_layers, band, pressure_levels))
    })?;

    Ok((ssa.into_pyarray(py), opd.into_pyarray(py)))
}

/// A Python module implemented in Rust.
#[pymodule]
fn bugsrad_optics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add("N_IR_BANDS", N_IR_BANDS)?;
    m.add("N_SW_BANDS", N_SW_BANDS)?;
    m.add_function(wrap_pyfunction!(compute_onelayer_emis, m)?)?;
    m.add_function(wrap_pyfunction!(planck_function, m)?)?;
    m.add_function(wrap_pyfunction!(compute_rayleigh, m)?)?;
    Ok(())
}
