//! Blackbody emission for the infrared bands.
//!
//! The Planck function integrated over each band is approximated by a
//! fifth-degree polynomial in temperature. The fits are only meant for
//! atmospheric temperatures (about 180 K to 320 K) but the temperature is not
//! checked or clamped.

use log::{debug, info};
use ndarray::{Array, Array2, ArrayBase, ArrayView1, ArrayView2, Data, Dimension, Zip};

use crate::band::IrBand;
use crate::constants::N_IR_BANDS;
use crate::error::BugsradError;

/// Number of polynomial coefficients per band.
pub const NUM_COEFS: usize = 6;

/// Polynomial coefficients for each infrared band, ordered from the constant
/// term up to the fifth-order term.
#[allow(clippy::excessive_precision)]
const PLANCK_COEFS: [[f64; NUM_COEFS]; N_IR_BANDS] = [
    [-25.889132, 0.75038381, -0.87074567e-02, 0.50701144e-04, -0.14856755e-06, 0.17579587e-09],
    [25.397471, -0.59596460, 0.53117737e-02, -0.21681758e-04, 0.36630792e-07, -0.11541419e-10],
    [57.891546, -1.4745788, 0.14577775e-01, -0.68637478e-04, 0.14707480e-06, -0.98862337e-10],
    [21.837317, -0.63194381, 0.71338812e-02, -0.38569394e-04, 0.95685257e-07, -0.76188561e-10],
    [0.83155466, -0.15281669, 0.31020500e-02, -0.23768837e-04, 0.74605666e-07, -0.67494167e-10],
    [-19.432674, 0.37744942, -0.22166529e-02, 0.11663914e-05, 0.22128830e-07, -0.28943829e-10],
    [-51.844021, 1.2280373, -0.10600353e-01, 0.38135251e-04, -0.45111018e-07, 0.16679671e-10],
    [-31.210771, 0.85737498, -0.87947387e-02, 0.39416747e-04, -0.67469797e-07, 0.43711306e-10],
    [-5.4417604, 0.28970317, -0.44571665e-02, 0.26395273e-04, -0.52111967e-07, 0.37627129e-10],
    [14.646543, -0.25202253, 0.67234738e-03, 0.67552180e-05, -0.19815201e-07, 0.17221281e-10],
    [12.218584, -0.31591213, 0.26032011e-02, -0.58878366e-05, 0.73276694e-08, -0.38798834e-11],
    [1.0183416, -0.79710154e-01, 0.13753393e-02, -0.40247214e-05, 0.63186167e-08, -0.41250652e-11],
];

/// The polynomial coefficients for `band`.
pub fn coefficients(band: IrBand) -> &'static [f64; NUM_COEFS] {
    &PLANCK_COEFS[band.index()]
}

/// Horner's method. The evaluation order is fixed so that scalar and batch
/// results agree to the last bit.
#[inline]
fn horner(c: &[f64; NUM_COEFS], t: f64) -> f64 {
    c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * (c[4] + t * c[5]))))
}

/// Blackbody emission in W/m² for a temperature `temperature` in K.
pub fn compute_onelayer_emis(temperature: f64, band: IrBand) -> f64 {
    horner(coefficients(band), temperature)
}

/// Element-wise [`compute_onelayer_emis`] over an array of any shape.
pub fn compute_onelayer_emis_array<S, D>(
    temperature: &ArrayBase<S, D>,
    band: IrBand,
) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let coefs = coefficients(band);
    temperature.mapv(|t| horner(coefs, t))
}

/// Compute the blackbody emission in W/m², with shape (`n_columns`,
/// `n_layers`).
///
/// `surf_temp` is the surface temperature in K with shape (`n_columns`, ) and
/// `atm_layer_temp` is the layer temperature in K with shape (`n_columns`,
/// `n_layers`).
///
/// Index 0 of each column starts out as the emission of the top layer. From
/// layer 2 onward, each entry is the emission at the mean temperature of that
/// layer and the one above it. If any such layer exists, index 0 is then
/// replaced by the surface emission. Index 1 is left at zero.
///
/// Columns are processed in parallel on the current rayon thread pool.
pub fn planck_function(
    n_columns: usize,
    n_layers: usize,
    band: IrBand,
    surf_temp: ArrayView1<'_, f64>,
    atm_layer_temp: ArrayView2<'_, f64>,
) -> Result<Array2<f64>, BugsradError> {
    if n_columns == 0 {
        return Err(BugsradError::InconsistentInputs("n_columns"));
    }
    if n_layers == 0 {
        return Err(BugsradError::InconsistentInputs("n_layers"));
    }
    if surf_temp.len() != n_columns {
        return Err(BugsradError::InconsistentInputs("surf_temp"));
    }
    if atm_layer_temp.dim() != (n_columns, n_layers) {
        return Err(BugsradError::InconsistentInputs("atm_layer_temp"));
    }
    debug!("input shapes are consistent");

    info!(
        "Computing Planck emission for {n_columns} columns and {n_layers} layers in IR band {}",
        band.index()
    );

    let coefs = coefficients(band);
    let mut bb_emis: Array2<f64> = Array2::zeros((n_columns, n_layers));

    Zip::from(bb_emis.rows_mut())
        .and(atm_layer_temp.rows())
        .and(&surf_temp)
        .par_for_each(|mut emis, layer_temp, &t_surf| {
            // Top of the model
            emis[0] = horner(coefs, layer_temp[0]);

            // Interfaces between layers
            for i in 2..n_layers {
                emis[i] = horner(coefs, 0.5 * (layer_temp[i - 1] + layer_temp[i]));
            }

            if n_layers > 2 {
                emis[0] = horner(coefs, t_surf);
            }
        });

    Ok(bb_emis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::{arr1, arr2, s, Array1};

    fn band(index: i64) -> IrBand {
        IrBand::new(index).unwrap()
    }

    #[test]
    fn single_temperature() {
        assert_relative_eq!(
            compute_onelayer_emis(273.1, band(5)),
            21.20632162645144,
            max_relative = 1e-12
        );
    }

    #[test]
    fn multiple_temperatures() {
        let temps = arr1(&[273.1, 280.1, 250.5, 235.6, 221.2, 203.1, 240.6]);
        let expected = arr1(&[
            21.20632163,
            24.32141717,
            12.94241574,
            8.87748245,
            5.87418111,
            3.213468,
            10.12735758,
        ]);
        let emis = compute_onelayer_emis_array(&temps, band(5));
        assert_eq!(emis.dim(), temps.dim());
        for (&actual, &expected) in emis.iter().zip(&expected) {
            assert_relative_eq!(actual, expected, max_relative = 1e-6);
        }
    }

    /// The batch form must give exactly the same numbers as the scalar form,
    /// whatever the shape.
    #[test]
    fn batch_matches_scalar() {
        let temps = Array1::linspace(180., 320., 24).into_shape_with_order((2, 3, 4)).unwrap();
        for band in IrBand::all() {
            let emis = compute_onelayer_emis_array(&temps, band);
            assert_eq!(emis.shape(), &[2, 3, 4]);
            for (&e, &t) in emis.iter().zip(&temps) {
                assert_eq!(e.to_bits(), compute_onelayer_emis(t, band).to_bits());
            }
        }
    }

    #[test]
    fn emission_increases_with_temperature() {
        for band in IrBand::all() {
            let cold = compute_onelayer_emis(200., band);
            let warm = compute_onelayer_emis(300., band);
            assert!(warm > cold, "band {}: {warm} <= {cold}", band.index());
        }
    }

    #[test]
    fn profile() {
        let surf_temp = arr1(&[290.0, 300.0]);
        let atm_layer_temp = arr2(&[[210.0, 220.0, 240.0, 260.0], [200.0, 230.0, 250.0, 270.0]]);
        let bb_emis =
            planck_function(2, 4, band(7), surf_temp.view(), atm_layer_temp.view()).unwrap();

        let expected = arr2(&[
            [51.581347228489356, 0.0, 19.653299135625815, 28.48140485937489],
            [58.44052687999996, 0.0, 23.836461335974413, 33.58539961698559],
        ]);
        assert_abs_diff_eq!(bb_emis, expected, epsilon = 1e-10);

        // Interfaces use the mean of adjacent layers
        assert_eq!(
            bb_emis[[1, 3]],
            compute_onelayer_emis(0.5 * (250.0 + 270.0), band(7))
        );
    }

    /// With fewer than three layers there are no interfaces, so the surface
    /// value never replaces the top layer.
    #[test]
    fn shallow_profile_keeps_top_layer() {
        let surf_temp = arr1(&[290.0]);
        let atm_layer_temp = arr2(&[[210.0, 220.0]]);
        let bb_emis =
            planck_function(1, 2, band(7), surf_temp.view(), atm_layer_temp.view()).unwrap();
        assert_eq!(bb_emis[[0, 0]], compute_onelayer_emis(210.0, band(7)));
        assert_eq!(bb_emis[[0, 1]], 0.0);

        let top_only = atm_layer_temp.slice(s![.., ..1]);
        let bb_emis = planck_function(1, 1, band(7), surf_temp.view(), top_only).unwrap();
        assert_eq!(bb_emis.dim(), (1, 1));
        assert_eq!(bb_emis[[0, 0]], compute_onelayer_emis(210.0, band(7)));
    }

    #[test]
    fn wrong_shapes() {
        let surf_temp = arr1(&[290.0, 300.0]);
        let atm_layer_temp = Array2::from_elem((2, 5), 250.0);

        let err = planck_function(2, 4, band(0), surf_temp.view(), atm_layer_temp.view());
        assert_eq!(err, Err(BugsradError::InconsistentInputs("atm_layer_temp")));

        let err = planck_function(3, 5, band(0), surf_temp.view(), atm_layer_temp.view());
        assert_eq!(err, Err(BugsradError::InconsistentInputs("surf_temp")));

        let err = planck_function(2, 0, band(0), surf_temp.view(), atm_layer_temp.view());
        assert_eq!(err, Err(BugsradError::InconsistentInputs("n_layers")));
    }

    #[test]
    fn repeatable_across_thread_counts() {
        let n_columns = 37;
        let n_layers = 20;
        let atm_layer_temp = Array2::from_shape_fn((n_columns, n_layers), |(c, l)| {
            200. + 0.7 * c as f64 + 3.1 * l as f64
        });
        let surf_temp = Array1::from_shape_fn(n_columns, |c| 280. + 0.5 * c as f64);

        let run = |num_threads| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .unwrap()
                .install(|| {
                    let (surf_temp, atm_layer_temp) = (surf_temp.view(), atm_layer_temp.view());
                    planck_function(n_columns, n_layers, band(3), surf_temp, atm_layer_temp).unwrap()
                })
        };
        let first = run(1);
        assert_eq!(first, run(1));
        assert_eq!(first, run(4));
    }
}
