//! Interference model abstraction and the two-slit implementation.
//!
//! The [`InterferenceModel`] trait is the seam the front ends compute
//! through. [`double_slit::IntensityModel`] is the two-beam Fraunhofer model
//! with optional uniform spectral averaging.

pub mod double_slit;

use ndarray::Array1;

use crate::types::{FringePattern, Parameters};

pub use double_slit::IntensityModel;

/// Number of screen samples in every computed field.
pub const SAMPLE_COUNT: usize = 1000;

/// Half-width of the sampled screen window (m). Samples span
/// `[-SCREEN_HALF_WIDTH, SCREEN_HALF_WIDTH]` inclusive.
pub const SCREEN_HALF_WIDTH: f64 = 0.1;

/// Half-width of the central region whose bright fringes are annotated (m).
pub const ANNOTATION_HALF_WIDTH: f64 = 0.08;

/// Number of wavelengths averaged for a finite-bandwidth source.
pub const SPECTRAL_SAMPLES: usize = 5;

/// Orders enumerated when the fringe spacing vanishes for non-zero slits.
pub const FALLBACK_ORDER: i64 = 3;

/// Bound on the magnitude of the enumerated order. Only spacings below
/// 8 nm reach it.
pub const MAX_ORDER: i64 = 10_000_000;

/// A model that maps experiment parameters to a screen intensity pattern.
///
/// Implementations are pure: the same parameters always give the same
/// pattern, and no input makes them fail.
pub trait InterferenceModel {
    /// Compute the sampled intensity, fringe spacing, and visible bright fringes.
    fn compute(&self, params: &Parameters) -> FringePattern;

    /// Human-readable name of the model.
    fn name(&self) -> &str;
}

/// Compute the double-slit pattern for parameters given in metres.
///
/// Direct typed entry point: `d`, `l`, `wavelength` and `bandwidth` are the
/// slit separation, screen distance, centre wavelength, and spectral width.
pub fn compute(d: f64, l: f64, wavelength: f64, bandwidth: f64) -> FringePattern {
    let params = Parameters {
        slit_separation: d,
        screen_distance: l,
        wavelength,
        bandwidth,
    };
    IntensityModel.compute(&params)
}

/// `num` evenly spaced values over `[start, stop]`, both endpoints included.
///
/// The last element is pinned to `stop` so the window edge is exact.
pub fn linspace(start: f64, stop: f64, num: usize) -> Array1<f64> {
    match num {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values = Array1::from_shape_fn(num, |i| i as f64 * step + start);
            values[num - 1] = stop;
            values
        }
    }
}

/// The fixed screen sampling grid shared by every computation.
pub fn screen_positions() -> Array1<f64> {
    linspace(-SCREEN_HALF_WIDTH, SCREEN_HALF_WIDTH, SAMPLE_COUNT)
}
