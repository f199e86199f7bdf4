//! Two-slit Fraunhofer interference with optional spectral averaging.
//!
//! For unit-amplitude slits separated by $d$, a screen at distance $L$, and
//! wavelength $\lambda$, the intensity at screen position $x$ is
//!
//! $$I(x) = 4 \cos^2\!\left(\frac{\pi d \sin\theta}{\lambda}\right),
//!   \qquad \theta = \arctan(x / L)$$
//!
//! A source of finite bandwidth $\Delta\lambda$ is modelled as an incoherent
//! mixture: intensities for evenly spaced wavelengths across
//! $[\lambda - \Delta\lambda/2, \lambda + \Delta\lambda/2]$ are averaged,
//! which keeps the peak normalised to 4 while washing out high orders.

use std::f64::consts::PI;

use crate::types::{BrightFringe, FringePattern, IntensityField, Parameters};

use super::{
    linspace, screen_positions, InterferenceModel, ANNOTATION_HALF_WIDTH, FALLBACK_ORDER,
    MAX_ORDER, SPECTRAL_SAMPLES,
};

/// The two-slit intensity model. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntensityModel;

impl IntensityModel {
    /// Intensity at a single screen position.
    ///
    /// Uses the exact angle $\arctan(x/L)$ rather than the small-angle $x/L$.
    pub fn intensity_at(&self, params: &Parameters, x: f64) -> f64 {
        averaged_intensity(params, &source_wavelengths(params), x)
    }

    /// Sample the intensity over the fixed screen grid.
    pub fn intensity_field(&self, params: &Parameters) -> IntensityField {
        let positions = screen_positions();
        let wavelengths = source_wavelengths(params);
        let intensity = positions.mapv(|x| averaged_intensity(params, &wavelengths, x));

        IntensityField { positions, intensity }
    }

    /// Theoretical bright-fringe spacing $\Delta x = \lambda L / d$.
    ///
    /// Zero signals "no meaningful spacing" for degenerate slits (d = 0).
    pub fn fringe_spacing(&self, params: &Parameters) -> f64 {
        if params.slit_separation != 0.0 {
            (params.wavelength * params.screen_distance) / params.slit_separation
        } else {
            0.0
        }
    }

    /// Bright fringes within `[min_x, max_x]`, ascending by order.
    ///
    /// Orders $-k_{max}..=k_{max}$ are enumerated with
    /// $k_{max} = \lfloor 0.08 / \Delta x \rfloor$, or [`FALLBACK_ORDER`] when the
    /// spacing vanishes for non-zero slits (zero wavelength or screen
    /// distance). Degenerate slits (d = 0) report none.
    pub fn bright_fringes(&self, params: &Parameters, min_x: f64, max_x: f64) -> Vec<BrightFringe> {
        if params.slit_separation == 0.0 {
            return Vec::new();
        }
        let k_max = self.order_limit(params);

        (-k_max..=k_max)
            .map(|order| BrightFringe {
                order,
                position: (order as f64 * params.wavelength * params.screen_distance)
                    / params.slit_separation,
            })
            .filter(|f| f.position >= min_x && f.position <= max_x)
            .collect()
    }

    /// The largest order enumerated for `params`, bounded to `±MAX_ORDER`.
    ///
    /// Truncates toward zero, so NaN maps to 0. A negative spacing gives a
    /// negative limit and therefore an empty order range.
    pub fn order_limit(&self, params: &Parameters) -> i64 {
        let spacing = self.fringe_spacing(params);
        if spacing != 0.0 {
            ((ANNOTATION_HALF_WIDTH / spacing) as i64).clamp(-MAX_ORDER, MAX_ORDER)
        } else {
            FALLBACK_ORDER
        }
    }
}

impl InterferenceModel for IntensityModel {
    fn compute(&self, params: &Parameters) -> FringePattern {
        let field = self.intensity_field(params);
        let (min_x, max_x) = field.extent();
        let fringe_spacing = self.fringe_spacing(params);
        let bright_fringes = self.bright_fringes(params, min_x, max_x);

        FringePattern {
            parameters: *params,
            field,
            fringe_spacing,
            bright_fringes,
        }
    }

    fn name(&self) -> &str {
        "Two-slit Fraunhofer interference"
    }
}

/// Wavelengths contributing to the source spectrum.
///
/// A single line for a monochromatic source, otherwise
/// [`SPECTRAL_SAMPLES`] values spanning the band inclusively.
fn source_wavelengths(params: &Parameters) -> Vec<f64> {
    if params.bandwidth == 0.0 {
        vec![params.wavelength]
    } else {
        let half = params.bandwidth / 2.0;
        linspace(params.wavelength - half, params.wavelength + half, SPECTRAL_SAMPLES).to_vec()
    }
}

/// Incoherent mean of the two-beam intensity at `x` over `wavelengths`.
fn averaged_intensity(params: &Parameters, wavelengths: &[f64], x: f64) -> f64 {
    let sin_theta = (x / params.screen_distance).atan().sin();
    let total: f64 = wavelengths
        .iter()
        .map(|&lam| two_beam_intensity(params.slit_separation, sin_theta, lam))
        .sum();
    total / wavelengths.len() as f64
}

/// $4\cos^2(\pi d \sin\theta / \lambda)$ for two unit-amplitude beams.
fn two_beam_intensity(d: f64, sin_theta: f64, wavelength: f64) -> f64 {
    let c = (PI * d * sin_theta / wavelength).cos();
    4.0 * c * c
}
