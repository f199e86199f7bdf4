//! Core types shared across the Fringe workspace.
//!
//! This module defines the value types that flow through one computation:
//! the experiment parameters, the sampled intensity field, bright-fringe
//! metadata, and the packaged [`FringePattern`] result.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported when user-supplied parameters are checked.
///
/// The intensity model itself never fails; these are raised only by
/// [`Parameters::validate`], which front ends call on user input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("Parameter '{name}' must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("Parameter '{name}' must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("Parameter '{name}' must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error(
        "Bandwidth {bandwidth:.3e} m must be smaller than twice the wavelength \
         {wavelength:.3e} m so every averaged wavelength stays positive"
    )]
    BandwidthTooWide { bandwidth: f64, wavelength: f64 },
}

/// Geometry and source description of a double-slit experiment.
///
/// All fields are in metres. A slit separation of exactly zero is accepted
/// and treated as a degenerate "no slits" configuration by the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Slit separation d (m).
    pub slit_separation: f64,
    /// Slit-to-screen distance L (m).
    pub screen_distance: f64,
    /// Centre wavelength λ (m).
    pub wavelength: f64,
    /// Full spectral width Δλ (m). Zero means an ideal monochromatic source.
    pub bandwidth: f64,
}

impl Default for Parameters {
    /// Reset state of the simulator: 0.5 mm slits, 2 m screen, 632 nm HeNe-like line.
    fn default() -> Self {
        Self::from_lab_units(0.5, 2.0, 632.0, 0.0)
    }
}

impl Parameters {
    /// Build parameters from the units used on the controls and in job files.
    ///
    /// # Arguments
    /// * `slit_separation_mm` - Slit separation in millimetres.
    /// * `screen_distance_m` - Screen distance in metres.
    /// * `wavelength_nm` - Centre wavelength in nanometres.
    /// * `bandwidth_nm` - Spectral width in nanometres.
    pub fn from_lab_units(
        slit_separation_mm: f64,
        screen_distance_m: f64,
        wavelength_nm: f64,
        bandwidth_nm: f64,
    ) -> Self {
        Self {
            slit_separation: slit_separation_mm * 1e-3,
            screen_distance: screen_distance_m,
            wavelength: wavelength_nm * 1e-9,
            bandwidth: bandwidth_nm * 1e-9,
        }
    }

    /// Slit separation in millimetres.
    pub fn slit_separation_mm(&self) -> f64 {
        self.slit_separation * 1e3
    }

    /// Centre wavelength in nanometres.
    pub fn wavelength_nm(&self) -> f64 {
        self.wavelength * 1e9
    }

    /// Spectral width in nanometres.
    pub fn bandwidth_nm(&self) -> f64 {
        self.bandwidth * 1e9
    }

    /// Whether the source is treated as ideally monochromatic.
    pub fn is_monochromatic(&self) -> bool {
        self.bandwidth == 0.0
    }

    /// Monochromaticity Δλ/λ. Smaller values mean a purer source.
    ///
    /// Returns 0 when the ratio is undefined (zero wavelength).
    pub fn monochromaticity(&self) -> f64 {
        let ratio = self.bandwidth / self.wavelength;
        if ratio.is_finite() {
            ratio
        } else {
            0.0
        }
    }

    /// Check that the parameters describe a physical experiment.
    ///
    /// A zero slit separation passes: it is the degenerate case the model
    /// handles by policy rather than an input error.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let fields = [
            ("slit_separation", self.slit_separation),
            ("screen_distance", self.screen_distance),
            ("wavelength", self.wavelength),
            ("bandwidth", self.bandwidth),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name, value });
            }
        }

        if self.slit_separation < 0.0 {
            return Err(ParameterError::Negative {
                name: "slit_separation",
                value: self.slit_separation,
            });
        }
        if self.screen_distance <= 0.0 {
            return Err(ParameterError::NotPositive {
                name: "screen_distance",
                value: self.screen_distance,
            });
        }
        if self.wavelength <= 0.0 {
            return Err(ParameterError::NotPositive {
                name: "wavelength",
                value: self.wavelength,
            });
        }
        if self.bandwidth < 0.0 {
            return Err(ParameterError::Negative {
                name: "bandwidth",
                value: self.bandwidth,
            });
        }
        if self.bandwidth >= 2.0 * self.wavelength {
            return Err(ParameterError::BandwidthTooWide {
                bandwidth: self.bandwidth,
                wavelength: self.wavelength,
            });
        }
        Ok(())
    }
}

/// Sampled intensity on the observation screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityField {
    /// Screen x-coordinates (m), strictly increasing.
    pub positions: Array1<f64>,
    /// Relative intensity at each position. Two unit-amplitude slits give a
    /// maximum of 4.
    pub intensity: Array1<f64>,
}

impl IntensityField {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the field holds no samples.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sampled screen extent as `(min, max)`.
    pub fn extent(&self) -> (f64, f64) {
        let min = self.positions.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.positions.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }

    /// Largest sampled intensity.
    pub fn peak(&self) -> f64 {
        self.intensity.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest sampled intensity.
    pub fn trough(&self) -> f64 {
        self.intensity.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Index of the sample closest to screen position `x`.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        self.positions
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - x).abs().total_cmp(&(*b - x).abs()))
            .map(|(i, _)| i)
    }

    /// `(position, intensity)` pairs, in screen order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.iter().copied().zip(self.intensity.iter().copied())
    }
}

/// A visible bright fringe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrightFringe {
    /// Interference order k. Zero is the central maximum.
    pub order: i64,
    /// Screen position x_k = kλL/d (m).
    pub position: f64,
}

/// Complete result of one interference computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FringePattern {
    /// Parameters the pattern was computed from.
    pub parameters: Parameters,
    /// Sampled intensity curve.
    pub field: IntensityField,
    /// Theoretical fringe spacing Δx = λL/d (m). Zero when d = 0.
    pub fringe_spacing: f64,
    /// Bright fringes within the sampled range, ascending by order.
    pub bright_fringes: Vec<BrightFringe>,
}

impl FringePattern {
    /// The bright fringe of a given order, if visible.
    pub fn fringe(&self, order: i64) -> Option<&BrightFringe> {
        self.bright_fringes.iter().find(|f| f.order == order)
    }

    /// Whether the fringe spacing is meaningful (non-degenerate slits).
    pub fn has_fringes(&self) -> bool {
        self.fringe_spacing != 0.0
    }
}
