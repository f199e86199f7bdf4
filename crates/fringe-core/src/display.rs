//! Shaping computed patterns for presentation surfaces.
//!
//! Both front ends draw the same two views: a fringe heatmap that repeats the
//! intensity curve over a vertical extent, and the intensity curve itself.
//! Each is overlaid with bright-fringe labels and a reference line at the
//! central maximum. The helpers here produce that data without touching any
//! rendering backend.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::types::{BrightFringe, IntensityField};

/// Screen position of the central reference line (m).
pub const REFERENCE_LINE_X: f64 = 0.0;

/// Number of rows in the fringe heatmap.
pub const HEATMAP_ROWS: usize = 100;

/// Vertical pitch between heatmap rows (m).
pub const HEATMAP_ROW_PITCH: f64 = 0.001;

/// Height at which labels are placed on the heatmap (m).
pub const HEATMAP_LABEL_Y: f64 = 0.08;

/// Vertical span of the reference line on the heatmap (m).
pub const HEATMAP_REFERENCE_SPAN: [f64; 2] = [0.0, 0.1];

/// Height at which labels are placed on the intensity plot.
pub const INTENSITY_LABEL_Y: f64 = 3.8;

/// Fixed y-range of the intensity plot, slightly padded around [0, 4].
pub const INTENSITY_AXIS_RANGE: [f64; 2] = [-0.1, 4.1];

/// A text label anchored at a screen position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Screen x-coordinate (m).
    pub position: f64,
    /// Label text.
    pub label: String,
}

/// Label for a bright fringe of the given order.
pub fn fringe_label(order: i64) -> String {
    if order == 0 {
        "k=0 (central maximum)".to_string()
    } else {
        format!("k={}", order)
    }
}

/// One annotation per bright fringe, in the same order.
pub fn annotations(fringes: &[BrightFringe]) -> Vec<Annotation> {
    fringes
        .iter()
        .map(|f| Annotation {
            position: f.position,
            label: fringe_label(f.order),
        })
        .collect()
}

/// Heights of the heatmap rows: `y_i = i * HEATMAP_ROW_PITCH`.
pub fn heatmap_rows() -> Array1<f64> {
    Array1::from_shape_fn(HEATMAP_ROWS, |i| i as f64 * HEATMAP_ROW_PITCH)
}

/// Replicate the intensity curve into a `(rows, samples)` grid.
///
/// Row-major with one row per heatmap height; every row equals the curve.
pub fn heatmap(field: &IntensityField, rows: usize) -> Array2<f64> {
    let row = field.intensity.view();
    Array2::from_shape_fn((rows, row.len()), |(_, j)| row[j])
}

/// Fringe visibility $V = (I_{max} - I_{min}) / (I_{max} + I_{min})$.
///
/// 1 for perfectly coherent two-beam fringes, falling towards 0 as the
/// spectrum widens. Returns 0 for an empty or all-dark field.
pub fn fringe_visibility(field: &IntensityField) -> f64 {
    if field.is_empty() {
        return 0.0;
    }
    let max = field.peak();
    let min = field.trough();
    let sum = max + min;
    if sum > 0.0 {
        (max - min) / sum
    } else {
        0.0
    }
}

/// Population variance of the intensity curve, a global contrast measure.
pub fn contrast_variance(field: &IntensityField) -> f64 {
    if field.is_empty() {
        return 0.0;
    }
    field.intensity.var(0.0)
}

/// Normalise an intensity to a grey level in [0, 255] over the 0..4 range.
pub fn grey_level(intensity: f64) -> u8 {
    ((intensity / 4.0).clamp(0.0, 1.0) * 255.0).round() as u8
}
