//! Human-readable parameter and result summary.

use std::fmt;

use crate::types::FringePattern;

/// Explanatory notes printed beneath every summary.
pub const BANDWIDTH_NOTES: [&str; 4] = [
    "Bandwidth is the spread of wavelengths emitted by the source",
    "0 means an ideal monochromatic source (a single wavelength)",
    "The wider the bandwidth, the more washed out the fringes",
    "Monochromaticity = bandwidth / wavelength; smaller means a purer source",
];

/// Text block describing the current parameters and derived quantities.
///
/// Parameters are shown in lab units (mm, m, nm) and the fringe spacing in
/// millimetres.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSummary<'a> {
    pattern: &'a FringePattern,
}

impl<'a> ParameterSummary<'a> {
    pub fn new(pattern: &'a FringePattern) -> Self {
        Self { pattern }
    }
}

impl fmt::Display for ParameterSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.pattern.parameters;

        writeln!(f, "Current parameters:")?;
        writeln!(f)?;
        writeln!(f, "Slit separation: {:.1} mm", p.slit_separation_mm())?;
        writeln!(f, "Screen distance: {:.1} m", p.screen_distance)?;
        writeln!(f, "Wavelength: {:.0} nm", p.wavelength_nm())?;
        writeln!(f, "Bandwidth: {:.0} nm", p.bandwidth_nm())?;
        writeln!(f)?;
        writeln!(f, "Results:")?;
        writeln!(f, "Fringe spacing Δx: {:.3} mm", self.pattern.fringe_spacing * 1e3)?;
        writeln!(f, "Monochromaticity: {:.6}", p.monochromaticity())?;
        writeln!(f)?;
        writeln!(f, "Notes:")?;
        for note in BANDWIDTH_NOTES {
            writeln!(f, "• {}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InterferenceModel, IntensityModel};
    use crate::types::Parameters;

    #[test]
    fn test_summary_reset_state() {
        let pattern = IntensityModel.compute(&Parameters::default());
        let text = ParameterSummary::new(&pattern).to_string();
        assert!(text.contains("Slit separation: 0.5 mm"));
        assert!(text.contains("Screen distance: 2.0 m"));
        assert!(text.contains("Wavelength: 632 nm"));
        assert!(text.contains("Bandwidth: 0 nm"));
        assert!(text.contains("Fringe spacing Δx: 2.528 mm"));
        assert!(text.contains("Monochromaticity: 0.000000"));
        assert_eq!(text.matches('•').count(), BANDWIDTH_NOTES.len());
    }

    #[test]
    fn test_summary_degenerate_slits() {
        let pattern = IntensityModel.compute(&Parameters::from_lab_units(0.0, 2.0, 632.0, 50.0));
        let text = ParameterSummary::new(&pattern).to_string();
        assert!(text.contains("Fringe spacing Δx: 0.000 mm"));
        assert!(text.contains("Monochromaticity: 0.079114"));
    }
}
