//! Controls panel: parameter sliders and reset button.

use egui::Ui;

use fringe_core::types::Parameters;

/// Slider state in lab units (mm, m, nm, nm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsPanel {
    /// Slit separation (mm).
    pub slit_separation_mm: f64,
    /// Slit-to-screen distance (m).
    pub screen_distance_m: f64,
    /// Centre wavelength (nm).
    pub wavelength_nm: f64,
    /// Spectral bandwidth (nm).
    pub bandwidth_nm: f64,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        // Same reset state as `Parameters::default()`, kept in slider units.
        Self {
            slit_separation_mm: 0.5,
            screen_distance_m: 2.0,
            wavelength_nm: 632.0,
            bandwidth_nm: 0.0,
        }
    }
}

impl ControlsPanel {
    /// Current slider values as model parameters.
    pub fn parameters(&self) -> Parameters {
        Parameters::from_lab_units(
            self.slit_separation_mm,
            self.screen_distance_m,
            self.wavelength_nm,
            self.bandwidth_nm,
        )
    }

    /// Draw the sliders. Returns true when any value changed.
    pub fn ui(&mut self, ui: &mut Ui) -> bool {
        let before = *self;

        ui.heading("Parameters");
        ui.separator();

        ui.add(
            egui::Slider::new(&mut self.slit_separation_mm, 0.1..=2.0)
                .step_by(0.1)
                .text("Slit separation d (mm)"),
        );
        ui.add(
            egui::Slider::new(&mut self.screen_distance_m, 0.5..=5.0)
                .step_by(0.1)
                .text("Screen distance L (m)"),
        );
        ui.add(
            egui::Slider::new(&mut self.wavelength_nm, 400.0..=700.0)
                .step_by(1.0)
                .text("Wavelength λ (nm)"),
        );
        ui.add(
            egui::Slider::new(&mut self.bandwidth_nm, 0.0..=100.0)
                .step_by(1.0)
                .text("Bandwidth Δλ (nm)"),
        );
        ui.label(
            egui::RichText::new("  Bandwidth 0 is an ideal monochromatic source.")
                .weak()
                .small(),
        );

        ui.add_space(8.0);
        if ui.button("Reset").clicked() {
            log::debug!("Parameters reset");
            *self = Self::default();
        }

        *self != before
    }
}
