//! Main application state and egui integration.

use eframe::egui;

use fringe_core::model::{InterferenceModel, IntensityModel};
use fringe_core::summary::ParameterSummary;
use fringe_core::types::{FringePattern, Parameters};

use crate::panels;

/// The main Fringe application.
pub struct FringeApp {
    /// Slider state.
    pub controls: panels::controls::ControlsPanel,
    /// Plot render targets.
    pub pattern_view: panels::pattern::PatternPanel,
    /// Most recently computed pattern.
    pattern: Option<FringePattern>,
    /// Parameters of `pattern`, used to skip recomputation.
    computed_for: Option<Parameters>,
    /// Rejected input from the last change, if any.
    error_message: Option<String>,
    /// Texture needs re-uploading for the current pattern.
    texture_stale: bool,
}

impl Default for FringeApp {
    fn default() -> Self {
        Self {
            controls: panels::controls::ControlsPanel::default(),
            pattern_view: panels::pattern::PatternPanel::default(),
            pattern: None,
            computed_for: None,
            error_message: None,
            texture_stale: false,
        }
    }
}

impl FringeApp {
    /// Create the app with a light theme and the reset-state pattern ready.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        let mut app = Self::default();
        app.refresh();
        app
    }

    /// Recompute if the slider parameters differ from the displayed pattern.
    ///
    /// Invalid parameters leave the previous pattern on screen.
    fn refresh(&mut self) {
        let params = self.controls.parameters();
        if self.computed_for == Some(params) {
            return;
        }
        self.computed_for = Some(params);

        if let Err(e) = params.validate() {
            log::warn!("Rejected parameters: {}", e);
            self.error_message = Some(e.to_string());
            return;
        }

        log::debug!("Recomputing pattern for {:?}", params);
        self.pattern = Some(IntensityModel.compute(&params));
        self.error_message = None;
        self.texture_stale = true;
    }
}

impl eframe::App for FringeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading("Young's Double Slit");
                ui.separator();

                if self.controls.ui(ui) {
                    log::trace!("Slider change: {:?}", self.controls);
                }
                self.refresh();

                ui.add_space(12.0);
                ui.separator();

                if let Some(err) = &self.error_message {
                    ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
                    ui.add_space(4.0);
                }

                if let Some(pattern) = &self.pattern {
                    ui.label(
                        egui::RichText::new(ParameterSummary::new(pattern).to_string())
                            .monospace()
                            .small(),
                    );
                }
            });

        if self.texture_stale {
            if let Some(pattern) = &self.pattern {
                self.pattern_view.update_texture(ctx, pattern);
            }
            self.texture_stale = false;
        }

        egui::CentralPanel::default().show(ctx, |ui| match &self.pattern {
            Some(pattern) => {
                egui::ScrollArea::vertical().show(ui, |ui| self.pattern_view.ui(ui, pattern));
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Adjust the parameters to compute an interference pattern.");
                });
            }
        });
    }
}
