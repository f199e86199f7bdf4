//! Pattern panel: fringe heatmap and intensity curve with fringe annotations.

use egui::{Color32, Ui};
use egui_plot::{Line, LineStyle, Plot, PlotImage, PlotPoint, PlotPoints, PlotUi, Text};

use fringe_core::display::{
    annotations, fringe_visibility, grey_level, heatmap, heatmap_rows, Annotation,
    HEATMAP_LABEL_Y, HEATMAP_REFERENCE_SPAN, HEATMAP_ROWS, HEATMAP_ROW_PITCH,
    INTENSITY_AXIS_RANGE, INTENSITY_LABEL_Y, REFERENCE_LINE_X,
};
use fringe_core::types::FringePattern;

/// Render targets and view options for the two pattern plots.
///
/// The heatmap texture is owned here and re-uploaded whenever a new pattern
/// arrives; the most recent pattern always wins.
#[derive(Default)]
pub struct PatternPanel {
    /// Grey-scale fringe image, created on first render.
    texture: Option<egui::TextureHandle>,
    /// Hide the bright-fringe labels on both plots.
    pub hide_labels: bool,
}

impl PatternPanel {
    /// Upload a new heatmap for `pattern` into the panel's texture.
    pub fn update_texture(&mut self, ctx: &egui::Context, pattern: &FringePattern) {
        let image = heatmap_image(pattern);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("fringe_heatmap", image, egui::TextureOptions::NEAREST));
            }
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, pattern: &FringePattern) {
        let labels = if self.hide_labels {
            Vec::new()
        } else {
            annotations(&pattern.bright_fringes)
        };

        ui.horizontal(|ui| {
            ui.label(format!(
                "{} bright fringes visible, visibility {:.3}",
                pattern.bright_fringes.len(),
                fringe_visibility(&pattern.field)
            ));
            ui.checkbox(&mut self.hide_labels, "Hide labels");
        });
        ui.add_space(4.0);

        ui.strong("Interference fringes");
        let (x_min, x_max) = pattern.field.extent();
        let extent_y = heatmap_rows().last().copied().unwrap_or(0.0) + HEATMAP_ROW_PITCH;
        let texture = self.texture.as_ref();

        Plot::new("fringe_heatmap")
            .height(220.0)
            .x_axis_label("Screen x (m)")
            .y_axis_label("Screen y (m)")
            .include_x(x_min)
            .include_x(x_max)
            .include_y(0.0)
            .include_y(extent_y)
            .show(ui, |plot_ui| {
                if let Some(texture) = texture {
                    let centre = PlotPoint::new((x_min + x_max) / 2.0, extent_y / 2.0);
                    let size = egui::vec2((x_max - x_min) as f32, extent_y as f32);
                    plot_ui.image(PlotImage::new(texture.id(), centre, size));
                }
                reference_line(plot_ui, HEATMAP_REFERENCE_SPAN);
                draw_labels(plot_ui, &labels, HEATMAP_LABEL_Y);
            });

        ui.add_space(8.0);

        ui.strong("Intensity distribution");
        let curve: PlotPoints = pattern.field.samples().map(|(x, i)| [x, i]).collect();
        Plot::new("intensity_plot")
            .height(260.0)
            .x_axis_label("Screen x (m)")
            .y_axis_label("Relative intensity")
            .include_y(INTENSITY_AXIS_RANGE[0])
            .include_y(INTENSITY_AXIS_RANGE[1])
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(curve)
                        .name("Intensity")
                        .color(Color32::from_rgb(50, 90, 220))
                        .width(2.0),
                );
                reference_line(plot_ui, INTENSITY_AXIS_RANGE);
                draw_labels(plot_ui, &labels, INTENSITY_LABEL_Y);
            });
    }
}

/// Grey-scale image of the replicated intensity grid.
fn heatmap_image(pattern: &FringePattern) -> egui::ColorImage {
    let grid = heatmap(&pattern.field, HEATMAP_ROWS);
    let (rows, cols) = grid.dim();
    let mut image = egui::ColorImage::new([cols, rows], Color32::BLACK);
    for ((r, c), &v) in grid.indexed_iter() {
        image.pixels[r * cols + c] = Color32::from_gray(grey_level(v));
    }
    image
}

/// Red dashed marker at the central maximum.
fn reference_line(plot_ui: &mut PlotUi, span: [f64; 2]) {
    let points = PlotPoints::new(vec![[REFERENCE_LINE_X, span[0]], [REFERENCE_LINE_X, span[1]]]);
    plot_ui.line(
        Line::new(points)
            .color(Color32::RED)
            .width(2.0)
            .style(LineStyle::Dashed { length: 8.0 }),
    );
}

fn draw_labels(plot_ui: &mut PlotUi, labels: &[Annotation], y: f64) {
    for ann in labels {
        plot_ui.text(
            Text::new(
                PlotPoint::new(ann.position, y),
                egui::RichText::new(&ann.label)
                    .size(10.0)
                    .background_color(Color32::from_white_alpha(200))
                    .color(Color32::BLACK),
            ),
        );
    }
}
