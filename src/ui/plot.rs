use eframe::egui::Ui;
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Slice plot (bottom panel)
// ---------------------------------------------------------------------------

/// Scatter of the filled `(y, z)` cells in the selected first-axis layer,
/// drawn in that layer's shade.
pub fn slice_plot(ui: &mut Ui, state: &AppState) {
    let Some(scene) = &state.scene else {
        ui.label("No dataset loaded.");
        return;
    };

    let [_, len_j, len_k] = scene.volume.dims();
    let layer = state.slice_layer;
    let cells = scene.volume.layer(layer);
    let shade = state
        .colors
        .as_ref()
        .and_then(|c| c.layer_shade(layer))
        .unwrap_or_else(|| color::shade(layer));

    let points: PlotPoints = cells
        .iter()
        .map(|&[j, k]| [j as f64, k as f64])
        .collect();

    Plot::new("slice_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("y (opponent score)")
        .y_axis_label("z (turn total)")
        .data_aspect(1.0)
        .include_x(0.0)
        .include_x(len_j as f64)
        .include_y(0.0)
        .include_y(len_k as f64)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let markers = Points::new(points)
                .name(format!("layer {layer}: {} cells", cells.len()))
                .shape(MarkerShape::Square)
                .radius(2.0)
                .filled(true)
                .color(color::gray(shade, 1.0));
            plot_ui.points(markers);
        });
}
