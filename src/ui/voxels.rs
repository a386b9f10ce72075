use eframe::egui::{self, Sense, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// 3D voxel view (central panel)
// ---------------------------------------------------------------------------

/// Render the occupancy volume. Drag to orbit, scroll to zoom.
pub fn voxel_view(ui: &mut Ui, state: &mut AppState) {
    if state.scene.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view voxels  (File → Open…)");
        });
        return;
    }

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());

    if response.dragged() {
        state.camera.orbit(response.drag_delta());
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            state.camera.zoom_by(scroll);
        }
    }

    let rect = response.rect;
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let projector = state.camera.projector(state.mesh.dims, rect);
    painter.extend(state.mesh.shapes(&projector));

    if state.mesh.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No roll cells in this file",
            egui::FontId::proportional(16.0),
            ui.visuals().weak_text_color(),
        );
    }
}
