use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

/// Layers listed in the shade legend.
const LEGEND_STEPS: usize = 10;

// ---------------------------------------------------------------------------
// Left side panel – counts, slice selector, legend
// ---------------------------------------------------------------------------

/// Render the left info panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Volume");
    ui.separator();

    let Some(scene) = &state.scene else {
        ui.label("No dataset loaded.");
        return;
    };

    let [li, lj, lk] = scene.volume.dims();
    let source = scene.source.display().to_string();
    let (total_rows, kept_rows) = (scene.total_rows, scene.kept_rows);
    let filled = state.filled_voxels();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.label(RichText::new(source).monospace());
            egui::Grid::new("counts").num_columns(2).show(ui, |ui: &mut Ui| {
                ui.label("Grid");
                ui.label(format!("{li} × {lj} × {lk}"));
                ui.end_row();
                ui.label("Rows");
                ui.label(total_rows.to_string());
                ui.end_row();
                ui.label("Roll rows");
                ui.label(kept_rows.to_string());
                ui.end_row();
                ui.label("Filled voxels");
                ui.label(filled.to_string());
                ui.end_row();
                ui.label("Visible faces");
                ui.label(state.mesh.faces.len().to_string());
                ui.end_row();
            });
            ui.separator();

            // ---- Slice selector ----
            ui.strong("Slice");
            ui.add(
                egui::Slider::new(&mut state.slice_layer, 0..=li.saturating_sub(1))
                    .text("x layer"),
            );
            ui.separator();

            // ---- Camera ----
            ui.strong("Camera");
            ui.label(format!(
                "azimuth {:.0}°, elevation {:.0}°, zoom {:.2}",
                state.camera.azimuth, state.camera.elevation, state.camera.zoom
            ));
            if ui.small_button("Reset view").clicked() {
                state.camera.reset();
            }
            ui.separator();

            // ---- Shade legend ----
            ui.strong("Shade by x");
            if let Some(colors) = &state.colors {
                for (label, color) in colors.legend_entries(LEGEND_STEPS) {
                    ui.horizontal(|ui: &mut Ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, color);
                        ui.label(label);
                    });
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(scene) = &state.scene {
            ui.label(format!(
                "{} rows loaded, {} voxels filled",
                scene.total_rows,
                scene.volume.count_filled()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open strategy table")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
