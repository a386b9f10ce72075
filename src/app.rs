use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, voxels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct VoxelViewerApp {
    pub state: AppState,
}

impl VoxelViewerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for VoxelViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: counts, legend, slice selector ----
        egui::SidePanel::left("info_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: slice plot ----
        egui::TopBottomPanel::bottom("slice_panel")
            .default_height(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                plot::slice_plot(ui, &self.state);
            });

        // ---- Central panel: voxel view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            voxels::voxel_view(ui, &mut self.state);
        });
    }
}
