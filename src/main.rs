use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use pig_voxels::app::VoxelViewerApp;
use pig_voxels::config::ViewerArgs;
use pig_voxels::state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let args = ViewerArgs::parse();

    // Load errors are fatal here; the window only opens on good data.
    let scene = pig_voxels::load_scene(&args.path, args.grid_size)
        .with_context(|| format!("loading {}", args.path.display()))?;

    let mut state = AppState::new(args.grid_size);
    state.set_scene(scene);
    log::info!("{} exposed faces to draw", state.mesh.faces.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pig Voxels – Strategy Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(VoxelViewerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))
}
