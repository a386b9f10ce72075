pub mod app;
pub mod camera;
pub mod color;
pub mod config;
pub mod data;
pub mod mesh;
pub mod solver;
pub mod state;
pub mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use data::filter::rolled_coordinates;
use data::loader::load_csv;
use data::model::OccupancyVolume;
use data::raster::rasterize;

// ---------------------------------------------------------------------------
// Load pipeline: CSV → records → roll filter → occupancy volume
// ---------------------------------------------------------------------------

/// Everything the viewer shows for one input file.
#[derive(Debug, Clone)]
pub struct Scene {
    pub source: PathBuf,
    /// Rows read from the file.
    pub total_rows: usize,
    /// Rows whose roll flag is 1.
    pub kept_rows: usize,
    pub volume: OccupancyVolume,
}

/// Load `path` into a `grid_size`³ volume with all statistics.
pub fn load_scene(path: &Path, grid_size: usize) -> Result<Scene> {
    let records = load_csv(path)?;
    let coords = rolled_coordinates(&records);
    let kept_rows = coords.len();
    let volume = rasterize(coords, [grid_size; 3])
        .with_context(|| format!("rasterizing {}", path.display()))?;

    log::info!(
        "Loaded {} rows from {} ({} roll rows, {} filled voxels)",
        records.len(),
        path.display(),
        kept_rows,
        volume.count_filled()
    );

    Ok(Scene {
        source: path.to_path_buf(),
        total_rows: records.len(),
        kept_rows,
        volume,
    })
}

/// Load `path` into a `grid_size`³ occupancy volume.
pub fn load_volume(path: &Path, grid_size: usize) -> Result<OccupancyVolume> {
    load_scene(path, grid_size).map(|scene| scene.volume)
}
