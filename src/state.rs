use std::path::Path;

use crate::camera::OrbitCamera;
use crate::color::ColorGrid;
use crate::mesh::VoxelMesh;
use crate::Scene;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded scene (None until a file is loaded).
    pub scene: Option<Scene>,

    /// Per-voxel shades for the loaded volume.
    pub colors: Option<ColorGrid>,

    /// Exposed faces of the loaded volume, rebuilt only on load.
    pub mesh: VoxelMesh,

    pub camera: OrbitCamera,

    /// First-axis layer shown in the slice plot.
    pub slice_layer: usize,

    /// Side of the volume used for files opened from the UI.
    pub grid_size: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(grid_size: usize) -> Self {
        Self {
            scene: None,
            colors: None,
            mesh: VoxelMesh::default(),
            camera: OrbitCamera::default(),
            slice_layer: 0,
            grid_size,
            status_message: None,
        }
    }

    /// Ingest a newly loaded scene and rebuild everything derived from it.
    pub fn set_scene(&mut self, scene: Scene) {
        let colors = ColorGrid::new(scene.volume.dims());
        self.mesh = VoxelMesh::build(&scene.volume, &colors);
        self.slice_layer = self.slice_layer.min(scene.volume.dims()[0].saturating_sub(1));
        self.colors = Some(colors);
        self.scene = Some(scene);
        self.status_message = None;
    }

    /// Load a file picked in the UI. Errors are reported in the status line
    /// and leave the current scene untouched.
    pub fn open(&mut self, path: &Path) {
        match crate::load_scene(path, self.grid_size) {
            Ok(scene) => self.set_scene(scene),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn filled_voxels(&self) -> usize {
        self.scene
            .as_ref()
            .map(|s| s.volume.count_filled())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::raster::rasterize;

    fn scene(coords: Vec<[i64; 3]>, n: usize) -> Scene {
        Scene {
            source: "test.csv".into(),
            total_rows: coords.len(),
            kept_rows: coords.len(),
            volume: rasterize(coords, [n; 3]).unwrap(),
        }
    }

    #[test]
    fn set_scene_builds_mesh_and_colors() {
        let mut state = AppState::new(10);
        state.set_scene(scene(vec![[1, 1, 1]], 10));
        assert_eq!(state.mesh.faces.len(), 6);
        assert!(state.colors.is_some());
        assert_eq!(state.filled_voxels(), 1);
    }

    #[test]
    fn slice_layer_is_clamped_to_new_grid() {
        let mut state = AppState::new(10);
        state.slice_layer = 50;
        state.set_scene(scene(vec![], 10));
        assert_eq!(state.slice_layer, 9);
        assert!(state.mesh.is_empty());
    }

    #[test]
    fn failed_open_keeps_previous_scene() {
        let mut state = AppState::new(10);
        state.set_scene(scene(vec![[2, 2, 2]], 10));
        state.open(Path::new("/nonexistent/run.csv"));
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert_eq!(state.filled_voxels(), 1);
    }
}
