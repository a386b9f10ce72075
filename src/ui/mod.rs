/// egui widgets: menu and info panels, the slice plot and the 3D view.

pub mod panels;
pub mod plot;
pub mod voxels;
