use eframe::egui::{Color32, Shape, Stroke};

use crate::camera::Projector;
use crate::color::{self, ColorGrid};
use crate::data::model::OccupancyVolume;

/// World-space direction the scene is lit from (not normalised).
const LIGHT_DIR: [f32; 3] = [-1.0, -1.0, 2.0];

// ---------------------------------------------------------------------------
// Faces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceDir {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl FaceDir {
    pub const ALL: [FaceDir; 6] = [
        FaceDir::NegX,
        FaceDir::PosX,
        FaceDir::NegY,
        FaceDir::PosY,
        FaceDir::NegZ,
        FaceDir::PosZ,
    ];

    pub fn normal(self) -> [f32; 3] {
        match self {
            FaceDir::NegX => [-1.0, 0.0, 0.0],
            FaceDir::PosX => [1.0, 0.0, 0.0],
            FaceDir::NegY => [0.0, -1.0, 0.0],
            FaceDir::PosY => [0.0, 1.0, 0.0],
            FaceDir::NegZ => [0.0, 0.0, -1.0],
            FaceDir::PosZ => [0.0, 0.0, 1.0],
        }
    }

    /// The neighbouring cell across this face, `None` past the low edge.
    fn neighbour(self, [i, j, k]: [usize; 3]) -> Option<[usize; 3]> {
        Some(match self {
            FaceDir::NegX => [i.checked_sub(1)?, j, k],
            FaceDir::PosX => [i + 1, j, k],
            FaceDir::NegY => [i, j.checked_sub(1)?, k],
            FaceDir::PosY => [i, j + 1, k],
            FaceDir::NegZ => [i, j, k.checked_sub(1)?],
            FaceDir::PosZ => [i, j, k + 1],
        })
    }

    /// Corners of this face of the unit cube at `cell`, in winding order.
    pub fn corners(self, cell: [usize; 3]) -> [[f32; 3]; 4] {
        let [x, y, z] = cell.map(|c| c as f32);
        let (x1, y1, z1) = (x + 1.0, y + 1.0, z + 1.0);
        match self {
            FaceDir::NegX => [[x, y, z], [x, y1, z], [x, y1, z1], [x, y, z1]],
            FaceDir::PosX => [[x1, y, z], [x1, y, z1], [x1, y1, z1], [x1, y1, z]],
            FaceDir::NegY => [[x, y, z], [x, y, z1], [x1, y, z1], [x1, y, z]],
            FaceDir::PosY => [[x, y1, z], [x1, y1, z], [x1, y1, z1], [x, y1, z1]],
            FaceDir::NegZ => [[x, y, z], [x1, y, z], [x1, y1, z], [x, y1, z]],
            FaceDir::PosZ => [[x, y, z1], [x, y1, z1], [x1, y1, z1], [x1, y, z1]],
        }
    }
}

/// One exposed voxel face with its base shade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub cell: [usize; 3],
    pub dir: FaceDir,
    pub shade: f32,
}

// ---------------------------------------------------------------------------
// VoxelMesh – the surface of an occupancy volume
// ---------------------------------------------------------------------------

/// Every face of a filled voxel that borders an empty cell or the grid edge.
/// Interior faces are dropped at build time.
#[derive(Debug, Clone, Default)]
pub struct VoxelMesh {
    pub dims: [usize; 3],
    pub faces: Vec<Face>,
}

impl VoxelMesh {
    pub fn build(volume: &OccupancyVolume, colors: &ColorGrid) -> Self {
        let mut faces = Vec::new();
        for cell in volume.iter_filled() {
            let Some(shade) = colors.shade_at(cell) else {
                continue;
            };
            for dir in FaceDir::ALL {
                let covered = dir.neighbour(cell).is_some_and(|n| volume.get(n));
                if !covered {
                    faces.push(Face { cell, dir, shade });
                }
            }
        }
        log::debug!(
            "built voxel mesh: {} exposed faces for {} voxels",
            faces.len(),
            volume.count_filled()
        );
        VoxelMesh {
            dims: volume.dims(),
            faces,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Back-face cull, depth sort (far to near) and shade for one frame.
    pub fn shapes(&self, projector: &Projector) -> Vec<Shape> {
        let light = normalise(LIGHT_DIR);
        let mut visible: Vec<(f32, Shape)> = self
            .faces
            .iter()
            .filter(|face| projector.faces_viewer(face.dir.normal()))
            .map(|face| {
                let corners = face.dir.corners(face.cell);
                let projected = corners.map(|c| projector.project(c));
                let depth = projected.iter().map(|p| p.depth).sum::<f32>() / 4.0;
                let fill = lit(face, light);
                let points = projected.iter().map(|p| p.pos).collect();
                (depth, Shape::convex_polygon(points, fill, Stroke::NONE))
            })
            .collect();

        visible.sort_by(|a, b| b.0.total_cmp(&a.0));
        visible.into_iter().map(|(_, shape)| shape).collect()
    }
}

fn lit(face: &Face, light: [f32; 3]) -> Color32 {
    let n = face.dir.normal();
    let lambert = n[0] * light[0] + n[1] * light[1] + n[2] * light[2];
    color::gray(face.shade, 0.65 + 0.35 * lambert.max(0.0))
}

fn normalise(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Pos2, Rect, Vec2};

    use super::*;
    use crate::camera::OrbitCamera;

    fn mesh_of(cells: &[[usize; 3]], n: usize) -> VoxelMesh {
        let mut vol = OccupancyVolume::cube(n);
        for &c in cells {
            vol.fill(c);
        }
        VoxelMesh::build(&vol, &ColorGrid::new(vol.dims()))
    }

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0))
    }

    #[test]
    fn single_voxel_has_six_faces() {
        let mesh = mesh_of(&[[1, 1, 1]], 3);
        assert_eq!(mesh.faces.len(), 6);
        assert!(mesh.faces.iter().all(|f| f.shade == color::shade(1)));
    }

    #[test]
    fn shared_faces_are_hidden() {
        let mesh = mesh_of(&[[0, 0, 0], [1, 0, 0]], 2);
        assert_eq!(mesh.faces.len(), 10);
        assert!(!mesh.faces.iter().any(|f| f.cell == [0, 0, 0] && f.dir == FaceDir::PosX));
    }

    #[test]
    fn full_cube_only_exposes_its_hull() {
        let n = 3;
        let cells: Vec<_> = (0..n)
            .flat_map(|i| (0..n).flat_map(move |j| (0..n).map(move |k| [i, j, k])))
            .collect();
        let mesh = mesh_of(&cells, n);
        assert_eq!(mesh.faces.len(), 6 * n * n);
    }

    #[test]
    fn empty_volume_renders_nothing() {
        let mesh = mesh_of(&[], 100);
        assert!(mesh.is_empty());
        let projector = OrbitCamera::default().projector(mesh.dims, viewport());
        assert!(mesh.shapes(&projector).is_empty());
    }

    #[test]
    fn single_voxel_shows_three_faces() {
        let mesh = mesh_of(&[[2, 2, 2]], 5);
        let projector = OrbitCamera::default().projector(mesh.dims, viewport());
        assert_eq!(mesh.shapes(&projector).len(), 3);
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for dir in FaceDir::ALL {
            let n = dir.normal();
            let corners = dir.corners([0, 0, 0]);
            let axis = n.iter().position(|v| *v != 0.0).unwrap();
            let plane = if n[axis] > 0.0 { 1.0 } else { 0.0 };
            assert!(corners.iter().all(|c| c[axis] == plane));
        }
    }
}
