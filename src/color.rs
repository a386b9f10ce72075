use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Height ramp
// ---------------------------------------------------------------------------

/// Gray level for layer `h` along the first axis: `(h * 0.5 + 25) * 0.01`.
///
/// 0.25 at the bottom layer, 0.745 at layer 99. Larger grids keep climbing
/// and are clamped only when converted to a colour.
pub fn shade(h: usize) -> f32 {
    (h as f32 * 0.5 + 25.0) * 0.01
}

/// Convert a gray level and a lighting factor into a display colour.
pub fn gray(shade: f32, light: f32) -> Color32 {
    let v = (shade * light).clamp(0.0, 1.0);
    let rgb: Srgb<u8> = Srgb::new(v, v, v).into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Color grid: per-voxel shade, parallel to the occupancy volume
// ---------------------------------------------------------------------------

/// Shade for every voxel of a volume of the given shape. Only the first
/// axis index matters, so one value per layer is stored.
#[derive(Debug, Clone)]
pub struct ColorGrid {
    dims: [usize; 3],
    layers: Vec<f32>,
}

impl ColorGrid {
    pub fn new(dims: [usize; 3]) -> Self {
        ColorGrid {
            dims,
            layers: (0..dims[0]).map(shade).collect(),
        }
    }

    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Shade of voxel `(i, j, k)`; `None` outside the grid.
    pub fn shade_at(&self, cell: [usize; 3]) -> Option<f32> {
        let [i, j, k] = cell;
        if j >= self.dims[1] || k >= self.dims[2] {
            return None;
        }
        self.layers.get(i).copied()
    }

    pub fn layer_shade(&self, i: usize) -> Option<f32> {
        self.layers.get(i).copied()
    }

    /// Return `(label, colour)` pairs for roughly `steps` evenly spaced
    /// layers, bottom first, for the legend in the UI.
    pub fn legend_entries(&self, steps: usize) -> Vec<(String, Color32)> {
        let n = self.layers.len();
        if n == 0 || steps == 0 {
            return Vec::new();
        }
        let stride = (n / steps).max(1);
        let mut entries: Vec<(String, Color32)> = (0..n)
            .step_by(stride)
            .map(|i| (format!("layer {i}"), gray(self.layers[i], 1.0)))
            .collect();
        if (n - 1) % stride != 0 {
            entries.push((format!("layer {}", n - 1), gray(self.layers[n - 1], 1.0)));
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints() {
        assert!((shade(0) - 0.25).abs() < 1e-6);
        assert!((shade(99) - 0.745).abs() < 1e-6);
    }

    #[test]
    fn ramp_is_monotonic_and_bounded() {
        let mut prev = shade(0);
        for h in 0..100 {
            let s = shade(h);
            assert!(s >= prev);
            assert!((0.25 - 1e-6..=0.745 + 1e-6).contains(&s));
            prev = s;
        }
    }

    #[test]
    fn grid_is_uniform_across_other_axes() {
        let grid = ColorGrid::new([100, 100, 100]);
        let a = grid.shade_at([40, 0, 0]).unwrap();
        let b = grid.shade_at([40, 99, 57]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, shade(40));
        assert!(grid.shade_at([100, 0, 0]).is_none());
        assert!(grid.shade_at([0, 0, 100]).is_none());
    }

    #[test]
    fn gray_clamps() {
        assert_eq!(gray(2.0, 1.0), Color32::from_rgb(255, 255, 255));
        assert_eq!(gray(0.5, 0.0), Color32::from_rgb(0, 0, 0));
        let c = gray(shade(0), 1.0);
        assert_eq!(c.r(), c.g());
        assert_eq!(c.g(), c.b());
    }

    #[test]
    fn legend_covers_both_ends() {
        let grid = ColorGrid::new([100, 100, 100]);
        let legend = grid.legend_entries(5);
        assert_eq!(legend.first().unwrap().0, "layer 0");
        assert_eq!(legend.last().unwrap().0, "layer 99");
        assert!(ColorGrid::new([0, 0, 0]).legend_entries(5).is_empty());
    }
}
