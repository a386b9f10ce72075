use eframe::egui::{Pos2, Rect, Vec2};
use na::{Rotation3, Vector3};

/// Default view: looking slightly down at the volume from the front-left,
/// z pointing up.
const DEFAULT_AZIMUTH: f32 = -60.0;
const DEFAULT_ELEVATION: f32 = 30.0;

/// Degrees of rotation per dragged point.
const DRAG_SENSITIVITY: f32 = 0.4;

// ---------------------------------------------------------------------------
// Orbit camera (orthographic)
// ---------------------------------------------------------------------------

/// Orthographic orbit camera around the centre of a box.
///
/// After rotation, screen x is world x, screen up is world z and depth grows
/// along +y (away from the viewer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Rotation about the vertical axis, degrees.
    pub azimuth: f32,
    /// Tilt above the horizontal plane, degrees, clamped to [-90, 90].
    pub elevation: f32,
    /// 1.0 fits the whole box into the viewport.
    pub zoom: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: DEFAULT_AZIMUTH,
            elevation: DEFAULT_ELEVATION,
            zoom: 1.0,
        }
    }
}

/// A point after projection: screen position plus depth for sorting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pos: Pos2,
    pub depth: f32,
}

impl OrbitCamera {
    pub fn rotation(&self) -> Rotation3<f32> {
        let yaw = Rotation3::from_axis_angle(&Vector3::z_axis(), self.azimuth.to_radians());
        let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), self.elevation.to_radians());
        tilt * yaw
    }

    /// Apply a mouse drag.
    pub fn orbit(&mut self, drag: Vec2) {
        self.azimuth = (self.azimuth + drag.x * DRAG_SENSITIVITY) % 360.0;
        self.elevation = (self.elevation + drag.y * DRAG_SENSITIVITY).clamp(-90.0, 90.0);
    }

    /// Apply a scroll step; positive scrolls zoom in.
    pub fn zoom_by(&mut self, scroll: f32) {
        self.zoom = (self.zoom * (scroll * 0.002).exp()).clamp(0.1, 20.0);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A projector for a box of shape `dims` drawn into `viewport`.
    pub fn projector(&self, dims: [usize; 3], viewport: Rect) -> Projector {
        let extent = Vector3::new(dims[0] as f32, dims[1] as f32, dims[2] as f32);
        let diagonal = extent.norm().max(1.0);
        Projector {
            rotation: self.rotation(),
            centre: extent / 2.0,
            scale: self.zoom * viewport.width().min(viewport.height()) / diagonal,
            origin: viewport.center(),
        }
    }
}

/// Frozen camera state for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    rotation: Rotation3<f32>,
    centre: Vector3<f32>,
    scale: f32,
    origin: Pos2,
}

impl Projector {
    pub fn project(&self, point: [f32; 3]) -> Projected {
        let v = self.rotation * (Vector3::new(point[0], point[1], point[2]) - self.centre);
        Projected {
            pos: Pos2::new(self.origin.x + v.x * self.scale, self.origin.y - v.z * self.scale),
            depth: v.y,
        }
    }

    /// Whether a face with world-space outward `normal` points at the viewer.
    pub fn faces_viewer(&self, normal: [f32; 3]) -> bool {
        self.view_normal(normal).y < 0.0
    }

    /// Normal rotated into view space.
    pub fn view_normal(&self, normal: [f32; 3]) -> Vector3<f32> {
        self.rotation * Vector3::new(normal[0], normal[1], normal[2])
    }
}
