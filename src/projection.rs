//! World-to-screen projection for marker anchors.

use crate::viewport::Viewport;
use eframe::egui::{Pos2, pos2};
use glam::{Mat4, Vec3, Vec4};

/// Clip-space `w` at or below this is treated as on/behind the camera plane.
const MIN_CLIP_W: f32 = 1e-4;

/// Maps world positions onto the screen.
pub trait Projector {
    /// Returns `None` when the point has no valid screen mapping.
    fn project(&self, world_pos: Vec3) -> Option<Pos2>;
}

/// A free-look perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    /// Rotation around +Y in radians; 0 looks down -Z.
    pub yaw: f32,
    /// Rotation above the horizon in radians.
    pub pitch: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov_y: std::f32::consts::FRAC_PI_3,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Forward direction flattened onto the ground plane.
    pub fn ground_forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(sin_yaw, 0.0, -cos_yaw)
    }

    pub fn ground_right(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, sin_yaw)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_to_rh(self.eye, self.forward(), Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, aspect.max(1e-3), self.near, self.far);
        proj * view
    }

    /// Builds a projector for this camera over `viewport`.
    pub fn projector(&self, viewport: Viewport) -> CameraProjector {
        let aspect = if viewport.size.y > 0.0 {
            viewport.size.x / viewport.size.y
        } else {
            1.0
        };
        CameraProjector::new(self.view_projection(aspect), viewport)
    }
}

/// Projects through a combined view-projection matrix onto a viewport.
///
/// Points in front of the camera but outside the frustum still project, to
/// screen positions outside the viewport, so they can be pinned to its edge.
#[derive(Debug, Clone, Copy)]
pub struct CameraProjector {
    view_proj: Mat4,
    viewport: Viewport,
}

impl CameraProjector {
    pub fn new(view_proj: Mat4, viewport: Viewport) -> Self {
        Self {
            view_proj,
            viewport,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Projector for CameraProjector {
    fn project(&self, world_pos: Vec3) -> Option<Pos2> {
        let clip = self.view_proj * Vec4::new(world_pos.x, world_pos.y, world_pos.z, 1.0);

        // NaN comes from a degenerate camera
        if clip.w.is_nan() || clip.w <= MIN_CLIP_W {
            return None;
        }

        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;

        // NDC y points up, screen y points down
        let origin = self.viewport.origin;
        let size = self.viewport.size;
        let screen = pos2(
            origin.x + (ndc_x + 1.0) * 0.5 * size.x,
            origin.y + (1.0 - ndc_y) * 0.5 * size.y,
        );

        (screen.x.is_finite() && screen.y.is_finite()).then_some(screen)
    }
}
