use glam::{Mat4, Vec3};

use super::RenderInit;

/// Width over height, falling back to 1.0 for a degenerate drawable.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        log::warn!("degenerate drawable size {width}x{height}; using aspect 1.0");
        return 1.0;
    }
    width as f32 / height as f32
}

/// Projection + base model-view, both fixed for the session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transforms {
    projection: Mat4,
    base_model_view: Mat4,
}

impl Transforms {
    pub fn new(init: &RenderInit, aspect: f32) -> Self {
        let projection = Mat4::perspective_rh_gl(
            init.fov_y_degrees.to_radians(),
            aspect,
            init.z_near,
            init.z_far,
        );
        let base_model_view = Mat4::from_translation(Vec3::new(0.0, 0.0, -init.camera_distance));

        Self {
            projection,
            base_model_view,
        }
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn base_model_view(&self) -> Mat4 {
        self.base_model_view
    }

    /// Base translation applied after a rotation about the local Y axis, so the
    /// cube spins in place.
    pub fn model_view(&self, angle: f32) -> Mat4 {
        self.base_model_view * Mat4::from_rotation_y(angle)
    }
}
