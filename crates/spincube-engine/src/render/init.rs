/// What to do when the shader program fails to link.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LinkPolicy {
    /// Delete the program and fail setup.
    #[default]
    Strict,
    /// Log the failure and keep the unlinked program. Draws will silently
    /// produce nothing.
    Lenient,
}

/// Initialization parameters for the cube renderer.
///
/// Everything here is read once at setup; nothing is reconfigured per frame.
#[derive(Debug, Clone)]
pub struct RenderInit {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,

    /// Near clip plane distance.
    pub z_near: f32,

    /// Far clip plane distance.
    pub z_far: f32,

    /// Distance the cube is pushed away from the camera along -Z.
    pub camera_distance: f32,

    /// Radians of rotation added per presented frame.
    pub angle_step: f32,

    /// RGBA clear color.
    pub clear_color: [f32; 4],

    pub link_policy: LinkPolicy,
}

impl Default for RenderInit {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            z_near: 0.1,
            z_far: 100.0,
            camera_distance: 2.0,
            angle_step: 0.01,
            clear_color: [0.0, 0.0, 0.0, 0.0],
            link_policy: LinkPolicy::Strict,
        }
    }
}
