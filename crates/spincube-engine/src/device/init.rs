/// Parameters for acquiring the drawing surface.
///
/// Element ids refer to the host page. Keep this structure minimal; the page
/// contract is two elements and one message.
#[derive(Debug, Clone)]
pub struct SurfaceInit {
    /// Id of the `<canvas>` to render into.
    pub canvas_id: String,

    /// Id of the element that receives the unsupported-context message.
    pub status_id: String,

    /// Text shown to the user when no WebGL context can be created.
    pub unsupported_message: String,
}

impl Default for SurfaceInit {
    fn default() -> Self {
        Self {
            canvas_id: "glCanvas".to_string(),
            status_id: "notif".to_string(),
            unsupported_message: "WebGL is not supported by your browser!".to_string(),
        }
    }
}
