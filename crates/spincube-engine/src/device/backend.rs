/// Shader stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub fn name(self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        }
    }
}

/// Buffer binding point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferTarget {
    /// Per-vertex attribute data.
    Array,
    /// Index data for indexed draws.
    ElementArray,
}

/// The subset of GL the engine talks to.
///
/// Handles are backend-defined. All calls take `&self`: GL contexts are
/// single-threaded state machines and the browser binding is shared by
/// reference anyway.
///
/// Implementations:
/// - `WebGl` (wasm32): a browser `WebGLRenderingContext`
/// - `RecordingGl`: records calls for tests and deterministic stepping
pub trait GlBackend {
    type Shader;
    type Program;
    type Buffer;
    type UniformLocation;

    /// Drawable size in physical pixels as `(width, height)`.
    fn drawable_size(&self) -> (u32, u32);

    // ── shaders ───────────────────────────────────────────────────────────

    fn create_shader(&self, kind: ShaderKind) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    // ── programs ──────────────────────────────────────────────────────────

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: &Self::Program);

    // ── buffers + attributes ──────────────────────────────────────────────

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_buffer(&self, target: BufferTarget, buffer: &Self::Buffer);

    /// Uploads `data` to the buffer bound at `target` with static usage.
    fn buffer_data(&self, target: BufferTarget, data: &[u8]);

    /// Returns `None` when the program has no active attribute `name`.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;
    fn enable_vertex_attrib_array(&self, location: u32);

    /// Describes float attribute data in the currently bound array buffer.
    fn vertex_attrib_pointer(&self, location: u32, components: i32, stride: i32, offset: i32);

    // ── uniforms ──────────────────────────────────────────────────────────

    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;

    /// Uploads a column-major matrix. A `None` location is a no-op, as in GL.
    fn uniform_matrix4(&self, location: Option<&Self::UniformLocation>, value: &[f32; 16]);

    // ── fixed-function state + draw ───────────────────────────────────────

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, rgba: [f32; 4]);
    fn enable_depth_test(&self);

    /// Clears both the color and the depth buffer.
    fn clear(&self);

    /// Draws `count` u16 indices from the bound element buffer as a triangle list.
    fn draw_indexed_triangles(&self, count: i32);
}
