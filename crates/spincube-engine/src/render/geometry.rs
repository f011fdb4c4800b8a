//! Static cube geometry and its GPU buffers.

use crate::device::{BufferTarget, GlBackend};

use super::RenderError;

/// Floats per position / color entry.
pub const COMPONENTS: i32 = 3;

/// Unit cube corners, ±0.5 on every axis. Front face (z = +0.5) first.
pub const CUBE_POSITIONS: [[f32; 3]; 8] = [
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
];

/// Per-corner RGB, index-aligned with `CUBE_POSITIONS`.
pub const CUBE_COLORS: [[f32; 3]; 8] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0],
];

/// 12 counter-clockwise triangles, two per face.
pub const CUBE_INDICES: [u16; 36] = [
    // Front face
    0, 1, 2, 0, 2, 3, // Back face
    5, 4, 7, 5, 7, 6, // Top face
    3, 2, 6, 3, 6, 7, // Bottom face
    4, 5, 1, 4, 1, 0, // Right face
    1, 5, 6, 1, 6, 2, // Left face
    4, 0, 3, 4, 3, 7,
];

/// The three write-once buffers backing the cube.
///
/// Uploaded once at setup. The element buffer stays bound for the whole
/// session, so frames only need to issue the draw.
pub struct GeometryBuffers<G: GlBackend> {
    pub positions: G::Buffer,
    pub colors: G::Buffer,
    pub indices: G::Buffer,
    pub index_count: i32,
}

impl<G: GlBackend> GeometryBuffers<G> {
    /// Uploads the cube and wires `position` / `color` to `program`.
    pub fn upload(gl: &G, program: &G::Program) -> Result<Self, RenderError> {
        let positions = gl.create_buffer().ok_or(RenderError::CreateBuffer("position"))?;
        gl.bind_buffer(BufferTarget::Array, &positions);
        gl.buffer_data(BufferTarget::Array, bytemuck::cast_slice(&CUBE_POSITIONS));
        bind_attribute(gl, program, "position");

        let colors = gl.create_buffer().ok_or(RenderError::CreateBuffer("color"))?;
        gl.bind_buffer(BufferTarget::Array, &colors);
        gl.buffer_data(BufferTarget::Array, bytemuck::cast_slice(&CUBE_COLORS));
        bind_attribute(gl, program, "color");

        let indices = gl.create_buffer().ok_or(RenderError::CreateBuffer("index"))?;
        gl.bind_buffer(BufferTarget::ElementArray, &indices);
        gl.buffer_data(BufferTarget::ElementArray, bytemuck::cast_slice(&CUBE_INDICES));

        log::debug!(
            "uploaded cube geometry: {} vertices, {} indices",
            CUBE_POSITIONS.len(),
            CUBE_INDICES.len()
        );

        Ok(Self {
            positions,
            colors,
            indices,
            index_count: CUBE_INDICES.len() as i32,
        })
    }
}

/// Points the named attribute at the currently bound array buffer
/// (tightly packed vec3).
fn bind_attribute<G: GlBackend>(gl: &G, program: &G::Program, name: &str) {
    let Some(location) = gl.attrib_location(program, name) else {
        log::warn!("attribute `{name}` is not active in the program; left unbound");
        return;
    };
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer(location, COMPONENTS, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{GlCall, RecordingGl};
    use crate::render::{build_program, LinkPolicy, CUBE_FRAGMENT_SHADER, CUBE_VERTEX_SHADER};

    // ── literal data ──────────────────────────────────────────────────────

    #[test]
    fn eight_positions_and_colors() {
        assert_eq!(CUBE_POSITIONS.len(), 8);
        assert_eq!(CUBE_COLORS.len(), 8);
        assert!(CUBE_POSITIONS.iter().flatten().all(|c| c.abs() == 0.5));
    }

    #[test]
    fn indices_cover_12_triangles_in_range() {
        assert_eq!(CUBE_INDICES.len(), 36);
        assert!(CUBE_INDICES.iter().all(|&i| i <= 7));
        // Every corner is used by some triangle.
        for corner in 0..8u16 {
            assert!(CUBE_INDICES.contains(&corner), "corner {corner} unused");
        }
    }

    #[test]
    fn triangles_are_counter_clockwise_from_outside() {
        for tri in CUBE_INDICES.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|k| glam::Vec3::from(CUBE_POSITIONS[tri[k] as usize]));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "triangle {tri:?} faces inward");
        }
    }

    // ── upload ────────────────────────────────────────────────────────────

    #[test]
    fn upload_writes_packed_bytes() {
        let gl = RecordingGl::new(1, 1);
        let program =
            build_program(&gl, CUBE_VERTEX_SHADER, CUBE_FRAGMENT_SHADER, LinkPolicy::Strict)
                .unwrap();
        let buffers = GeometryBuffers::upload(&gl, &program).unwrap();

        assert_eq!(buffers.index_count, 36);
        assert_eq!(gl.buffer_contents(buffers.positions).unwrap().len(), 8 * 3 * 4);
        assert_eq!(gl.buffer_contents(buffers.colors).unwrap().len(), 8 * 3 * 4);
        assert_eq!(gl.buffer_contents(buffers.indices).unwrap().len(), 36 * 2);
        assert_eq!(gl.bound_buffer(BufferTarget::ElementArray), Some(buffers.indices));
    }

    #[test]
    fn attributes_are_tightly_packed_vec3() {
        let gl = RecordingGl::new(1, 1);
        let program =
            build_program(&gl, CUBE_VERTEX_SHADER, CUBE_FRAGMENT_SHADER, LinkPolicy::Strict)
                .unwrap();
        gl.take_calls();
        GeometryBuffers::upload(&gl, &program).unwrap();

        let pointers: Vec<_> = gl
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                GlCall::VertexAttribPointer { location, components, stride, offset } => {
                    Some((location, components, stride, offset))
                }
                _ => None,
            })
            .collect();
        assert_eq!(pointers, vec![(0, 3, 0, 0), (1, 3, 0, 0)]);
    }

    #[test]
    fn unlinked_program_leaves_attributes_unbound() {
        let gl = RecordingGl::new(1, 1).with_link_failure("broken");
        let program =
            build_program(&gl, CUBE_VERTEX_SHADER, CUBE_FRAGMENT_SHADER, LinkPolicy::Lenient)
                .unwrap();
        GeometryBuffers::upload(&gl, &program).unwrap();

        assert!(
            !gl.calls()
                .iter()
                .any(|c| matches!(c, GlCall::EnableVertexAttribArray(_)))
        );
    }
}
