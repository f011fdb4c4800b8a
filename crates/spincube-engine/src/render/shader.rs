//! Shader compilation and program linking.

use crate::device::{GlBackend, ShaderKind};

use super::{LinkPolicy, RenderError};

pub const CUBE_VERTEX_SHADER: &str = include_str!("shaders/cube.vert");
pub const CUBE_FRAGMENT_SHADER: &str = include_str!("shaders/cube.frag");

/// Compiles one shader stage.
///
/// On failure the info log is logged, the shader object is released and
/// `None` is returned. Never panics on bad source.
pub fn compile_shader<G: GlBackend>(gl: &G, kind: ShaderKind, source: &str) -> Option<G::Shader> {
    let Some(shader) = gl.create_shader(kind) else {
        log::error!("failed to create {} shader object", kind.name());
        return None;
    };

    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl.compile_status(&shader) {
        let info = gl.shader_info_log(&shader).unwrap_or_default();
        log::error!("error compiling {} shader: {}", kind.name(), info);
        gl.delete_shader(&shader);
        return None;
    }

    log::debug!("{} shader compiled", kind.name());
    Some(shader)
}

/// Attaches both stages to a new program and links it.
///
/// The link log is logged on failure. Under [`LinkPolicy::Lenient`] the
/// unlinked program is still returned.
pub fn link_program<G: GlBackend>(
    gl: &G,
    vertex: &G::Shader,
    fragment: &G::Shader,
    policy: LinkPolicy,
) -> Result<G::Program, RenderError> {
    let program = gl.create_program().ok_or(RenderError::CreateProgram)?;

    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl.link_status(&program) {
        log::debug!("shader program linked");
        return Ok(program);
    }

    let info = gl.program_info_log(&program).unwrap_or_default();
    log::error!("error linking shader program: {info}");

    match policy {
        LinkPolicy::Strict => {
            gl.delete_program(&program);
            Err(RenderError::Link(info))
        }
        LinkPolicy::Lenient => {
            log::warn!("continuing with an unlinked program; nothing will be drawn");
            Ok(program)
        }
    }
}

/// Compiles both stages and links them.
///
/// A stage that fails to compile stops the build before anything is attached.
pub fn build_program<G: GlBackend>(
    gl: &G,
    vertex_src: &str,
    fragment_src: &str,
    policy: LinkPolicy,
) -> Result<G::Program, RenderError> {
    let vertex = compile_shader(gl, ShaderKind::Vertex, vertex_src)
        .ok_or(RenderError::ShaderCompile(ShaderKind::Vertex))?;

    let Some(fragment) = compile_shader(gl, ShaderKind::Fragment, fragment_src) else {
        gl.delete_shader(&vertex);
        return Err(RenderError::ShaderCompile(ShaderKind::Fragment));
    };

    link_program(gl, &vertex, &fragment, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{GlCall, RecordingGl};

    // ── compile_shader ────────────────────────────────────────────────────

    #[test]
    fn embedded_sources_compile() {
        let gl = RecordingGl::new(1, 1);
        assert!(compile_shader(&gl, ShaderKind::Vertex, CUBE_VERTEX_SHADER).is_some());
        assert!(compile_shader(&gl, ShaderKind::Fragment, CUBE_FRAGMENT_SHADER).is_some());
    }

    #[test]
    fn invalid_source_yields_none_and_releases_shader() {
        let gl = RecordingGl::new(1, 1);
        let shader = compile_shader(&gl, ShaderKind::Vertex, "void main() {");
        assert!(shader.is_none());
        assert!(matches!(gl.calls().last(), Some(GlCall::DeleteShader(_))));
    }

    #[test]
    fn empty_source_yields_none() {
        let gl = RecordingGl::new(1, 1);
        assert!(compile_shader(&gl, ShaderKind::Fragment, "").is_none());
    }

    // ── build_program ─────────────────────────────────────────────────────

    #[test]
    fn build_program_links_cube_shaders() {
        let gl = RecordingGl::new(1, 1);
        let program =
            build_program(&gl, CUBE_VERTEX_SHADER, CUBE_FRAGMENT_SHADER, LinkPolicy::Strict)
                .unwrap();
        assert!(gl.link_status(&program));
        assert!(gl.attrib_location(&program, "position").is_some());
        assert!(gl.attrib_location(&program, "color").is_some());
        assert!(gl.uniform_location(&program, "modelViewMatrix").is_some());
        assert!(gl.uniform_location(&program, "projectionMatrix").is_some());
    }

    #[test]
    fn compile_failure_never_attaches() {
        let gl = RecordingGl::new(1, 1);
        let err = build_program(&gl, CUBE_VERTEX_SHADER, "}", LinkPolicy::Lenient).unwrap_err();
        assert_eq!(err, RenderError::ShaderCompile(ShaderKind::Fragment));
        assert!(
            !gl.calls()
                .iter()
                .any(|c| matches!(c, GlCall::AttachShader(..) | GlCall::CreateProgram(_)))
        );
    }

    // ── link policy ───────────────────────────────────────────────────────

    #[test]
    fn strict_policy_fails_on_link_error() {
        let gl = RecordingGl::new(1, 1).with_link_failure("too many uniforms");
        let err = build_program(&gl, CUBE_VERTEX_SHADER, CUBE_FRAGMENT_SHADER, LinkPolicy::Strict)
            .unwrap_err();
        assert_eq!(err, RenderError::Link("too many uniforms".to_string()));
        assert!(matches!(gl.calls().last(), Some(GlCall::DeleteProgram(_))));
    }

    #[test]
    fn lenient_policy_keeps_broken_program() {
        let gl = RecordingGl::new(1, 1).with_link_failure("too many uniforms");
        let program =
            build_program(&gl, CUBE_VERTEX_SHADER, CUBE_FRAGMENT_SHADER, LinkPolicy::Lenient)
                .unwrap();
        assert!(!gl.link_status(&program));
    }
}
