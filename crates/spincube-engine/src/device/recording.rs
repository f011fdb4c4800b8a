use std::cell::RefCell;
use std::collections::HashMap;

use super::{BufferTarget, GlBackend, ShaderKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramId(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferId(pub u32);

/// Uniform slot inside a linked program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformId {
    pub program: ProgramId,
    pub index: u32,
}

/// One recorded GL call.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderKind, ShaderId),
    ShaderSource(ShaderId),
    CompileShader(ShaderId),
    DeleteShader(ShaderId),
    CreateProgram(ProgramId),
    AttachShader(ProgramId, ShaderId),
    LinkProgram(ProgramId),
    DeleteProgram(ProgramId),
    UseProgram(ProgramId),
    CreateBuffer(BufferId),
    BindBuffer(BufferTarget, BufferId),
    BufferData { target: BufferTarget, buffer: Option<BufferId>, len: usize },
    EnableVertexAttribArray(u32),
    VertexAttribPointer { location: u32, components: i32, stride: i32, offset: i32 },
    UniformMatrix4 { location: Option<UniformId>, value: [f32; 16] },
    Viewport(i32, i32, i32, i32),
    ClearColor([f32; 4]),
    EnableDepthTest,
    Clear,
    DrawIndexedTriangles(i32),
}

#[derive(Debug)]
struct ShaderState {
    kind: ShaderKind,
    source: String,
    /// `None` until compiled.
    compiled: Option<Result<(), String>>,
}

#[derive(Debug, Default)]
struct ProgramState {
    attached: Vec<ShaderId>,
    linked: bool,
    info_log: Option<String>,
    attributes: Vec<String>,
    uniforms: Vec<String>,
}

#[derive(Debug, Default)]
struct State {
    next_id: u32,
    shaders: HashMap<ShaderId, ShaderState>,
    programs: HashMap<ProgramId, ProgramState>,
    bindings: HashMap<BufferTarget, BufferId>,
    contents: HashMap<BufferId, Vec<u8>>,
    calls: Vec<GlCall>,
}

impl State {
    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Software stand-in for a GL context.
///
/// Hands out integer handles and records every call in order. Shader
/// "compilation" is a structural check only (non-empty source, a `main` entry
/// point, balanced braces); linking succeeds when one compiled shader of each
/// stage is attached. Attribute and uniform names resolve against the
/// declarations in the attached sources.
#[derive(Debug)]
pub struct RecordingGl {
    size: (u32, u32),
    link_failure: Option<String>,
    state: RefCell<State>,
}

impl RecordingGl {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            link_failure: None,
            state: RefCell::new(State::default()),
        }
    }

    /// Makes every link attempt fail with `info_log`.
    pub fn with_link_failure(mut self, info_log: impl Into<String>) -> Self {
        self.link_failure = Some(info_log.into());
        self
    }

    /// Returns a copy of every call recorded so far.
    pub fn calls(&self) -> Vec<GlCall> {
        self.state.borrow().calls.clone()
    }

    /// Drains the call log.
    pub fn take_calls(&self) -> Vec<GlCall> {
        std::mem::take(&mut self.state.borrow_mut().calls)
    }

    /// Returns the bytes last uploaded to `buffer`.
    pub fn buffer_contents(&self, buffer: BufferId) -> Option<Vec<u8>> {
        self.state.borrow().contents.get(&buffer).cloned()
    }

    /// Returns the buffer currently bound at `target`.
    pub fn bound_buffer(&self, target: BufferTarget) -> Option<BufferId> {
        self.state.borrow().bindings.get(&target).copied()
    }

    fn record(&self, call: GlCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl GlBackend for RecordingGl {
    type Shader = ShaderId;
    type Program = ProgramId;
    type Buffer = BufferId;
    type UniformLocation = UniformId;

    fn drawable_size(&self) -> (u32, u32) {
        self.size
    }

    fn create_shader(&self, kind: ShaderKind) -> Option<ShaderId> {
        let mut state = self.state.borrow_mut();
        let id = ShaderId(state.next());
        state.shaders.insert(
            id,
            ShaderState { kind, source: String::new(), compiled: None },
        );
        state.calls.push(GlCall::CreateShader(kind, id));
        Some(id)
    }

    fn shader_source(&self, shader: &ShaderId, source: &str) {
        let mut state = self.state.borrow_mut();
        if let Some(s) = state.shaders.get_mut(shader) {
            s.source = source.to_string();
        }
        state.calls.push(GlCall::ShaderSource(*shader));
    }

    fn compile_shader(&self, shader: &ShaderId) {
        let mut state = self.state.borrow_mut();
        if let Some(s) = state.shaders.get_mut(shader) {
            s.compiled = Some(check_source(&s.source));
        }
        state.calls.push(GlCall::CompileShader(*shader));
    }

    fn compile_status(&self, shader: &ShaderId) -> bool {
        matches!(
            self.state.borrow().shaders.get(shader).and_then(|s| s.compiled.as_ref()),
            Some(Ok(()))
        )
    }

    fn shader_info_log(&self, shader: &ShaderId) -> Option<String> {
        match self.state.borrow().shaders.get(shader)?.compiled.as_ref()? {
            Ok(()) => Some(String::new()),
            Err(log) => Some(log.clone()),
        }
    }

    fn delete_shader(&self, shader: &ShaderId) {
        let mut state = self.state.borrow_mut();
        state.shaders.remove(shader);
        state.calls.push(GlCall::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<ProgramId> {
        let mut state = self.state.borrow_mut();
        let id = ProgramId(state.next());
        state.programs.insert(id, ProgramState::default());
        state.calls.push(GlCall::CreateProgram(id));
        Some(id)
    }

    fn attach_shader(&self, program: &ProgramId, shader: &ShaderId) {
        let mut state = self.state.borrow_mut();
        if let Some(p) = state.programs.get_mut(program) {
            p.attached.push(*shader);
        }
        state.calls.push(GlCall::AttachShader(*program, *shader));
    }

    fn link_program(&self, program: &ProgramId) {
        let mut state = self.state.borrow_mut();
        state.calls.push(GlCall::LinkProgram(*program));

        let outcome = match &self.link_failure {
            Some(log) => Err(log.clone()),
            None => state
                .programs
                .get(program)
                .map_or(Err("invalid program".to_string()), |p| {
                    link_sources(&state.shaders, &p.attached)
                }),
        };

        if let Some(p) = state.programs.get_mut(program) {
            match outcome {
                Ok((attributes, uniforms)) => {
                    p.linked = true;
                    p.info_log = Some(String::new());
                    p.attributes = attributes;
                    p.uniforms = uniforms;
                }
                Err(log) => {
                    p.linked = false;
                    p.info_log = Some(log);
                    p.attributes.clear();
                    p.uniforms.clear();
                }
            }
        }
    }

    fn link_status(&self, program: &ProgramId) -> bool {
        self.state.borrow().programs.get(program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: &ProgramId) -> Option<String> {
        self.state.borrow().programs.get(program)?.info_log.clone()
    }

    fn delete_program(&self, program: &ProgramId) {
        let mut state = self.state.borrow_mut();
        state.programs.remove(program);
        state.calls.push(GlCall::DeleteProgram(*program));
    }

    fn use_program(&self, program: &ProgramId) {
        self.record(GlCall::UseProgram(*program));
    }

    fn create_buffer(&self) -> Option<BufferId> {
        let mut state = self.state.borrow_mut();
        let id = BufferId(state.next());
        state.calls.push(GlCall::CreateBuffer(id));
        Some(id)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &BufferId) {
        let mut state = self.state.borrow_mut();
        state.bindings.insert(target, *buffer);
        state.calls.push(GlCall::BindBuffer(target, *buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        let mut state = self.state.borrow_mut();
        let buffer = state.bindings.get(&target).copied();
        if let Some(id) = buffer {
            state.contents.insert(id, data.to_vec());
        }
        state.calls.push(GlCall::BufferData { target, buffer, len: data.len() });
    }

    fn attrib_location(&self, program: &ProgramId, name: &str) -> Option<u32> {
        let state = self.state.borrow();
        let p = state.programs.get(program).filter(|p| p.linked)?;
        p.attributes.iter().position(|a| a == name).map(|i| i as u32)
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(GlCall::EnableVertexAttribArray(location));
    }

    fn vertex_attrib_pointer(&self, location: u32, components: i32, stride: i32, offset: i32) {
        self.record(GlCall::VertexAttribPointer { location, components, stride, offset });
    }

    fn uniform_location(&self, program: &ProgramId, name: &str) -> Option<UniformId> {
        let state = self.state.borrow();
        let p = state.programs.get(program).filter(|p| p.linked)?;
        p.uniforms
            .iter()
            .position(|u| u == name)
            .map(|i| UniformId { program: *program, index: i as u32 })
    }

    fn uniform_matrix4(&self, location: Option<&UniformId>, value: &[f32; 16]) {
        self.record(GlCall::UniformMatrix4 { location: location.copied(), value: *value });
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(GlCall::ClearColor(rgba));
    }

    fn enable_depth_test(&self) {
        self.record(GlCall::EnableDepthTest);
    }

    fn clear(&self) {
        self.record(GlCall::Clear);
    }

    fn draw_indexed_triangles(&self, count: i32) {
        self.record(GlCall::DrawIndexedTriangles(count));
    }
}

// ── compile / link checks ─────────────────────────────────────────────────

fn check_source(source: &str) -> Result<(), String> {
    if source.trim().is_empty() {
        return Err("ERROR: 0:1: empty shader source".to_string());
    }

    let mut depth = 0i32;
    for (line_no, line) in source.lines().enumerate() {
        for c in line.chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(format!("ERROR: 0:{}: unexpected '}}'", line_no + 1));
                    }
                }
                _ => {}
            }
        }
    }
    if depth != 0 {
        return Err("ERROR: 0:0: unexpected end of source (unbalanced braces)".to_string());
    }

    if !source.contains("void main") {
        return Err("ERROR: 0:0: missing main function".to_string());
    }

    Ok(())
}

type Interface = (Vec<String>, Vec<String>);

fn link_sources(
    shaders: &HashMap<ShaderId, ShaderState>,
    attached: &[ShaderId],
) -> Result<Interface, String> {
    let mut vertex = None;
    let mut fragment = None;

    for id in attached {
        let shader = shaders
            .get(id)
            .ok_or_else(|| format!("shader {} was deleted", id.0))?;
        if !matches!(shader.compiled, Some(Ok(()))) {
            return Err(format!("{} shader {} is not compiled", shader.kind.name(), id.0));
        }
        match shader.kind {
            ShaderKind::Vertex => vertex = Some(shader),
            ShaderKind::Fragment => fragment = Some(shader),
        }
    }

    let vertex = vertex.ok_or("missing vertex shader")?;
    let fragment = fragment.ok_or("missing fragment shader")?;

    let attributes = declared(&vertex.source, "attribute");
    let mut uniforms = declared(&vertex.source, "uniform");
    for u in declared(&fragment.source, "uniform") {
        if !uniforms.contains(&u) {
            uniforms.push(u);
        }
    }

    Ok((attributes, uniforms))
}

/// Names of `qualifier <type> <name>;` declarations, in source order.
fn declared(source: &str, qualifier: &str) -> Vec<String> {
    source
        .split(';')
        .filter_map(|stmt| {
            let mut words = stmt.split_whitespace();
            if words.next()? != qualifier {
                return None;
            }
            words.last().map(|name| name.split('[').next().unwrap_or(name).to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERT: &str = "attribute vec3 position;\nuniform mat4 mvp;\nvoid main() { gl_Position = mvp * vec4(position, 1.0); }";
    const FRAG: &str = "uniform vec4 tint;\nvoid main() { gl_FragColor = tint; }";

    fn compiled(gl: &RecordingGl, kind: ShaderKind, src: &str) -> ShaderId {
        let s = gl.create_shader(kind).unwrap();
        gl.shader_source(&s, src);
        gl.compile_shader(&s);
        s
    }

    // ── compile ───────────────────────────────────────────────────────────

    #[test]
    fn well_formed_source_compiles() {
        let gl = RecordingGl::new(1, 1);
        let s = compiled(&gl, ShaderKind::Vertex, VERT);
        assert!(gl.compile_status(&s));
        assert_eq!(gl.shader_info_log(&s).as_deref(), Some(""));
    }

    #[test]
    fn unbalanced_braces_fail_with_log() {
        let gl = RecordingGl::new(1, 1);
        let s = compiled(&gl, ShaderKind::Fragment, "void main() { gl_FragColor = vec4(1.0);");
        assert!(!gl.compile_status(&s));
        assert!(gl.shader_info_log(&s).unwrap().contains("unbalanced"));
    }

    #[test]
    fn uncompiled_shader_has_no_status() {
        let gl = RecordingGl::new(1, 1);
        let s = gl.create_shader(ShaderKind::Vertex).unwrap();
        assert!(!gl.compile_status(&s));
        assert!(gl.shader_info_log(&s).is_none());
    }

    // ── link ──────────────────────────────────────────────────────────────

    #[test]
    fn link_resolves_declared_names() {
        let gl = RecordingGl::new(1, 1);
        let vs = compiled(&gl, ShaderKind::Vertex, VERT);
        let fs = compiled(&gl, ShaderKind::Fragment, FRAG);
        let p = gl.create_program().unwrap();
        gl.attach_shader(&p, &vs);
        gl.attach_shader(&p, &fs);
        gl.link_program(&p);

        assert!(gl.link_status(&p));
        assert_eq!(gl.attrib_location(&p, "position"), Some(0));
        assert_eq!(gl.attrib_location(&p, "normal"), None);
        assert_eq!(gl.uniform_location(&p, "tint").map(|u| u.index), Some(1));
    }

    #[test]
    fn link_without_fragment_stage_fails() {
        let gl = RecordingGl::new(1, 1);
        let vs = compiled(&gl, ShaderKind::Vertex, VERT);
        let p = gl.create_program().unwrap();
        gl.attach_shader(&p, &vs);
        gl.link_program(&p);

        assert!(!gl.link_status(&p));
        assert_eq!(gl.program_info_log(&p).as_deref(), Some("missing fragment shader"));
        assert_eq!(gl.attrib_location(&p, "position"), None);
    }

    #[test]
    fn forced_link_failure_wins() {
        let gl = RecordingGl::new(1, 1).with_link_failure("out of varyings");
        let vs = compiled(&gl, ShaderKind::Vertex, VERT);
        let fs = compiled(&gl, ShaderKind::Fragment, FRAG);
        let p = gl.create_program().unwrap();
        gl.attach_shader(&p, &vs);
        gl.attach_shader(&p, &fs);
        gl.link_program(&p);

        assert!(!gl.link_status(&p));
        assert_eq!(gl.program_info_log(&p).as_deref(), Some("out of varyings"));
    }

    // ── buffers ───────────────────────────────────────────────────────────

    #[test]
    fn buffer_data_lands_in_bound_buffer() {
        let gl = RecordingGl::new(1, 1);
        let b = gl.create_buffer().unwrap();
        gl.bind_buffer(BufferTarget::Array, &b);
        gl.buffer_data(BufferTarget::Array, &[1, 2, 3]);

        assert_eq!(gl.buffer_contents(b), Some(vec![1, 2, 3]));
        assert_eq!(gl.bound_buffer(BufferTarget::ElementArray), None);
    }

    #[test]
    fn take_calls_drains_log() {
        let gl = RecordingGl::new(1, 1);
        gl.clear();
        assert_eq!(gl.take_calls(), vec![GlCall::Clear]);
        assert!(gl.calls().is_empty());
    }
}
