use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL,
    WebGlShader, WebGlUniformLocation,
};

use super::{BufferTarget, DeviceError, GlBackend, ShaderKind, SurfaceInit};

/// Browser WebGL 1 backend.
///
/// Owns the rendering context and the canvas it was created from. Dropping it
/// does not release GPU objects; the browser reclaims them with the context.
pub struct WebGl {
    gl: GL,
    canvas: HtmlCanvasElement,
}

/// Looks up the canvas by id and creates a `webgl` context on it.
///
/// When the browser cannot create the context, the configured message is shown
/// in the status element before `DeviceError::Unsupported` is returned.
pub fn acquire_context(init: &SurfaceInit) -> Result<WebGl, DeviceError> {
    let window = web_sys::window().ok_or(DeviceError::NoWindow)?;
    let document = window.document().ok_or(DeviceError::NoDocument)?;

    let canvas = document
        .get_element_by_id(&init.canvas_id)
        .ok_or_else(|| DeviceError::CanvasNotFound(init.canvas_id.clone()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| DeviceError::NotACanvas(init.canvas_id.clone()))?;

    // getContext may throw as well as return null.
    let gl = canvas
        .get_context("webgl")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<GL>().ok());

    let Some(gl) = gl else {
        report_unsupported(&document, init);
        return Err(DeviceError::Unsupported);
    };

    log::info!(
        "acquired WebGL context on #{} ({}x{})",
        init.canvas_id,
        canvas.width(),
        canvas.height()
    );

    Ok(WebGl { gl, canvas })
}

fn report_unsupported(document: &Document, init: &SurfaceInit) {
    log::error!("{}", init.unsupported_message);
    match document.get_element_by_id(&init.status_id) {
        Some(status) => status.set_text_content(Some(&init.unsupported_message)),
        None => log::warn!("status element #{} not found", init.status_id),
    }
}

fn shader_type(kind: ShaderKind) -> u32 {
    match kind {
        ShaderKind::Vertex => GL::VERTEX_SHADER,
        ShaderKind::Fragment => GL::FRAGMENT_SHADER,
    }
}

fn buffer_target(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Array => GL::ARRAY_BUFFER,
        BufferTarget::ElementArray => GL::ELEMENT_ARRAY_BUFFER,
    }
}

impl GlBackend for WebGl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn drawable_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn create_shader(&self, kind: ShaderKind) -> Option<WebGlShader> {
        self.gl.create_shader(shader_type(kind))
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        self.gl.shader_source(shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        self.gl.compile_shader(shader);
    }

    fn compile_status(&self, shader: &WebGlShader) -> bool {
        self.gl
            .get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.gl.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        self.gl.delete_shader(Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        self.gl.create_program()
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        self.gl.link_program(program);
    }

    fn link_status(&self, program: &WebGlProgram) -> bool {
        self.gl
            .get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.gl.get_program_info_log(program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        self.gl.delete_program(Some(program));
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        self.gl.create_buffer()
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &WebGlBuffer) {
        self.gl.bind_buffer(buffer_target(target), Some(buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        self.gl
            .buffer_data_with_u8_array(buffer_target(target), data, GL::STATIC_DRAW);
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        // -1 means "not an active attribute".
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.gl.enable_vertex_attrib_array(location);
    }

    fn vertex_attrib_pointer(&self, location: u32, components: i32, stride: i32, offset: i32) {
        self.gl
            .vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, stride, offset);
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn uniform_matrix4(&self, location: Option<&WebGlUniformLocation>, value: &[f32; 16]) {
        self.gl.uniform_matrix4fv_with_f32_array(location, false, value);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.gl.viewport(x, y, width, height);
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        let [r, g, b, a] = rgba;
        self.gl.clear_color(r, g, b, a);
    }

    fn enable_depth_test(&self) {
        self.gl.enable(GL::DEPTH_TEST);
    }

    fn clear(&self) {
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn draw_indexed_triangles(&self, count: i32) {
        self.gl
            .draw_elements_with_i32(GL::TRIANGLES, count, GL::UNSIGNED_SHORT, 0);
    }
}
