//! Thin wrappers over the WebGL2 calls used during setup and per frame.

use js_sys::Float32Array;
use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
};

use crate::error::RenderError;
use crate::geometry::{COMPONENTS_PER_VERTEX, QUAD_POSITIONS};
use crate::shader::{
    ShaderStage, MOUSE_UNIFORM, POSITION_ATTRIBUTE, RESOLUTION_UNIFORM, TIME_UNIFORM,
};
use crate::uniforms::FrameUniforms;

/// Compiles one stage. On failure the diagnostic is logged, the shader object
/// is released and no handle is returned.
pub fn compile_shader(
    gl: &GL,
    source: &str,
    stage: ShaderStage,
) -> Result<WebGlShader, RenderError> {
    let shader = gl
        .create_shader(stage.gl_enum())
        .ok_or(RenderError::CreateResource("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Ok(shader);
    }

    let log = gl.get_shader_info_log(&shader).unwrap_or_default();
    log::error!("Shader compile error ({stage}): {log}");
    gl.delete_shader(Some(&shader));
    Err(RenderError::Compile { stage, log })
}

pub fn link_program(
    gl: &GL,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, RenderError> {
    let program = gl
        .create_program()
        .ok_or(RenderError::CreateResource("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Ok(program);
    }

    let log = gl.get_program_info_log(&program).unwrap_or_default();
    log::error!("Program link error: {log}");
    gl.delete_program(Some(&program));
    Err(RenderError::Link { log })
}

/// Uploads the quad and wires it to the program's position attribute.
pub fn upload_quad(gl: &GL, program: &WebGlProgram) -> Result<WebGlBuffer, RenderError> {
    let buffer = gl
        .create_buffer()
        .ok_or(RenderError::CreateResource("vertex buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let positions = Float32Array::from(&QUAD_POSITIONS[..]);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &positions, GL::STATIC_DRAW);

    let location = gl.get_attrib_location(program, POSITION_ATTRIBUTE);
    if location < 0 {
        return Err(RenderError::MissingAttribute(POSITION_ATTRIBUTE));
    }
    let location = location as u32;
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, COMPONENTS_PER_VERTEX, GL::FLOAT, false, 0, 0);

    Ok(buffer)
}

/// Uniform locations looked up once after linking. A location is `None` when
/// the driver optimised the uniform away; writes to it are then no-ops.
#[derive(Debug)]
pub struct UniformLocations {
    resolution: Option<WebGlUniformLocation>,
    mouse: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
}

impl UniformLocations {
    pub fn lookup(gl: &GL, program: &WebGlProgram) -> Self {
        let find = |name: &str| {
            let location = gl.get_uniform_location(program, name);
            if location.is_none() {
                log::warn!("uniform `{name}` is not active in the program");
            }
            location
        };
        Self {
            resolution: find(RESOLUTION_UNIFORM),
            mouse: find(MOUSE_UNIFORM),
            time: find(TIME_UNIFORM),
        }
    }

    /// Writes into the currently bound program.
    pub fn write(&self, gl: &GL, uniforms: &FrameUniforms) {
        let (width, height) = uniforms.resolution;
        gl.uniform2f(self.resolution.as_ref(), width, height);
        gl.uniform2f(self.mouse.as_ref(), uniforms.mouse.x, uniforms.mouse.y);
        gl.uniform1f(self.time.as_ref(), uniforms.time);
    }
}
