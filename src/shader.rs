//! Embedded GLSL sources and the names that bind host code to them.

/// Passes the quad corners straight through to clip space.
pub const VERTEX_SHADER: &str = r#"
attribute vec4 aPosition;
void main() {
    gl_Position = aPosition;
}
"#;

/// Concentric waves centred on the cursor, tinted by screen position.
pub const FRAGMENT_SHADER: &str = r#"
#ifdef GL_ES
    precision mediump float;
#endif
uniform vec2 u_resolution;
uniform vec2 u_mouse;
uniform float u_time;

void main() {
    vec2 st = gl_FragCoord.xy / u_resolution;
    vec2 mouse = u_mouse / u_resolution;

    float dist = distance(st, mouse);
    float wave = abs(sin(dist * 10.0 - u_time * 2.0));

    gl_FragColor = vec4(wave, st.x * wave, st.y, 1.0);
}
"#;

pub const POSITION_ATTRIBUTE: &str = "aPosition";
pub const RESOLUTION_UNIFORM: &str = "u_resolution";
pub const MOUSE_UNIFORM: &str = "u_mouse";
pub const TIME_UNIFORM: &str = "u_time";

/// Pipeline stage a shader source is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The `GLenum` passed to `createShader`.
    pub const fn gl_enum(self) -> u32 {
        // Values are fixed by the GL ES specification.
        match self {
            ShaderStage::Vertex => 0x8B31,
            ShaderStage::Fragment => 0x8B30,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_shader_declares_uniform_contract() {
        for name in [RESOLUTION_UNIFORM, MOUSE_UNIFORM] {
            assert!(FRAGMENT_SHADER.contains(&format!("uniform vec2 {name};")));
        }
        assert!(FRAGMENT_SHADER.contains(&format!("uniform float {TIME_UNIFORM};")));
    }

    #[test]
    fn vertex_shader_declares_position_attribute() {
        assert!(VERTEX_SHADER.contains(&format!("attribute vec4 {POSITION_ATTRIBUTE};")));
    }

    #[test]
    fn stage_enums_match_webgl_constants() {
        assert_eq!(
            ShaderStage::Vertex.gl_enum(),
            web_sys::WebGl2RenderingContext::VERTEX_SHADER
        );
        assert_eq!(
            ShaderStage::Fragment.gl_enum(),
            web_sys::WebGl2RenderingContext::FRAGMENT_SHADER
        );
    }
}
