//! Per-frame shader inputs and the host-side math that produces them.

/// Milliseconds to seconds, as applied to `requestAnimationFrame` timestamps.
pub const MS_TO_SECONDS: f64 = 0.001;

/// Cursor position in canvas pixels, origin at the bottom-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MousePosition {
    pub x: f32,
    pub y: f32,
}

impl MousePosition {
    /// Maps a pointer event's client coordinates into GL window space.
    ///
    /// `rect_left`/`rect_top` come from the canvas bounding rect and
    /// `canvas_height` is the backing-store height in pixels. Y is flipped so
    /// that it grows upwards like `gl_FragCoord`.
    pub fn from_client(
        client_x: f64,
        client_y: f64,
        rect_left: f64,
        rect_top: f64,
        canvas_height: u32,
    ) -> Self {
        Self {
            x: (client_x - rect_left) as f32,
            y: (f64::from(canvas_height) - (client_y - rect_top)) as f32,
        }
    }
}

/// Values written to `u_resolution`, `u_mouse` and `u_time` for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameUniforms {
    pub resolution: (f32, f32),
    pub mouse: MousePosition,
    pub time: f32,
}

impl FrameUniforms {
    pub fn new(width: u32, height: u32, mouse: MousePosition, time: f32) -> Self {
        Self {
            resolution: (width as f32, height as f32),
            mouse,
            time,
        }
    }
}

pub fn timestamp_to_seconds(timestamp_ms: f64) -> f32 {
    (timestamp_ms * MS_TO_SECONDS) as f32
}

/// CPU evaluation of the fragment shader at window coordinate `(x, y)`.
///
/// Returns RGBA in `[0, 1]`. Used to check the effect without a GPU.
pub fn shade(x: f32, y: f32, uniforms: &FrameUniforms) -> [f32; 4] {
    let (w, h) = uniforms.resolution;
    let st = (x / w, y / h);
    let mouse = (uniforms.mouse.x / w, uniforms.mouse.y / h);

    let dist = ((st.0 - mouse.0).powi(2) + (st.1 - mouse.1).powi(2)).sqrt();
    let wave = (dist * 10.0 - uniforms.time * 2.0).sin().abs();

    [wave, st.0 * wave, st.1, 1.0]
}
