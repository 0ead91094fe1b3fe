//! Full-screen animated fragment shader driven by mouse position and time.
//!
//! Everything outside [`wasm`] is plain Rust and builds on the host, which is
//! where the shader math and frame bookkeeping are tested.

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod shader;
pub mod uniforms;

pub use config::RendererConfig;
pub use error::RenderError;
pub use uniforms::{FrameUniforms, MousePosition};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::RendererConfig;
    use crate::error::RenderError;

    pub mod gl;
    pub mod input;
    pub mod render;

    pub use render::{FrameLoop, Renderer};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

        match start(&RendererConfig::default()) {
            Ok(_) => Ok(()),
            // Pages without the default canvas call `start_on` themselves.
            Err(RenderError::CanvasNotFound(id)) => {
                log::info!("no `#{id}` canvas on page; waiting for start_on");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Starts the effect on the canvas with the given DOM id.
    #[wasm_bindgen]
    pub fn start_on(canvas_id: &str) -> Result<(), JsValue> {
        start(&RendererConfig::for_canvas(canvas_id))?;
        Ok(())
    }

    /// Looks up the canvas, builds the renderer, hooks up input and starts
    /// the frame loop.
    pub fn start(config: &RendererConfig) -> Result<FrameLoop, RenderError> {
        let window = web_sys::window().ok_or(RenderError::NoWindow)?;
        let document = window.document().ok_or(RenderError::NoDocument)?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| RenderError::CanvasNotFound(config.canvas_id.clone()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| RenderError::NotACanvas(config.canvas_id.clone()))?;

        if config.fit_to_window {
            render::fit_to_window(&canvas)?;
        }

        let renderer = match Renderer::initialize(canvas.clone()) {
            Ok(renderer) => renderer,
            Err(err) => {
                log::error!("renderer setup failed: {err}");
                if matches!(err, RenderError::ContextUnavailable) {
                    window.alert_with_message(&err.to_string()).ok();
                }
                return Err(err);
            }
        };

        input::track_pointer(&canvas, renderer.mouse())?;
        render::run(renderer)
    }
}
