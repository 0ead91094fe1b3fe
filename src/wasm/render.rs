use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, Window};

use super::gl::{compile_shader, link_program, upload_quad, UniformLocations};
use crate::error::RenderError;
use crate::frame::{FrameClock, FrameRequests, LoopState};
use crate::geometry::QUAD_VERTEX_COUNT;
use crate::shader::{ShaderStage, FRAGMENT_SHADER, VERTEX_SHADER};
use crate::uniforms::{FrameUniforms, MousePosition};

/// Owns the GL context, the linked program, the quad buffer and the mouse
/// state shared with the pointer listener.
pub struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    _program: WebGlProgram,
    _quad: WebGlBuffer,
    uniforms: UniformLocations,
    mouse: Rc<Cell<MousePosition>>,
    clock: FrameClock,
    state: LoopState,
}

impl Renderer {
    /// Acquires a WebGL2 context on `canvas` and builds everything a frame needs.
    pub fn initialize(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let gl = acquire_context(&canvas)?;

        let vertex = compile_shader(&gl, VERTEX_SHADER, ShaderStage::Vertex)?;
        let fragment = compile_shader(&gl, FRAGMENT_SHADER, ShaderStage::Fragment)?;
        let program = link_program(&gl, &vertex, &fragment)?;
        gl.use_program(Some(&program));

        let quad = upload_quad(&gl, &program)?;
        let uniforms = UniformLocations::lookup(&gl, &program);

        log::info!(
            "renderer ready on {}x{} canvas",
            canvas.width(),
            canvas.height()
        );

        Ok(Self {
            gl,
            canvas,
            _program: program,
            _quad: quad,
            uniforms,
            mouse: Rc::new(Cell::new(MousePosition::default())),
            clock: FrameClock::new(),
            state: LoopState::Initialized,
        })
    }

    /// Draws one frame for the `requestAnimationFrame` timestamp and returns
    /// the uniforms that were written.
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameUniforms {
        let time = self.clock.advance(timestamp_ms);
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let uniforms = FrameUniforms::new(width, height, self.mouse.get(), time);

        self.gl.viewport(0, 0, width as i32, height as i32);
        self.uniforms.write(&self.gl, &uniforms);

        self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
        self.gl.clear(GL::COLOR_BUFFER_BIT);
        self.gl.draw_arrays(GL::TRIANGLE_STRIP, 0, QUAD_VERTEX_COUNT);

        uniforms
    }

    /// Shared cursor state; the pointer listener writes, `frame` reads.
    pub fn mouse(&self) -> Rc<Cell<MousePosition>> {
        Rc::clone(&self.mouse)
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }
}

/// WebGL2 context for `canvas`. Any failure, including `getContext`
/// throwing, is reported as [`RenderError::ContextUnavailable`].
///
/// Browsers exposing only WebGL1 are not supported, although the shaders
/// themselves are GLSL ES 1.00.
pub fn acquire_context(canvas: &HtmlCanvasElement) -> Result<GL, RenderError> {
    match canvas.get_context("webgl2") {
        Ok(Some(context)) => context
            .dyn_into()
            .map_err(|_| RenderError::ContextUnavailable),
        Ok(None) => Err(RenderError::ContextUnavailable),
        Err(err) => {
            log::error!("getContext(\"webgl2\") threw: {err:?}");
            Err(RenderError::ContextUnavailable)
        }
    }
}

struct LoopInner {
    renderer: Renderer,
    requests: FrameRequests,
}

/// Handle to a running animation loop. The loop keeps itself alive; dropping
/// the handle does not stop it.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<RefCell<LoopInner>>,
}

impl FrameLoop {
    pub fn frames(&self) -> u64 {
        self.inner.borrow().requests.frames()
    }

    pub fn outstanding_requests(&self) -> u32 {
        self.inner.borrow().requests.outstanding()
    }

    pub fn state(&self) -> LoopState {
        self.inner.borrow().renderer.state()
    }
}

/// Starts the `requestAnimationFrame` loop. Each frame draws and then
/// requests exactly one successor.
pub fn run(renderer: Renderer) -> Result<FrameLoop, RenderError> {
    let window = window().ok_or(RenderError::NoWindow)?;
    let inner = Rc::new(RefCell::new(LoopInner {
        renderer,
        requests: FrameRequests::new(),
    }));

    // `f` holds the frame closure so it can hand itself to the next
    // `request_animation_frame`. The resulting cycle keeps the loop alive.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = Rc::clone(&f);
    {
        let inner = Rc::clone(&inner);
        let window = window.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let mut state = inner.borrow_mut();
            state.requests.begin_frame();
            state.renderer.frame(timestamp);

            if let Some(callback) = f.borrow().as_ref() {
                if let Err(err) = schedule(&window, callback, &mut state.requests) {
                    log::error!("failed to schedule next frame: {err}");
                }
            }
        }) as Box<dyn FnMut(f64)>));
    }

    {
        let mut state = inner.borrow_mut();
        if let Some(callback) = g.borrow().as_ref() {
            schedule(&window, callback, &mut state.requests)?;
        }
        state.renderer.state = LoopState::Running;
    }

    Ok(FrameLoop { inner })
}

fn schedule(
    window: &Window,
    callback: &Closure<dyn FnMut(f64)>,
    requests: &mut FrameRequests,
) -> Result<(), RenderError> {
    requests.request()?;
    if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        requests.cancel();
        return Err(err.into());
    }
    Ok(())
}

/// Sizes the canvas backing store to the window now and on every `resize`.
pub fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<(), RenderError> {
    let window = window().ok_or(RenderError::NoWindow)?;
    resize_to(&window, canvas);

    let on_resize = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                resize_to(&window, &canvas);
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn resize_to(window: &Window, canvas: &HtmlCanvasElement) {
    let width = window.inner_width().ok().and_then(|w| w.as_f64());
    let height = window.inner_height().ok().and_then(|h| h.as_f64());
    if let (Some(width), Some(height)) = (width, height) {
        canvas.set_width(width.max(0.0) as u32);
        canvas.set_height(height.max(0.0) as u32);
    }
}
