pub const DEFAULT_CANVAS_ID: &str = "glCanvas";

/// Startup options for the web renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// DOM id of the target canvas.
    pub canvas_id: String,
    /// Size the canvas to the window and follow `resize` events.
    pub fit_to_window: bool,
}

impl RendererConfig {
    pub fn for_canvas(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            ..Self::default()
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            fit_to_window: true,
        }
    }
}
