use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::shader::ShaderStage;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("canvas `{0}` not found")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("WebGL not supported")]
    ContextUnavailable,
    #[error("{stage} shader compile error: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("program link error: {log}")]
    Link { log: String },
    #[error("failed to create {0}")]
    CreateResource(&'static str),
    #[error("attribute `{0}` not found in program")]
    MissingAttribute(&'static str),
    #[error("a frame is already scheduled")]
    FrameAlreadyScheduled,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        RenderError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
