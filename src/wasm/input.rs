use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::error::RenderError;
use crate::uniforms::MousePosition;

/// Keeps `position` updated from `mousemove` events on the canvas for the
/// lifetime of the page.
pub fn track_pointer(
    canvas: &HtmlCanvasElement,
    position: Rc<Cell<MousePosition>>,
) -> Result<(), RenderError> {
    let target = canvas.clone();
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        position.set(pointer_position(&target, &event));
    }) as Box<dyn FnMut(MouseEvent)>);

    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

pub fn pointer_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> MousePosition {
    let rect = canvas.get_bounding_client_rect();
    MousePosition::from_client(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        rect.left(),
        rect.top(),
        canvas.height(),
    )
}
