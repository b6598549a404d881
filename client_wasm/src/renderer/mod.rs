pub mod draw;

pub use draw::CanvasSurface;

use game_core::Params;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, Window};

/// Use the page's canvas, or append one, and size it to the viewport once.
pub fn init_canvas(window: &Window, document: &Document) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = match document.query_selector("canvas")? {
        Some(element) => element.dyn_into()?,
        None => {
            let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
            document
                .body()
                .ok_or_else(|| JsValue::from_str("Document has no body"))?
                .append_child(&canvas)?;
            canvas
        }
    };

    let width = window
        .inner_width()?
        .as_f64()
        .unwrap_or(Params::DEFAULT_WIDTH as f64);
    let height = window
        .inner_height()?
        .as_f64()
        .unwrap_or(Params::DEFAULT_HEIGHT as f64);

    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    Ok(canvas)
}
