use game_core::{Color, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `Surface` backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2d context unavailable"))?
            .dyn_into()?;
        Ok(Self { ctx })
    }

    fn set_color(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.set_color(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.set_color(color);
        self.ctx.set_font(font);
        // Best effort, like every other draw call
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
