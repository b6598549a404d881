//! `requestAnimationFrame` driver: one game frame per display refresh, forever.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Game, GameRng, KeyState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::audio::TapSound;
use crate::renderer::CanvasSurface;

/// Everything the frame callback owns
pub struct App {
    pub game: Game,
    pub rng: GameRng,
    pub surface: CanvasSurface,
    pub sound: TapSound,
    pub keys: Rc<RefCell<KeyState>>,
}

impl App {
    fn frame(&mut self) {
        let keys = self.keys.borrow();
        self.game
            .frame(&keys, &mut self.rng, &mut self.surface, &mut self.sound);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Run `app` on every animation frame. The callback reschedules itself after
/// drawing, so frames never overlap.
pub fn start(mut app: App) -> Result<(), JsValue> {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        app.frame();
        if let Err(err) = request_frame(&f) {
            log::error!("Failed to schedule next frame: {:?}", err);
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&g)
}

fn request_frame(callback: &FrameCallback) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let callback = callback.borrow();
    let closure = callback
        .as_ref()
        .ok_or_else(|| JsValue::from_str("Frame callback not set"))?;
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    Ok(())
}
