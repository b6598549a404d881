//! Browser client for canvas Pong
//!
//! Thin host around `game_core`: a 2D canvas sized to the viewport, a tap
//! sound for bounces, arrow-key input and a `requestAnimationFrame` loop.
//! Note: everything here only compiles for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod audio;
mod game_loop;
mod input;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Game, GameMap, GameRng, KeyState};
use wasm_bindgen::prelude::*;

/// Sound played on every wall or paddle bounce, relative to the page
const TAP_SOUND_URL: &str = "tap.mp3";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging()?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let canvas = renderer::init_canvas(&window, &document)?;
    let surface = renderer::CanvasSurface::new(&canvas)?;
    let sound = audio::TapSound::new(TAP_SOUND_URL)?;

    let keys = Rc::new(RefCell::new(KeyState::new()));
    input::attach_keyboard(&window, keys.clone())?;

    let map = GameMap::new(canvas.width() as f32, canvas.height() as f32);
    log::info!("Starting pong on a {}x{} surface", map.width, map.height);

    game_loop::start(game_loop::App {
        game: Game::new(map),
        rng: GameRng::from_entropy(),
        surface,
        sound,
        keys,
    })
}

/// Route `log` records to the browser console
fn init_logging() -> Result<(), JsValue> {
    console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))
}
