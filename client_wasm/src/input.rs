//! Keyboard input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::KeyState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent};

/// Handle key down event
pub fn handle_key_down(keys: &RefCell<KeyState>, key: &str) {
    keys.borrow_mut().press(key);
}

/// Handle key up event
pub fn handle_key_up(keys: &RefCell<KeyState>, key: &str) {
    keys.borrow_mut().release(key);
}

/// Keep `keys` in sync with keydown/keyup events on `target`.
/// Listeners live for the rest of the page.
pub fn attach_keyboard(target: &EventTarget, keys: Rc<RefCell<KeyState>>) -> Result<(), JsValue> {
    {
        let keys = keys.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            handle_key_down(&keys, &event.key());
        }) as Box<dyn FnMut(_)>);
        target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            handle_key_up(&keys, &event.key());
        }) as Box<dyn FnMut(_)>);
        target.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
