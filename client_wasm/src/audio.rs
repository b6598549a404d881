//! Tap sound playback

use game_core::Sound;
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

/// One preloaded audio element, replayed on every bounce
pub struct TapSound {
    element: HtmlAudioElement,
}

impl TapSound {
    pub fn new(src: &str) -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new_with_src(src)?;
        element.set_preload("auto");
        Ok(Self { element })
    }
}

impl Sound for TapSound {
    fn play_tap(&mut self) {
        // Fire and forget; the returned promise is not awaited
        if let Err(err) = self.element.play() {
            log::debug!("Tap sound did not play: {:?}", err);
        }
    }
}
