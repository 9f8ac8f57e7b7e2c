//! Background music using an `<audio>` element
//!
//! Two sources (MP3, OGG fallback); the browser picks the first it can play.
//! Playback can be refused (autoplay policy, missing file). That is not an
//! error for us: the music simply doesn't play.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlAudioElement};

use crate::settings::AssetPaths;

/// Looping background track
pub struct MusicPlayer {
    el: HtmlAudioElement,
}

impl MusicPlayer {
    /// Build the `<audio>` element (not yet attached to the page)
    pub fn new(document: &Document, assets: &AssetPaths, volume: f64) -> Result<Self, JsValue> {
        let el: HtmlAudioElement = document.create_element("audio")?.dyn_into()?;
        el.set_class_name("audioEl");
        el.set_preload("auto");
        el.set_loop(true);
        el.set_volume(volume.clamp(0.0, 1.0));

        for (src, mime) in [
            (assets.music_mp3.as_str(), "audio/mpeg"),
            (assets.music_ogg.as_str(), "audio/ogg"),
        ] {
            let source = document.create_element("source")?;
            source.set_attribute("src", src)?;
            source.set_attribute("type", mime)?;
            el.append_child(&source)?;
        }

        Ok(Self { el })
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.el
    }

    /// Rewind and start playing; failures are swallowed
    pub fn play_from_start(&self) {
        let el = self.el.clone();
        wasm_bindgen_futures::spawn_local(async move {
            el.set_current_time(0.0);
            let result = match el.play() {
                Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => log::info!("Music playing"),
                Err(e) => log::debug!("Music playback unavailable: {:?}", e),
            }
        });
    }
}
