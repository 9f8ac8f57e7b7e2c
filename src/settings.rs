//! Widget settings
//!
//! Read once at startup from an inline JSON block in the page:
//!
//! ```html
//! <script type="application/json" id="valentine-config">
//!   { "base_url": "/be-my-valentine/", "recipient": "Anjali" }
//! </script>
//! ```
//!
//! Every field is optional; missing ones take their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::dodge::DodgeParams;

/// Widget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path prefix the site is served under (assets resolve against it)
    pub base_url: String,
    /// Name in the greeting
    pub recipient: String,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f64,
    /// Number of floating hearts
    pub heart_count: usize,
    /// No button behaviour
    pub dodge: DodgeParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            recipient: "Anjali".to_string(),
            music_volume: MUSIC_VOLUME,
            heart_count: HEART_COUNT,
            dodge: DodgeParams::default(),
        }
    }
}

impl Settings {
    /// Id of the inline JSON config element
    pub const CONFIG_ELEMENT_ID: &'static str = "valentine-config";

    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Resolved media URLs
    pub fn assets(&self) -> AssetPaths {
        AssetPaths::new(&self.base_url)
    }

    /// Greeting line above the question
    pub fn greeting(&self) -> String {
        if self.recipient.trim().is_empty() {
            "Hey, quick question…".to_string()
        } else {
            format!("Hey {}, quick question…", self.recipient.trim())
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring invalid config: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Media asset URLs under the base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub music_mp3: String,
    pub music_ogg: String,
    pub accepted_video: String,
}

impl AssetPaths {
    pub const MUSIC_MP3: &'static str = "audio/spring-snow-10cm.mp3";
    pub const MUSIC_OGG: &'static str = "audio/spring-snow-10cm.ogg";
    pub const ACCEPTED_VIDEO: &'static str = "video/accepted.mp4";

    pub fn new(base_url: &str) -> Self {
        Self {
            music_mp3: join_url(base_url, Self::MUSIC_MP3),
            music_ogg: join_url(base_url, Self::MUSIC_OGG),
            accepted_video: join_url(base_url, Self::ACCEPTED_VIDEO),
        }
    }
}

/// Join a base path and a relative asset path with exactly one `/`
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}
