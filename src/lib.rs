//! Be My Valentine - a card that asks the question and won't take "No"
//!
//! Core modules:
//! - `geom`: Rectangles and distances in CSS pixel space
//! - `dodge`: Placement and trigger logic for the runaway "No" button
//! - `card`: The Unanswered → Accepted state machine
//! - `hearts`: Randomized floating-hearts background
//! - `settings`: Tunables and asset paths
//! - `platform`, `audio`: Browser glue (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod card;
pub mod dodge;
pub mod geom;
pub mod hearts;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod settings;

pub use card::{Answer, Card, Celebration};
pub use geom::Rect;
pub use hearts::{Heart, HeartField};
pub use settings::{AssetPaths, Settings};

use glam::Vec2;

/// Widget configuration defaults
pub mod consts {
    /// Gap kept between the No button and the arena edges
    pub const PADDING_PX: f32 = 10.0;
    /// Pointer closer than this to the No button's center makes it dodge
    pub const DODGE_RADIUS_PX: f32 = 55.0;
    /// New positions keep at least this much distance from the pointer
    pub const MIN_RESPAWN_DISTANCE_PX: f32 = 80.0;
    /// Random candidates tried before falling back to an unconstrained spot
    pub const PLACEMENT_TRIES: u32 = 30;

    /// Grace period after mount before the No button starts dodging
    pub const ARMING_DELAY_MS: u32 = 450;
    /// Proximity dodges closer together than this are ignored
    pub const MOVE_THROTTLE_MS: f64 = 120.0;

    /// Background music volume (0.0 - 1.0)
    pub const MUSIC_VOLUME: f64 = 0.35;
    /// Number of floating hearts behind the card
    pub const HEART_COUNT: usize = 18;

    /// Deployment sub-path the assets are served from
    pub const DEFAULT_BASE_URL: &str = "/be-my-valentine/";
}

/// Clamp `n` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: when the range is inverted
/// (arena smaller than the button) `max` wins.
#[inline]
pub fn clamp(n: f32, min: f32, max: f32) -> f32 {
    n.max(min).min(max)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
