//! Runaway "No" button logic
//!
//! Pure and platform-free so it can be tested natively:
//! - Layout arrives as measured rects, time as milliseconds
//! - Randomness comes from an injected seeded RNG
//! - Missing layout is a no-op, never an error

pub mod placement;
pub mod tracker;

pub use placement::{Placement, PlacementRequest, bounds, initial_position, place};
pub use tracker::{Dodger, Layout};

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunables for the dodge behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeParams {
    /// Gap kept between the button and the arena edges
    pub padding: f32,
    /// Pointer distance from the button center that triggers a dodge
    pub dodge_radius: f32,
    /// Minimum distance between a new button center and the pointer
    pub min_distance: f32,
    /// Candidates sampled before falling back
    pub tries: u32,
    /// Delay after mount before dodging is enabled
    pub arming_delay_ms: u32,
    /// Minimum spacing between proximity-triggered dodges
    pub throttle_ms: f64,
}

impl Default for DodgeParams {
    fn default() -> Self {
        Self {
            padding: PADDING_PX,
            dodge_radius: DODGE_RADIUS_PX,
            min_distance: MIN_RESPAWN_DISTANCE_PX,
            tries: PLACEMENT_TRIES,
            arming_delay_ms: ARMING_DELAY_MS,
            throttle_ms: MOVE_THROTTLE_MS,
        }
    }
}
