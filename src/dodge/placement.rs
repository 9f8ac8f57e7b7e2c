//! Picking a new spot for the dodging button
//!
//! Rejection sampling inside the padded arena: a candidate must keep its
//! center away from the pointer and must not cover the Yes button. When
//! the budget runs out the button moves anyway to an unconstrained spot.

use glam::Vec2;
use rand::Rng;

use super::DodgeParams;
use crate::geom::Rect;
use crate::{clamp, distance};

/// Everything placement needs, in arena-local coordinates
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest {
    /// Arena width/height
    pub arena: Vec2,
    /// Button width/height
    pub target: Vec2,
    /// Area the button must not cover (the Yes button)
    pub avoid: Option<Rect>,
    /// Last known pointer position; arena center when unknown
    pub pointer: Option<Vec2>,
}

impl PlacementRequest {
    fn pointer_or_center(&self) -> Vec2 {
        self.pointer.unwrap_or(self.arena / 2.0)
    }
}

/// Result of a placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Satisfies both the distance and the no-overlap constraint
    Clear(Vec2),
    /// Sampling budget exhausted; may be near the pointer or over Yes
    Fallback(Vec2),
}

impl Placement {
    pub fn position(&self) -> Vec2 {
        match *self {
            Placement::Clear(p) | Placement::Fallback(p) => p,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Placement::Fallback(_))
    }
}

/// Allowed top-left range for a button of `target` size: `(min, max)`.
///
/// `max` never drops below `padding`, so a too-small arena pins the
/// button at the padding corner instead of producing an empty range.
pub fn bounds(arena: Vec2, target: Vec2, padding: f32) -> (Vec2, Vec2) {
    let min = Vec2::splat(padding);
    let max = (arena - target - Vec2::splat(padding)).max(min);
    (min, max)
}

/// Clamp a top-left position into the allowed range
pub fn clamp_position(pos: Vec2, arena: Vec2, target: Vec2, padding: f32) -> Vec2 {
    let (min, max) = bounds(arena, target, padding);
    Vec2::new(clamp(pos.x, min.x, max.x), clamp(pos.y, min.y, max.y))
}

/// Starting spot: centered in the right half, vertically centered
pub fn initial_position(arena: Vec2, target: Vec2, padding: f32) -> Vec2 {
    let raw = Vec2::new(
        arena.x * 0.75 - target.x / 2.0,
        arena.y * 0.5 - target.y / 2.0,
    );
    clamp_position(raw, arena, target, padding)
}

fn sample<R: Rng + ?Sized>(rng: &mut R, min: Vec2, max: Vec2) -> Vec2 {
    let x = rng.random::<f32>() * (max.x - min.x) + min.x;
    let y = rng.random::<f32>() * (max.y - min.y) + min.y;
    Vec2::new(x, y)
}

/// Choose a new top-left position for the dodging button
pub fn place<R: Rng + ?Sized>(
    req: &PlacementRequest,
    params: &DodgeParams,
    rng: &mut R,
) -> Placement {
    let (min, max) = bounds(req.arena, req.target, params.padding);
    let pointer = req.pointer_or_center();
    let avoid = req.avoid.filter(|r| !r.is_empty());

    for _ in 0..params.tries {
        let candidate = sample(rng, min, max);

        let center = candidate + req.target / 2.0;
        if distance(center, pointer) < params.min_distance {
            continue;
        }

        if let Some(avoid) = avoid {
            if Rect::from_pos_size(candidate, req.target).overlaps(&avoid) {
                continue;
            }
        }

        return Placement::Clear(clamp_position(
            candidate,
            req.arena,
            req.target,
            params.padding,
        ));
    }

    let candidate = sample(rng, min, max);
    Placement::Fallback(clamp_position(
        candidate,
        req.arena,
        req.target,
        params.padding,
    ))
}
