//! When the No button moves
//!
//! `Dodger` owns the button's position and decides, per pointer event,
//! whether to relocate it. Callers pass a fresh `Layout` measured from the
//! DOM (or `None` if an element is missing) and a millisecond timestamp.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::DodgeParams;
use super::placement::{PlacementRequest, clamp_position, initial_position, place};
use crate::distance;
use crate::geom::Rect;

/// Layout snapshot in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// The arena the button lives in
    pub arena: Rect,
    /// The No button as currently rendered
    pub target: Rect,
    /// The Yes button, if it is laid out
    pub accept: Option<Rect>,
}

impl Layout {
    /// Target center in arena-local coordinates
    fn target_center(&self) -> Vec2 {
        self.target.relative_to(&self.arena).center()
    }

    /// Yes button in arena-local coordinates, if it has an area
    fn local_accept(&self) -> Option<Rect> {
        self.accept
            .filter(|r| !r.is_empty())
            .map(|r| r.relative_to(&self.arena))
    }
}

/// Position and trigger state of the dodging button
#[derive(Debug, Clone)]
pub struct Dodger {
    params: DodgeParams,
    rng: Pcg32,
    armed: bool,
    last_move_at: Option<f64>,
    position: Option<Vec2>,
    moves: u32,
}

impl Dodger {
    pub fn new(params: DodgeParams, seed: u64) -> Self {
        Self {
            params,
            rng: Pcg32::seed_from_u64(seed),
            armed: false,
            last_move_at: None,
            position: None,
            moves: 0,
        }
    }

    pub fn params(&self) -> &DodgeParams {
        &self.params
    }

    /// Current top-left position in arena-local coordinates
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Number of relocations so far
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Enable dodging (arming delay elapsed)
    pub fn arm(&mut self) {
        if !self.armed {
            log::debug!("No button armed");
        }
        self.armed = true;
    }

    /// Place the button at its starting spot after the first layout
    pub fn place_initial(&mut self, layout: Option<&Layout>) -> Option<Vec2> {
        let layout = layout?;
        let pos = initial_position(
            layout.arena.size(),
            layout.target.size(),
            self.params.padding,
        );
        self.position = Some(pos);
        Some(pos)
    }

    /// Move the button somewhere away from `pointer` (client coordinates).
    ///
    /// Returns the new position, or `None` when unarmed or unmeasured.
    pub fn relocate(&mut self, layout: Option<&Layout>, pointer: Option<Vec2>) -> Option<Vec2> {
        if !self.armed {
            return None;
        }
        let layout = layout?;

        let req = PlacementRequest {
            arena: layout.arena.size(),
            target: layout.target.size(),
            avoid: layout.local_accept(),
            pointer: pointer.map(|p| layout.arena.to_local(p)),
        };
        let placement = place(&req, &self.params, &mut self.rng);
        if placement.is_fallback() {
            log::debug!("No placement budget exhausted, using fallback spot");
        }

        let pos = placement.position();
        self.position = Some(pos);
        self.moves += 1;
        log::debug!("No button moved to ({:.0}, {:.0})", pos.x, pos.y);
        Some(pos)
    }

    /// Pointer entered the button's hit area
    pub fn pointer_entered(&mut self, layout: Option<&Layout>, pointer: Vec2) -> Option<Vec2> {
        self.relocate(layout, Some(pointer))
    }

    /// Pointer moved over the arena; dodge if it came too close.
    ///
    /// Proximity dodges are throttled to one per `throttle_ms`.
    pub fn pointer_moved(
        &mut self,
        layout: Option<&Layout>,
        pointer: Vec2,
        now_ms: f64,
    ) -> Option<Vec2> {
        if !self.armed {
            return None;
        }
        let layout = layout?;

        if let Some(last) = self.last_move_at {
            if now_ms - last < self.params.throttle_ms {
                return None;
            }
        }

        let local = layout.arena.to_local(pointer);
        if distance(local, layout.target_center()) < self.params.dodge_radius {
            self.last_move_at = Some(now_ms);
            return self.relocate(Some(layout), Some(pointer));
        }
        None
    }

    /// Attempted press: arms immediately and dodges instead of clicking
    pub fn pressed(&mut self, layout: Option<&Layout>, pointer: Vec2) -> Option<Vec2> {
        self.arm();
        self.relocate(layout, Some(pointer))
    }

    /// Keep the button inside the arena after a resize
    pub fn resized(&mut self, layout: Option<&Layout>) -> Option<Vec2> {
        let layout = layout?;
        let pos = self.position?;
        let clamped = clamp_position(
            pos,
            layout.arena.size(),
            layout.target.size(),
            self.params.padding,
        );
        self.position = Some(clamped);
        Some(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        // Arena at (100, 50); No button rendered at its starting spot
        let arena = Rect::new(100.0, 50.0, 400.0, 300.0);
        Layout {
            arena,
            target: Rect::new(360.0, 180.0, 80.0, 40.0),
            accept: Some(Rect::new(140.0, 180.0, 80.0, 40.0)),
        }
    }

    fn armed() -> Dodger {
        let mut d = Dodger::new(DodgeParams::default(), 12345);
        d.arm();
        d
    }

    #[test]
    fn test_initial_position() {
        let mut d = Dodger::new(DodgeParams::default(), 1);
        let pos = d.place_initial(Some(&layout())).unwrap();
        assert_eq!(pos, Vec2::new(260.0, 130.0));
        assert_eq!(d.position(), Some(pos));
    }

    #[test]
    fn test_unarmed_is_inert() {
        let mut d = Dodger::new(DodgeParams::default(), 1);
        let l = layout();
        let on_button = l.target.center();
        assert_eq!(d.pointer_entered(Some(&l), on_button), None);
        assert_eq!(d.pointer_moved(Some(&l), on_button, 1000.0), None);
        assert_eq!(d.moves(), 0);
    }

    #[test]
    fn test_missing_layout_is_noop() {
        let mut d = armed();
        assert_eq!(d.relocate(None, None), None);
        assert_eq!(d.pointer_moved(None, Vec2::ZERO, 1000.0), None);
        assert_eq!(d.resized(None), None);
        assert_eq!(d.place_initial(None), None);
    }

    #[test]
    fn test_far_pointer_does_not_move() {
        let mut d = armed();
        let l = layout();
        d.place_initial(Some(&l));
        let before = d.position();
        // 100px left of the button center
        let pointer = l.target.center() - Vec2::new(100.0, 0.0);
        assert_eq!(d.pointer_moved(Some(&l), pointer, 1000.0), None);
        assert_eq!(d.position(), before);
    }

    #[test]
    fn test_near_pointer_moves() {
        let mut d = armed();
        let l = layout();
        let pointer = l.target.center() + Vec2::new(20.0, 0.0);
        let pos = d.pointer_moved(Some(&l), pointer, 1000.0);
        assert!(pos.is_some());
        assert_eq!(d.moves(), 1);
    }

    #[test]
    fn test_proximity_is_throttled() {
        let mut d = armed();
        let l = layout();
        let pointer = l.target.center();
        assert!(d.pointer_moved(Some(&l), pointer, 1000.0).is_some());
        assert!(d.pointer_moved(Some(&l), pointer, 1050.0).is_none());
        assert!(d.pointer_moved(Some(&l), pointer, 1119.0).is_none());
        assert!(d.pointer_moved(Some(&l), pointer, 1120.0).is_some());
        assert_eq!(d.moves(), 2);
    }

    #[test]
    fn test_enter_is_not_throttled() {
        let mut d = armed();
        let l = layout();
        let pointer = l.target.center();
        assert!(d.pointer_moved(Some(&l), pointer, 1000.0).is_some());
        assert!(d.pointer_entered(Some(&l), pointer).is_some());
    }

    #[test]
    fn test_press_arms_and_moves() {
        let mut d = Dodger::new(DodgeParams::default(), 9);
        let l = layout();
        assert!(!d.is_armed());
        assert!(d.pressed(Some(&l), l.target.center()).is_some());
        assert!(d.is_armed());
    }

    #[test]
    fn test_relocation_stays_in_bounds() {
        let mut d = armed();
        let l = layout();
        for i in 0..100 {
            let pos = d.pointer_entered(Some(&l), l.target.center()).unwrap();
            assert!((10.0..=310.0).contains(&pos.x), "move {i}: {pos:?}");
            assert!((10.0..=250.0).contains(&pos.y), "move {i}: {pos:?}");
        }
    }

    #[test]
    fn test_resize_clamps_position() {
        let mut d = armed();
        let l = layout();
        d.place_initial(Some(&l));
        let shrunk = Layout {
            arena: Rect::new(100.0, 50.0, 200.0, 100.0),
            ..l
        };
        let pos = d.resized(Some(&shrunk)).unwrap();
        assert_eq!(pos, Vec2::new(110.0, 50.0));
    }

    #[test]
    fn test_resize_without_position_is_noop() {
        let mut d = armed();
        assert_eq!(d.resized(Some(&layout())), None);
        assert_eq!(d.position(), None);
    }

    #[test]
    fn test_zero_area_accept_is_not_avoided() {
        let params = DodgeParams {
            min_distance: 0.0,
            ..DodgeParams::default()
        };
        let l = Layout {
            // Collapsed Yes button: zero width at arena-local x = 200
            accept: Some(Rect::new(300.0, 50.0, 0.0, 300.0)),
            ..layout()
        };
        let mut straddling = 0;
        for seed in 0..200 {
            let mut d = Dodger::new(params, seed);
            d.arm();
            let pos = d.relocate(Some(&l), None).unwrap();
            if pos.x < 200.0 && pos.x + 80.0 > 200.0 {
                straddling += 1;
            }
        }
        assert!(straddling > 0);
    }

    #[test]
    fn test_laid_out_accept_is_avoided() {
        let params = DodgeParams {
            min_distance: 0.0,
            ..DodgeParams::default()
        };
        let l = Layout {
            // Yes covers the left half of the arena
            accept: Some(Rect::new(100.0, 50.0, 200.0, 300.0)),
            ..layout()
        };
        for seed in 0..200 {
            let mut d = Dodger::new(params, seed);
            d.arm();
            let pos = d.relocate(Some(&l), None).unwrap();
            assert!(pos.x >= 200.0, "seed {seed}: {pos:?}");
        }
    }

    #[test]
    fn test_initial_position_in_narrow_arena() {
        let mut d = Dodger::new(DodgeParams::default(), 1);
        let narrow = Layout {
            arena: Rect::new(100.0, 50.0, 60.0, 300.0),
            ..layout()
        };
        let pos = d.place_initial(Some(&narrow)).unwrap();
        assert_eq!(pos, Vec2::new(10.0, 130.0));
    }
}
