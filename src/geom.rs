//! Axis-aligned rectangles in CSS pixel space
//!
//! Layout is measured in client (viewport) coordinates and converted to
//! arena-local coordinates before any placement math runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rect of the given size with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// A rect with no area (e.g. an element that is `display: none`)
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Strict overlap: rects that only share an edge don't overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }

    /// Express this rect relative to `origin`'s top-left corner
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect::new(
            self.left - origin.left,
            self.top - origin.top,
            self.width,
            self.height,
        )
    }

    /// Convert a client-space point into this rect's local space
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        point - self.pos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 80.0, 40.0);
        assert_eq!(r.right(), 90.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(50.0, 40.0));
        assert_eq!(r.size(), Vec2::new(80.0, 40.0));
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(a.overlaps(&Rect::new(50.0, 50.0, 100.0, 100.0)));
        assert!(a.overlaps(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(200.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!a.overlaps(&Rect::new(100.0, 0.0, 50.0, 50.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 100.0, 50.0, 50.0)));
    }

    #[test]
    fn test_relative_to() {
        let arena = Rect::new(100.0, 200.0, 400.0, 300.0);
        let button = Rect::new(150.0, 260.0, 80.0, 40.0);
        let local = button.relative_to(&arena);
        assert_eq!(local, Rect::new(50.0, 60.0, 80.0, 40.0));
        assert_eq!(arena.to_local(Vec2::new(300.0, 350.0)), Vec2::new(200.0, 150.0));
    }

    #[test]
    fn test_empty() {
        assert!(Rect::new(5.0, 5.0, 0.0, 10.0).is_empty());
        assert!(!Rect::new(5.0, 5.0, 1.0, 1.0).is_empty());
    }
}
