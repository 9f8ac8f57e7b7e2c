//! Floating hearts behind the card
//!
//! Generated once per mount from a seed; the CSS animation does the rest.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Horizontal position range (% of viewport width)
pub const LEFT_PCT: (f32, f32) = (2.0, 98.0);
/// Heart size range (px)
pub const SIZE_PX: (f32, f32) = (14.0, 44.0);
/// Animation delay range (s)
pub const DELAY_S: (f32, f32) = (0.0, 6.0);
/// Rise duration range (s)
pub const DURATION_S: (f32, f32) = (7.0, 14.0);
/// Opacity range
pub const OPACITY: (f32, f32) = (0.18, 0.55);
/// Hue shift range (degrees)
pub const HUE_ROTATE_DEG: (f32, f32) = (-18.0, 18.0);

fn rand_in<R: Rng + ?Sized>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    rng.random::<f32>() * (max - min) + min
}

/// A single decorative heart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    pub id: u32,
    pub left_pct: f32,
    pub size_px: f32,
    pub delay_s: f32,
    pub duration_s: f32,
    pub opacity: f32,
    pub hue_rotate_deg: f32,
}

impl Heart {
    fn random<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Self {
        Self {
            id,
            left_pct: rand_in(rng, LEFT_PCT),
            size_px: rand_in(rng, SIZE_PX),
            delay_s: rand_in(rng, DELAY_S),
            duration_s: rand_in(rng, DURATION_S),
            opacity: rand_in(rng, OPACITY),
            hue_rotate_deg: rand_in(rng, HUE_ROTATE_DEG),
        }
    }

    /// DOM key
    pub fn key(&self) -> String {
        format!("heart-{}", self.id)
    }

    /// Inline style setting the CSS custom properties the stylesheet animates
    pub fn style(&self) -> String {
        format!(
            "--left: {:.2}%; --size: {:.2}px; --delay: {:.2}s; --duration: {:.2}s; --opacity: {:.3}; --hue: {:.2}deg",
            self.left_pct,
            self.size_px,
            self.delay_s,
            self.duration_s,
            self.opacity,
            self.hue_rotate_deg
        )
    }
}

/// The full background; immutable once generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartField {
    hearts: Vec<Heart>,
}

impl HeartField {
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::generate_with(count, &mut rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let hearts = (0..count as u32).map(|i| Heart::random(i, &mut *rng)).collect();
        Self { hearts }
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within(v: f32, (min, max): (f32, f32)) -> bool {
        v >= min && v <= max
    }

    #[test]
    fn test_generate_count_and_ids() {
        let field = HeartField::generate(18, 7);
        assert_eq!(field.len(), 18);
        for (i, h) in field.hearts().iter().enumerate() {
            assert_eq!(h.id, i as u32);
            assert_eq!(h.key(), format!("heart-{i}"));
        }
    }

    #[test]
    fn test_ranges() {
        let field = HeartField::generate(500, 99);
        for h in field.hearts() {
            assert!(within(h.left_pct, LEFT_PCT));
            assert!(within(h.size_px, SIZE_PX));
            assert!(within(h.delay_s, DELAY_S));
            assert!(within(h.duration_s, DURATION_S));
            assert!(within(h.opacity, OPACITY));
            assert!(within(h.hue_rotate_deg, HUE_ROTATE_DEG));
        }
    }

    #[test]
    fn test_seeded_generation_is_stable() {
        assert_eq!(HeartField::generate(18, 5), HeartField::generate(18, 5));
    }

    #[test]
    fn test_style_custom_properties() {
        let h = Heart {
            id: 0,
            left_pct: 50.0,
            size_px: 20.0,
            delay_s: 1.5,
            duration_s: 10.0,
            opacity: 0.3,
            hue_rotate_deg: -4.0,
        };
        assert_eq!(
            h.style(),
            "--left: 50.00%; --size: 20.00px; --delay: 1.50s; --duration: 10.00s; --opacity: 0.300; --hue: -4.00deg"
        );
    }

    #[test]
    fn test_empty_field() {
        assert!(HeartField::generate(0, 1).is_empty());
    }
}
