//! Math helpers: interpolation, easing, random sampling, rectangles
//!
//! Everything here is stateless. Random helpers take the caller's RNG so the
//! simulation stays reproducible from its seed.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Linear interpolation, unclamped
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let delta = target - current;
    let dist = delta.length();
    if dist <= max_delta || dist == 0.0 {
        target
    } else {
        current + delta / dist * max_delta
    }
}

/// Unit direction of `v`, falling back to +X for zero or non-finite vectors
///
/// A NaN heading would stick to a ball forever once it gets renormalized, so
/// every velocity renormalization goes through here.
#[inline]
pub fn heading(v: Vec2) -> Vec2 {
    v.try_normalize().unwrap_or(Vec2::X)
}

#[inline]
pub fn ease_in_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Uniform scalar in [0, 1)
#[inline]
pub fn random_f32<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>()
}

/// Uniform scalar in [min, max]; returns `min` when the range is empty
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

/// Uniform direction on the unit circle
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let theta = random_f32(rng) * TAU;
    Vec2::new(theta.cos(), theta.sin())
}

/// Uniform point inside `rect`
pub fn random_point_in<R: Rng + ?Sized>(rng: &mut R, rect: Rect) -> Vec2 {
    Vec2::new(
        random_range(rng, rect.x, rect.x + rect.width),
        random_range(rng, rect.y, rect.y + rect.height),
    )
}

/// Axis-aligned rectangle with a top-left origin (screen space, +Y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let top_left = center - size * 0.5;
        Self::new(top_left.x, top_left.y, size.x, size.y)
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.top_left() + self.size() * 0.5
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.top_left() + self.size()
    }

    /// Shrink by `margin` on each side (can collapse to zero size, never negative)
    pub fn inset(&self, margin: Vec2) -> Self {
        let width = (self.width - margin.x * 2.0).max(0.0);
        let height = (self.height - margin.y * 2.0).max(0.0);
        let center = self.center();
        Self::from_center(center, Vec2::new(width, height))
    }

    /// Inclusive point containment
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.x && p.x <= max.x && p.y >= self.y && p.y <= max.y
    }

    /// Closest point on or inside the rectangle to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.top_left(), self.max())
    }

    /// Clamp `p` into the rectangle
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        self.closest_point(p)
    }
}
