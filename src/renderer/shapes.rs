//! Shape generation for 2D primitives

use glam::{Mat2, Vec2};

use crate::color::Color;
use crate::math::{ease_out_cubic, lerp};
use crate::sim::{Ball, BounceEffect};
use crate::tuning::Tuning;

/// Equilateral-ish triangle in unit space, centered on the origin
const TRIANGLE: [Vec2; 3] = [
    Vec2::new(0.0, 0.43),
    Vec2::new(-0.5, -0.43),
    Vec2::new(0.5, -0.43),
];

/// How much bigger than a full ball the spawn ring starts
const SPAWN_RING_SCALE: f32 = 3.0;

/// A ring to draw: annulus between `inner` and `outer`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Vec2,
    pub inner: f32,
    pub outer: f32,
    pub color: Color,
}

/// Objective triangle: scale by `size`, rotate by `rotation` radians, move to `pos`
///
/// Points come back in the winding order the renderer expects for front faces.
pub fn objective_triangle(pos: Vec2, size: f32, rotation: f32) -> [Vec2; 3] {
    let rot = Mat2::from_angle(rotation);
    let [a, b, c] = TRIANGLE.map(|v| pos + rot * (v * size));
    [c, b, a]
}

/// Bounce ring grows from one ball radius to `bounce_effect_max_size` radii
/// while fading out
pub fn bounce_ring(effect: &BounceEffect, tuning: &Tuning) -> Ring {
    let t = effect.life(tuning.bounce_effect_duration);
    let scale = 1.0 + (tuning.bounce_effect_max_size - 1.0) * (1.0 - t);
    let outer = tuning.ball_size * scale;
    Ring {
        center: effect.pos,
        inner: (outer - tuning.bounce_effect_width).max(0.0),
        outer,
        color: effect.color.fade(t),
    }
}

/// Spawning ball reveal: a ring closing in on the ball's final size
pub fn spawn_ring(ball: &Ball, tuning: &Tuning) -> Ring {
    let progress = ball.spawn_progress(tuning);
    let eased = ease_out_cubic(progress);
    let outer = lerp(tuning.ball_size * SPAWN_RING_SCALE, tuning.ball_size, eased);
    Ring {
        center: ball.pos,
        inner: (outer - tuning.bounce_effect_width).max(0.0),
        outer,
        color: ball.color.fade(progress),
    }
}
