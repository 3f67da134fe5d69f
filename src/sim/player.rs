//! The player's paddle: accelerates toward the held direction, drifts to a
//! stop otherwise, and squashes with speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_START_OFFSET_Y;
use crate::math::{Rect, lerp, move_towards};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Displayed extent, derived from `vel` every update
    pub size: Vec2,
}

impl Player {
    /// Fresh paddle just below the arena center, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.arena_width / 2.0,
                tuning.arena_height / 2.0 + PLAYER_START_OFFSET_Y,
            ),
            vel: Vec2::ZERO,
            size: tuning.player_size(),
        }
    }

    /// Advance one frame
    ///
    /// `direction` is the raw sum of held directions; it is normalized here so
    /// diagonals are no faster than straight moves.
    pub fn update(&mut self, direction: Vec2, dt: f32, tuning: &Tuning) {
        let direction = direction.normalize_or_zero();

        if direction != Vec2::ZERO {
            let target = direction * tuning.player_speed;
            self.vel = move_towards(self.vel, target, tuning.player_acceleration * dt);
        } else {
            // Per-frame lerp toward rest; intentionally not frame-rate independent
            self.vel = self.vel.lerp(Vec2::ZERO, tuning.player_deceleration * dt);
        }

        self.pos += self.vel * dt;

        // Clamp using the unsquashed extent so squashing never lets the paddle
        // poke further out
        let bounds = tuning.arena().inset(tuning.player_size() * 0.5);
        self.pos = bounds.clamp_point(self.pos);

        // Cross-axis squash: horizontal speed flattens the height, vertical
        // speed narrows the width
        let speed_x = (self.vel.x.abs() / tuning.player_speed).min(1.0);
        let speed_y = (self.vel.y.abs() / tuning.player_speed).min(1.0);
        self.size = Vec2::new(
            lerp(
                tuning.player_width,
                tuning.player_width * tuning.player_squish,
                speed_y,
            ),
            lerp(
                tuning.player_height,
                tuning.player_height * tuning.player_squish,
                speed_x,
            ),
        );
    }

    /// Collision rectangle (top-left origin) from the current squashed size
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
