//! Data-driven game balance
//!
//! Every gameplay number lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; a JSON document can override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::math::Rect;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("Ball speed range is inverted: min {min} > max {max}")]
    InvertedSpeedRange { min: f32, max: f32 },

    #[error("`{field}` is {value}, capacity is {capacity}")]
    OverCapacity {
        field: &'static str,
        value: usize,
        capacity: usize,
    },
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Balls ===
    pub ball_size: f32,
    pub ball_min_size: f32,
    pub ball_min_speed: f32,
    pub ball_max_speed: f32,
    pub ball_acceleration_time: f32,
    pub ball_spawn_time: f32,
    /// Balls spawned on every entry to Playing
    pub initial_balls: usize,
    /// Spawn one more ball each time the whole objective group is collected
    pub spawn_ball_on_clear: bool,

    // === Bounce effects ===
    pub bounce_effect_duration: f32,
    pub bounce_effect_max_size: f32,
    pub bounce_effect_width: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub player_acceleration: f32,
    pub player_deceleration: f32,
    pub player_squish: f32,

    // === Objectives ===
    pub objective_size: f32,
    pub objective_anim_rate: f32,
    pub objective_delay: f32,
    pub objective_rotate_speed: f32,

    // === Particles ===
    pub burst_duration: f32,
    pub burst_particle_count: usize,
    pub particle_size: f32,
    pub particle_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: GAME_WIDTH,
            arena_height: GAME_HEIGHT,

            ball_size: BALL_SIZE,
            ball_min_size: BALL_MIN_SIZE,
            ball_min_speed: BALL_MIN_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            ball_acceleration_time: BALL_ACCELERATION_TIME,
            ball_spawn_time: BALL_SPAWN_TIME,
            initial_balls: INITIAL_BALLS,
            spawn_ball_on_clear: true,

            bounce_effect_duration: BOUNCE_EFFECT_DURATION,
            bounce_effect_max_size: BOUNCE_EFFECT_MAX_SIZE,
            bounce_effect_width: BOUNCE_EFFECT_WIDTH,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            player_deceleration: PLAYER_DECELERATION,
            player_squish: PLAYER_SQUISH_AMOUNT,

            objective_size: OBJECTIVE_SIZE,
            objective_anim_rate: OBJECTIVE_ANIM_RATE,
            objective_delay: OBJECTIVE_DELAY_TIME,
            objective_rotate_speed: OBJECTIVE_ROTATE_SPEED,

            burst_duration: BURST_DURATION,
            burst_particle_count: BURST_PARTICLE_COUNT,
            particle_size: PARTICLE_SIZE,
            particle_speed: PARTICLE_SPEED,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values that would break the simulation's numeric invariants
    ///
    /// Durations are divisors, speeds feed normalization, counts index fixed pools.
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_size", self.ball_size),
            ("ball_min_size", self.ball_min_size),
            ("ball_min_speed", self.ball_min_speed),
            ("ball_max_speed", self.ball_max_speed),
            ("ball_acceleration_time", self.ball_acceleration_time),
            ("ball_spawn_time", self.ball_spawn_time),
            ("bounce_effect_duration", self.bounce_effect_duration),
            ("bounce_effect_max_size", self.bounce_effect_max_size),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("player_acceleration", self.player_acceleration),
            ("objective_size", self.objective_size),
            ("objective_delay", self.objective_delay),
            ("burst_duration", self.burst_duration),
        ];
        for (field, value) in positive {
            // `!(value > 0.0)` also rejects NaN
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if self.ball_min_speed > self.ball_max_speed {
            return Err(TuningError::InvertedSpeedRange {
                min: self.ball_min_speed,
                max: self.ball_max_speed,
            });
        }

        let counts = [
            ("initial_balls", self.initial_balls, MAX_BALLS),
            (
                "burst_particle_count",
                self.burst_particle_count,
                MAX_PARTICLES_PER_BURST,
            ),
        ];
        for (field, value, capacity) in counts {
            if value > capacity {
                return Err(TuningError::OverCapacity {
                    field,
                    value,
                    capacity,
                });
            }
        }

        Ok(())
    }

    /// The whole playable area
    pub fn arena(&self) -> Rect {
        Rect::new(0.0, 0.0, self.arena_width, self.arena_height)
    }

    /// Nominal (unsquashed) paddle extent
    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "ball_max_speed": 900.0, "initial_balls": 3 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.ball_max_speed, 900.0);
        assert_eq!(tuning.initial_balls, 3);
        assert_eq!(tuning.arena_width, GAME_WIDTH);
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = Tuning::from_json(r#"{ "ball_acceleration_time": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NotPositive {
                field: "ball_acceleration_time",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_speeds() {
        let err = Tuning::from_json(r#"{ "ball_min_speed": 50.0, "ball_max_speed": 40.0 }"#)
            .unwrap_err();
        assert!(matches!(err, TuningError::InvertedSpeedRange { .. }));
    }

    #[test]
    fn test_rejects_over_capacity() {
        let err = Tuning::from_json(r#"{ "initial_balls": 11 }"#).unwrap_err();
        assert!(matches!(err, TuningError::OverCapacity { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
