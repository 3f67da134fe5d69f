//! Dodge Pong - dodge accelerating balls, collect rotating objectives
//!
//! Core modules:
//! - `sim`: Simulation (ball physics, player, objectives, particles, game state machine)
//! - `renderer`: Draw-call boundary and command recording
//! - `platform`: Input and clock abstraction
//! - `audio`: Sound effect triggers
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod color;
pub mod highscores;
pub mod math;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use color::Color;
pub use highscores::ScoreBoard;
pub use math::Rect;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// These are the defaults `Tuning` starts from. Pool capacities are fixed here
/// and cannot be tuned at runtime.
pub mod consts {
    /// Arena dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 35.0; // radius while slow
    pub const BALL_MIN_SIZE: f32 = 6.0; // radius at full speed
    pub const BALL_MIN_SPEED: f32 = 10.0; // pixels per second, right after a bounce
    pub const BALL_MAX_SPEED: f32 = 2000.0;
    pub const BALL_ACCELERATION_TIME: f32 = 0.5; // seconds from floor to cap speed
    pub const BALL_SPAWN_TIME: f32 = 1.0;
    pub const MAX_BALLS: usize = 10;
    pub const INITIAL_BALLS: usize = 1;

    /// Bounce effect defaults
    pub const MAX_BOUNCE_EFFECTS: usize = 16;
    pub const BOUNCE_EFFECT_DURATION: f32 = 1.5;
    pub const BOUNCE_EFFECT_MAX_SIZE: f32 = 5.0; // multiple of BALL_SIZE
    pub const BOUNCE_EFFECT_WIDTH: f32 = 2.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 25.0;
    pub const PLAYER_HEIGHT: f32 = 28.0;
    pub const PLAYER_SPEED: f32 = 500.0;
    pub const PLAYER_ACCELERATION: f32 = 4000.0;
    /// Per-frame lerp factor (scaled by dt) used while no direction is held
    pub const PLAYER_DECELERATION: f32 = 15.0;
    pub const PLAYER_SQUISH_AMOUNT: f32 = 0.4;
    pub const PLAYER_START_OFFSET_Y: f32 = 100.0;

    /// Objective defaults
    pub const OBJECTIVE_GROUP_SIZE: usize = 3;
    pub const OBJECTIVE_SIZE: f32 = 40.0;
    pub const OBJECTIVE_ANIM_RATE: f32 = 15.0;
    pub const OBJECTIVE_DELAY_TIME: f32 = 1.0;
    pub const OBJECTIVE_ROTATE_SPEED: f32 = 2.0; // radians per second

    /// Particle defaults
    pub const MAX_PARTICLE_BURSTS: usize = 10;
    pub const MAX_PARTICLES_PER_BURST: usize = 100;
    pub const BURST_DURATION: f32 = 1.0;
    pub const BURST_PARTICLE_COUNT: usize = 5;
    pub const PARTICLE_SIZE: f32 = 5.0;
    pub const PARTICLE_SPEED: f32 = 100.0;

    /// Fixed frame step used by the headless driver
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
