//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only (the `GameState` owns it)
//! - Fixed-capacity pools scanned in slot order
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod bounce;
pub mod collision;
pub mod objective;
pub mod particles;
pub mod player;
pub mod pool;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallState, Balls};
pub use bounce::{BounceEffect, BounceEffects};
pub use collision::{EdgeHits, arena_edge_hits, circle_overlaps_rect};
pub use objective::{Objective, ObjectivePhase, Objectives};
pub use particles::{Particle, ParticleBurst, Particles};
pub use player::Player;
pub use pool::PoolError;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
