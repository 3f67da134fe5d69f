//! Bouncing balls
//!
//! Each ball fades in while `Spawning`, then moves while `Active`. An active
//! ball accelerates from the floor speed to the cap speed between bounces and
//! snaps back to the floor speed whenever it hits an arena edge. Speed and
//! radius are linked: the faster a ball goes, the smaller it gets.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounce::BounceEffects;
use super::collision::{arena_edge_hits, circle_overlaps_rect, reflect_velocity};
use super::pool::PoolError;
use super::state::GameEvent;
use crate::color::Color;
use crate::consts::MAX_BALLS;
use crate::math::{Rect, heading, lerp, random_point_in, random_unit_vector};
use crate::tuning::Tuning;

/// Ball state - fading in or moving
///
/// Each variant carries only the data valid in that state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BallState {
    /// Growing in place; not yet dangerous
    Spawning { elapsed: f32 },
    /// Moving and colliding
    Active { vel: Vec2, time_since_bounce: f32 },
}

/// What happened to a ball during one update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BallStep {
    /// Finished spawning this frame
    pub activated: bool,
    /// Positions of edge bounces this frame (x axis first, then y)
    pub bounces: [Option<Vec2>; 2],
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Radius
    pub size: f32,
    pub color: Color,
    pub state: BallState,
}

impl Ball {
    /// New ball at `pos`, zero size, spawning
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos,
            size: 0.0,
            color,
            state: BallState::Spawning { elapsed: 0.0 },
        }
    }

    /// New ball that is already moving along `heading` at floor speed
    pub fn new_active(pos: Vec2, dir: Vec2, color: Color, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: tuning.ball_size,
            color,
            state: BallState::Active {
                vel: heading(dir) * tuning.ball_min_speed,
                time_since_bounce: 0.0,
            },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, BallState::Active { .. })
    }

    /// Velocity while active, zero while spawning
    pub fn velocity(&self) -> Vec2 {
        match self.state {
            BallState::Active { vel, .. } => vel,
            BallState::Spawning { .. } => Vec2::ZERO,
        }
    }

    /// Spawn progress in [0, 1]; 1 once active
    pub fn spawn_progress(&self, tuning: &Tuning) -> f32 {
        match self.state {
            BallState::Spawning { elapsed } => (elapsed / tuning.ball_spawn_time).clamp(0.0, 1.0),
            BallState::Active { .. } => 1.0,
        }
    }

    /// Advance one frame
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, tuning: &Tuning, rng: &mut R) -> BallStep {
        match self.state {
            BallState::Spawning { elapsed } => self.update_spawning(elapsed + dt, tuning, rng),
            BallState::Active {
                vel,
                time_since_bounce,
            } => self.update_active(vel, time_since_bounce + dt, dt, tuning),
        }
    }

    fn update_spawning<R: Rng + ?Sized>(
        &mut self,
        elapsed: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> BallStep {
        let t = elapsed / tuning.ball_spawn_time;
        self.size = lerp(0.0, tuning.ball_size, t.min(1.0));

        if t < 1.0 {
            self.state = BallState::Spawning { elapsed };
            return BallStep::default();
        }

        self.state = BallState::Active {
            vel: random_unit_vector(rng) * tuning.ball_min_speed,
            time_since_bounce: 0.0,
        };
        log::debug!("Ball activated at ({:.0}, {:.0})", self.pos.x, self.pos.y);
        BallStep {
            activated: true,
            ..Default::default()
        }
    }

    fn update_active(
        &mut self,
        vel: Vec2,
        mut time_since_bounce: f32,
        dt: f32,
        tuning: &Tuning,
    ) -> BallStep {
        let percent = (time_since_bounce / tuning.ball_acceleration_time).clamp(0.0, 1.0);

        // Magnitude comes from time since bounce; direction only changes on bounce
        let dir = heading(vel);
        let mut vel = (dir * tuning.ball_min_speed).lerp(dir * tuning.ball_max_speed, percent);

        self.pos += vel * dt;
        self.size = lerp(tuning.ball_size, tuning.ball_min_size, percent);

        let mut step = BallStep::default();
        let arena = tuning.arena();
        let edges = arena_edge_hits(self.pos, &arena);

        if edges.x {
            vel = reflect_velocity(vel, Vec2::X);
            self.pos.x = self.pos.x.clamp(arena.x, arena.x + arena.width);
            vel = heading(vel) * tuning.ball_min_speed;
            time_since_bounce = 0.0;
            step.bounces[0] = Some(self.pos);
        }

        if edges.y {
            vel = reflect_velocity(vel, Vec2::Y);
            self.pos.y = self.pos.y.clamp(arena.y, arena.y + arena.height);
            vel = heading(vel) * tuning.ball_min_speed;
            time_since_bounce = 0.0;
            step.bounces[1] = Some(self.pos);
        }

        self.state = BallState::Active {
            vel,
            time_since_bounce,
        };
        step
    }
}

/// The ball collection; grows through `spawn`, only shrinks on `clear`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Balls {
    balls: Vec<Ball>,
}

impl Balls {
    pub fn new() -> Self {
        Self {
            balls: Vec::with_capacity(MAX_BALLS),
        }
    }

    pub fn clear(&mut self) {
        self.balls.clear();
    }

    /// Spawn a ball at a random spot, fully inside the arena at full size
    ///
    /// Requests beyond `MAX_BALLS` are rejected; the collection is left as is.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Result<usize, PoolError> {
        if self.balls.len() >= MAX_BALLS {
            return Err(PoolError::Exhausted {
                pool: "balls",
                capacity: MAX_BALLS,
            });
        }
        let area = tuning.arena().inset(Vec2::splat(tuning.ball_size));
        let pos = random_point_in(rng, area);
        let color = Color::random_bright(rng);
        self.balls.push(Ball::new(pos, color));
        log::debug!("Spawned ball {} at ({:.0}, {:.0})", self.balls.len() - 1, pos.x, pos.y);
        Ok(self.balls.len() - 1)
    }

    /// Insert a ball directly (tests and scripted setups)
    pub fn push(&mut self, ball: Ball) -> Result<usize, PoolError> {
        if self.balls.len() >= MAX_BALLS {
            return Err(PoolError::Exhausted {
                pool: "balls",
                capacity: MAX_BALLS,
            });
        }
        self.balls.push(ball);
        Ok(self.balls.len() - 1)
    }

    /// Advance every ball, age bounce effects, test active balls against the player
    ///
    /// Returns true if any active ball touched `player_rect`.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        player_rect: &Rect,
        effects: &mut BounceEffects,
        tuning: &Tuning,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        effects.update(dt);

        let mut hit = false;
        for (index, ball) in self.balls.iter_mut().enumerate() {
            let step = ball.update(dt, tuning, rng);

            if step.activated {
                events.push(GameEvent::BallActivated { index });
            }

            for pos in step.bounces.into_iter().flatten() {
                events.push(GameEvent::BallBounced { index, pos });
                // Physics already happened; only the ring is lost
                if let Err(err) = effects.spawn(pos, ball.color, tuning.bounce_effect_duration) {
                    log::warn!("{err}, dropping bounce effect");
                }
            }

            if ball.is_active() && circle_overlaps_rect(ball.pos, ball.size, player_rect) {
                events.push(GameEvent::PlayerHit {
                    index,
                    pos: ball.pos,
                });
                hit = true;
            }
        }
        hit
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }
}
