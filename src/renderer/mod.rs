//! Rendering boundary
//!
//! The simulation knows nothing about drawing. [`draw_frame`] walks a
//! [`GameState`] read-only and issues primitive calls against whatever backend
//! implements [`Renderer`]. Positions are arena pixels, +Y down.

pub mod commands;
pub mod shapes;

pub use commands::{CommandList, DrawCommand};

use glam::Vec2;

use crate::color::Color;
use crate::math::Rect;
use crate::sim::{BallState, GamePhase, GameState};

/// HUD layout
const SCORE_POS: Vec2 = Vec2::new(190.0, 200.0);
const HIGH_SCORE_POS: Vec2 = Vec2::new(190.0, 180.0);
const HUD_TEXT_SIZE: f32 = 20.0;
const GAME_OVER_TEXT_SIZE: f32 = 40.0;
const RESTART_TEXT_SIZE: f32 = 20.0;

/// Triangles smaller than this are not worth a draw call
const MIN_TRIANGLE_SIZE: f32 = 0.5;

/// Shape drawing primitives a backend has to provide
pub trait Renderer {
    /// Start a frame, clearing to `clear`
    fn begin_frame(&mut self, clear: Color);
    fn end_frame(&mut self);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn ring(&mut self, center: Vec2, inner: f32, outer: f32, color: Color);
    fn rect(&mut self, rect: Rect, color: Color);
    fn triangle(&mut self, points: [Vec2; 3], color: Color);
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

/// Draw one complete frame of `state`
///
/// `time` is the wall clock in seconds and only drives cosmetic animation.
pub fn draw_frame(state: &GameState, time: f64, r: &mut impl Renderer) {
    r.begin_frame(Color::BLACK);
    match state.phase {
        GamePhase::Playing => draw_playing(state, time, r),
        GamePhase::Over => draw_over(state, r),
    }
    r.end_frame();
}

fn draw_playing(state: &GameState, time: f64, r: &mut impl Renderer) {
    let tuning = &state.tuning;

    // Objectives at their animated size, so collected ones shrink away
    let rotation = (time * tuning.objective_rotate_speed as f64) as f32;
    for member in state.objectives.members() {
        if member.size < MIN_TRIANGLE_SIZE {
            continue;
        }
        let points = shapes::objective_triangle(member.pos, member.size, rotation);
        r.triangle(points, Color::YELLOW);
    }

    // HUD
    let score = &state.score;
    let score_color = if score.is_setting_high_score() {
        Color::GREEN
    } else {
        Color::RED
    };
    r.text(
        &format!("{} collected", score.collected),
        SCORE_POS,
        HUD_TEXT_SIZE,
        score_color,
    );
    r.text(
        &format!("{} highscore", score.high_score),
        HIGH_SCORE_POS,
        HUD_TEXT_SIZE,
        Color::WHITE,
    );

    // Particles
    let particle_size = Vec2::splat(tuning.particle_size);
    for burst in state.particles.active() {
        for particle in burst.particles() {
            r.rect(Rect::from_center(particle.pos, particle_size), burst.color);
        }
    }

    // Bounce rings
    for effect in state.bounce_effects.active() {
        let ring = shapes::bounce_ring(effect, tuning);
        r.ring(ring.center, ring.inner, ring.outer, ring.color);
    }

    // Balls
    for ball in state.balls.iter() {
        match ball.state {
            BallState::Spawning { .. } => {
                let ring = shapes::spawn_ring(ball, tuning);
                r.ring(ring.center, ring.inner, ring.outer, ring.color);
            }
            BallState::Active { .. } => r.circle(ball.pos, ball.size, ball.color),
        }
    }

    r.rect(state.player.rect(), Color::WHITE);
}

fn draw_over(state: &GameState, r: &mut impl Renderer) {
    let center = state.tuning.arena().center();
    r.text("GAME OVER", center, GAME_OVER_TEXT_SIZE, Color::WHITE);
    r.text(
        "press enter to restart",
        center + Vec2::new(0.0, GAME_OVER_TEXT_SIZE),
        RESTART_TEXT_SIZE,
        Color::WHITE,
    );
}
