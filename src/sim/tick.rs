//! Per-frame simulation step
//!
//! Update order within a Playing frame: player, balls (with bounce effects),
//! objectives, particles. Balls and objectives test against the player
//! rectangle computed earlier in the same frame. A phase change requested
//! during the frame is applied once all updates have run.

use glam::Vec2;

use super::objective::ObjectivePhase;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Restart was pressed this frame
    pub restart: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    /// Raw sum of held directions (screen space, +Y down); not normalized
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }

    /// Digital input closest to a desired movement direction
    pub fn from_direction(dir: Vec2) -> Self {
        let dir = dir.normalize_or_zero();
        // ~67.5 degree cones per key, so diagonals press two keys
        let threshold = 0.38;
        Self {
            up: dir.y < -threshold,
            down: dir.y > threshold,
            left: dir.x < -threshold,
            right: dir.x > threshold,
            ..Default::default()
        }
    }
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.frame += 1;
    state.time += dt as f64;

    let autopilot_input;
    let input = if input.idle_mode {
        autopilot_input = autopilot(state);
        &autopilot_input
    } else {
        input
    };

    match state.phase {
        GamePhase::Playing => {
            state.player.update(input.direction(), dt, &state.tuning);
            let player_rect = state.player.rect();

            let hit = state.balls.update(
                dt,
                &player_rect,
                &mut state.bounce_effects,
                &state.tuning,
                &mut state.rng,
                &mut state.events,
            );

            let cleared = state.objectives.update(
                dt,
                &player_rect,
                &mut state.particles,
                &mut state.score,
                &state.tuning,
                &mut state.rng,
                &mut state.events,
            );

            state.particles.update(dt, &state.tuning);

            if cleared && state.tuning.spawn_ball_on_clear {
                state.spawn_ball();
            }

            if hit {
                state.enter(GamePhase::Over);
            }
        }

        GamePhase::Over => {
            if input.restart {
                state.events.push(GameEvent::Restarted);
                state.enter(GamePhase::Playing);
            }
        }
    }
}

/// Danger radius around each ball the autopilot steers away from
const AUTOPILOT_DANGER_RADIUS: f32 = 220.0;

/// Demo-mode input: flee nearby balls, otherwise chase the nearest objective
fn autopilot(state: &GameState) -> TickInput {
    if state.phase == GamePhase::Over {
        return TickInput {
            restart: true,
            idle_mode: true,
            ..Default::default()
        };
    }

    let player = state.player.pos;

    // Repulsion from every ball in range, stronger when closer
    let mut flee = Vec2::ZERO;
    for ball in state.balls.iter() {
        let away = player - ball.pos;
        let dist = away.length().max(1.0);
        let reach = AUTOPILOT_DANGER_RADIUS + ball.size;
        if dist < reach {
            flee += away / dist * (1.0 - dist / reach);
        }
    }

    let dir = if flee.length_squared() > 1e-4 {
        // Pull back toward the middle so fleeing doesn't pin us in a corner
        let arena = state.tuning.arena();
        let to_center = (arena.center() - player) / arena.size().max_element();
        flee.normalize() + to_center
    } else if state.objectives.phase == ObjectivePhase::Active {
        state
            .objectives
            .members()
            .iter()
            .filter(|m| !m.collected)
            .map(|m| m.pos - player)
            .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))
            .unwrap_or(Vec2::ZERO)
    } else {
        Vec2::ZERO
    };

    TickInput {
        idle_mode: true,
        ..TickInput::from_direction(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::sim::ball::{Ball, BallState};
    use crate::sim::collision::circle_overlaps_rect;
    use crate::{Color, Tuning};

    /// Put an active ball right on top of the player
    fn ball_on_player(state: &mut GameState) {
        let ball = Ball {
            pos: state.player.pos,
            size: state.tuning.ball_size,
            color: Color::WHITE,
            state: BallState::Active {
                vel: Vec2::new(0.0, 1.0),
                time_since_bounce: 0.0,
            },
        };
        state.balls.push(ball).expect("room for a ball");
    }

    #[test]
    fn test_direction_from_keys() {
        let input = TickInput {
            up: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(1.0, -1.0));

        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_from_direction() {
        let input = TickInput::from_direction(Vec2::new(1.0, 0.1));
        assert!(input.right && !input.up && !input.down && !input.left);
        let input = TickInput::from_direction(Vec2::new(-1.0, -1.0));
        assert!(input.left && input.up);
        assert_eq!(TickInput::from_direction(Vec2::ZERO).direction(), Vec2::ZERO);
    }

    #[test]
    fn test_ball_hit_ends_run() {
        let mut state = GameState::new(1);
        state.score.collected = 4;
        ball_on_player(&mut state);

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.score.high_score, 4);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::PlayerHit { .. }))
        );
        assert!(state.events.contains(&GameEvent::GameOver {
            collected: 4,
            high_score: 4
        }));
    }

    #[test]
    fn test_over_entry_runs_once() {
        let mut state = GameState::new(1);
        ball_on_player(&mut state);
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.game_overs, 1);

        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), FRAME_DT);
        }
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.game_overs, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_over_ignores_movement() {
        let mut state = GameState::new(1);
        ball_on_player(&mut state);
        tick(&mut state, &TickInput::default(), FRAME_DT);
        let before = state.player.pos;

        let input = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input, FRAME_DT);
        }
        assert_eq!(state.player.pos, before);
    }

    /// Player moving right at full speed with the right key held
    fn player_running_right(state: &mut GameState) -> TickInput {
        state.balls.clear();
        state.player.vel = Vec2::new(state.tuning.player_speed, 0.0);
        TickInput {
            right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_ball_sees_this_frames_player_rect() {
        let mut state = GameState::new(1);
        let input = player_running_right(&mut state);

        // 4px clear of the resting paddle's right edge
        let ball_size = state.tuning.ball_size;
        let edge = state.player.rect().max().x;
        let ball = Ball {
            pos: Vec2::new(edge + ball_size + 4.0, state.player.pos.y),
            size: ball_size,
            color: Color::WHITE,
            state: BallState::Active {
                vel: Vec2::new(0.0, state.tuning.ball_min_speed),
                time_since_bounce: 0.0,
            },
        };
        assert!(!circle_overlaps_rect(ball.pos, ball.size, &state.player.rect()));
        state.balls.push(ball).expect("room for a ball");

        tick(&mut state, &input, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_objective_sees_this_frames_player_rect() {
        let mut state = GameState::new(1);
        let input = player_running_right(&mut state);
        state.objectives.enter_active(&state.tuning, &mut state.rng);

        let reach = state.tuning.objective_size;
        let edge = state.player.rect().max().x;
        let near = Vec2::new(edge + reach + 4.0, state.player.pos.y);
        assert!(!circle_overlaps_rect(near, reach, &state.player.rect()));
        let members = state.objectives.members_mut();
        members[0].pos = near;
        members[1].pos = Vec2::new(50.0, 50.0);
        members[2].pos = Vec2::new(750.0, 50.0);

        tick(&mut state, &input, FRAME_DT);
        assert_eq!(state.score.collected, 1);
        assert!(state.events.contains(&GameEvent::ObjectiveCollected { index: 0, pos: near }));
    }

    #[test]
    fn test_restart_returns_to_playing() {
        let mut state = GameState::new(1);
        state.score.collected = 6;
        ball_on_player(&mut state);
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(state.is_over());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.events[0], GameEvent::Restarted);
        assert_eq!(state.score.collected, 0);
        assert_eq!(state.score.high_score, 6);
        assert_eq!(state.balls.len(), state.tuning.initial_balls);
        assert_eq!(state.bounce_effects.active_count(), 0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(1);
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.events.contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_group_clear_spawns_ball() {
        let mut state = GameState::new(3);
        state.objectives.enter_active(&state.tuning, &mut state.rng);

        // Park every objective on the player
        let pos = state.player.pos;
        for member in state.objectives.members_mut() {
            member.pos = pos;
        }

        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.score.collected, 3);
        assert_eq!(state.balls.len(), 2);
        assert!(state.events.contains(&GameEvent::GroupCleared));
        assert!(state.events.contains(&GameEvent::BallSpawned { index: 1 }));
        assert_eq!(state.particles.active_count(), 3);
    }

    #[test]
    fn test_group_clear_without_spawn() {
        let tuning = Tuning {
            spawn_ball_on_clear: false,
            ..Tuning::default()
        };
        let mut state = GameState::with_tuning(3, tuning);
        state.objectives.enter_active(&state.tuning, &mut state.rng);
        let pos = state.player.pos;
        for member in state.objectives.members_mut() {
            member.pos = pos;
        }
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.balls.len(), 1);
    }

    #[test]
    fn test_negative_dt_is_clamped() {
        let mut state = GameState::new(1);
        let before = state.player.clone();
        tick(&mut state, &TickInput::default(), -1.0);
        tick(&mut state, &TickInput::default(), f32::NAN);
        assert_eq!(state.player, before);
        assert_eq!(state.time, 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                up: true,
                right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, FRAME_DT);
            tick(&mut state2, input, FRAME_DT);
        }

        let snap1 = serde_json::to_value(&state1).expect("serialize");
        let snap2 = serde_json::to_value(&state2).expect("serialize");
        assert_eq!(snap1, snap2);
    }

    #[test]
    fn test_autopilot_restarts() {
        let mut state = GameState::new(1);
        ball_on_player(&mut state);
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(state.is_over());

        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        tick(&mut state, &idle, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_autopilot_flees_nearby_ball() {
        let mut state = GameState::new(1);
        state.balls.clear();
        let player = state.player.pos;
        let ball = Ball {
            pos: player + Vec2::new(100.0, 0.0),
            size: state.tuning.ball_size,
            color: Color::WHITE,
            state: BallState::Active {
                vel: Vec2::new(0.0, 1.0),
                time_since_bounce: 0.0,
            },
        };
        state.balls.push(ball).unwrap();

        let input = autopilot(&state);
        assert!(input.left);
        assert!(!input.right);
    }
}
