//! Game state and the Playing/Over state machine
//!
//! All simulation state lives in [`GameState`]; there are no globals. Phase
//! changes go through [`GameState::enter`], which runs the entry actions for the
//! new phase exactly once.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Balls;
use super::bounce::BounceEffects;
use super::objective::Objectives;
use super::particles::Particles;
use super::player::Player;
use crate::highscores::ScoreBoard;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A ball hit the player; waiting for restart
    Over,
}

/// Things that happened during the last tick, for audio and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BallSpawned { index: usize },
    BallActivated { index: usize },
    BallBounced { index: usize, pos: Vec2 },
    PlayerHit { index: usize, pos: Vec2 },
    ObjectiveCollected { index: usize, pos: Vec2 },
    GroupCleared,
    /// First collect of a run that beats the previous best
    NewHighScore { score: u32 },
    GameOver { collected: u32, high_score: u32 },
    Restarted,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Not serialized; a restored snapshot restarts its random stream
    #[serde(skip, default = "default_rng")]
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Frames simulated so far
    pub frame: u64,
    /// Simulated seconds so far
    pub time: f64,
    pub player: Player,
    pub balls: Balls,
    pub bounce_effects: BounceEffects,
    pub objectives: Objectives,
    pub particles: Particles,
    pub score: ScoreBoard,
    /// Number of completed runs
    pub game_overs: u32,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning, already in `Playing`
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game, already in `Playing`
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            tuning,
            phase: GamePhase::Playing,
            frame: 0,
            time: 0.0,
            balls: Balls::new(),
            bounce_effects: BounceEffects::new(),
            objectives: Objectives::new(),
            particles: Particles::new(),
            score: ScoreBoard::new(),
            game_overs: 0,
            events: Vec::new(),
        };
        state.enter(GamePhase::Playing);
        state
    }

    /// Switch to `phase` and run its entry actions
    pub fn enter(&mut self, phase: GamePhase) {
        self.phase = phase;

        match phase {
            GamePhase::Playing => {
                self.player = Player::new(&self.tuning);
                self.score.reset_run();
                self.objectives.reset(&self.tuning);
                self.balls.clear();
                self.bounce_effects.clear();
                self.particles.clear();
                for _ in 0..self.tuning.initial_balls {
                    self.spawn_ball();
                }
                log::info!(
                    "Run started (high score {}, {} ball(s))",
                    self.score.high_score,
                    self.balls.len()
                );
            }
            GamePhase::Over => {
                self.score.commit();
                self.game_overs += 1;
                self.events.push(GameEvent::GameOver {
                    collected: self.score.collected,
                    high_score: self.score.high_score,
                });
                log::info!(
                    "Game over: collected {}, high score {}",
                    self.score.collected,
                    self.score.high_score
                );
            }
        }
    }

    /// Ask for one more ball; over capacity the request is logged and dropped
    pub fn spawn_ball(&mut self) {
        match self.balls.spawn(&self.tuning, &mut self.rng) {
            Ok(index) => self.events.push(GameEvent::BallSpawned { index }),
            Err(err) => log::warn!("{err}, ignoring ball spawn"),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_BALLS;
    use crate::sim::objective::ObjectivePhase;

    #[test]
    fn test_new_state_is_playing() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.balls.len(), 1);
        assert!(!state.balls.get(0).unwrap().is_active());
        assert!(matches!(
            state.objectives.phase,
            ObjectivePhase::Delayed { .. }
        ));
        assert_eq!(state.events, vec![GameEvent::BallSpawned { index: 0 }]);
    }

    #[test]
    fn test_enter_over_commits_high_score() {
        let mut state = GameState::new(42);
        state.score.collected = 7;
        state.enter(GamePhase::Over);
        assert_eq!(state.score.high_score, 7);
        assert_eq!(state.game_overs, 1);
        assert!(state.events.contains(&GameEvent::GameOver {
            collected: 7,
            high_score: 7
        }));

        // A worse run leaves the record alone
        state.enter(GamePhase::Playing);
        assert_eq!(state.score.collected, 0);
        state.score.collected = 3;
        state.enter(GamePhase::Over);
        assert_eq!(state.score.high_score, 7);
    }

    #[test]
    fn test_enter_playing_resets_subsystems() {
        let mut state = GameState::new(42);
        state.player.pos = Vec2::new(10.0, 10.0);
        state.player.vel = Vec2::new(300.0, 0.0);
        state
            .bounce_effects
            .spawn(Vec2::ZERO, crate::Color::WHITE, 1.5)
            .unwrap();
        for _ in 0..3 {
            state.spawn_ball();
        }
        state.enter(GamePhase::Over);
        state.enter(GamePhase::Playing);

        assert_eq!(state.player, Player::new(&state.tuning));
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.bounce_effects.active_count(), 0);
        assert_eq!(state.particles.active_count(), 0);
    }

    #[test]
    fn test_spawn_ball_beyond_cap_is_ignored() {
        let mut state = GameState::new(42);
        for _ in 0..(MAX_BALLS + 3) {
            state.spawn_ball();
        }
        assert_eq!(state.balls.len(), MAX_BALLS);
    }

    #[test]
    fn test_initial_balls_from_tuning() {
        let tuning = Tuning {
            initial_balls: 3,
            ..Tuning::default()
        };
        let state = GameState::with_tuning(1, tuning);
        assert_eq!(state.balls.len(), 3);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let state = GameState::new(5);
        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.phase, state.phase);
        assert_eq!(restored.player, state.player);
        assert_eq!(restored.balls.len(), state.balls.len());
        assert!(restored.events.is_empty());
    }
}
