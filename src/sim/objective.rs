//! Collectible objectives
//!
//! A fixed group of markers cycles between `Active` (waiting to be collected)
//! and `Delayed` (all collected, counting down to the next group). Sizes tween
//! toward their target independently of the logical state, so a collected
//! marker shrinks away instead of vanishing.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::circle_overlaps_rect;
use super::particles::Particles;
use super::state::GameEvent;
use crate::color::Color;
use crate::consts::OBJECTIVE_GROUP_SIZE;
use crate::highscores::ScoreBoard;
use crate::math::{Rect, lerp, random_point_in};
use crate::tuning::Tuning;

/// Group-wide objective state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObjectivePhase {
    /// Markers placed, waiting for the player
    Active,
    /// Group finished; next one appears when `remaining` runs out
    Delayed { remaining: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Objective {
    pub pos: Vec2,
    /// Animated size, eases toward full size or zero
    pub size: f32,
    pub collected: bool,
}

impl Objective {
    pub fn target_size(&self, tuning: &Tuning) -> f32 {
        if self.collected {
            0.0
        } else {
            tuning.objective_size
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objectives {
    pub phase: ObjectivePhase,
    members: [Objective; OBJECTIVE_GROUP_SIZE],
}

impl Default for Objectives {
    fn default() -> Self {
        Self {
            phase: ObjectivePhase::Delayed { remaining: 0.0 },
            members: [Objective::default(); OBJECTIVE_GROUP_SIZE],
        }
    }
}

impl Objectives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of a run: zero sizes, then wait out one delay before the first group
    pub fn reset(&mut self, tuning: &Tuning) {
        for member in &mut self.members {
            member.size = 0.0;
        }
        self.enter_delayed(tuning);
    }

    /// Place a fresh group at random spots
    pub fn enter_active<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) {
        let area = tuning
            .arena()
            .inset(Vec2::splat(tuning.objective_size * 0.5));
        for member in &mut self.members {
            member.collected = false;
            member.pos = random_point_in(rng, area);
            member.size = 0.0;
        }
        self.phase = ObjectivePhase::Active;
        log::debug!("Objective group placed");
    }

    /// Mark the whole group collected and arm the countdown
    pub fn enter_delayed(&mut self, tuning: &Tuning) {
        for member in &mut self.members {
            member.collected = true;
        }
        self.phase = ObjectivePhase::Delayed {
            remaining: tuning.objective_delay,
        };
    }

    /// Advance one frame
    ///
    /// Returns true when this frame collected the last member of the group.
    #[allow(clippy::too_many_arguments)]
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        player_rect: &Rect,
        particles: &mut Particles,
        score: &mut ScoreBoard,
        tuning: &Tuning,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        for member in &mut self.members {
            let target = member.target_size(tuning);
            member.size = lerp(member.size, target, tuning.objective_anim_rate * dt);
        }

        match self.phase {
            ObjectivePhase::Active => {
                for index in 0..OBJECTIVE_GROUP_SIZE {
                    let member = &mut self.members[index];
                    if member.collected
                        || !circle_overlaps_rect(member.pos, tuning.objective_size, player_rect)
                    {
                        continue;
                    }

                    member.collected = true;
                    let pos = member.pos;
                    events.push(GameEvent::ObjectiveCollected { index, pos });

                    if let Err(err) = particles.play_burst(
                        pos,
                        Color::YELLOW,
                        tuning.burst_particle_count,
                        tuning,
                        rng,
                    ) {
                        log::warn!("{err}, dropping particle burst");
                    }

                    // Only the first collect past the old record is news
                    if score.record_collect() && score.collected == score.previous_best + 1 {
                        events.push(GameEvent::NewHighScore {
                            score: score.collected,
                        });
                    }

                    if self.all_collected() {
                        self.enter_delayed(tuning);
                        events.push(GameEvent::GroupCleared);
                        log::debug!("Objective group cleared, total {}", score.collected);
                        return true;
                    }
                }
                false
            }
            ObjectivePhase::Delayed { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.enter_active(tuning, rng);
                } else {
                    self.phase = ObjectivePhase::Delayed { remaining };
                }
                false
            }
        }
    }

    pub fn all_collected(&self) -> bool {
        self.members.iter().all(|m| m.collected)
    }

    pub fn members(&self) -> &[Objective] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [Objective] {
        &mut self.members
    }
}
