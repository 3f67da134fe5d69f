//! Particle bursts
//!
//! A burst is a handful of particles flying straight out from one point while
//! their shared color fades. Bursts live in a fixed pool; a burst whose
//! `elapsed` is [`FREE`] is available.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::pool::{PoolError, acquire};
use crate::color::Color;
use crate::consts::{MAX_PARTICLE_BURSTS, MAX_PARTICLES_PER_BURST};
use crate::math::{lerp, random_unit_vector};
use crate::tuning::Tuning;

/// Sentinel `elapsed` value of an unused burst
pub const FREE: f32 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

type ParticleSlots = [Particle; MAX_PARTICLES_PER_BURST];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleBurst {
    /// Seconds since the burst started, or [`FREE`]
    pub elapsed: f32,
    pub color: Color,
    /// Slots `0..count` are live
    #[serde(serialize_with = "save_slots", deserialize_with = "load_slots")]
    particles: ParticleSlots,
    count: usize,
}

impl Default for ParticleBurst {
    fn default() -> Self {
        Self {
            elapsed: FREE,
            color: Color::WHITE,
            particles: [Particle::default(); MAX_PARTICLES_PER_BURST],
            count: 0,
        }
    }
}

impl ParticleBurst {
    #[inline]
    pub fn is_free(&self) -> bool {
        self.elapsed == FREE
    }

    /// Particles emitted by this burst
    pub fn particles(&self) -> &[Particle] {
        &self.particles[..self.count]
    }
}

// serde derives stop at 32-element arrays
fn save_slots<S: Serializer>(slots: &ParticleSlots, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(slots.iter())
}

fn load_slots<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ParticleSlots, D::Error> {
    let slots = Vec::<Particle>::deserialize(deserializer)?;
    let len = slots.len();
    slots
        .try_into()
        .map_err(|_| serde::de::Error::invalid_length(len, &"one entry per particle slot"))
}

/// Fixed pool of particle bursts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Particles {
    bursts: [ParticleBurst; MAX_PARTICLE_BURSTS],
}

impl Particles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        for burst in &mut self.bursts {
            burst.elapsed = FREE;
            burst.count = 0;
        }
    }

    /// Start a burst of `count` particles at `pos` in the first free slot
    ///
    /// `count` is capped at `MAX_PARTICLES_PER_BURST`. Every particle gets its
    /// own uniformly random direction at `tuning.particle_speed`.
    pub fn play_burst<R: Rng + ?Sized>(
        &mut self,
        pos: Vec2,
        color: Color,
        count: usize,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Result<usize, PoolError> {
        let idx = acquire(&self.bursts, "particle bursts", ParticleBurst::is_free)?;
        let burst = &mut self.bursts[idx];
        burst.elapsed = 0.0;
        burst.color = color;
        burst.count = count.min(MAX_PARTICLES_PER_BURST);
        for particle in &mut burst.particles[..burst.count] {
            *particle = Particle {
                pos,
                vel: random_unit_vector(rng) * tuning.particle_speed,
            };
        }
        Ok(idx)
    }

    /// Age bursts, move their particles, free the finished ones
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        for burst in self.bursts.iter_mut().filter(|b| !b.is_free()) {
            burst.elapsed += dt;
            let percent = burst.elapsed / tuning.burst_duration;
            burst.color = burst.color.with_alpha(lerp(255.0, 0.0, percent));

            for particle in &mut burst.particles[..burst.count] {
                particle.pos += particle.vel * dt;
            }

            if percent >= 1.0 {
                burst.elapsed = FREE;
            }
        }
    }

    pub fn bursts(&self) -> &[ParticleBurst] {
        &self.bursts
    }

    pub fn active(&self) -> impl Iterator<Item = &ParticleBurst> {
        self.bursts.iter().filter(|b| !b.is_free())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}
