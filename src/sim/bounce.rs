//! Bounce effects: expanding rings left behind where a ball hits a wall
//!
//! Purely visual. Exhausting the pool never affects ball physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pool::{PoolError, acquire};
use crate::color::Color;
use crate::consts::MAX_BOUNCE_EFFECTS;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BounceEffect {
    /// Seconds left; `<= 0` means the slot is free
    pub remaining: f32,
    pub pos: Vec2,
    pub color: Color,
}

impl BounceEffect {
    #[inline]
    pub fn is_free(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Fraction of lifetime left, 1 when fresh and 0 when expired
    pub fn life(&self, duration: f32) -> f32 {
        (self.remaining / duration).clamp(0.0, 1.0)
    }
}

/// Fixed pool of bounce effects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BounceEffects {
    slots: [BounceEffect; MAX_BOUNCE_EFFECTS],
}

impl BounceEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.remaining = 0.0;
        }
    }

    /// Claim the first free slot. Returns its index.
    pub fn spawn(&mut self, pos: Vec2, color: Color, duration: f32) -> Result<usize, PoolError> {
        let idx = acquire(&self.slots, "bounce effects", BounceEffect::is_free)?;
        self.slots[idx] = BounceEffect {
            remaining: duration,
            pos,
            color,
        };
        Ok(idx)
    }

    /// Age every occupied slot
    pub fn update(&mut self, dt: f32) {
        for slot in self.slots.iter_mut().filter(|s| !s.is_free()) {
            slot.remaining -= dt;
        }
    }

    pub fn slots(&self) -> &[BounceEffect] {
        &self.slots
    }

    pub fn active(&self) -> impl Iterator<Item = &BounceEffect> {
        self.slots.iter().filter(|s| !s.is_free())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_uses_first_free_slot() {
        let mut effects = BounceEffects::new();
        assert_eq!(effects.spawn(Vec2::ZERO, Color::WHITE, 1.5), Ok(0));
        assert_eq!(effects.spawn(Vec2::ONE, Color::WHITE, 1.5), Ok(1));

        // Slot 0 expires first and gets reused before slot 2
        effects.slots[0].remaining = 0.0;
        assert_eq!(effects.spawn(Vec2::X, Color::RED, 1.5), Ok(0));
        assert_eq!(effects.slots()[0].color, Color::RED);
    }

    #[test]
    fn test_exhaustion_is_reported() {
        let mut effects = BounceEffects::new();
        for i in 0..MAX_BOUNCE_EFFECTS {
            assert_eq!(effects.spawn(Vec2::ZERO, Color::WHITE, 1.5), Ok(i));
        }
        let err = effects.spawn(Vec2::ZERO, Color::WHITE, 1.5).unwrap_err();
        assert_eq!(
            err,
            PoolError::Exhausted {
                pool: "bounce effects",
                capacity: MAX_BOUNCE_EFFECTS
            }
        );
        assert_eq!(effects.active_count(), MAX_BOUNCE_EFFECTS);
    }

    #[test]
    fn test_decay_frees_slot() {
        let mut effects = BounceEffects::new();
        effects.spawn(Vec2::ZERO, Color::WHITE, 1.5).unwrap();
        effects.update(1.0);
        assert_eq!(effects.active_count(), 1);
        assert!((effects.slots()[0].life(1.5) - 1.0 / 3.0).abs() < 1e-5);
        effects.update(0.5);
        assert_eq!(effects.active_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut effects = BounceEffects::new();
        effects.spawn(Vec2::ZERO, Color::WHITE, 1.5).unwrap();
        effects.clear();
        assert_eq!(effects.active_count(), 0);
    }
}
