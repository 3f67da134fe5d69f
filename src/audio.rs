//! Sound effect triggers
//!
//! The simulation never plays sounds itself. It records [`GameEvent`]s and the
//! frame driver forwards them here; whatever backend implements [`AudioSink`]
//! does the actual playback.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits an arena edge
    BallHit,
    /// Objective collected
    ObjectiveCollect,
    /// Game over and restart
    Restart,
}

impl SoundEffect {
    /// Name of the preloaded sound asset
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::BallHit => "sfx_ball_hit.wav",
            SoundEffect::ObjectiveCollect => "sfx_objective_collect.wav",
            SoundEffect::Restart => "sfx_scratch.wav",
        }
    }

    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BallBounced { .. } => Some(SoundEffect::BallHit),
            GameEvent::ObjectiveCollected { .. } => Some(SoundEffect::ObjectiveCollect),
            GameEvent::GameOver { .. } | GameEvent::Restarted => Some(SoundEffect::Restart),
            _ => None,
        }
    }
}

/// Fire-and-forget playback of preloaded sounds
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Play the sound for every event of the last tick, in order
pub fn play_events(events: &[GameEvent], sink: &mut impl AudioSink) {
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play(effect);
    }
}

/// Logs each sound at trace level and counts them (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: usize,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played += 1;
        log::trace!("play {}", effect.asset_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder(Vec<SoundEffect>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    #[test]
    fn test_play_events_maps_in_order() {
        let events = [
            GameEvent::BallSpawned { index: 0 },
            GameEvent::BallBounced {
                index: 0,
                pos: Vec2::ZERO,
            },
            GameEvent::ObjectiveCollected {
                index: 2,
                pos: Vec2::ONE,
            },
            GameEvent::GroupCleared,
            GameEvent::GameOver {
                collected: 3,
                high_score: 3,
            },
        ];
        let mut recorder = Recorder::default();
        play_events(&events, &mut recorder);
        assert_eq!(
            recorder.0,
            vec![
                SoundEffect::BallHit,
                SoundEffect::ObjectiveCollect,
                SoundEffect::Restart
            ]
        );
    }

    #[test]
    fn test_log_audio_counts() {
        let mut audio = LogAudio::default();
        play_events(&[GameEvent::Restarted], &mut audio);
        assert_eq!(audio.played, 1);
    }
}
