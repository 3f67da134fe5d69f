//! Score bookkeeping
//!
//! In-memory only: the high score lives for the process lifetime.

use serde::{Deserialize, Serialize};

/// Current run's collected count plus the best count seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Objectives collected this run (reset on every Playing entry)
    pub collected: u32,
    /// Best `collected` of any run; never decreases
    pub high_score: u32,
    /// `high_score` as it stood when this run started
    pub previous_best: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one collection. Returns true if this raised the high score.
    pub fn record_collect(&mut self) -> bool {
        self.collected += 1;
        if self.collected > self.high_score {
            self.high_score = self.collected;
            true
        } else {
            false
        }
    }

    /// Fold the current run into the high score (game over)
    pub fn commit(&mut self) {
        self.high_score = self.high_score.max(self.collected);
    }

    /// Start a new run
    pub fn reset_run(&mut self) {
        self.collected = 0;
        self.previous_best = self.high_score;
    }

    /// Whether the current run is ahead of every earlier run
    ///
    /// Compares against the best of earlier runs, so it stays true for the rest
    /// of a record-setting run.
    pub fn is_setting_high_score(&self) -> bool {
        self.collected > self.previous_best
    }
}
