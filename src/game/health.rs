//! Life Tracking
//!
//! Current/maximum life count with saturating mutation. No error states:
//! out-of-range writes clamp.

use serde::{Deserialize, Serialize};

/// Player life counter, clamped to `[0, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    lives: u32,
    max: u32,
}

impl Health {
    /// Create a full health tracker.
    pub fn new(max: u32) -> Self {
        Self { lives: max, max }
    }

    /// Current life count.
    #[inline]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Maximum life count.
    #[inline]
    pub fn max_lives(&self) -> u32 {
        self.max
    }

    /// Whether no lives remain.
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.lives == 0
    }

    /// Remove one life, flooring at zero.
    pub fn reduce(&mut self) {
        if self.lives > 0 {
            self.lives -= 1;
        }
    }

    /// Restore to full.
    pub fn reset(&mut self) {
        self.lives = self.max;
    }

    /// Overwrite the life count, clamped into `[0, max]`.
    pub fn set_lives(&mut self, lives: i64) {
        self.lives = lives.clamp(0, i64::from(self.max)) as u32;
    }
}
