//! Player Intent
//!
//! One-shot movement intent produced by the input layer once per frame.
//! Each flag fires at most once on the frame it was set; the frame is
//! consumed by value during integration, so nothing lingers.
//!
//! `IntentRecording` stores an intent stream delta-compressed for replay:
//! a held key shows up as identical consecutive frames and collapses to a
//! single entry.

use serde::{Deserialize, Serialize};

/// One frame of player intent, packed as bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentFrame {
    /// Intent flags (packed bits):
    /// - Bit 0: move left this frame
    /// - Bit 1: move right this frame
    /// - Bit 2: jump this frame
    pub flags: u8,
}

impl IntentFrame {
    /// Move-left flag bit
    pub const FLAG_LEFT: u8 = 0x01;

    /// Move-right flag bit
    pub const FLAG_RIGHT: u8 = 0x02;

    /// Jump flag bit
    pub const FLAG_JUMP: u8 = 0x04;

    /// Create an idle frame.
    pub const fn new() -> Self {
        Self { flags: 0 }
    }

    /// Create a frame from individual flags.
    pub const fn with(left: bool, right: bool, jump: bool) -> Self {
        let mut flags = 0u8;
        if left {
            flags |= Self::FLAG_LEFT;
        }
        if right {
            flags |= Self::FLAG_RIGHT;
        }
        if jump {
            flags |= Self::FLAG_JUMP;
        }
        Self { flags }
    }

    /// Check the move-left flag.
    #[inline]
    pub fn move_left(&self) -> bool {
        self.flags & Self::FLAG_LEFT != 0
    }

    /// Check the move-right flag.
    #[inline]
    pub fn move_right(&self) -> bool {
        self.flags & Self::FLAG_RIGHT != 0
    }

    /// Check the jump flag.
    #[inline]
    pub fn jump(&self) -> bool {
        self.flags & Self::FLAG_JUMP != 0
    }

    /// Check if this frame carries no intent.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.flags == 0
    }

    /// Set the move-left flag.
    #[inline]
    pub fn set_left(&mut self, pressed: bool) {
        if pressed {
            self.flags |= Self::FLAG_LEFT;
        } else {
            self.flags &= !Self::FLAG_LEFT;
        }
    }

    /// Set the move-right flag.
    #[inline]
    pub fn set_right(&mut self, pressed: bool) {
        if pressed {
            self.flags |= Self::FLAG_RIGHT;
        } else {
            self.flags &= !Self::FLAG_RIGHT;
        }
    }

    /// Set the jump flag.
    #[inline]
    pub fn set_jump(&mut self, pressed: bool) {
        if pressed {
            self.flags |= Self::FLAG_JUMP;
        } else {
            self.flags &= !Self::FLAG_JUMP;
        }
    }
}

/// An intent change point within a recording.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IntentDelta {
    /// Frame the new intent state began on
    pub frame: u64,
    /// The new intent state
    pub intent: IntentFrame,
}

/// Delta-compressed intent stream for one level attempt.
///
/// Replaying the recording through [`replay`](crate::game::frame::replay)
/// reproduces the run exactly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IntentRecording {
    /// Last recorded frame number
    pub end_frame: u64,

    /// Change points, ascending by frame
    deltas: Vec<IntentDelta>,

    /// Last recorded intent (for delta comparison)
    #[serde(skip)]
    last: IntentFrame,
}

impl IntentRecording {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the intent for a frame. Only stores a delta when the intent
    /// changed from the previous frame.
    pub fn record(&mut self, frame: u64, intent: IntentFrame) {
        self.end_frame = frame;

        if self.deltas.is_empty() || intent != self.last {
            self.deltas.push(IntentDelta { frame, intent });
            self.last = intent;
        }
    }

    /// Get the intent in effect at a frame.
    pub fn intent_at(&self, frame: u64) -> IntentFrame {
        let idx = self.deltas.partition_point(|d| d.frame <= frame);
        if idx == 0 {
            IntentFrame::new()
        } else {
            self.deltas[idx - 1].intent
        }
    }

    /// Number of stored change points.
    pub fn delta_count(&self) -> usize {
        self.deltas.len()
    }

    /// Iterate frame-by-frame from frame 0 through `end_frame`.
    pub fn frames(&self) -> impl Iterator<Item = (u64, IntentFrame)> + '_ {
        (0..=self.end_frame).map(|frame| (frame, self.intent_at(frame)))
    }
}
