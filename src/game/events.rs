//! Frame Events
//!
//! Domain events emitted during simulation. The simulation never calls
//! back into the shell; it pushes events into a per-frame outbox that the
//! owning screen layer drains from [`FrameResult`](crate::game::frame::FrameResult).

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;

/// What dealt the damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageCause {
    /// Spike hitbox overlap
    Spike,
    /// Lava field overlap
    Lava,
}

/// Frame event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FrameEventData {
    /// Player lost a life
    LifeLost {
        /// Source of the damage
        cause: DamageCause,
        /// Lives left after the decrement
        remaining: u32,
    },

    /// Player was moved back to the respawn point after a lava hit
    Respawned {
        /// Position the player was placed at
        position: Vec2,
    },

    /// Spike invulnerability window opened
    InvulnerabilityStarted,

    /// Spike invulnerability window expired
    InvulnerabilityEnded,

    /// Player picked up the level key
    KeyCollected,

    /// Exit door unlocked (key in hand)
    DoorOpened,

    /// Player reached the open door; level is complete
    StageComplete,

    /// Lives are exhausted; terminal for the level
    GameOver {
        /// Damage source that ended the run
        cause: DamageCause,
    },
}

/// A frame event with the frame number it occurred on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameEvent {
    /// Frame counter value when the event fired
    pub frame: u64,

    /// Event data
    pub data: FrameEventData,
}

impl FrameEvent {
    /// Create a new event.
    pub fn new(frame: u64, data: FrameEventData) -> Self {
        Self { frame, data }
    }

    /// Create a life lost event.
    pub fn life_lost(frame: u64, cause: DamageCause, remaining: u32) -> Self {
        Self::new(frame, FrameEventData::LifeLost { cause, remaining })
    }

    /// Create a respawn event.
    pub fn respawned(frame: u64, position: Vec2) -> Self {
        Self::new(frame, FrameEventData::Respawned { position })
    }

    /// Create an invulnerability window opened event.
    pub fn invulnerability_started(frame: u64) -> Self {
        Self::new(frame, FrameEventData::InvulnerabilityStarted)
    }

    /// Create an invulnerability window expired event.
    pub fn invulnerability_ended(frame: u64) -> Self {
        Self::new(frame, FrameEventData::InvulnerabilityEnded)
    }

    /// Create a key pickup event.
    pub fn key_collected(frame: u64) -> Self {
        Self::new(frame, FrameEventData::KeyCollected)
    }

    /// Create a door unlocked event.
    pub fn door_opened(frame: u64) -> Self {
        Self::new(frame, FrameEventData::DoorOpened)
    }

    /// Create a stage complete event.
    pub fn stage_complete(frame: u64) -> Self {
        Self::new(frame, FrameEventData::StageComplete)
    }

    /// Create a game over event.
    pub fn game_over(frame: u64, cause: DamageCause) -> Self {
        Self::new(frame, FrameEventData::GameOver { cause })
    }

    /// Whether this event ends the run.
    pub fn is_game_over(&self) -> bool {
        matches!(self.data, FrameEventData::GameOver { .. })
    }
}
