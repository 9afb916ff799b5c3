//! Simulation Configuration
//!
//! All tuning constants in one place, passed into the simulation at
//! construction. Note the split integration model under `Default`:
//! gravity and the jump kick are applied per frame without dt scaling,
//! while walking speed is in units per second.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;

/// Tuning constants for the platformer simulation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Screen width in world units
    pub screen_width: f32,
    /// Screen height in world units
    pub screen_height: f32,
    /// Player bounding box width
    pub player_width: f32,
    /// Player bounding box height
    pub player_height: f32,
    /// Horizontal walk speed, units per second
    pub walk_speed: f32,
    /// Downward velocity added every frame (NOT dt-scaled)
    pub gravity: f32,
    /// Instant upward velocity on jump (NOT dt-scaled, negative is up)
    pub jump_kick: f32,
    /// Seconds of spike invulnerability after a hit
    pub invulnerability_duration: f32,
    /// Seconds between visibility toggles while invulnerable
    pub blink_interval: f32,
    /// Lives at level start
    pub max_lives: u32,
    /// Pickup radius around the key, in world units
    pub key_pickup_radius: f32,
    /// Horizontal spacing between successive tiles in a run
    pub tile_spacing: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280.0,
            screen_height: 720.0,
            player_width: 45.0,
            player_height: 100.0,
            walk_speed: 300.0,
            gravity: 0.3,
            jump_kick: -10.0,
            invulnerability_duration: 2.0,
            blink_interval: 0.15,
            max_lives: 3,
            key_pickup_radius: 70.0,
            tile_spacing: 64.0,
        }
    }
}

impl SimConfig {
    /// Highest x the player's left edge may reach.
    #[inline]
    pub fn max_player_x(&self) -> f32 {
        self.screen_width - self.player_width
    }

    /// Highest y the player's top edge may reach.
    #[inline]
    pub fn max_player_y(&self) -> f32 {
        self.screen_height - self.player_height
    }

    /// Clamp a position into the playable screen area.
    pub fn clamp_to_screen(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.clamp(0.0, self.max_player_x()),
            position.y.clamp(0.0, self.max_player_y()),
        )
    }
}
