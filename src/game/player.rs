//! Player Kinematics
//!
//! Position, velocity, and grounding for the player character. Walking
//! applies a `speed * dt` positional impulse, while gravity and the jump
//! kick are per-frame velocity terms that are NOT dt-scaled, and
//! integration adds velocity straight onto position once per frame.
//! Horizontal velocity is therefore always zero after a frame; walking
//! never carries momentum.

use serde::{Deserialize, Serialize};

use crate::core::config::SimConfig;
use crate::core::geom::Rect;
use crate::core::vec2::Vec2;
use crate::game::intent::IntentFrame;

/// The player character's kinematic state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the player box
    pub position: Vec2,

    /// Per-frame velocity; `x` is zeroed after every integration
    pub velocity: Vec2,

    /// Resting on top of a platform; jumping requires this
    pub grounded: bool,

    /// Position at level entry
    pub spawn: Vec2,

    /// Point the player is moved to after a lava hit
    pub respawn_point: Vec2,
}

impl Player {
    /// Create a player at its level spawn point.
    pub fn new(spawn: Vec2, respawn_point: Vec2) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            grounded: false,
            spawn,
            respawn_point,
        }
    }

    /// Advance one frame of movement from intent and gravity.
    ///
    /// The intent frame is consumed by value; its flags fire exactly once.
    pub fn integrate(&mut self, dt: f32, intent: IntentFrame, config: &SimConfig) {
        if intent.move_left() {
            self.position.x -= config.walk_speed * dt;
        }
        if intent.move_right() {
            self.position.x += config.walk_speed * dt;
        }

        if intent.jump() && self.grounded {
            self.velocity.y = config.jump_kick;
            self.grounded = false;
        }

        // Per-frame terms, deliberately not scaled by dt.
        self.velocity.y += config.gravity;
        self.velocity.x = 0.0;
        self.position += self.velocity;
    }

    /// Current bounding box.
    pub fn bounds(&self, config: &SimConfig) -> Rect {
        Rect {
            x: self.position.x,
            y: self.position.y,
            w: config.player_width,
            h: config.player_height,
        }
    }

    /// Clamp the position into the playable screen area. Called after
    /// collision resolution each frame.
    pub fn clamp_to_screen(&mut self, config: &SimConfig) {
        self.position = config.clamp_to_screen(self.position);
    }

    /// Move back to the respawn point and stop.
    pub fn respawn(&mut self) {
        self.position = self.respawn_point;
        self.velocity = Vec2::ZERO;
    }

    /// Reinitialize position and velocity for level (re)entry.
    pub fn reset_for_new_level(&mut self) {
        self.position = self.spawn;
        self.velocity = Vec2::ZERO;
        self.grounded = false;
    }
}
