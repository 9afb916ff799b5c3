//! Hand-Authored Levels
//!
//! The three level layouts as data: platform runs, the lava strip,
//! spikes, and the key/door pair. A level owns every mutable piece of
//! simulation state for one attempt; nothing is shared across levels, so
//! re-entering a level always starts from a clean slate.

use serde::{Deserialize, Serialize};

use crate::core::config::SimConfig;
use crate::core::geom::{GeometryError, Rect};
use crate::core::vec2::Vec2;
use crate::game::geometry::TileField;
use crate::game::health::Health;
use crate::game::obstacle::{Obstacle, SpikeKind};
use crate::game::player::Player;

/// Platform and lava tiles are 64x64.
const TILE_SIZE: f32 = 64.0;

/// Exit door box, bottom flush with the ground platform top.
const DOOR_WIDTH: f32 = 70.0;
const DOOR_HEIGHT: f32 = 124.0;

/// Player start and lava respawn point, shared by all three levels.
const SPAWN: Vec2 = Vec2::new(0.0, 566.0);

/// Level selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelId {
    /// Platforms and the key only
    One,
    /// Adds the two spike strips
    Two,
    /// Adds the lava gap
    Three,
}

impl LevelId {
    /// All levels in play order.
    pub const ALL: [LevelId; 3] = [LevelId::One, LevelId::Two, LevelId::Three];
}

/// The collectible key. Picked up by proximity to the player position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Key {
    /// Key location
    pub position: Vec2,
    /// Whether the player holds the key
    pub collected: bool,
}

impl Key {
    fn new(position: Vec2) -> Self {
        Self {
            position,
            collected: false,
        }
    }

    /// Collect when the player is within the pickup radius. Returns true
    /// on the frame the key is picked up.
    pub fn try_collect(&mut self, player_position: Vec2, radius: f32) -> bool {
        if !self.collected && player_position.distance(self.position) < radius {
            self.collected = true;
            return true;
        }
        false
    }
}

/// The exit door. Locked until the key is collected; the stage completes
/// when the player touches the open door.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Door {
    /// Door box
    pub bounds: Rect,
    /// Whether the door has been reached with the key
    pub accessed: bool,
}

impl Door {
    fn new(position: Vec2) -> Result<Self, GeometryError> {
        Ok(Self {
            bounds: Rect::from_origin(position, DOOR_WIDTH, DOOR_HEIGHT)?,
            accessed: false,
        })
    }

    /// Open-door touch test. Returns true on the frame the stage is won.
    pub fn try_access(&mut self, key_collected: bool, player_bounds: &Rect) -> bool {
        if key_collected && !self.accessed && self.bounds.intersects(player_bounds) {
            self.accessed = true;
            return true;
        }
        false
    }
}

/// One playable level: static geometry plus all per-attempt state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Level {
    /// Which layout this is
    pub id: LevelId,
    /// Tuning constants for this level's simulation
    pub config: SimConfig,
    /// Player kinematic state
    pub player: Player,
    /// Life counter
    pub health: Health,
    /// Spike set and its cooldown state machine
    pub obstacle: Obstacle,
    /// Walkable platform tiles
    pub platforms: TileField,
    /// Lethal lava tiles
    pub lava: TileField,
    /// The collectible key
    pub key: Key,
    /// The exit door
    pub door: Door,
    /// Latched when the door is reached with the key
    pub stage_complete: bool,
    /// Latched when a game over event fires; the level stops stepping
    pub game_over: bool,
    /// Frame counter, incremented once per step
    pub frame: u64,
}

impl Level {
    /// Build a level layout with the given configuration.
    pub fn load(id: LevelId, config: SimConfig) -> Result<Self, GeometryError> {
        let spacing = config.tile_spacing;
        let mut platforms = TileField::new(TILE_SIZE, TILE_SIZE)?;
        let mut lava = TileField::new(TILE_SIZE, TILE_SIZE)?;
        let mut obstacle = Obstacle::new(&config);

        let key_position = match id {
            LevelId::One => {
                platforms.add_run(20, Vec2::new(0.0, 656.0), spacing);
                platforms.add_run(4, Vec2::new(450.0, 480.0), spacing);
                Vec2::new(536.0, 400.0)
            }
            LevelId::Two => {
                platforms.add_run(20, Vec2::new(0.0, 656.0), spacing);
                platforms.add_run(4, Vec2::new(450.0, 480.0), spacing);
                obstacle.add_spike(Vec2::new(300.0, 632.0), SpikeKind::Short);
                obstacle.add_spike(Vec2::new(800.0, 608.0), SpikeKind::Long);
                Vec2::new(536.0, 450.0)
            }
            LevelId::Three => {
                // Ground strips flank a 16-tile lava gap; floating
                // platforms cross it.
                platforms.add_run(2, Vec2::new(0.0, 656.0), spacing);
                lava.add_run(16, Vec2::new(128.0, 656.0), spacing);
                platforms.add_run(2, Vec2::new(250.0, 500.0), spacing);
                platforms.add_run(2, Vec2::new(1152.0, 656.0), spacing);
                platforms.add_run(1, Vec2::new(550.0, 400.0), spacing);
                platforms.add_run(1, Vec2::new(800.0, 300.0), spacing);
                Vec2::new(1050.0, 100.0)
            }
        };

        // Spikeless layouts keep their obstacle out of collision.
        obstacle.active = !obstacle.spikes().is_empty();

        let door = Door::new(Vec2::new(1170.0, 532.0))?;
        let player = Player::new(SPAWN, SPAWN);
        let health = Health::new(config.max_lives);

        Ok(Self {
            id,
            config,
            player,
            health,
            obstacle,
            platforms,
            lava,
            key: Key::new(key_position),
            door,
            stage_complete: false,
            game_over: false,
            frame: 0,
        })
    }

    /// Reset every per-attempt piece of state for a fresh try at this
    /// level: player position/velocity, lives, spike cooldown, key, door,
    /// and the terminal latches.
    pub fn reset_for_new_attempt(&mut self) {
        self.player.reset_for_new_level();
        self.health.reset();
        self.obstacle.reset();
        self.key.collected = false;
        self.door.accessed = false;
        self.stage_complete = false;
        self.game_over = false;
        self.frame = 0;
    }

    /// Whether the level has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.stage_complete || self.game_over
    }
}
