//! Collision Resolution
//!
//! Axis-aware resolution of player-vs-geometry overlap, run once per
//! frame after movement integration. Order within a frame: platforms,
//! then lava, then spikes. All three passes classify against the bounds
//! captured when resolution starts; platform repositioning accumulates
//! in tile list order but is not re-queried mid-pass.
//!
//! Side selection compares the player box to the tile's vertical midline
//! before falling back to the horizontal edges. This approximates
//! landed-on-top vs hit-from-below without swept tests; fast diagonal
//! entry into a corner can mis-classify. Known limitation, carried
//! forward deliberately (see tests).

use tracing::debug;

use crate::core::config::SimConfig;
use crate::core::geom::Rect;
use crate::game::events::{DamageCause, FrameEvent};
use crate::game::geometry::TileField;
use crate::game::health::Health;
use crate::game::obstacle::Obstacle;
use crate::game::player::Player;

/// Which side of a platform tile the player struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Player's bottom edge struck the tile: landing on top of it
    Bottom,
    /// Player's top edge struck the tile: ceiling hit from below
    Top,
    /// Player's left-side overlap: push out to the tile's left
    Left,
    /// Player's right-side overlap: push out to the tile's right
    Right,
}

/// Classify an overlap by the ordered tie-break the resolver applies.
///
/// First match wins: bottom edge above the tile midline, top edge below
/// it, then the horizontal fallbacks.
pub fn classify(player: &Rect, tile: &Rect) -> Side {
    let midline = tile.v_center();
    if player.bottom() < midline {
        Side::Bottom
    } else if player.top() > midline {
        Side::Top
    } else if player.left() < tile.left() {
        Side::Left
    } else {
        Side::Right
    }
}

/// Resolve all collisions for this frame.
///
/// Mutates player position/velocity/grounding, the life count, and the
/// spike cooldown state machine; pushes resulting domain events into
/// `events`. Game over is signalled as an event, never as an error.
#[allow(clippy::too_many_arguments)]
pub fn resolve(
    player: &mut Player,
    health: &mut Health,
    obstacle: &mut Obstacle,
    platforms: &TileField,
    lava: &TileField,
    config: &SimConfig,
    frame: u64,
    events: &mut Vec<FrameEvent>,
) {
    let bounds = player.bounds(config);

    resolve_platforms(&bounds, player, platforms, config);
    resolve_lava(&bounds, player, health, lava, frame, events);
    resolve_spikes(&bounds, health, obstacle, frame, events);
}

/// Sequentially resolve every overlapping platform tile.
///
/// Classification uses the bounds captured at pass start; position
/// mutations still accumulate tile-by-tile, so list order matters.
fn resolve_platforms(bounds: &Rect, player: &mut Player, platforms: &TileField, config: &SimConfig) {
    for tile in platforms.overlapping(bounds) {
        match classify(bounds, &tile) {
            Side::Bottom => {
                player.position.y = tile.top() - config.player_height;
                player.velocity.y = 0.0;
                player.grounded = true;
            }
            Side::Top => {
                player.velocity.y = 0.0;
                player.position.y = tile.bottom();
            }
            Side::Left => {
                player.position.x = tile.left() - config.player_width;
            }
            Side::Right => {
                player.position.x = tile.right();
            }
        }
    }
}

/// Lava has no grace period: every overlapping frame with lives left
/// costs a life and teleports the player back to the respawn point.
/// With no lives left it is game over instead; the position stays put.
fn resolve_lava(
    bounds: &Rect,
    player: &mut Player,
    health: &mut Health,
    lava: &TileField,
    frame: u64,
    events: &mut Vec<FrameEvent>,
) {
    if !lava.any_overlap(bounds) {
        return;
    }

    if health.lives() > 0 {
        health.reduce();
        debug!(remaining = health.lives(), "lava hit");
        events.push(FrameEvent::life_lost(frame, DamageCause::Lava, health.lives()));
        player.respawn();
        events.push(FrameEvent::respawned(frame, player.position));
    } else {
        events.push(FrameEvent::game_over(frame, DamageCause::Lava));
    }
}

/// Spike overlap decrements at most once per invulnerability window.
///
/// The vulnerability check runs before the decrement, so frames of
/// continued overlap inside the window cost nothing; they do renew the
/// window while lives remain. The player is never repositioned on the
/// spike path, including on game over.
fn resolve_spikes(
    bounds: &Rect,
    health: &mut Health,
    obstacle: &mut Obstacle,
    frame: u64,
    events: &mut Vec<FrameEvent>,
) {
    if !obstacle.any_overlap(bounds) {
        return;
    }

    if !obstacle.is_invulnerable() {
        health.reduce();
        obstacle.arm_blink();
        debug!(remaining = health.lives(), "spike hit");
        events.push(FrameEvent::life_lost(frame, DamageCause::Spike, health.lives()));
    }

    if health.lives() > 0 {
        if obstacle.refresh_invulnerability() {
            events.push(FrameEvent::invulnerability_started(frame));
        }
    } else {
        events.push(FrameEvent::game_over(frame, DamageCause::Spike));
    }
}
