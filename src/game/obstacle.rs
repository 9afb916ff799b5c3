//! Spike Obstacles
//!
//! Static spike hitboxes sharing one invulnerability/blink state machine.
//! After a hit the whole set becomes invulnerable for a fixed window and
//! blinks by toggling visibility; rendering consults `visible` while
//! collision only consults `active`, so spikes stay collidable while
//! blinked out.
//!
//! States: Vulnerable, Invulnerable-Visible, Invulnerable-Hidden. The two
//! invulnerable states alternate on the blink timer; expiry of the
//! invulnerability timer forces Vulnerable with visibility restored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::SimConfig;
use crate::core::geom::Rect;
use crate::core::vec2::Vec2;

/// Spike variant, fixing the hitbox size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpikeKind {
    /// Low spike strip, 64x24
    Short,
    /// Tall spike strip, 64x48
    Long,
}

impl SpikeKind {
    /// Hitbox width.
    pub fn width(self) -> f32 {
        64.0
    }

    /// Hitbox height.
    pub fn height(self) -> f32 {
        match self {
            SpikeKind::Short => 24.0,
            SpikeKind::Long => 48.0,
        }
    }
}

/// The level's spike set and its shared hit-cooldown state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Obstacle {
    spikes: Vec<Rect>,

    /// Whether the spike set participates in collision at all.
    pub active: bool,

    invulnerable: bool,
    invulnerability_timer: f32,
    invulnerability_duration: f32,
    blink_timer: f32,
    blink_interval: f32,
    visible: bool,
}

impl Obstacle {
    /// Create an empty, active spike set with timers from `config`.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            spikes: Vec::new(),
            active: true,
            invulnerable: false,
            invulnerability_timer: 0.0,
            invulnerability_duration: config.invulnerability_duration,
            blink_timer: 0.0,
            blink_interval: config.blink_interval,
            visible: true,
        }
    }

    /// Add a spike hitbox at `position`.
    pub fn add_spike(&mut self, position: Vec2, kind: SpikeKind) {
        self.spikes.push(Rect {
            x: position.x,
            y: position.y,
            w: kind.width(),
            h: kind.height(),
        });
    }

    /// All spike hitboxes intersecting `bounds`, or nothing when the set
    /// is inactive.
    pub fn overlapping(&self, bounds: &Rect) -> Vec<Rect> {
        if !self.active {
            return Vec::new();
        }
        self.spikes
            .iter()
            .filter(|spike| bounds.intersects(spike))
            .copied()
            .collect()
    }

    /// Whether any spike intersects `bounds` (inactive sets never hit).
    pub fn any_overlap(&self, bounds: &Rect) -> bool {
        self.active && self.spikes.iter().any(|spike| bounds.intersects(spike))
    }

    /// All spike hitboxes.
    pub fn spikes(&self) -> &[Rect] {
        &self.spikes
    }

    /// Whether the hit-cooldown window is open.
    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    /// Whether the spikes should be drawn this frame.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Arm the blink cycle. Called when a hit lands while vulnerable.
    pub fn arm_blink(&mut self) {
        self.blink_timer = self.blink_interval;
    }

    /// Open (or renew) the invulnerability window. Returns true when the
    /// window was closed before, i.e. this call opened it.
    pub fn refresh_invulnerability(&mut self) -> bool {
        let opened = !self.invulnerable;
        self.invulnerable = true;
        self.invulnerability_timer = self.invulnerability_duration;
        opened
    }

    /// Advance the timers by `dt` seconds. Returns true when the
    /// invulnerability window expired on this call.
    ///
    /// On expiry visibility is forced back on and the blink toggle is
    /// skipped, so `!invulnerable` always implies `visible`.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.invulnerable {
            return false;
        }

        self.invulnerability_timer -= dt;
        if self.invulnerability_timer <= 0.0 {
            self.invulnerable = false;
            self.visible = true;
            debug!("spike invulnerability expired");
            return true;
        }

        self.blink_timer -= dt;
        if self.blink_timer <= 0.0 {
            self.visible = !self.visible;
            self.blink_timer = self.blink_interval;
        }

        false
    }

    /// Clear cooldown state for level (re)entry.
    pub fn reset(&mut self) {
        self.invulnerable = false;
        self.visible = true;
        self.invulnerability_timer = 0.0;
        self.blink_timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn spiked_obstacle() -> Obstacle {
        let mut obstacle = Obstacle::new(&SimConfig::default());
        obstacle.add_spike(Vec2::new(300.0, 632.0), SpikeKind::Short);
        obstacle.add_spike(Vec2::new(800.0, 608.0), SpikeKind::Long);
        obstacle
    }

    #[test]
    fn test_spike_sizes() {
        let obstacle = spiked_obstacle();
        assert_eq!(obstacle.spikes()[0].h, 24.0);
        assert_eq!(obstacle.spikes()[1].h, 48.0);
        assert_eq!(obstacle.spikes()[0].w, 64.0);
    }

    #[test]
    fn test_inactive_set_never_collides() {
        let mut obstacle = spiked_obstacle();
        let bounds = Rect::new(290.0, 600.0, 45.0, 100.0).unwrap();
        assert!(obstacle.any_overlap(&bounds));

        obstacle.active = false;
        assert!(!obstacle.any_overlap(&bounds));
        assert!(obstacle.overlapping(&bounds).is_empty());
    }

    #[test]
    fn test_refresh_reports_rising_edge() {
        let mut obstacle = spiked_obstacle();
        assert!(obstacle.refresh_invulnerability());
        assert!(!obstacle.refresh_invulnerability());
        assert!(obstacle.is_invulnerable());
    }

    #[test]
    fn test_blink_toggles_visibility() {
        let mut obstacle = spiked_obstacle();
        obstacle.arm_blink();
        obstacle.refresh_invulnerability();
        assert!(obstacle.is_visible());

        // 0.15s blink interval: after 10 frames (~0.167s) visibility flips.
        for _ in 0..10 {
            obstacle.advance(DT);
        }
        assert!(!obstacle.is_visible());

        // Another interval flips it back.
        for _ in 0..10 {
            obstacle.advance(DT);
        }
        assert!(obstacle.is_visible());
    }

    #[test]
    fn test_collidable_while_blinked_out() {
        let mut obstacle = spiked_obstacle();
        obstacle.arm_blink();
        obstacle.refresh_invulnerability();
        for _ in 0..10 {
            obstacle.advance(DT);
        }
        assert!(!obstacle.is_visible());

        let bounds = Rect::new(290.0, 600.0, 45.0, 100.0).unwrap();
        assert!(obstacle.any_overlap(&bounds));
    }

    #[test]
    fn test_expiry_forces_visible_regardless_of_blink_phase() {
        let mut obstacle = spiked_obstacle();
        obstacle.arm_blink();
        obstacle.refresh_invulnerability();

        // Walk exactly 2.0s of simulated time. The 1/64s step keeps the
        // timer arithmetic exact in f32, so expiry lands on step 128
        // precisely, no matter where the blink phase is at that instant.
        let exact_dt = 1.0 / 64.0;
        let mut ended = false;
        for _ in 0..128 {
            assert!(!ended);
            ended = obstacle.advance(exact_dt);
        }
        assert!(ended);
        assert!(!obstacle.is_invulnerable());
        assert!(obstacle.is_visible());
    }

    #[test]
    fn test_vulnerable_implies_visible_invariant() {
        let mut obstacle = spiked_obstacle();
        obstacle.arm_blink();
        obstacle.refresh_invulnerability();

        for _ in 0..200 {
            obstacle.advance(DT);
            if !obstacle.is_invulnerable() {
                assert!(obstacle.is_visible());
            }
        }
    }

    #[test]
    fn test_advance_noop_while_vulnerable() {
        let mut obstacle = spiked_obstacle();
        assert!(!obstacle.advance(DT));
        assert!(obstacle.is_visible());
        assert!(!obstacle.is_invulnerable());
    }

    #[test]
    fn test_reset_clears_cooldown() {
        let mut obstacle = spiked_obstacle();
        obstacle.arm_blink();
        obstacle.refresh_invulnerability();
        for _ in 0..10 {
            obstacle.advance(DT);
        }

        obstacle.reset();
        assert!(!obstacle.is_invulnerable());
        assert!(obstacle.is_visible());
    }
}
