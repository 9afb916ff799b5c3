//! Per-Frame Simulation Step
//!
//! The orchestration loop run once per rendered frame: key and door
//! checks against the previous frame's resolved position, spike cooldown
//! timers, movement integration, collision resolution, screen clamp.
//! Events generated along the way
//! are returned in the frame result; the level latches its terminal
//! states and further steps become no-ops.

use crate::core::geom::GeometryError;
use crate::game::collision;
use crate::game::events::FrameEvent;
use crate::game::intent::{IntentFrame, IntentRecording};
use crate::game::level::{Level, LevelId};

/// Result of one simulation step.
#[derive(Debug, Default)]
pub struct FrameResult {
    /// Events generated this frame
    pub events: Vec<FrameEvent>,
    /// Whether the run ended this frame
    pub game_over: bool,
    /// Whether the stage was completed this frame
    pub stage_complete: bool,
}

/// Advance the level by one frame.
///
/// `intent` is this frame's one-shot input; `dt` is the elapsed seconds
/// since the previous frame. Once the level is finished the call returns
/// an empty result without touching any state.
pub fn step(level: &mut Level, intent: IntentFrame, dt: f32) -> FrameResult {
    let mut result = FrameResult::default();
    if level.is_finished() {
        return result;
    }

    level.frame += 1;
    let frame = level.frame;
    let mut events = Vec::new();

    // Pickup and door checks see the position the previous frame settled
    // on, before this frame's movement.
    if level
        .key
        .try_collect(level.player.position, level.config.key_pickup_radius)
    {
        events.push(FrameEvent::key_collected(frame));
        events.push(FrameEvent::door_opened(frame));
    }

    let bounds = level.player.bounds(&level.config);
    let door_reached = level.door.try_access(level.key.collected, &bounds);

    if level.obstacle.advance(dt) {
        events.push(FrameEvent::invulnerability_ended(frame));
    }

    level.player.integrate(dt, intent, &level.config);

    collision::resolve(
        &mut level.player,
        &mut level.health,
        &mut level.obstacle,
        &level.platforms,
        &level.lava,
        &level.config,
        frame,
        &mut events,
    );

    level.player.clamp_to_screen(&level.config);

    if events.iter().any(FrameEvent::is_game_over) {
        level.game_over = true;
        result.game_over = true;
    }

    if door_reached {
        level.stage_complete = true;
        result.stage_complete = true;
        events.push(FrameEvent::stage_complete(frame));
    }

    result.events = events;
    result
}

/// Re-run a recorded intent stream against a fresh level.
///
/// Returns the final level state and the concatenated event log. With
/// the same recording, configuration, and `dt`, the outcome is identical
/// on every run.
pub fn replay(
    id: LevelId,
    recording: &IntentRecording,
    dt: f32,
) -> Result<(Level, Vec<FrameEvent>), GeometryError> {
    let mut level = Level::load(id, Default::default())?;
    let mut all_events = Vec::new();

    for (_, intent) in recording.frames() {
        let result = step(&mut level, intent, dt);
        all_events.extend(result.events);
        if result.game_over || result.stage_complete {
            break;
        }
    }

    Ok((level, all_events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimConfig;
    use crate::core::vec2::Vec2;
    use crate::game::events::FrameEventData;

    const DT: f32 = 1.0 / 60.0;

    fn load(id: LevelId) -> Level {
        Level::load(id, SimConfig::default()).unwrap()
    }

    #[test]
    fn test_spawn_settles_onto_ground() {
        let mut level = load(LevelId::One);
        let result = step(&mut level, IntentFrame::new(), DT);

        // Spawn overlaps the ground run by 10 units; the first frame
        // snaps the player onto it.
        assert_eq!(level.player.position.y, 556.0);
        assert_eq!(level.player.velocity.y, 0.0);
        assert!(level.player.grounded);
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_grounded_walk_is_five_units_per_frame() {
        let mut level = load(LevelId::One);
        step(&mut level, IntentFrame::new(), DT);

        let x0 = level.player.position.x;
        step(&mut level, IntentFrame::with(false, true, false), DT);
        assert!((level.player.position.x - (x0 + 5.0)).abs() < 1e-3);
        assert!(level.player.grounded);
    }

    #[test]
    fn test_walk_to_door_without_key_does_not_complete() {
        let mut level = load(LevelId::One);
        let right = IntentFrame::with(false, true, false);

        for _ in 0..300 {
            step(&mut level, right, DT);
        }

        // Clamped at the right screen edge, inside the door box, but the
        // key was never collected.
        assert_eq!(level.player.position.x, 1235.0);
        assert!(!level.stage_complete);
        assert_eq!(level.health.lives(), 3);
    }

    #[test]
    fn test_walk_to_door_with_key_completes() {
        let mut level = load(LevelId::One);
        level.key.collected = true;
        let right = IntentFrame::with(false, true, false);

        let mut completed = false;
        for _ in 0..300 {
            let result = step(&mut level, right, DT);
            if result.stage_complete {
                completed = true;
                assert!(result
                    .events
                    .iter()
                    .any(|e| e.data == FrameEventData::StageComplete));
                break;
            }
        }

        assert!(completed);
        assert!(level.is_finished());

        // Finished levels no longer step.
        let frame = level.frame;
        let result = step(&mut level, right, DT);
        assert!(result.events.is_empty());
        assert_eq!(level.frame, frame);
    }

    #[test]
    fn test_key_pickup_emits_events_once() {
        let mut level = load(LevelId::One);
        // Park the player inside the pickup radius.
        level.player.position = Vec2::new(536.0, 380.0);

        let result = step(&mut level, IntentFrame::new(), DT);
        assert!(result
            .events
            .iter()
            .any(|e| e.data == FrameEventData::KeyCollected));
        assert!(result
            .events
            .iter()
            .any(|e| e.data == FrameEventData::DoorOpened));

        // Still inside the radius next frame: no repeat.
        level.player.position = Vec2::new(536.0, 380.0);
        let result = step(&mut level, IntentFrame::new(), DT);
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_ceiling_bonk_under_floating_platform() {
        let mut level = load(LevelId::One);
        level.player.position = Vec2::new(500.0, 556.0);
        level.player.grounded = true;

        // Jump straight up under the floating run at y 480..544.
        step(&mut level, IntentFrame::with(false, false, true), DT);
        assert!(!level.player.grounded);

        step(&mut level, IntentFrame::new(), DT);
        assert_eq!(level.player.position.y, 544.0);
        assert_eq!(level.player.velocity.y, 0.0);
    }

    #[test]
    fn test_spike_course_costs_one_life_per_window() {
        let mut level = load(LevelId::Two);
        // Stand on the short spike at x 300..364.
        level.player.position = Vec2::new(310.0, 556.0);

        let mut lost = 0;
        for _ in 0..60 {
            let result = step(&mut level, IntentFrame::new(), DT);
            lost += result
                .events
                .iter()
                .filter(|e| matches!(e.data, FrameEventData::LifeLost { .. }))
                .count();
        }

        // One second of continuous overlap inside a two second window.
        assert_eq!(lost, 1);
        assert_eq!(level.health.lives(), 2);
    }

    #[test]
    fn test_invulnerability_ended_event_surfaces() {
        let mut level = load(LevelId::Two);
        level.player.position = Vec2::new(310.0, 556.0);

        // Take the hit, then walk clear and wait out the window.
        step(&mut level, IntentFrame::new(), DT);
        level.player.position = Vec2::new(600.0, 300.0);

        let mut ended = false;
        for _ in 0..240 {
            let result = step(&mut level, IntentFrame::new(), DT);
            if result
                .events
                .iter()
                .any(|e| e.data == FrameEventData::InvulnerabilityEnded)
            {
                ended = true;
                break;
            }
        }
        assert!(ended);
        assert!(!level.obstacle.is_invulnerable());
        assert!(level.obstacle.is_visible());
    }

    #[test]
    fn test_lava_fall_respawns_at_level_start() {
        let mut level = load(LevelId::Three);
        // Drop the player over the lava gap.
        level.player.position = Vec2::new(400.0, 600.0);

        let result = step(&mut level, IntentFrame::new(), DT);
        assert!(result
            .events
            .iter()
            .any(|e| matches!(e.data, FrameEventData::LifeLost { .. })));
        assert_eq!(level.player.position, Vec2::new(0.0, 566.0));
        assert_eq!(level.health.lives(), 2);
        assert!(!result.game_over);
    }

    #[test]
    fn test_game_over_latches_level() {
        let mut level = load(LevelId::Three);
        level.health.set_lives(0);
        level.player.position = Vec2::new(400.0, 600.0);

        let result = step(&mut level, IntentFrame::new(), DT);
        assert!(result.game_over);
        assert!(level.game_over);

        // Exactly one game over: the level refuses further steps.
        let result = step(&mut level, IntentFrame::new(), DT);
        assert!(result.events.is_empty());
        assert!(!result.game_over);
    }

    #[test]
    fn test_random_intents_hold_invariants() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let mut level = load(LevelId::Two);

        for _ in 0..600 {
            let intent =
                IntentFrame::with(rng.gen_bool(0.3), rng.gen_bool(0.5), rng.gen_bool(0.2));
            step(&mut level, intent, DT);
            if level.is_finished() {
                break;
            }

            assert!(level.health.lives() <= 3);
            let p = level.player.position;
            assert!(p.x >= 0.0 && p.x <= 1235.0);
            assert!(p.y >= 0.0 && p.y <= 620.0);
            if !level.obstacle.is_invulnerable() {
                assert!(level.obstacle.is_visible());
            }
        }
    }

    #[test]
    fn test_replay_is_deterministic() {
        let mut recording = IntentRecording::new();
        let right = IntentFrame::with(false, true, false);
        let jump_right = IntentFrame::with(false, true, true);
        for frame in 0..400u64 {
            let intent = if frame % 90 == 30 { jump_right } else { right };
            recording.record(frame, intent);
        }

        let (level_a, events_a) = replay(LevelId::Two, &recording, DT).unwrap();
        let (level_b, events_b) = replay(LevelId::Two, &recording, DT).unwrap();

        assert_eq!(level_a.player.position, level_b.player.position);
        assert_eq!(level_a.health.lives(), level_b.health.lives());
        assert_eq!(events_a, events_b);
    }

    #[test]
    fn test_replay_stops_on_terminal_state() {
        let mut recording = IntentRecording::new();
        recording.record(0, IntentFrame::with(false, true, false));
        recording.record(500, IntentFrame::new());

        let (level, _) = replay(LevelId::One, &recording, DT).unwrap();
        assert!(!level.is_finished());

        // A keyed run completes at the door and replay cuts off there.
        let mut keyed = Level::load(LevelId::One, SimConfig::default()).unwrap();
        keyed.key.collected = true;
        let mut frames_run = 0u64;
        for (_, intent) in recording.frames() {
            let result = step(&mut keyed, intent, DT);
            frames_run += 1;
            if result.stage_complete {
                break;
            }
        }
        assert!(keyed.stage_complete);
        assert!(frames_run < 300);
    }
}
