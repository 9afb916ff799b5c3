//! Lavagate Demo
//!
//! Runs the three levels with a scripted driver and verifies that a
//! recorded run replays to the identical outcome.

use anyhow::Result;
use tracing::{info, Level as LogLevel};
use tracing_subscriber::FmtSubscriber;

use lavagate::{
    game::frame, FrameEvent, IntentFrame, IntentRecording, Level, LevelId, SimConfig, Vec2,
    FRAME_DT, FRAME_RATE, VERSION,
};

/// Frame budget per level attempt (60 seconds).
const MAX_FRAMES: u64 = 3600;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LogLevel::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Lavagate v{}", VERSION);
    info!("Frame rate: {} Hz", FRAME_RATE);

    for id in LevelId::ALL {
        run_level(id)?;
    }

    Ok(())
}

/// Steer toward the key, then toward the door.
fn drive(level: &Level) -> IntentFrame {
    let target = if level.key.collected {
        Vec2::new(level.door.bounds.x, level.door.bounds.y)
    } else {
        level.key.position
    };

    let mut intent = IntentFrame::new();
    let dx = target.x - level.player.position.x;
    if dx < -2.0 {
        intent.set_left(true);
    } else if dx > 2.0 {
        intent.set_right(true);
    }
    if level.player.grounded && target.y < level.player.position.y - 10.0 {
        intent.set_jump(true);
    }
    intent
}

/// Play one level with the scripted driver, then replay the recording
/// and check the outcome matches.
fn run_level(id: LevelId) -> Result<()> {
    info!("=== Level {:?} ===", id);

    let mut level = Level::load(id, SimConfig::default())?;
    let mut recording = IntentRecording::new();
    let mut events: Vec<FrameEvent> = Vec::new();

    for frame_no in 0..MAX_FRAMES {
        let intent = drive(&level);
        recording.record(frame_no, intent);

        let result = frame::step(&mut level, intent, FRAME_DT);
        for event in &result.events {
            info!(frame = event.frame, "{:?}", event.data);
        }
        events.extend(result.events);

        if level.is_finished() {
            break;
        }
    }

    let outcome = if level.stage_complete {
        "stage complete"
    } else if level.game_over {
        "game over"
    } else {
        "out of time"
    };
    info!(
        frames = level.frame,
        lives = level.health.lives(),
        "Level {:?}: {}",
        id,
        outcome
    );
    info!(
        "Recording: {} frames in {} deltas ({})",
        recording.end_frame + 1,
        recording.delta_count(),
        serde_json::to_string(&recording.intent_at(0))?,
    );

    // Verify determinism by replaying
    let (replayed, replay_events) = frame::replay(id, &recording, FRAME_DT)?;
    if replayed.player.position == level.player.position && replay_events == events {
        info!("Replay verified: identical outcome");
    } else {
        info!("Replay mismatch: determinism violated!");
    }

    Ok(())
}
