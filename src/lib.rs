//! # Lavagate
//!
//! Deterministic simulation core of a small 2D platformer: a player
//! crosses platforms, spikes, and lava to collect a key and reach the
//! exit door, across three hand-authored levels.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         LAVAGATE                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Simulation primitives                   │
//! │  ├── vec2.rs      - Float 2D vector                         │
//! │  ├── geom.rs      - Validated axis-aligned rectangles       │
//! │  └── config.rs    - Tuning constants (screen, speeds, lives)│
//! │                                                             │
//! │  game/            - Frame-stepped game logic                │
//! │  ├── intent.rs    - One-shot input flags and recordings     │
//! │  ├── player.rs    - Kinematics: walk, jump, gravity         │
//! │  ├── geometry.rs  - Platform and lava tile fields           │
//! │  ├── obstacle.rs  - Spikes + invulnerability/blink machine  │
//! │  ├── health.rs    - Clamped life counter                    │
//! │  ├── collision.rs - Side-disambiguated resolution           │
//! │  ├── events.rs    - Domain event outbox                     │
//! │  ├── level.rs     - The three level layouts                 │
//! │  └── frame.rs     - Per-frame step and replay               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! The simulation is single-threaded and frame-stepped. All state is
//! mutated inside one `step` call per frame, geometry is immutable for
//! the duration of a level, and replaying a recorded intent stream with
//! the same configuration reproduces every position, life count, and
//! event.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::config::SimConfig;
pub use crate::core::geom::{GeometryError, Rect};
pub use crate::core::vec2::Vec2;
pub use game::events::{DamageCause, FrameEvent, FrameEventData};
pub use game::frame::{replay, step, FrameResult};
pub use game::intent::{IntentFrame, IntentRecording};
pub use game::level::{Level, LevelId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Nominal simulation rate (Hz)
pub const FRAME_RATE: u32 = 60;

/// Nominal frame duration in seconds
pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;
