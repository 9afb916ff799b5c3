//! Game Logic
//!
//! The frame-stepped platformer simulation: intent, kinematics,
//! collision resolution, lives, spikes, levels, and the event outbox.

pub mod collision;
pub mod events;
pub mod frame;
pub mod geometry;
pub mod health;
pub mod intent;
pub mod level;
pub mod obstacle;
pub mod player;
