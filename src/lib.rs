//! Actor-motion core of a grid-rolling puzzle game.
//!
//! Directional input becomes a cube tumbling exactly one cell per 90° roll,
//! with buffered follow-ups, auto-roll and cancel handled by a small state
//! machine that is independent of frame rate.

pub mod core;
pub mod engine;
pub mod game;
