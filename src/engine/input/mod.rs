// Input handling system
//
// Turns keyboard events into at most one directional event per tick.
//
// ## Architecture
//
// - `action`: The four roll directions and default key bindings
// - `config`: Key remapping
// - `sampler`: Edge detection and same-tick priority resolution
//
// ## Usage Example
//
// ```rust
// use cube_roller::engine::input::{Direction, InputSampler};
//
// let mut sampler = InputSampler::default();
//
// // In your event loop, process keyboard events
// sampler.process_keyboard_event(&key_event);
//
// // During the tick
// if let Some(direction) = sampler.sample() {
//     // roll!
// }
//
// // At the end of the tick
// sampler.end_tick();
// ```

pub mod action;
pub mod config;
pub mod sampler;

pub use action::Direction;
pub use config::InputConfig;
pub use sampler::InputSampler;
