// Engine modules: frame timing, input, obstacle physics

pub mod frame_clock;
pub mod input;
pub mod physics;
