// Game modules

pub mod cube;
