// Obstacle queries using rapier3d colliders

mod layers;
mod obstacles;

pub use layers::CollisionLayer;
pub use obstacles::ObstacleWorld;

// Re-export commonly used rapier types for building custom obstacles
pub use rapier3d::prelude::{Collider, ColliderBuilder, ColliderHandle};
