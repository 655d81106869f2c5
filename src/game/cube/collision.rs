// Pre-move obstruction test

use glam::Vec3;

use super::moves::RollMove;
use crate::engine::physics::ObstacleWorld;

/// Answers "would this roll end inside an obstacle?" without side effects
pub trait CollisionQuery {
    fn is_blocked(&self, position: Vec3, roll: &RollMove) -> bool;
}

/// Never blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCollision;

impl CollisionQuery for NoCollision {
    fn is_blocked(&self, _position: Vec3, _roll: &RollMove) -> bool {
        false
    }
}

/// Probes the destination cell of a roll against an [`ObstacleWorld`]
pub struct CellProbe<'a> {
    world: &'a ObstacleWorld,
    cell_size: f32,
}

impl<'a> CellProbe<'a> {
    pub fn new(world: &'a ObstacleWorld, cell_size: f32) -> Self {
        Self { world, cell_size }
    }

    /// Center of the cell the roll would end on
    pub fn destination(&self, position: Vec3, roll: &RollMove) -> Vec3 {
        position + roll.direction() * self.cell_size
    }
}

impl CollisionQuery for CellProbe<'_> {
    fn is_blocked(&self, position: Vec3, roll: &RollMove) -> bool {
        self.world
            .overlaps_obstacle(self.destination(position, roll))
    }
}
