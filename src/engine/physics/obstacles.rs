use glam::Vec3;
use log::warn;
use rapier3d::math::{Isometry, Vector};
use rapier3d::parry::query;
use rapier3d::parry::shape::Cuboid;
use rapier3d::prelude::*;

use super::layers::CollisionLayer;

/// Static world geometry the rolling cube can bump into.
///
/// Only colliders live here; nothing is simulated. The set answers one
/// question: does a probe box placed at a cell overlap an obstacle?
pub struct ObstacleWorld {
    colliders: ColliderSet,

    /// Needed by rapier to remove colliders
    island_manager: IslandManager,
    rigid_body_set: RigidBodySet,

    /// Colliders whose membership intersects this mask count as obstacles
    obstacle_mask: Group,

    /// Half extent of the probe box placed at the destination cell
    probe_half_extent: f32,
}

impl ObstacleWorld {
    pub fn new(obstacle_mask: u32, probe_half_extent: f32) -> Self {
        Self {
            colliders: ColliderSet::new(),
            island_manager: IslandManager::new(),
            rigid_body_set: RigidBodySet::new(),
            obstacle_mask: Group::from_bits_truncate(obstacle_mask),
            probe_half_extent,
        }
    }

    /// Insert an arbitrary collider
    pub fn add_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.colliders.insert(collider)
    }

    /// Insert an axis-aligned block centered on `center`
    pub fn add_block(
        &mut self,
        center: Vec3,
        half_extent: f32,
        layer: CollisionLayer,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extent, half_extent, half_extent)
            .translation(vector![center.x, center.y, center.z])
            .collision_groups(layer.to_interaction_groups())
            .build();
        self.add_collider(collider)
    }

    pub fn remove(&mut self, handle: ColliderHandle) -> bool {
        self.colliders
            .remove(
                handle,
                &mut self.island_manager,
                &mut self.rigid_body_set,
                false,
            )
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn set_obstacle_mask(&mut self, mask: u32) {
        self.obstacle_mask = Group::from_bits_truncate(mask);
    }

    pub fn set_probe_half_extent(&mut self, half_extent: f32) {
        self.probe_half_extent = half_extent;
    }

    /// Does a probe box centered on `center` overlap any obstacle?
    pub fn overlaps_obstacle(&self, center: Vec3) -> bool {
        let h = self.probe_half_extent;
        let probe = Cuboid::new(Vector::new(h, h, h));
        let probe_pos = Isometry::translation(center.x, center.y, center.z);

        self.colliders.iter().any(|(handle, collider)| {
            if !collider
                .collision_groups()
                .memberships
                .intersects(self.obstacle_mask)
            {
                return false;
            }

            match query::intersection_test(&probe_pos, &probe, collider.position(), collider.shape())
            {
                Ok(hit) => hit,
                Err(_) => {
                    warn!("Unsupported shape pair in obstacle query ({:?})", handle);
                    false
                }
            }
        })
    }
}

impl Default for ObstacleWorld {
    fn default() -> Self {
        Self::new(CollisionLayer::Obstacle.bits(), 0.45)
    }
}
