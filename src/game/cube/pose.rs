// Externally visible position and orientation of the cube

use glam::{Mat4, Quat, Vec3};

use crate::core::math;

/// Where the cube is and how it is turned.
///
/// Readable by anyone (renderer, camera); only the rotation animator
/// writes to it, through the crate-private mutators below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorPose {
    position: Vec3,
    orientation: Quat,
}

impl ActorPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
        }
    }

    /// Unrotated cube centered on `position`
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Model matrix for renderers
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// True when the horizontal position sits on a cell of size `edge`
    pub fn is_on_grid(&self, edge: f32) -> bool {
        let flat = Vec3::new(self.position.x, 0.0, self.position.z);
        math::is_grid_aligned(flat, edge, 1e-4)
    }

    /// Rotate the whole pose about a world-space line through `pivot`
    pub(crate) fn rotate_about(&mut self, pivot: Vec3, rotation: Quat) {
        self.position = pivot + rotation * (self.position - pivot);
        self.orientation = (rotation * self.orientation).normalize();
    }

    pub(crate) fn set(&mut self, position: Vec3, orientation: Quat) {
        self.position = position;
        self.orientation = orientation;
    }
}

impl Default for ActorPose {
    fn default() -> Self {
        Self::at(Vec3::new(0.0, 0.5, 0.0))
    }
}
