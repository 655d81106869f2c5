// Roll moves - the (move direction, rotation axis) pair of a single quarter turn

use glam::Vec3;
use std::fmt;

use crate::engine::input::Direction;

/// Tolerance for unit-length and alignment checks
const MOVE_EPSILON: f32 = 1e-4;

/// Why a move request was rejected
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MoveError {
    #[error("Move direction must be a finite unit vector, got {0}")]
    DegenerateDirection(Vec3),

    #[error("Move direction must lie along the X or Z axis, got {0}")]
    NotAxisAligned(Vec3),

    #[error("Rotation axis {axis} does not tumble the cube towards {direction}")]
    AxisMismatch { direction: Vec3, axis: Vec3 },
}

/// A validated roll: one cell along `direction`, turning about `axis`.
///
/// The only way to build one is through [`RollMove::new`] or
/// [`RollMove::from_direction`], so a zero or diagonal vector never
/// reaches a pivot computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollMove {
    direction: Vec3,
    axis: Vec3,
}

impl RollMove {
    /// Validate a raw direction/axis pair.
    ///
    /// The direction must be a horizontal, axis-aligned unit vector and the
    /// axis must be `Y × direction`, the lower leading edge's orientation.
    pub fn new(direction: Vec3, axis: Vec3) -> Result<Self, MoveError> {
        if !direction.is_finite() || (direction.length() - 1.0).abs() > MOVE_EPSILON {
            return Err(MoveError::DegenerateDirection(direction));
        }

        let along_x = direction.x.abs() > 1.0 - MOVE_EPSILON;
        let along_z = direction.z.abs() > 1.0 - MOVE_EPSILON;
        if !(along_x || along_z) {
            return Err(MoveError::NotAxisAligned(direction));
        }

        // Snap away rounding noise so end cells stay exact
        let direction = direction.round();
        let expected_axis = Vec3::Y.cross(direction);
        if !axis.is_finite() || !axis.abs_diff_eq(expected_axis, MOVE_EPSILON) {
            return Err(MoveError::AxisMismatch { direction, axis });
        }

        Ok(Self {
            direction,
            axis: expected_axis,
        })
    }

    /// The fixed move for an input direction
    pub fn from_direction(direction: Direction) -> Self {
        let (direction, axis) = match direction {
            Direction::Up => (Vec3::Z, Vec3::X),
            Direction::Down => (Vec3::NEG_Z, Vec3::NEG_X),
            Direction::Left => (Vec3::NEG_X, Vec3::Z),
            Direction::Right => (Vec3::X, Vec3::NEG_Z),
        };
        Self { direction, axis }
    }

    /// Unit move vector
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Rotation axis through the pivot edge
    pub fn axis(&self) -> Vec3 {
        self.axis
    }
}

impl From<Direction> for RollMove {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

impl fmt::Display for RollMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {} about {}", self.direction, self.axis)
    }
}
