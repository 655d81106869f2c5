// Rotation animator - integrates an in-flight roll over time

use glam::{Quat, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};

use super::moves::RollMove;
use super::pose::ActorPose;
use crate::core::math;

/// Degrees turned by one complete roll
pub const ROLL_ANGLE: f32 = 90.0;

/// Shape of the angle-over-time curve of a single roll
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Easing {
    /// Constant angular rate
    #[default]
    Linear,
    /// Smoothstep blended into linear by `strength` (0 = linear, 1 = full smoothstep)
    Smooth { strength: f32 },
}

impl Easing {
    /// Map normalized time `t` in [0, 1] to normalized angle in [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Smooth { strength } => math::lerp(t, math::smoothstep(t), strength),
        }
    }
}

/// A roll in flight. Created on roll start, dropped on landing.
#[derive(Debug, Clone, PartialEq)]
pub struct RollJob {
    roll: RollMove,
    start_position: Vec3,
    end_position: Vec3,
    start_orientation: Quat,
    pivot: Vec3,
    /// Degrees applied to the pose so far, in [0, ROLL_ANGLE]
    angle: f32,
    /// Seconds since the roll started
    elapsed: f32,
}

impl RollJob {
    /// Plan a roll from `pose` for a cube of the given half extent
    pub fn new(pose: &ActorPose, roll: RollMove, half_extent: f32) -> Self {
        let start_position = pose.position();
        let pivot = start_position + roll.direction() * half_extent - Vec3::Y * half_extent;
        Self {
            roll,
            start_position,
            end_position: start_position + roll.direction() * (2.0 * half_extent),
            start_orientation: pose.orientation(),
            pivot,
            angle: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn roll(&self) -> RollMove {
        self.roll
    }

    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    pub fn end_position(&self) -> Vec3 {
        self.end_position
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    pub fn axis(&self) -> Vec3 {
        self.roll.axis()
    }

    /// Accumulated rotation in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Fraction of the quarter turn completed
    pub fn progress(&self) -> f32 {
        self.angle / ROLL_ANGLE
    }

    /// Orientation after exactly one quarter turn
    pub fn end_orientation(&self) -> Quat {
        let quarter = Quat::from_axis_angle(self.roll.axis(), ROLL_ANGLE.to_radians());
        (quarter * self.start_orientation).normalize()
    }

    fn turn(&mut self, pose: &mut ActorPose, degrees: f32) {
        if degrees > 0.0 {
            let rotation = Quat::from_axis_angle(self.roll.axis(), degrees.to_radians());
            pose.rotate_about(self.pivot, rotation);
        }
    }
}

/// Reported by the animator when a roll lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub roll: RollMove,
    pub position: Vec3,
    pub orientation: Quat,
    /// Total rotation applied by the roll (always exactly ROLL_ANGLE)
    pub total_angle: f32,
    /// Seconds the roll took, including the landing tick
    pub duration: f32,
}

/// Advances the active [`RollJob`] and is the only writer of [`ActorPose`]
#[derive(Debug)]
pub struct RotationAnimator {
    job: Option<RollJob>,
    /// Seconds per roll
    roll_duration: f32,
    easing: Easing,
}

impl RotationAnimator {
    pub fn new(roll_duration: f32, easing: Easing) -> Self {
        Self {
            job: None,
            roll_duration,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.job.is_some()
    }

    pub fn job(&self) -> Option<&RollJob> {
        self.job.as_ref()
    }

    pub fn roll_duration(&self) -> f32 {
        self.roll_duration
    }

    /// Degrees per second at constant rate
    pub fn angular_rate(&self) -> f32 {
        ROLL_ANGLE / self.roll_duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Begin a new roll from the current pose. Replaces any job in flight.
    pub fn start(&mut self, pose: &ActorPose, roll: RollMove, half_extent: f32) -> &RollJob {
        debug_assert!(self.job.is_none(), "roll started while another is in flight");

        let job = RollJob::new(pose, roll, half_extent);
        debug!(
            "Starting rotation - Axis: {}, Point: {}, Duration: {}s",
            job.axis(),
            job.pivot(),
            self.roll_duration
        );
        self.job.insert(job)
    }

    /// Advance the active roll by `dt` seconds.
    ///
    /// Only this tick's angle increment is applied to the pose. When the
    /// roll reaches 90° the remainder is applied, the pose is snapped to the
    /// planned end cell and orientation, and the landing is returned.
    pub fn advance(&mut self, pose: &mut ActorPose, dt: f32) -> Option<Landing> {
        let job = self.job.as_mut()?;

        // Negative or non-finite deltas don't move time
        if dt.is_finite() && dt > 0.0 {
            job.elapsed += dt;
        }

        let t = job.elapsed / self.roll_duration;
        let target = ROLL_ANGLE * self.easing.apply(t);

        if t < 1.0 && target < ROLL_ANGLE {
            let increment = target - job.angle;
            job.turn(pose, increment);
            job.angle = job.angle.max(target);
            return None;
        }

        let remainder = ROLL_ANGLE - job.angle;
        job.turn(pose, remainder);
        job.angle = ROLL_ANGLE;
        pose.set(job.end_position, job.end_orientation());

        let landing = Landing {
            roll: job.roll,
            position: job.end_position,
            orientation: job.end_orientation(),
            total_angle: job.angle,
            duration: job.elapsed,
        };
        self.job = None;

        debug!("Rotation completed at {}", landing.position);
        Some(landing)
    }

    /// Drop any job in flight and put the cube at `position` with `orientation`
    pub(crate) fn place(&mut self, pose: &mut ActorPose, position: Vec3, orientation: Quat) {
        self.job = None;
        pose.set(position, orientation.normalize());
    }
}
