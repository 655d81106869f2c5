// Roll state machine - start, buffer, continue or cancel rolls

use log::debug;

use super::animator::{Landing, RotationAnimator};
use super::collision::CollisionQuery;
use super::events::{EventQueue, RollEvent};
use super::moves::RollMove;
use super::pose::ActorPose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RollState {
    /// Resting on a cell
    #[default]
    Idle,
    /// A roll is in flight
    Rolling,
}

/// What the controller did with a directional request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A new roll started from Idle
    Started,
    /// The destination is occupied; request dropped
    Blocked,
    /// Same direction as the auto-roll: continuation cancelled
    Cancelled,
    /// Stored as the pending move for the next landing
    Queued,
}

/// Decides what happens with each directional request and each landing.
///
/// Owns the roll state, the pending move and the auto-roll mode. Pose
/// changes all go through the [`RotationAnimator`].
#[derive(Debug)]
pub struct RollController {
    state: RollState,
    /// Buffered follow-up; consumed on the next landing
    pending: Option<RollMove>,
    /// "Keep rolling this way until told otherwise"
    auto_roll: Option<RollMove>,
    half_extent: f32,
}

impl RollController {
    pub fn new(half_extent: f32) -> Self {
        Self {
            state: RollState::Idle,
            pending: None,
            auto_roll: None,
            half_extent,
        }
    }

    pub fn state(&self) -> RollState {
        self.state
    }

    pub fn is_rolling(&self) -> bool {
        self.state == RollState::Rolling
    }

    pub fn pending_move(&self) -> Option<RollMove> {
        self.pending
    }

    pub fn auto_roll(&self) -> Option<RollMove> {
        self.auto_roll
    }

    /// React to a directional request (tick phase one).
    ///
    /// The collision query is only consulted from Idle; a roll in flight
    /// always completes.
    pub fn handle_request(
        &mut self,
        roll: RollMove,
        pose: &ActorPose,
        animator: &mut RotationAnimator,
        collision: Option<&dyn CollisionQuery>,
        events: &mut EventQueue,
    ) -> RequestOutcome {
        match self.state {
            RollState::Idle => {
                if collision.is_some_and(|query| query.is_blocked(pose.position(), &roll)) {
                    debug!("Collision detected - movement blocked ({roll})");
                    return RequestOutcome::Blocked;
                }

                self.auto_roll = Some(roll);
                self.begin(roll, pose, animator, events);
                RequestOutcome::Started
            }
            RollState::Rolling if self.auto_roll == Some(roll) => {
                debug!("Auto-roll cancelled ({roll})");
                self.auto_roll = None;
                self.pending = None;
                RequestOutcome::Cancelled
            }
            RollState::Rolling => {
                if let Some(previous) = self.pending.replace(roll) {
                    debug!("Pending move {previous} replaced by {roll}");
                } else {
                    debug!("Pending move queued ({roll})");
                }
                RequestOutcome::Queued
            }
        }
    }

    /// React to a finished roll (tick phase two): chain, continue or idle
    pub fn on_landed(
        &mut self,
        landing: &Landing,
        pose: &ActorPose,
        animator: &mut RotationAnimator,
        events: &mut EventQueue,
    ) {
        events.push(RollEvent::Landed {
            roll: landing.roll,
            position: landing.position,
            total_angle: landing.total_angle,
        });

        if let Some(next) = self.pending.take() {
            self.auto_roll = Some(next);
            self.begin(next, pose, animator, events);
        } else if let Some(next) = self.auto_roll {
            self.begin(next, pose, animator, events);
        } else {
            self.state = RollState::Idle;
        }
    }

    /// Back to Idle with nothing buffered
    pub fn reset(&mut self) {
        self.state = RollState::Idle;
        self.pending = None;
        self.auto_roll = None;
    }

    fn begin(
        &mut self,
        roll: RollMove,
        pose: &ActorPose,
        animator: &mut RotationAnimator,
        events: &mut EventQueue,
    ) {
        let job = animator.start(pose, roll, self.half_extent);
        events.push(RollEvent::Started {
            roll,
            from: job.start_position(),
            to: job.end_position(),
        });
        self.state = RollState::Rolling;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Direction;
    use crate::game::cube::animator::Easing;
    use crate::game::cube::collision::NoCollision;
    use glam::Vec3;

    /// Controller + animator + pose wired together without input or collision
    struct Rig {
        controller: RollController,
        animator: RotationAnimator,
        pose: ActorPose,
        events: EventQueue,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                controller: RollController::new(0.5),
                animator: RotationAnimator::new(1.0, Easing::Linear),
                pose: ActorPose::default(),
                events: EventQueue::new(),
            }
        }

        fn request(&mut self, direction: Direction) -> RequestOutcome {
            self.controller.handle_request(
                direction.into(),
                &self.pose,
                &mut self.animator,
                Some(&NoCollision),
                &mut self.events,
            )
        }

        /// Run the animator until the current roll lands
        fn land(&mut self) {
            let landing = self
                .animator
                .advance(&mut self.pose, 1.0)
                .expect("a roll should be in flight");
            self.controller
                .on_landed(&landing, &self.pose, &mut self.animator, &mut self.events);
        }
    }

    struct Wall;

    impl CollisionQuery for Wall {
        fn is_blocked(&self, _position: Vec3, _roll: &RollMove) -> bool {
            true
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = RollController::new(0.5);
        assert_eq!(controller.state(), RollState::Idle);
        assert_eq!(controller.pending_move(), None);
        assert_eq!(controller.auto_roll(), None);
    }

    #[test]
    fn test_idle_request_starts_roll() {
        let mut rig = Rig::new();
        assert_eq!(rig.request(Direction::Up), RequestOutcome::Started);
        assert!(rig.controller.is_rolling());
        assert!(rig.animator.is_active());
        assert_eq!(rig.controller.auto_roll(), Some(Direction::Up.into()));
        assert_eq!(
            rig.events.events(),
            &[RollEvent::Started {
                roll: Direction::Up.into(),
                from: Vec3::new(0.0, 0.5, 0.0),
                to: Vec3::new(0.0, 0.5, 1.0),
            }]
        );
    }

    #[test]
    fn test_blocked_request_stays_idle() {
        let mut rig = Rig::new();
        let outcome = rig.controller.handle_request(
            Direction::Left.into(),
            &rig.pose,
            &mut rig.animator,
            Some(&Wall),
            &mut rig.events,
        );
        assert_eq!(outcome, RequestOutcome::Blocked);
        assert_eq!(rig.controller.state(), RollState::Idle);
        assert!(!rig.animator.is_active());
        assert!(rig.events.is_empty());
    }

    #[test]
    fn test_collision_ignored_while_rolling() {
        let mut rig = Rig::new();
        rig.request(Direction::Up);
        let outcome = rig.controller.handle_request(
            Direction::Left.into(),
            &rig.pose,
            &mut rig.animator,
            Some(&Wall),
            &mut rig.events,
        );
        assert_eq!(outcome, RequestOutcome::Queued);
    }

    #[test]
    fn test_auto_roll_continues() {
        let mut rig = Rig::new();
        rig.request(Direction::Right);
        rig.land();

        assert!(rig.controller.is_rolling());
        assert_eq!(
            rig.animator.job().map(|job| job.end_position()),
            Some(Vec3::new(2.0, 0.5, 0.0))
        );
    }

    #[test]
    fn test_same_direction_cancels() {
        let mut rig = Rig::new();
        rig.request(Direction::Right);
        rig.request(Direction::Left);
        assert_eq!(rig.request(Direction::Right), RequestOutcome::Cancelled);
        assert_eq!(rig.controller.auto_roll(), None);
        assert_eq!(rig.controller.pending_move(), None);

        // The in-flight roll is untouched
        assert!(rig.animator.is_active());

        rig.land();
        assert_eq!(rig.controller.state(), RollState::Idle);
        assert!(!rig.animator.is_active());
        assert_eq!(rig.pose.position(), Vec3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_latest_pending_wins() {
        let mut rig = Rig::new();
        rig.request(Direction::Up);
        assert_eq!(rig.request(Direction::Left), RequestOutcome::Queued);
        assert_eq!(rig.request(Direction::Right), RequestOutcome::Queued);
        assert_eq!(rig.controller.pending_move(), Some(Direction::Right.into()));

        rig.land();
        assert_eq!(rig.controller.pending_move(), None);
        assert_eq!(rig.controller.auto_roll(), Some(Direction::Right.into()));
        assert_eq!(
            rig.animator.job().map(|job| job.roll()),
            Some(Direction::Right.into())
        );
    }

    #[test]
    fn test_request_after_cancel_is_queued() {
        let mut rig = Rig::new();
        rig.request(Direction::Up);
        rig.request(Direction::Up);
        assert_eq!(rig.request(Direction::Up), RequestOutcome::Queued);

        rig.land();
        assert!(rig.controller.is_rolling());
        assert_eq!(rig.controller.auto_roll(), Some(Direction::Up.into()));
    }

    #[test]
    fn test_reverse_is_two_ordinary_rolls() {
        let mut rig = Rig::new();
        rig.request(Direction::Up);
        rig.request(Direction::Down);
        rig.land();
        assert_eq!(rig.pose.position(), Vec3::new(0.0, 0.5, 1.0));

        rig.request(Direction::Down);
        rig.land();
        assert_eq!(rig.pose.position(), Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(rig.controller.state(), RollState::Idle);
    }

    #[test]
    fn test_landing_emits_event() {
        let mut rig = Rig::new();
        rig.request(Direction::Down);
        rig.request(Direction::Down);
        rig.events.clear();
        rig.land();

        assert_eq!(
            rig.events.drain(),
            vec![RollEvent::Landed {
                roll: Direction::Down.into(),
                position: Vec3::new(0.0, 0.5, -1.0),
                total_angle: 90.0,
            }]
        );
    }

    #[test]
    fn test_reset() {
        let mut rig = Rig::new();
        rig.request(Direction::Up);
        rig.request(Direction::Left);
        rig.controller.reset();
        assert_eq!(rig.controller.state(), RollState::Idle);
        assert_eq!(rig.controller.pending_move(), None);
        assert_eq!(rig.controller.auto_roll(), None);
    }
}
