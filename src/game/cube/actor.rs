// The rolling cube: input, state machine, animation and obstacles in one tick

use glam::{Quat, Vec3};
use log::{info, warn};

use super::animator::RotationAnimator;
use super::collision::{CellProbe, CollisionQuery};
use super::config::{ConfigError, RollConfig};
use super::controller::{RequestOutcome, RollController, RollState};
use super::events::{EventQueue, RollEvent};
use super::moves::{MoveError, RollMove};
use super::pose::ActorPose;
use crate::core::math;
use crate::engine::input::InputSampler;
use crate::engine::physics::ObstacleWorld;

/// A cube that tumbles one grid cell per quarter turn.
///
/// Create it once with [`CubeActor::new`], feed input through
/// [`CubeActor::input_mut`], then call [`CubeActor::tick`] every frame.
pub struct CubeActor {
    config: RollConfig,
    pose: ActorPose,
    input: InputSampler,
    controller: RollController,
    animator: RotationAnimator,
    obstacles: ObstacleWorld,
    events: EventQueue,
    /// Move requested from code rather than the keyboard
    scripted: Option<RollMove>,
}

impl CubeActor {
    /// Build an idle cube resting at the origin cell
    pub fn new(config: RollConfig) -> Result<Self, ConfigError> {
        let spawn = Vec3::new(0.0, config.half_extent, 0.0);
        Self::with_pose(config, ActorPose::at(spawn))
    }

    /// Build an idle cube at a given pose
    pub fn with_pose(config: RollConfig, pose: ActorPose) -> Result<Self, ConfigError> {
        config.validate()?;

        let obstacles = ObstacleWorld::new(
            config.collision.obstacle_layers,
            config.collision.probe_half_extent,
        );

        info!(
            "Cube ready at {} (roll {}s, cell {})",
            pose.position(),
            config.roll_duration,
            config.cell_size()
        );

        Ok(Self {
            pose,
            input: InputSampler::default(),
            controller: RollController::new(config.half_extent),
            animator: RotationAnimator::new(config.roll_duration, config.easing),
            obstacles,
            events: EventQueue::new(),
            scripted: None,
            config,
        })
    }

    /// Advance one frame of `dt` seconds.
    ///
    /// Phase one samples input and runs the state machine; phase two
    /// advances the roll and reacts to a landing. Input arriving on a
    /// landing tick therefore sees the pre-landing state.
    pub fn tick(&mut self, dt: f32) {
        let request = self
            .input
            .sample()
            .map(RollMove::from)
            .or_else(|| self.scripted.take());

        if let Some(roll) = request {
            self.apply_request(roll);
        }

        if let Some(landing) = self.animator.advance(&mut self.pose, dt) {
            self.controller
                .on_landed(&landing, &self.pose, &mut self.animator, &mut self.events);
        }

        self.input.end_tick();
    }

    /// Queue a raw move for the next tick.
    ///
    /// Degenerate pairs are dropped; the previous state is kept.
    pub fn request_move(&mut self, direction: Vec3, axis: Vec3) -> Result<(), MoveError> {
        match RollMove::new(direction, axis) {
            Ok(roll) => {
                self.scripted = Some(roll);
                Ok(())
            }
            Err(err) => {
                warn!("Dropping move request: {err}");
                Err(err)
            }
        }
    }

    /// Put the cube back on a cell, idle and unrotated
    pub fn reset(&mut self, position: Vec3) {
        let cell = self.config.cell_size();
        let position = Vec3::new(
            math::snap_to_grid(position.x, cell),
            position.y,
            math::snap_to_grid(position.z, cell),
        );
        self.animator.place(&mut self.pose, position, Quat::IDENTITY);
        self.controller.reset();
        self.input.reset();
        self.scripted = None;
        info!("Cube reset to {}", position);
    }

    pub fn pose(&self) -> &ActorPose {
        &self.pose
    }

    pub fn state(&self) -> RollState {
        self.controller.state()
    }

    pub fn controller(&self) -> &RollController {
        &self.controller
    }

    pub fn animator(&self) -> &RotationAnimator {
        &self.animator
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    pub fn input_mut(&mut self) -> &mut InputSampler {
        &mut self.input
    }

    pub fn obstacles(&self) -> &ObstacleWorld {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut ObstacleWorld {
        &mut self.obstacles
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.config.collision.enabled = enabled;
    }

    /// Events since the last drain, oldest first
    pub fn events(&self) -> &[RollEvent] {
        self.events.events()
    }

    /// Take the events since the last drain. Call once per tick; an
    /// undrained queue only keeps the newest `MAX_QUEUED_EVENTS`.
    pub fn drain_events(&mut self) -> Vec<RollEvent> {
        self.events.drain()
    }

    fn apply_request(&mut self, roll: RollMove) -> RequestOutcome {
        let probe = CellProbe::new(&self.obstacles, self.config.cell_size());
        let collision: Option<&dyn CollisionQuery> = if self.config.collision.enabled {
            Some(&probe)
        } else {
            None
        };

        self.controller.handle_request(
            roll,
            &self.pose,
            &mut self.animator,
            collision,
            &mut self.events,
        )
    }
}
