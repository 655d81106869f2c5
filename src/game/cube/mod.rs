// Rolling cube actor
//
// - `moves`: validated (direction, axis) pairs for one quarter turn
// - `pose`: externally visible position and orientation
// - `animator`: integrates an in-flight roll and lands it exactly
// - `controller`: Idle/Rolling state machine with pending move and auto-roll
// - `collision`: pre-move obstruction test
// - `events` / `cues`: roll started/landed notifications and sound cues
// - `config`: tuning, loadable from TOML
// - `actor`: ties everything together behind `tick(dt)`

pub mod actor;
pub mod animator;
pub mod collision;
pub mod config;
pub mod controller;
pub mod cues;
pub mod events;
pub mod moves;
pub mod pose;

// Re-export commonly used types
pub use actor::CubeActor;
pub use animator::{Easing, Landing, RollJob, RotationAnimator, ROLL_ANGLE};
pub use collision::{CellProbe, CollisionQuery, NoCollision};
pub use config::{CollisionConfig, ConfigError, RollConfig};
pub use controller::{RequestOutcome, RollController, RollState};
pub use cues::{CueConfig, CueKind, SoundCue};
pub use events::{EventQueue, RollEvent, MAX_QUEUED_EVENTS};
pub use moves::{MoveError, RollMove};
pub use pose::ActorPose;
