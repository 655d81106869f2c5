// Edge-triggered directional input sampling

use super::action::Direction;
use super::config::InputConfig;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Produces at most one "direction just engaged" event per tick.
///
/// Feed it press/release events as they arrive, call [`InputSampler::sample`]
/// during the tick and [`InputSampler::end_tick`] once the tick is done.
#[derive(Debug, Default)]
pub struct InputSampler {
    config: InputConfig,

    /// Directions currently held
    pressed: HashSet<Direction>,

    /// Directions that went down since the last `end_tick`
    just_pressed: HashSet<Direction>,

    /// While set, presses are ignored but releases still apply
    suspended: bool,
}

impl InputSampler {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            suspended: false,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let Some(direction) = self.config.direction_for(key_code) else {
            return;
        };

        match event.state {
            ElementState::Pressed if !event.repeat => self.press(direction),
            ElementState::Pressed => {}
            ElementState::Released => self.release(direction),
        }
    }

    /// Register a direction going down
    pub fn press(&mut self, direction: Direction) {
        if self.suspended {
            return;
        }
        if self.pressed.insert(direction) {
            self.just_pressed.insert(direction);
        }
    }

    /// Register a direction going up
    pub fn release(&mut self, direction: Direction) {
        self.pressed.remove(&direction);
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        self.pressed.contains(&direction)
    }

    pub fn just_pressed(&self, direction: Direction) -> bool {
        self.just_pressed.contains(&direction)
    }

    /// The single event for this tick, resolved by [`Direction::PRIORITY`]
    pub fn sample(&self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|d| self.just_pressed.contains(d))
    }

    /// Clear per-tick edge state. Call once per tick after sampling.
    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
    }

    /// Stop accepting presses (e.g. while the game is paused).
    /// Releases keep being tracked so held keys don't get stuck.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
        if suspended {
            self.just_pressed.clear();
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Forget everything that is held or pending
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}
