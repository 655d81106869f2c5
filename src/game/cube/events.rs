// Roll notifications for audio/effect collaborators

use glam::Vec3;

use super::moves::RollMove;

/// Something observable happened to the cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RollEvent {
    /// A roll began
    Started { roll: RollMove, from: Vec3, to: Vec3 },

    /// A roll finished and the cube rests on `position`
    Landed {
        roll: RollMove,
        position: Vec3,
        total_angle: f32,
    },
}

/// Events kept when nobody drains the queue
pub const MAX_QUEUED_EVENTS: usize = 64;

/// Events produced during ticks, drained by the caller.
///
/// Callers are expected to drain once per tick. Past [`MAX_QUEUED_EVENTS`]
/// the oldest event is dropped for each new one.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<RollEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: RollEvent) {
        if self.events.len() >= MAX_QUEUED_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Events not yet drained, oldest first
    pub fn events(&self) -> &[RollEvent] {
        &self.events
    }

    /// Take every pending event
    pub fn drain(&mut self) -> Vec<RollEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
