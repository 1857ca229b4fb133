//! Keyboard/touch to directional intent
//!
//! Event handlers only record the latest intent; the game loop takes it at
//! the start of the next tick.

use crate::sim::{Direction, TickInput};

/// Arrow key names as reported by `KeyboardEvent.key`
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Element ids of the four touch zones, with the direction each one sends
pub const TOUCH_ZONES: [(&str, Direction); 4] = [
    ("up", Direction::Up),
    ("down", Direction::Down),
    ("left", Direction::Left),
    ("right", Direction::Right),
];

pub fn direction_for_zone(id: &str) -> Option<Direction> {
    TOUCH_ZONES
        .iter()
        .find(|(zone, _)| *zone == id)
        .map(|(_, direction)| *direction)
}

/// Latest intent waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Option<Direction>,
    closed: bool,
}

impl InputQueue {
    /// Record an intent; a newer one replaces an older unconsumed one
    pub fn push(&mut self, direction: Direction) {
        if !self.closed {
            self.pending = Some(direction);
        }
    }

    /// Stop accepting input (game over)
    pub fn close(&mut self) {
        self.closed = true;
        self.pending = None;
    }

    /// Consume the pending intent as this tick's input
    pub fn take(&mut self) -> TickInput {
        TickInput {
            direction: self.pending.take(),
        }
    }
}
