//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per fixed timer tick
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::{clamp_inside, sample_position, wrap};
pub use state::{
    Avatar, Direction, Enemy, GameEvent, GamePhase, GameState, Mouth, Outcome, Target,
    TerminalEvent,
};
pub use tick::{TickInput, tick};
