//! Letter Chase - collect the letters of a phrase, dodge the chaser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collection, spawning, phases)
//! - `renderer`: Scene drawing through a 2D `Surface`
//! - `presentation`: End screen model (messages, balloons, confetti)
//! - `platform`: Input mapping and browser glue
//! - `config`: Tunable game parameters

pub mod config;
pub mod platform;
pub mod presentation;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, FacingMode, GameConfig};

/// Default game parameters (the reference birthday scenario)
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 30;

    /// Arena dimensions used when no canvas is available
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Avatar defaults
    pub const AVATAR_RADIUS: f32 = 30.0;
    pub const AVATAR_SPEED: f32 = 5.0;

    /// Mouth animation
    pub const MOUTH_SPEED: f32 = 0.07;
    pub const MOUTH_MIN: f32 = 0.1;
    pub const MOUTH_MAX: f32 = 0.5;

    /// Phrase collected letter by letter
    pub const TARGET_SEQUENCE: &str = "HappyBirthday";
    /// Letter glyph size (also the wrap offset and spawn margin)
    pub const TARGET_SIZE: f32 = 30.0;
    /// Letters start fleeing once the avatar is this close
    pub const ALERT_THRESHOLD: f32 = 75.0;
    /// Flee speed = index / FLEE_DIVISOR (capped at avatar speed)
    pub const FLEE_DIVISOR: f32 = 3.5;

    /// New entities never spawn closer than this to the avatar
    pub const MIN_SPAWN_DISTANCE: f32 = 150.0;
    /// Rejection sampling cap for spawn placement
    pub const MAX_SAMPLE_ATTEMPTS: u32 = 10_000;

    /// Enemy defaults
    pub const ENEMY_COUNT: usize = 1;
    pub const ENEMY_RADIUS: f32 = 30.0;
    pub const ENEMY_BASE_SPEED: f32 = 1.0;

    /// Difficulty ramp: enemies arrive at this share of the phrase
    pub const RAMP_FRACTION: f64 = 1.0 / 3.0;
    /// Enemy speed = (index + 2) / RAMP_DIVISOR (capped at avatar speed)
    pub const RAMP_DIVISOR: f32 = 6.0;

    /// Celebration piece counts on a win
    pub const BALLOON_COUNT: usize = 22;
    pub const CONFETTI_COUNT: usize = 222;
}
