//! Game configuration
//!
//! Every gameplay constant lives here so a page can override any of them with
//! a JSON blob. Fields missing from the blob keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// How an enemy picks the direction it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// From the sign of the previous tick's velocity on the dominant axis
    #[default]
    Lagged,
    /// From the movement applied this tick
    Current,
}

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target sequence is empty")]
    EmptySequence,
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("tick rate must be at least 1")]
    ZeroTickRate,
    #[error("sample attempt cap must be at least 1")]
    ZeroSampleAttempts,
    #[error("ramp fraction must be in (0, 1], got {0}")]
    RampFraction(f64),
    #[error("mouth bounds must satisfy 0 <= min < max, got [{min}, {max}]")]
    MouthBounds { min: f32, max: f32 },
    #[error("arena {width}x{height} cannot hold an avatar of radius {radius}")]
    ArenaTooSmall { width: f32, height: f32, radius: f32 },
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Strings and counts shown once the game ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndScreenConfig {
    pub win_headline: String,
    pub win_subline: String,
    pub loss_headline: String,
    pub loss_subline: String,
    /// Balloons released on a win
    pub balloon_count: usize,
    /// Confetti pieces released on a win
    pub confetti_count: usize,
}

impl Default for EndScreenConfig {
    fn default() -> Self {
        Self {
            win_headline: "Happy 22nd birthday Michelle!".to_string(),
            win_subline: "From Amit & Botzer".to_string(),
            loss_headline: "Game Over!".to_string(),
            loss_subline: "Better luck next time.".to_string(),
            balloon_count: BALLOON_COUNT,
            confetti_count: CONFETTI_COUNT,
        }
    }
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub width: f32,
    pub height: f32,
    /// Simulation ticks per second
    pub tick_rate: u32,

    // === Avatar ===
    pub avatar_radius: f32,
    pub avatar_speed: f32,
    pub mouth_speed: f32,
    pub mouth_min: f32,
    pub mouth_max: f32,

    // === Targets ===
    /// Ordered phrase; each char becomes one target
    pub sequence: String,
    pub target_size: f32,
    pub alert_threshold: f32,
    pub flee_divisor: f32,

    // === Spawning ===
    pub min_spawn_distance: f32,
    pub max_sample_attempts: u32,

    // === Enemies ===
    pub enemy_count: usize,
    pub enemy_radius: f32,
    pub enemy_base_speed: f32,
    /// Share of the phrase after which enemies arrive
    pub ramp_fraction: f64,
    pub ramp_divisor: f32,
    pub facing_mode: FacingMode,

    // === End screen ===
    pub end_screen: EndScreenConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            tick_rate: TICK_RATE,

            avatar_radius: AVATAR_RADIUS,
            avatar_speed: AVATAR_SPEED,
            mouth_speed: MOUTH_SPEED,
            mouth_min: MOUTH_MIN,
            mouth_max: MOUTH_MAX,

            sequence: TARGET_SEQUENCE.to_string(),
            target_size: TARGET_SIZE,
            alert_threshold: ALERT_THRESHOLD,
            flee_divisor: FLEE_DIVISOR,

            min_spawn_distance: MIN_SPAWN_DISTANCE,
            max_sample_attempts: MAX_SAMPLE_ATTEMPTS,

            enemy_count: ENEMY_COUNT,
            enemy_radius: ENEMY_RADIUS,
            enemy_base_speed: ENEMY_BASE_SPEED,
            ramp_fraction: RAMP_FRACTION,
            ramp_divisor: RAMP_DIVISOR,
            facing_mode: FacingMode::Lagged,

            end_screen: EndScreenConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Same config with the arena resized (e.g. to the real canvas size)
    pub fn with_arena(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The phrase as individual target symbols
    pub fn symbols(&self) -> Vec<char> {
        self.sequence.chars().collect()
    }

    /// Milliseconds between ticks
    pub fn tick_interval_ms(&self) -> i32 {
        (1000.0 / self.tick_rate.max(1) as f64).round() as i32
    }

    /// Whether `index` collected letters has reached the difficulty threshold
    pub fn ramp_reached(&self, index: usize) -> bool {
        index as f64 >= self.sequence.chars().count() as f64 * self.ramp_fraction
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.max_sample_attempts == 0 {
            return Err(ConfigError::ZeroSampleAttempts);
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("avatar_radius", self.avatar_radius),
            ("avatar_speed", self.avatar_speed),
            ("mouth_speed", self.mouth_speed),
            ("target_size", self.target_size),
            ("flee_divisor", self.flee_divisor),
            ("enemy_radius", self.enemy_radius),
            ("enemy_base_speed", self.enemy_base_speed),
            ("ramp_divisor", self.ramp_divisor),
        ];
        for (name, value) in positive {
            // `!(v > 0)` also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if !(self.ramp_fraction > 0.0 && self.ramp_fraction <= 1.0) {
            return Err(ConfigError::RampFraction(self.ramp_fraction));
        }
        if !(self.mouth_min >= 0.0 && self.mouth_min < self.mouth_max) {
            return Err(ConfigError::MouthBounds {
                min: self.mouth_min,
                max: self.mouth_max,
            });
        }
        if self.width < self.avatar_radius * 2.0 || self.height < self.avatar_radius * 2.0 {
            return Err(ConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                radius: self.avatar_radius,
            });
        }
        Ok(())
    }

    /// Attribute on the canvas element holding a JSON override
    #[allow(dead_code)]
    const CONFIG_ATTRIBUTE: &'static str = "data-config";

    /// Load the config from the canvas `data-config` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::Element) -> Self {
        if let Some(json) = canvas.get_attribute(Self::CONFIG_ATTRIBUTE) {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", Self::CONFIG_ATTRIBUTE);
                    return config;
                }
                Err(e) => log::warn!("Ignoring config override: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
