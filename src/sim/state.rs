//! Game state and core simulation types
//!
//! Everything the step function reads or writes lives in `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::sample_position;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Every letter collected
    Won,
    /// Caught by an enemy
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Running
    }
}

/// Final result carried by the terminal event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Facing direction of the avatar or an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Unit step in screen coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub facing: Direction,
}

impl Avatar {
    /// Avatar resting at the arena centre, facing right
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.width / 2.0, config.height / 2.0),
            vel: Vec2::ZERO,
            radius: config.avatar_radius,
            speed: config.avatar_speed,
            facing: Direction::Right,
        }
    }

    /// Set absolute velocity from a direction intent
    pub fn steer(&mut self, direction: Direction) {
        self.vel = direction.unit() * self.speed;
        self.facing = direction;
    }
}

/// Open/close oscillation shared by every mouth on screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mouth {
    /// Current opening (radians added to the wedge gap)
    pub angle: f32,
    /// +1 opening, -1 closing
    pub direction: f32,
}

impl Default for Mouth {
    fn default() -> Self {
        Self {
            angle: 0.0,
            direction: 1.0,
        }
    }
}

impl Mouth {
    /// Advance one tick, flipping direction at the bounds
    pub fn advance(&mut self, speed: f32, min: f32, max: f32) {
        self.angle += self.direction * speed;
        if self.angle >= max {
            self.direction = -1.0;
        } else if self.angle <= min {
            self.direction = 1.0;
        }
    }
}

/// The letter currently waiting to be collected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub symbol: char,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set once the avatar came close; never cleared
    pub alerted: bool,
}

impl Target {
    pub fn new(symbol: char, pos: Vec2) -> Self {
        Self {
            symbol,
            pos,
            vel: Vec2::ZERO,
            alerted: false,
        }
    }
}

/// A chaser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub facing: Direction,
}

/// Payload of the single end-of-game notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalEvent {
    pub outcome: Outcome,
    pub score: u32,
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged { score: u32 },
    TargetSpawned { symbol: char, index: usize },
    EnemiesSpawned { count: usize },
    Ended(TerminalEvent),
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Arena size
    pub bounds: Vec2,
    /// Current phase
    pub phase: GamePhase,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub avatar: Avatar,
    pub mouth: Mouth,
    /// Phrase being collected
    pub sequence: Vec<char>,
    /// Index of the next symbol to collect
    pub sequence_index: usize,
    pub target: Option<Target>,
    /// Chasers (sorted by id for determinism)
    pub enemies: Vec<Enemy>,
    pub enemy_speed: f32,
    pub enemies_spawned: bool,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game and place the first target
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds: Vec2::new(config.width, config.height),
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            avatar: Avatar::new(config),
            mouth: Mouth::default(),
            sequence: config.symbols(),
            sequence_index: 0,
            target: None,
            enemies: Vec::new(),
            enemy_speed: config.enemy_base_speed,
            enemies_spawned: false,
            events: Vec::new(),
            next_id: 1,
        };

        state.spawn_target(config);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place the target for the current sequence index (if any remain)
    pub fn spawn_target(&mut self, config: &GameConfig) {
        let Some(&symbol) = self.sequence.get(self.sequence_index) else {
            return;
        };
        let pos = sample_position(
            &mut self.rng,
            self.avatar.pos,
            config.min_spawn_distance,
            self.bounds,
            config.target_size / 2.0,
            config.max_sample_attempts,
        );
        log::debug!("Target {:?} #{} spawned at {:?}", symbol, self.sequence_index, pos);
        self.target = Some(Target::new(symbol, pos));
        self.events.push(GameEvent::TargetSpawned {
            symbol,
            index: self.sequence_index,
        });
    }

    /// One-shot: release the enemies, away from where the avatar is now
    pub fn spawn_enemies(&mut self, config: &GameConfig) {
        if self.enemies_spawned {
            return;
        }
        self.enemies_spawned = true;

        for _ in 0..config.enemy_count {
            let id = self.next_entity_id();
            let pos = sample_position(
                &mut self.rng,
                self.avatar.pos,
                config.min_spawn_distance,
                self.bounds,
                config.enemy_radius / 2.0,
                config.max_sample_attempts,
            );
            self.enemies.push(Enemy {
                id,
                pos,
                vel: Vec2::ZERO,
                radius: config.enemy_radius,
                facing: Direction::Right,
            });
        }

        log::info!(
            "{} enemies released at letter {}",
            config.enemy_count,
            self.sequence_index
        );
        self.events.push(GameEvent::EnemiesSpawned {
            count: config.enemy_count,
        });
    }

    /// Enter a terminal phase and record the end event (once)
    pub fn finish(&mut self, outcome: Outcome) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = match outcome {
            Outcome::Won => GamePhase::Won,
            Outcome::Lost => GamePhase::Lost,
        };
        log::info!("Game ended: {:?} with score {}", outcome, self.score);
        self.events.push(GameEvent::Ended(TerminalEvent {
            outcome,
            score: self.score,
        }));
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ensure enemies are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
    }
}
