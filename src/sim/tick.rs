//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. The order of
//! the phases inside `tick` is part of the game's behaviour.

use glam::Vec2;

use super::spawn::{clamp_inside, wrap};
use super::state::{Direction, GameEvent, GameState, Outcome};
use crate::config::{FacingMode, GameConfig};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest directional intent since the previous tick
    pub direction: Option<Direction>,
}

impl TickInput {
    pub fn steer(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
        }
    }
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, config: &GameConfig, input: &TickInput) {
    // Don't tick once the game has ended
    if state.phase.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    if let Some(direction) = input.direction {
        state.avatar.steer(direction);
    }

    // Avatar: integrate, then hard clamp
    let avatar = &mut state.avatar;
    avatar.pos = clamp_inside(avatar.pos + avatar.vel, state.bounds, avatar.radius);

    state
        .mouth
        .advance(config.mouth_speed, config.mouth_min, config.mouth_max);

    move_target(state, config);
    move_enemies(state, config);
    check_collection(state, config);

    // A win this tick must not be overwritten by a loss
    if !state.phase.is_terminal() && touching_enemy(state) {
        state.finish(Outcome::Lost);
    }

    // Ensure deterministic ordering
    state.normalize_order();
}

/// Letters flee once the avatar gets close, and keep drifting afterwards
fn move_target(state: &mut GameState, config: &GameConfig) {
    let avatar_pos = state.avatar.pos;
    let avatar_speed = state.avatar.speed;
    let index = state.sequence_index;
    let Some(target) = state.target.as_mut() else {
        return;
    };

    let away = target.pos - avatar_pos;
    if away.length() <= config.alert_threshold {
        target.alerted = true;
        let speed = (index as f32 / config.flee_divisor).min(avatar_speed);
        // atan2 so a coincident avatar still yields a direction (+x)
        target.vel = Vec2::from_angle(away.y.atan2(away.x)) * speed;
    }

    if target.alerted {
        target.pos += target.vel;
    } else {
        target.vel = Vec2::ZERO;
    }

    target.pos = wrap(target.pos, state.bounds, config.target_size);
}

/// Axis-snapping pursuit: each enemy moves along its dominant axis only
fn move_enemies(state: &mut GameState, config: &GameConfig) {
    let avatar_pos = state.avatar.pos;
    let speed = state.enemy_speed;

    for enemy in &mut state.enemies {
        let to_avatar = avatar_pos - enemy.pos;
        if to_avatar.length() <= 0.0 {
            continue;
        }

        let step = Vec2::from_angle(to_avatar.y.atan2(to_avatar.x)) * speed;
        let (lagged, vel) = if to_avatar.x.abs() >= to_avatar.y.abs() {
            let lagged = if enemy.vel.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            };
            (lagged, Vec2::new(step.x, 0.0))
        } else {
            let lagged = if enemy.vel.y > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            };
            (lagged, Vec2::new(0.0, step.y))
        };

        enemy.facing = match config.facing_mode {
            FacingMode::Lagged => lagged,
            FacingMode::Current => facing_of(vel, lagged),
        };
        enemy.vel = vel;
        enemy.pos = wrap(enemy.pos + enemy.vel, state.bounds, enemy.radius);
    }
}

/// Facing implied by a single-axis velocity
fn facing_of(vel: Vec2, fallback: Direction) -> Direction {
    if vel.x > 0.0 {
        Direction::Right
    } else if vel.x < 0.0 {
        Direction::Left
    } else if vel.y > 0.0 {
        Direction::Down
    } else if vel.y < 0.0 {
        Direction::Up
    } else {
        fallback
    }
}

/// Axis-aligned pickup test, scoring and the difficulty ramp
fn check_collection(state: &mut GameState, config: &GameConfig) {
    let Some(target) = state.target.as_ref() else {
        return;
    };
    let gap = (state.avatar.pos - target.pos).abs();
    let reach = state.avatar.radius;
    if gap.x >= reach || gap.y >= reach {
        return;
    }

    log::debug!("Collected {:?} at tick {}", target.symbol, state.time_ticks);
    state.score += 1;
    state.events.push(GameEvent::ScoreChanged { score: state.score });
    state.target = None;
    state.sequence_index += 1;

    if state.sequence_index >= state.sequence.len() {
        state.finish(Outcome::Won);
        return;
    }

    state.spawn_target(config);

    if config.ramp_reached(state.sequence_index) {
        state.spawn_enemies(config);
        state.enemy_speed =
            ((state.sequence_index + 2) as f32 / config.ramp_divisor).min(state.avatar.speed);
    }
}

/// Circular overlap between the avatar and any enemy
fn touching_enemy(state: &GameState) -> bool {
    let avatar = &state.avatar;
    state
        .enemies
        .iter()
        .any(|enemy| enemy.pos.distance(avatar.pos) < avatar.radius + enemy.radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, GamePhase, Target, TerminalEvent};

    fn enemy_at(state: &mut GameState, pos: Vec2) {
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: 30.0,
            facing: Direction::Right,
        });
        state.enemies_spawned = true;
    }

    /// Game with the target parked in a far corner so it stays out of the way
    fn quiet_state(config: &GameConfig) -> GameState {
        let mut state = GameState::new(config, 12345);
        state.target = Some(Target::new('H', Vec2::new(20.0, 20.0)));
        state.drain_events();
        state
    }

    #[test]
    fn test_intent_sets_absolute_velocity() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);

        tick(&mut state, &config, &TickInput::steer(Direction::Left));
        assert_eq!(state.avatar.vel, Vec2::new(-5.0, 0.0));
        assert_eq!(state.avatar.facing, Direction::Left);
        assert_eq!(state.avatar.pos, Vec2::new(395.0, 300.0));

        // No new intent: keeps moving
        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.avatar.pos, Vec2::new(390.0, 300.0));

        tick(&mut state, &config, &TickInput::steer(Direction::Down));
        assert_eq!(state.avatar.vel, Vec2::new(0.0, 5.0));
        assert_eq!(state.avatar.pos, Vec2::new(390.0, 305.0));
    }

    #[test]
    fn test_avatar_clamped_at_wall() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        state.target = Some(Target::new('H', Vec2::new(780.0, 580.0)));
        for _ in 0..200 {
            tick(&mut state, &config, &TickInput::steer(Direction::Up));
        }
        assert_eq!(state.avatar.pos.y, 30.0);
        for _ in 0..200 {
            tick(&mut state, &config, &TickInput::steer(Direction::Left));
        }
        assert_eq!(state.avatar.pos, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_target_alert_is_sticky_and_drifts() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        state.sequence_index = 7;
        state.target = Some(Target::new('r', Vec2::new(460.0, 300.0)));

        tick(&mut state, &config, &TickInput::default());
        let target = state.target.as_ref().unwrap();
        assert!(target.alerted);
        let expected_speed = 7.0 / 3.5;
        assert!((target.vel.length() - expected_speed).abs() < 1e-4);
        assert!(target.vel.x > 0.0);
        assert!((target.pos.x - 462.0).abs() < 1e-4);

        // Move the avatar far away; the letter keeps going
        state.avatar.pos = Vec2::new(60.0, 500.0);
        for _ in 0..10 {
            tick(&mut state, &config, &TickInput::default());
            assert!(state.target.as_ref().unwrap().alerted);
        }
        assert!((state.target.as_ref().unwrap().pos.x - 482.0).abs() < 1e-3);
    }

    #[test]
    fn test_unalerted_target_stays_still() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        state.sequence_index = 4;
        state.target = Some(Target::new('y', Vec2::new(600.0, 300.0)));
        tick(&mut state, &config, &TickInput::default());
        let target = state.target.as_ref().unwrap();
        assert!(!target.alerted);
        assert_eq!(target.vel, Vec2::ZERO);
        assert_eq!(target.pos, Vec2::new(600.0, 300.0));
    }

    #[test]
    fn test_flee_speed_capped_at_avatar_speed() {
        let config = GameConfig {
            sequence: "abcdefghijklmnopqrstuvwxyz".to_string(),
            ..GameConfig::default()
        };
        let mut state = quiet_state(&config);
        state.sequence_index = 24;
        state.target = Some(Target::new('y', Vec2::new(400.0, 250.0)));
        tick(&mut state, &config, &TickInput::default());
        let target = state.target.as_ref().unwrap();
        assert!((target.vel.length() - 5.0).abs() < 1e-4);
        assert!(target.vel.y < 0.0);
    }

    #[test]
    fn test_target_wraps_across_edge() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        state.sequence_index = 7;
        let mut target = Target::new('r', Vec2::new(799.0, 100.0));
        target.alerted = true;
        target.vel = Vec2::new(2.0, 0.0);
        state.target = Some(target);

        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.target.as_ref().unwrap().pos, Vec2::new(15.0, 100.0));
    }

    #[test]
    fn test_enemy_moves_on_dominant_axis_only() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        enemy_at(&mut state, Vec2::new(100.0, 250.0));

        tick(&mut state, &config, &TickInput::default());
        let enemy = &state.enemies[0];
        assert_eq!(enemy.vel.y, 0.0);
        assert!(enemy.vel.x > 0.0 && enemy.vel.x < 1.0);
        assert!(enemy.pos.x > 100.0);
        assert_eq!(enemy.pos.y, 250.0);
    }

    #[test]
    fn test_enemy_facing_lags_one_tick() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        enemy_at(&mut state, Vec2::new(100.0, 300.0));

        // Previous velocity was zero, so the first horizontal move reads as left
        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.enemies[0].facing, Direction::Left);
        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.enemies[0].facing, Direction::Right);
    }

    #[test]
    fn test_enemy_facing_current_mode() {
        let config = GameConfig {
            facing_mode: FacingMode::Current,
            ..GameConfig::default()
        };
        let mut state = quiet_state(&config);
        enemy_at(&mut state, Vec2::new(100.0, 300.0));
        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.enemies[0].facing, Direction::Right);
    }

    #[test]
    fn test_coincident_enemy_does_not_move() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        enemy_at(&mut state, Vec2::new(400.0, 300.0));
        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.enemies[0].pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.phase, GamePhase::Lost);
    }

    #[test]
    fn test_enemy_contact_loses() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        state.enemy_speed = 0.0;
        // 59 apart: radii 30 + 30 overlap
        enemy_at(&mut state, Vec2::new(459.0, 300.0));
        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Ended(TerminalEvent {
                outcome: Outcome::Lost,
                score: 0
            })]
        );

        // Terminal: nothing moves any more
        let before = state.avatar.pos;
        tick(&mut state, &config, &TickInput::steer(Direction::Up));
        assert_eq!(state.avatar.pos, before);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_enemy_just_out_of_reach() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        state.enemy_speed = 0.0;
        enemy_at(&mut state, Vec2::new(460.0, 300.0));
        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_collection_is_axis_aligned() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);
        // Circular distance ~39.6 > radius, but each axis gap is 28
        state.target = Some(Target::new('H', Vec2::new(428.0, 328.0)));
        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.score, 1);
        assert_eq!(state.sequence_index, 1);
        let next = state.target.as_ref().expect("next target");
        assert_eq!(next.symbol, 'a');
        assert!(next.pos.distance(state.avatar.pos) >= 150.0);
        assert!(state
            .drain_events()
            .contains(&GameEvent::ScoreChanged { score: 1 }));
    }

    #[test]
    fn test_enemies_arrive_on_fifth_letter() {
        let config = GameConfig::default();
        let mut state = quiet_state(&config);

        for letter in 1..=5 {
            // Drop the letter onto the avatar
            let pos = state.avatar.pos;
            state.target.as_mut().unwrap().pos = pos;
            state.target.as_mut().unwrap().alerted = false;
            state.enemies.clear();
            tick(&mut state, &config, &TickInput::default());
            assert_eq!(state.sequence_index, letter);
            if letter < 5 {
                assert!(!state.enemies_spawned, "spawned early at {letter}");
            }
        }
        assert!(state.enemies_spawned);
        assert_eq!(state.enemies.len(), 1);
        assert!((state.enemy_speed - 7.0 / 6.0).abs() < 1e-5);
        assert!(state.enemies[0].pos.distance(state.avatar.pos) >= 150.0);
    }

    #[test]
    fn test_enemy_speed_ramps_and_caps() {
        let config = GameConfig {
            sequence: "abcdefghijklmnopqrstuvwxyz0123456789".to_string(),
            enemy_count: 0,
            ..GameConfig::default()
        };
        let mut state = quiet_state(&config);
        let mut last = state.enemy_speed;
        for _ in 0..35 {
            let pos = state.avatar.pos;
            state.target.as_mut().unwrap().pos = pos;
            tick(&mut state, &config, &TickInput::default());
            assert!(state.enemy_speed >= last);
            last = state.enemy_speed;
        }
        assert_eq!(state.enemy_speed, 5.0);
    }

    #[test]
    fn test_last_letter_wins_even_when_touching_enemy() {
        let config = GameConfig {
            sequence: "ab".to_string(),
            ..GameConfig::default()
        };
        let mut state = quiet_state(&config);
        state.sequence_index = 1;
        state.score = 1;
        let pos = state.avatar.pos;
        state.target = Some(Target::new('b', pos));
        state.enemy_speed = 0.0;
        enemy_at(&mut state, pos + Vec2::new(10.0, 0.0));

        tick(&mut state, &config, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Won);
        assert!(state.target.is_none());
        assert_eq!(
            state.drain_events().last(),
            Some(&GameEvent::Ended(TerminalEvent {
                outcome: Outcome::Won,
                score: 2
            }))
        );
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let config = GameConfig::default();
        let mut state1 = GameState::new(&config, 99999);
        let mut state2 = GameState::new(&config, 99999);

        let inputs = [
            TickInput::steer(Direction::Up),
            TickInput::default(),
            TickInput::steer(Direction::Right),
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, &config, input);
                tick(&mut state2, &config, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.avatar.pos, state2.avatar.pos);
        assert_eq!(
            state1.target.as_ref().map(|t| t.pos),
            state2.target.as_ref().map(|t| t.pos)
        );
    }
}
