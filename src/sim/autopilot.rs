//! Demo steering: chases the current letter, sidesteps close enemies
//!
//! Produces the same directional intents a player would, so a demo run goes
//! through exactly the same tick path as a real game.

use glam::Vec2;

use super::state::{Direction, GameState};

/// Enemies closer than this make the autopilot dodge instead of chase
pub const DANGER_RADIUS: f32 = 110.0;

/// Direction that closes the larger gap of `delta`
pub fn dominant_direction(delta: Vec2) -> Option<Direction> {
    if delta == Vec2::ZERO {
        return None;
    }
    Some(if delta.x.abs() >= delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    })
}

/// Pick a direction for the next tick, or `None` to keep the current one
pub fn steer(state: &GameState) -> Option<Direction> {
    let avatar = state.avatar.pos;

    let threat = state
        .enemies
        .iter()
        .map(|e| (e.pos, e.pos.distance(avatar)))
        .filter(|(_, d)| *d < DANGER_RADIUS)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    if let Some((enemy_pos, _)) = threat {
        // Run perpendicular to the enemy's approach axis, toward open space
        let away = avatar - enemy_pos;
        let center = state.bounds / 2.0;
        let escape = if away.x.abs() >= away.y.abs() {
            Vec2::new(0.0, center.y - avatar.y + away.y.signum())
        } else {
            Vec2::new(center.x - avatar.x + away.x.signum(), 0.0)
        };
        return dominant_direction(escape);
    }

    let target = state.target.as_ref()?;
    let wanted = dominant_direction(target.pos - avatar)?;
    (wanted != state.avatar.facing || state.avatar.vel == Vec2::ZERO).then_some(wanted)
}
