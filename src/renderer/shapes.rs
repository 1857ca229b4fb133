//! Chomper geometry: mouth wedge and eye placement per facing direction

use glam::Vec2;
use std::f32::consts::PI;

use crate::sim::Direction;

/// Start/end angles of a closed-mouth body (radians, canvas convention)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start: f32,
    pub end: f32,
}

/// Body wedge per direction, indexed by `direction_index`
pub const MOUTH_WEDGES: [Wedge; 4] = [
    // Up
    Wedge { start: 1.75 * PI, end: 1.25 * PI },
    // Down
    Wedge { start: 0.75 * PI, end: 0.25 * PI },
    // Left
    Wedge { start: 1.2 * PI, end: 0.8 * PI },
    // Right
    Wedge { start: 0.2 * PI, end: 1.8 * PI },
];

/// Eye offset from the centre, in units of half the radius
pub const EYE_OFFSETS: [Vec2; 4] = [
    // Up
    Vec2::new(1.0, 0.5),
    // Down
    Vec2::new(-1.0, 0.5),
    // Left
    Vec2::new(-0.5, -0.5),
    // Right
    Vec2::new(0.5, -0.5),
];

/// Eyes sit this far above the centre before the directional offset
const EYE_LIFT: f32 = 8.0;

fn direction_index(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Body wedge for `direction`, widened by the current mouth angle
pub fn mouth_wedge(direction: Direction, mouth: f32) -> Wedge {
    let base = MOUTH_WEDGES[direction_index(direction)];
    Wedge {
        start: base.start - mouth,
        end: base.end + mouth,
    }
}

/// Eye centre for a chomper of `radius` at `center`
pub fn eye_center(center: Vec2, radius: f32, direction: Direction) -> Vec2 {
    let offset = EYE_OFFSETS[direction_index(direction)] * (radius / 2.0);
    center + Vec2::new(0.0, -EYE_LIFT) + offset
}
