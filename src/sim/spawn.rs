//! Placement geometry: spawn sampling, wrap and clamp

use glam::Vec2;
use rand::Rng;

/// Draw a uniform point in `[half_size, bound - half_size]` per axis that is
/// at least `min_distance` from `reference`.
///
/// Gives up after `max_attempts` draws and returns the farthest sample seen.
pub fn sample_position<R: Rng>(
    rng: &mut R,
    reference: Vec2,
    min_distance: f32,
    bounds: Vec2,
    half_size: f32,
    max_attempts: u32,
) -> Vec2 {
    let span = (bounds - Vec2::splat(half_size * 2.0)).max(Vec2::ZERO);

    let mut best = Vec2::new(half_size, half_size);
    let mut best_distance = f32::NEG_INFINITY;
    for _ in 0..max_attempts.max(1) {
        let candidate = Vec2::new(
            rng.random::<f32>() * span.x + half_size,
            rng.random::<f32>() * span.y + half_size,
        );
        let distance = candidate.distance(reference);
        if distance >= min_distance {
            return candidate;
        }
        if distance > best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    log::warn!(
        "No spawn point {} away from {:?} after {} attempts; using {:?} ({:.1} away)",
        min_distance,
        reference,
        max_attempts,
        best,
        best_distance
    );
    best
}

/// Toroidal wrap: leaving through an edge re-enters at the opposite edge,
/// inset by half the entity size.
pub fn wrap(pos: Vec2, bounds: Vec2, size: f32) -> Vec2 {
    let half = size / 2.0;
    let mut out = pos;
    if out.x < 0.0 {
        out.x = bounds.x - half;
    }
    if out.x > bounds.x {
        out.x = half;
    }
    if out.y < 0.0 {
        out.y = bounds.y - half;
    }
    if out.y > bounds.y {
        out.y = half;
    }
    out
}

/// Hard clamp keeping a circle of `radius` fully inside the arena
pub fn clamp_inside(pos: Vec2, bounds: Vec2, radius: f32) -> Vec2 {
    let min = Vec2::splat(radius);
    let max = (bounds - Vec2::splat(radius)).max(min);
    pos.clamp(min, max)
}
