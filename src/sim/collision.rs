//! Blast-radius containment tests

use glam::Vec2;

use super::state::Explosion;

/// True if `point` lies inside or exactly on a circle
#[inline]
pub fn circle_contains(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance_squared(point) <= radius * radius
}

/// True if the explosion's current blast radius reaches `point`
#[inline]
pub fn explosion_hits(explosion: &Explosion, point: Vec2) -> bool {
    circle_contains(explosion.pos, explosion.radius, point)
}
