//! Fixed timestep simulation tick
//!
//! One call to `tick` is one frame: spawn roll, turret, then the entity
//! update in shots → projectiles → explosions order.

use glam::IVec2;

use super::collision::explosion_hits;
use super::spawn;
use super::state::{Explosion, ExplosionOrigin, GameEvent, GameState, all_destroyed};
use super::turret;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    /// Pointer position in window coordinates
    pub cursor: IVec2,
    /// Primary fire button currently down
    pub fire: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            cursor: TURRET_POSITION.as_ivec2() - IVec2::new(0, WINDOW_HEIGHT / 2),
            fire: false,
        }
    }
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    spawn::maybe_spawn(state);
    turret::update(state, input.cursor, input.fire);
    step(state);
}

/// Advance every entity population by one tick and resolve collisions
pub fn step(state: &mut GameState) {
    advance_shots(state);
    advance_projectiles(state);
    advance_explosions(state);
}

/// Move shots; spent shots detonate where they stand
pub fn advance_shots(state: &mut GameState) {
    let GameState {
        shots, explosions, ..
    } = state;

    shots.retain_mut(|shot| {
        if shot.advance() {
            explosions.push(Explosion::new(shot.pos, ExplosionOrigin::Player));
            return false;
        }
        true
    });
}

/// Move missiles; landed missiles blow up and destroy their target
pub fn advance_projectiles(state: &mut GameState) {
    let GameState {
        projectiles,
        explosions,
        structures,
        lost,
        events,
        time_ticks,
        ..
    } = state;

    projectiles.retain_mut(|projectile| {
        if !projectile.has_landed() {
            projectile.advance();
            return true;
        }

        explosions.push(Explosion::new(projectile.pos, ExplosionOrigin::Impact));
        if let Some(structure) = structures.get_mut(projectile.target) {
            structure.destroyed = true;
        }
        events.push(GameEvent::StructureDestroyed {
            index: projectile.target,
        });
        log::debug!("Structure {} hit at tick {}", projectile.target, time_ticks);

        // Must be settled before anything else picks a target
        let was_lost = *lost;
        *lost = all_destroyed(structures);
        if *lost && !was_lost {
            log::info!("All structures destroyed at tick {} - game over", time_ticks);
            events.push(GameEvent::GameLost);
        }
        false
    });
}

/// Grow explosions, retire old ones, and destroy every missile inside a blast
pub fn advance_explosions(state: &mut GameState) {
    let GameState {
        projectiles,
        explosions,
        score,
        events,
        ..
    } = state;

    explosions.retain_mut(|explosion| {
        if explosion.is_expired() {
            return false;
        }
        explosion.advance();

        // Later explosions only see the missiles this one left alive
        projectiles.retain(|projectile| {
            if !explosion_hits(explosion, projectile.pos) {
                return true;
            }
            let points = if explosion.from_player() {
                interception_points(projectile.pos.y)
            } else {
                0
            };
            *score += points;
            events.push(GameEvent::ProjectileDestroyed {
                pos: projectile.pos,
                points,
            });
            false
        });
        true
    });
}

/// Points for stopping a missile at height `y`; the higher, the better
pub fn interception_points(y: f32) -> u64 {
    ((WINDOW_HEIGHT as f32 - y) * SCORE_MULTIPLIER).max(0.0) as u64
}
