//! Missile spawn scheduling and target selection

use rand::Rng;

use super::state::{GameState, Projectile, Structure};
use crate::consts::*;

/// Roll the per-tick spawn chance and launch a missile on success.
/// Returns true if a missile was launched.
pub fn maybe_spawn(state: &mut GameState) -> bool {
    if !state.rng.random_ratio(1, SPAWN_CHANCE) {
        return false;
    }
    let avoid_destroyed = !state.lost;
    match launch(&mut state.rng, &state.structures, avoid_destroyed) {
        Some(projectile) => {
            log::debug!(
                "Missile launched at x={} toward structure {} (tick {})",
                projectile.pos.x,
                projectile.target,
                state.time_ticks
            );
            state.projectiles.push(projectile);
            true
        }
        None => false,
    }
}

/// Build a missile aimed at a random structure.
///
/// With `avoid_destroyed` the randomly drawn target is walked forward (with
/// wraparound) to the next standing structure. Returns `None` only when
/// there are no structures at all.
pub fn launch<R: Rng + ?Sized>(
    rng: &mut R,
    structures: &[Structure],
    avoid_destroyed: bool,
) -> Option<Projectile> {
    if structures.is_empty() {
        return None;
    }
    let sky_x = rng.random_range(0..WINDOW_WIDTH);
    let drawn = rng.random_range(0..structures.len());
    let target = pick_target(structures, drawn, avoid_destroyed);
    let target_x = structures[target].pos.x as i32;
    let duration = FLIGHT_DURATION_MIN_TICKS + rng.random_range(0..FLIGHT_DURATION_VARIATION_TICKS);
    Some(Projectile::launch(sky_x, target, target_x, duration))
}

/// Starting from `start`, find the first standing structure (wrapping
/// around). Without `avoid_destroyed`, or when nothing stands, `start` is
/// returned unchanged.
pub fn pick_target(structures: &[Structure], start: usize, avoid_destroyed: bool) -> usize {
    if !avoid_destroyed {
        return start;
    }
    let count = structures.len();
    (0..count)
        .map(|step| (start + step) % count)
        .find(|&index| !structures[index].destroyed)
        .unwrap_or(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::structure_row;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pick_target_skips_destroyed_with_wraparound() {
        let mut structures = structure_row();
        structures[4].destroyed = true;
        structures[5].destroyed = true;
        structures[0].destroyed = true;

        assert_eq!(pick_target(&structures, 4, true), 1);
        assert_eq!(pick_target(&structures, 2, true), 2);
        assert_eq!(pick_target(&structures, 3, true), 3);
    }

    #[test]
    fn test_pick_target_bypassed_when_not_avoiding() {
        let mut structures = structure_row();
        structures[3].destroyed = true;
        assert_eq!(pick_target(&structures, 3, false), 3);
    }

    #[test]
    fn test_pick_target_terminates_when_all_destroyed() {
        let mut structures = structure_row();
        for structure in &mut structures {
            structure.destroyed = true;
        }
        assert_eq!(pick_target(&structures, 2, true), 2);
    }

    #[test]
    fn test_launch_targets_only_standing_structures() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut structures = structure_row();
        for index in [0, 1, 2, 4, 5] {
            structures[index].destroyed = true;
        }

        for _ in 0..200 {
            let projectile = launch(&mut rng, &structures, true).unwrap();
            assert_eq!(projectile.target, 3);
            assert_eq!(projectile.pos.y, 0.0);
            assert!((0.0..WINDOW_WIDTH as f32).contains(&projectile.pos.x));
        }
    }

    #[test]
    fn test_launch_velocity_hits_ground_within_duration_range() {
        let mut rng = Pcg32::seed_from_u64(99);
        let structures = structure_row();
        for _ in 0..200 {
            let projectile = launch(&mut rng, &structures, true).unwrap();
            let ticks = GROUND_Y / projectile.vel.y;
            let min = FLIGHT_DURATION_MIN_TICKS as f32;
            let max = (FLIGHT_DURATION_MIN_TICKS + FLIGHT_DURATION_VARIATION_TICKS) as f32;
            assert!(ticks >= min - 0.01 && ticks < max);

            // Horizontal velocity carries the missile onto its target
            let landing_x = projectile.pos.x + projectile.vel.x * ticks;
            assert!((landing_x - structures[projectile.target].pos.x).abs() < 0.1);
        }
    }

    #[test]
    fn test_launch_without_structures() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(launch(&mut rng, &[], true).is_none());
    }

    #[test]
    fn test_spawn_rate_is_roughly_one_in_chance() {
        let mut state = GameState::empty(2024);
        let rolls = 20_000;
        let spawned = (0..rolls).filter(|_| maybe_spawn(&mut state)).count();
        let expected = rolls / SPAWN_CHANCE as usize;
        assert_eq!(state.projectiles.len(), spawned);
        assert!(spawned > expected / 2 && spawned < expected * 2);
    }
}
