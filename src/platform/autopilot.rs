//! Built-in player for demo and headless runs
//!
//! Tracks the most dangerous missile (the one closest to the ground), leads
//! it by the shot's flight time, and taps fire whenever the turret is ready.

use glam::{IVec2, Vec2};

use super::input::{InputFrame, InputSource};
use crate::consts::*;
use crate::sim::{GameState, Projectile};

/// Extra ticks of lead so the blast has time to grow around the missile
const BLAST_SETTLE_TICKS: f32 = 6.0;
/// Missiles this close to a pending detonation are considered handled
const CLAIM_RADIUS: f32 = 40.0;
/// Passes of the intercept estimate
const LEAD_ITERATIONS: usize = 3;

/// Input source that plays the game
#[derive(Debug, Clone)]
pub struct Autopilot {
    max_frames: Option<u64>,
    linger_frames: u64,
    frames: u64,
    lost_at: Option<u64>,
    fire_down: bool,
    cursor: IVec2,
}

impl Autopilot {
    pub fn new(max_frames: Option<u64>, linger_frames: u64) -> Self {
        Self {
            max_frames,
            linger_frames,
            frames: 0,
            lost_at: None,
            fire_down: false,
            cursor: IVec2::new(WINDOW_WIDTH / 2, WINDOW_HEIGHT / 2),
        }
    }

    fn should_close(&mut self, state: &GameState) -> bool {
        if self.max_frames.is_some_and(|max| self.frames > max) {
            return true;
        }
        if state.lost {
            let lost_at = *self.lost_at.get_or_insert(self.frames);
            return self.frames - lost_at >= self.linger_frames;
        }
        false
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> InputFrame {
        self.frames += 1;
        if self.should_close(state) {
            return InputFrame::close();
        }

        let target = choose_target(state);
        if let Some(point) = target {
            self.cursor = point.round().as_ivec2();
        }

        // Reload finishes during the coming tick when one tick is left
        let ready = state.turret.reload_ticks <= 1 && !state.lost;
        let fire = !self.fire_down && ready && target.is_some();
        self.fire_down = fire;

        InputFrame::aim(self.cursor, fire)
    }
}

/// Where a shot fired now should detonate to catch `projectile`
pub fn lead_point(origin: Vec2, projectile: &Projectile) -> Vec2 {
    let mut point = projectile.pos;
    for _ in 0..LEAD_ITERATIONS {
        let flight = origin.distance(point) / SHOT_SPEED + BLAST_SETTLE_TICKS;
        point = projectile.pos + projectile.vel * flight;
    }
    point
}

/// Points where shots in flight and fresh player blasts will be
fn pending_detonations(state: &GameState) -> impl Iterator<Item = Vec2> + '_ {
    let shots = state.shots.iter().map(|shot| {
        let remaining = (shot.travel_distance - shot.distance_travelled).max(0.0);
        shot.pos + shot.vel.normalize_or_zero() * remaining
    });
    let blasts = state
        .explosions
        .iter()
        .filter(|e| e.from_player())
        .map(|e| e.pos);
    shots.chain(blasts)
}

/// Pick the lowest missile that can still be intercepted above the no-fire
/// zone and isn't already covered
pub fn choose_target(state: &GameState) -> Option<Vec2> {
    let origin = state.turret.pos;
    let zone_top = NO_FIRE_ZONE_TOP as f32;

    let mut candidates: Vec<(f32, Vec2)> = state
        .projectiles
        .iter()
        .map(|p| (p.pos.y, lead_point(origin, p)))
        .filter(|(_, point)| {
            point.y <= zone_top && (0.0..WINDOW_WIDTH as f32).contains(&point.x)
        })
        .filter(|(_, point)| {
            pending_detonations(state).all(|pending| pending.distance(*point) > CLAIM_RADIUS)
        })
        .collect();

    candidates.sort_by(|a, b| b.0.total_cmp(&a.0));
    candidates.first().map(|(_, point)| *point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{InterceptorShot, TickInput, tick};

    #[test]
    fn test_targets_lowest_missile() {
        let mut state = GameState::empty(1);
        state
            .projectiles
            .push(Projectile::new(Vec2::new(300.0, 100.0), Vec2::new(0.0, 1.0), 0));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(900.0, 300.0), Vec2::new(0.0, 1.0), 4));

        let target = choose_target(&state).unwrap();
        assert_eq!(target.x, 900.0);
        assert!(target.y > 300.0);
    }

    #[test]
    fn test_skips_missiles_already_covered() {
        let mut state = GameState::empty(1);
        let missile = Projectile::new(Vec2::new(900.0, 300.0), Vec2::new(0.0, 1.0), 4);
        let point = lead_point(state.turret.pos, &missile);
        state.projectiles.push(missile);

        let to_point = point - state.turret.pos;
        state.shots.push(InterceptorShot::new(
            state.turret.pos,
            to_point.normalize() * SHOT_SPEED,
            to_point.length_squared(),
        ));
        assert!(choose_target(&state).is_none());
    }

    #[test]
    fn test_ignores_missiles_below_the_zone() {
        let mut state = GameState::empty(1);
        state
            .projectiles
            .push(Projectile::new(Vec2::new(300.0, 650.0), Vec2::new(0.0, 1.0), 0));
        assert!(choose_target(&state).is_none());
    }

    #[test]
    fn test_taps_fire_and_closes() {
        let mut state = GameState::empty(1);
        state
            .projectiles
            .push(Projectile::new(Vec2::new(640.0, 50.0), Vec2::new(0.0, 0.5), 2));
        let mut pilot = Autopilot::new(Some(3), 0);

        let first = pilot.poll(&state);
        assert!(first.fire);
        // Never holds the button two frames in a row
        let second = pilot.poll(&state);
        assert!(!second.fire);
        assert!(!pilot.poll(&state).close_requested);
        assert!(pilot.poll(&state).close_requested);
    }

    #[test]
    fn test_lingers_after_loss() {
        let mut state = GameState::empty(1);
        state.lost = true;
        let mut pilot = Autopilot::new(None, 2);
        assert!(!pilot.poll(&state).close_requested);
        assert!(!pilot.poll(&state).close_requested);
        assert!(pilot.poll(&state).close_requested);
    }

    #[test]
    fn test_autopilot_intercepts_a_missile() {
        let mut state = GameState::empty(1);
        state
            .projectiles
            .push(Projectile::launch(200, 1, 320, 450));
        let mut pilot = Autopilot::new(None, 0);

        for _ in 0..400 {
            let input = pilot.poll(&state);
            tick(&mut state, &TickInput { cursor: input.cursor, fire: input.fire });
            if state.score > 0 {
                break;
            }
        }
        assert!(state.score > 0);
        assert!(!state.structures[1].destroyed);
    }
}
