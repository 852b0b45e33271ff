//! Game state and core simulation types
//!
//! Entities are plain data. Only `Explosion` mutates itself beyond movement;
//! retirement rules live in `tick`.

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn;
use crate::consts::*;

/// Incoming enemy missile
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Index into `GameState::structures`
    pub target: usize,
    /// Spawn point and current point
    pub trail: [Vec2; 2],
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, target: usize) -> Self {
        Self {
            pos,
            vel,
            target,
            trail: [pos, pos],
        }
    }

    /// Launch from the top of the sky so that the missile reaches
    /// `(target_x, GROUND_Y)` after exactly `duration` ticks.
    pub fn launch(sky_x: i32, target: usize, target_x: i32, duration: u32) -> Self {
        let duration = duration.max(1) as f32;
        let vel = Vec2::new((target_x - sky_x) as f32 / duration, GROUND_Y / duration);
        Self::new(Vec2::new(sky_x as f32, 0.0), vel, target)
    }

    /// Move one tick and drag the trail along
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.trail[1] = self.pos;
    }

    pub fn has_landed(&self) -> bool {
        self.pos.y >= GROUND_Y
    }
}

/// Player-fired bullet that detonates after a fixed distance
#[derive(Debug, Clone, PartialEq)]
pub struct InterceptorShot {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Distance to cover before detonating
    pub travel_distance: f32,
    /// Length of `vel`
    pub tick_distance: f32,
    pub distance_travelled: f32,
}

impl InterceptorShot {
    /// `travel_distance_sq` is the squared distance from the firing point
    /// to the aimed-at point.
    pub fn new(pos: Vec2, vel: Vec2, travel_distance_sq: f32) -> Self {
        Self {
            pos,
            vel,
            travel_distance: travel_distance_sq.sqrt(),
            tick_distance: vel.length(),
            distance_travelled: 0.0,
        }
    }

    /// Account for one tick of travel. Returns true once the shot has gone
    /// further than it was aimed and must detonate; the position is only
    /// advanced while the shot is still in flight.
    pub fn advance(&mut self) -> bool {
        self.distance_travelled += self.tick_distance;
        if self.is_spent() {
            return true;
        }
        self.pos += self.vel;
        false
    }

    pub fn is_spent(&self) -> bool {
        self.distance_travelled > self.travel_distance
    }
}

/// What set off an explosion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionOrigin {
    /// A spent interceptor shot; kills score points
    Player,
    /// A missile hitting the ground; kills are free
    Impact,
}

/// Colours an explosion flickers through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionColor {
    Red,
    Yellow,
    Orange,
}

impl ExplosionColor {
    pub const CYCLE: [ExplosionColor; 3] = [Self::Red, Self::Yellow, Self::Orange];
}

/// Expanding blast
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub pos: Vec2,
    pub radius: f32,
    pub ticks: u32,
    pub color_key: u32,
    pub origin: ExplosionOrigin,
}

impl Explosion {
    pub fn new(pos: Vec2, origin: ExplosionOrigin) -> Self {
        Self {
            pos,
            radius: EXPLOSION_START_RADIUS,
            ticks: 0,
            color_key: 0,
            origin,
        }
    }

    /// Cycle colour, grow, and count the tick
    pub fn advance(&mut self) {
        self.color_key = self.color_key.wrapping_add(1);
        self.radius += EXPLOSION_GROWTH;
        self.ticks += 1;
    }

    pub fn color(&self) -> ExplosionColor {
        ExplosionColor::CYCLE[(self.color_key % 3) as usize]
    }

    /// True once the explosion has outlived its lifetime
    pub fn is_expired(&self) -> bool {
        self.ticks > EXPLOSION_LIFETIME_TICKS
    }

    pub fn from_player(&self) -> bool {
        self.origin == ExplosionOrigin::Player
    }
}

/// Ground structure the player defends
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    /// Top-centre of the structure
    pub pos: Vec2,
    pub size: Vec2,
    pub destroyed: bool,
}

impl Structure {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: STRUCTURE_SIZE,
            destroyed: false,
        }
    }

    /// Top-left and bottom-right corners
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let min = Vec2::new(self.pos.x - self.size.x / 2.0, self.pos.y);
        (min, min + self.size)
    }
}

/// The standard row of structures, leaving the middle slot for the turret
pub fn structure_row() -> Vec<Structure> {
    STRUCTURE_SLOTS
        .iter()
        .map(|&slot| {
            let x = (WINDOW_WIDTH / 8 * slot) as f32;
            Structure::new(Vec2::new(x, GROUND_Y))
        })
        .collect()
}

/// Cursor icon the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Crosshair,
    /// Pointer is inside the no-fire zone
    NotAllowed,
}

/// The player's turret
#[derive(Debug, Clone, PartialEq)]
pub struct Turret {
    pub pos: Vec2,
    /// Degrees, [0, 360), re-derived from the cursor every tick
    pub rotation: f32,
    /// Ticks until the next shot may be fired
    pub reload_ticks: u32,
    /// Reload indicator length, refills to `RELOAD_BAR_SIZE`
    pub reload_bar: f32,
    /// Fire button state last tick, for edge detection
    pub fire_held: bool,
    /// Where the turret is actually aiming after no-fire clamping
    pub aim_point: IVec2,
    pub cursor: CursorIcon,
}

impl Default for Turret {
    fn default() -> Self {
        Self {
            pos: TURRET_POSITION,
            rotation: 0.0,
            reload_ticks: 0,
            reload_bar: RELOAD_BAR_SIZE,
            fire_held: false,
            aim_point: TURRET_POSITION.as_ivec2(),
            cursor: CursorIcon::Crosshair,
        }
    }
}

impl Turret {
    pub fn is_reloaded(&self) -> bool {
        self.reload_ticks == 0
    }
}

/// Something the outside world may want to react to (sound, logs)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ShotFired { pos: Vec2 },
    StructureDestroyed { index: usize },
    /// A missile was caught by an explosion; `points` is zero for
    /// impact-caused explosions
    ProjectileDestroyed { pos: Vec2, points: u64 },
    GameLost,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG stream was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub projectiles: Vec<Projectile>,
    pub shots: Vec<InterceptorShot>,
    pub explosions: Vec<Explosion>,
    pub structures: Vec<Structure>,
    pub turret: Turret,
    pub score: u64,
    /// Set once every structure is destroyed; never cleared
    pub lost: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the current tick, drained by the frame loop
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the standard layout and the initial salvo
    pub fn new(seed: u64) -> Self {
        let mut state = Self::empty(seed);
        for _ in 0..INITIAL_PROJECTILES {
            // Nothing is destroyed yet, so there is no need to steer targets
            if let Some(projectile) = spawn::launch(&mut state.rng, &state.structures, false) {
                state.projectiles.push(projectile);
            }
        }
        state
    }

    /// Standard layout with no projectiles in the air
    pub fn empty(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            projectiles: Vec::new(),
            shots: Vec::new(),
            explosions: Vec::new(),
            structures: structure_row(),
            turret: Turret::default(),
            score: 0,
            lost: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn structures_remaining(&self) -> usize {
        self.structures.iter().filter(|s| !s.destroyed).count()
    }

    /// Recompute the loss flag from the structures
    pub fn update_lost(&mut self) {
        self.lost = all_destroyed(&self.structures);
    }

    /// Take this tick's events
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}

pub(crate) fn all_destroyed(structures: &[Structure]) -> bool {
    structures.iter().all(|s| s.destroyed)
}
