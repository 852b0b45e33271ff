//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only (one call to `tick` per frame)
//! - One seeded RNG stream per game
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod turret;

pub use collision::{circle_contains, explosion_hits};
pub use state::{
    CursorIcon, Explosion, ExplosionColor, ExplosionOrigin, GameEvent, GameState,
    InterceptorShot, Projectile, Structure, Turret,
};
pub use tick::{TickInput, interception_points, step, tick};
