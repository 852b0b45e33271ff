//! Missile Command - a turret defends a row of structures from falling missiles
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (entities, spawning, turret, collisions)
//! - `renderer`: Maps a frame of simulation state to draw primitives
//! - `audio`: Fire-and-forget sound effect triggers
//! - `platform`: Input sources (scripted input, autopilot)
//! - `game_loop`: Ties input, simulation, audio and presentation together
//! - `settings`: Runtime (non-gameplay) preferences

pub mod audio;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{FrameLoop, Pacing, RunSummary};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Window dimensions (pixels, y grows downward)
    pub const WINDOW_WIDTH: i32 = 1280;
    pub const WINDOW_HEIGHT: i32 = 720;

    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;

    /// Points per pixel of height left above the bottom of the window
    pub const SCORE_MULTIPLIER: f32 = 0.1;

    /// Reload timing and indicator
    pub const RELOAD_DURATION_TICKS: u32 = 30;
    pub const RELOAD_BAR_SIZE: f32 = 100.0;
    pub const RELOAD_TICK_SIZE: f32 = RELOAD_BAR_SIZE / RELOAD_DURATION_TICKS as f32;

    /// Interceptor shots
    pub const SHOT_RADIUS: f32 = 3.0;
    pub const SHOT_SPEED: f32 = 9.0;

    /// Explosions start a little larger than the shot that caused them
    pub const EXPLOSION_START_RADIUS: f32 = SHOT_RADIUS * 1.5;
    pub const EXPLOSION_GROWTH: f32 = 1.0;
    pub const EXPLOSION_LIFETIME_TICKS: u32 = 60;

    /// Incoming missiles
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const INITIAL_PROJECTILES: usize = 1;
    /// One spawn roll in this many succeeds each tick
    pub const SPAWN_CHANCE: u32 = 100;
    pub const FLIGHT_DURATION_MIN_TICKS: u32 = 400;
    pub const FLIGHT_DURATION_VARIATION_TICKS: u32 = 120;

    /// Ground structures
    pub const STRUCTURE_SIZE: Vec2 = Vec2::new(100.0, 25.0);
    pub const STRUCTURE_COUNT: usize = 6;
    /// Slots (in eighths of the window width) that hold a structure; the
    /// middle slot is left open for the turret.
    pub const STRUCTURE_SLOTS: [i32; STRUCTURE_COUNT] = [1, 2, 3, 5, 6, 7];

    /// Missiles detonate once they reach the tops of the structures
    pub const GROUND_Y: f32 = WINDOW_HEIGHT as f32 - STRUCTURE_SIZE.y;

    /// Aiming below this line is clamped to it
    pub const NO_FIRE_ZONE_HEIGHT: i32 = 120;
    pub const NO_FIRE_ZONE_TOP: i32 = WINDOW_HEIGHT - NO_FIRE_ZONE_HEIGHT;

    /// Turret pivot sits at the bottom-centre of the window
    pub const TURRET_POSITION: Vec2 = Vec2::new((WINDOW_WIDTH / 2) as f32, WINDOW_HEIGHT as f32);
    pub const TURRET_SIZE: Vec2 = Vec2::new(100.0, 10.0);
    /// Pivot offset inside the turret barrel rectangle
    pub const TURRET_PIVOT: Vec2 = Vec2::new(10.0, 5.0);
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Angle (degrees, [0, 360)) of the vector pointing from `from` to `to`.
///
/// Uses the two-argument arctangent, so a purely vertical vector yields
/// 90 or 270 degrees and the zero vector yields 0.
#[inline]
pub fn aim_degrees(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    normalize_degrees(delta.y.atan2(delta.x).to_degrees())
}

/// Velocity vector of magnitude `speed` pointing along `degrees`
#[inline]
pub fn heading(degrees: f32, speed: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(speed * radians.cos(), speed * radians.sin())
}
