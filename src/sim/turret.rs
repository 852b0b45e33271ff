//! Turret aiming, reload and firing

use glam::IVec2;

use super::state::{CursorIcon, GameEvent, GameState, InterceptorShot, Turret};
use crate::consts::*;
use crate::{aim_degrees, heading};

/// Clamp a cursor position out of the no-fire zone.
///
/// Returns the point the turret should aim at and whether the cursor was
/// inside the zone.
pub fn clamp_aim(cursor: IVec2) -> (IVec2, bool) {
    if cursor.y > NO_FIRE_ZONE_TOP {
        (IVec2::new(cursor.x, NO_FIRE_ZONE_TOP), true)
    } else {
        (cursor, false)
    }
}

impl Turret {
    /// Point the turret at the (clamped) cursor
    pub fn aim(&mut self, cursor: IVec2) {
        let (target, blocked) = clamp_aim(cursor);
        self.aim_point = target;
        self.cursor = if blocked {
            CursorIcon::NotAllowed
        } else {
            CursorIcon::Crosshair
        };
        self.rotation = aim_degrees(self.pos, target.as_vec2());
    }

    /// Advance the reload countdown by one tick
    pub fn reload_tick(&mut self) {
        if self.reload_ticks > 0 {
            self.reload_ticks -= 1;
            self.reload_bar = (self.reload_bar + RELOAD_TICK_SIZE).min(RELOAD_BAR_SIZE);
        }
    }

    /// Handle the fire button for this tick. Only a fresh press on a loaded
    /// turret produces a shot.
    pub fn trigger(&mut self, fire: bool) -> Option<InterceptorShot> {
        if !fire {
            self.fire_held = false;
            return None;
        }
        if self.fire_held {
            return None;
        }
        self.fire_held = true;
        if !self.is_reloaded() {
            return None;
        }

        self.reload_ticks = RELOAD_DURATION_TICKS;
        self.reload_bar = 0.0;
        let travel_sq = self.pos.distance_squared(self.aim_point.as_vec2());
        // Direction comes from the turret's rotation, not the raw cursor vector
        let vel = heading(self.rotation, SHOT_SPEED);
        Some(InterceptorShot::new(self.pos, vel, travel_sq))
    }
}

/// Aim, reload and fire for one tick
pub fn update(state: &mut GameState, cursor: IVec2, fire: bool) {
    state.turret.aim(cursor);
    if state.lost {
        return;
    }

    state.turret.reload_tick();
    if let Some(shot) = state.turret.trigger(fire) {
        log::debug!(
            "Shot fired at {:.1} degrees, travel {:.1}",
            state.turret.rotation,
            shot.travel_distance
        );
        state.events.push(GameEvent::ShotFired { pos: shot.pos });
        state.shots.push(shot);
    }
}
