//! Sound effect triggers
//!
//! The simulation only says *that* something happened; sinks decide how (or
//! whether) to make noise about it.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// A missile reached a structure
    StructureDestroyed,
    /// The turret fired
    TurretFire,
    /// A missile was caught in an explosion
    ProjectileDestroyed,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [
        Self::StructureDestroyed,
        Self::TurretFire,
        Self::ProjectileDestroyed,
    ];

    /// Asset a playback backend would load for this effect
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::StructureDestroyed => "buildingDestroy.wav",
            Self::TurretFire => "turretFire.wav",
            Self::ProjectileDestroyed => "missileDestroy.wav",
        }
    }
}

/// Which sound, if any, a game event triggers
pub fn sound_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::ShotFired { .. } => Some(SoundEffect::TurretFire),
        GameEvent::StructureDestroyed { .. } => Some(SoundEffect::StructureDestroyed),
        GameEvent::ProjectileDestroyed { .. } => Some(SoundEffect::ProjectileDestroyed),
        GameEvent::GameLost => None,
    }
}

/// Fire-and-forget sound output
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager for the game.
///
/// Without an output device it only logs what it would play and counts it.
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    plays: [u64; SoundEffect::ALL.len()],
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            plays: [0; SoundEffect::ALL.len()],
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// How many times an effect was actually played (muted plays don't count)
    pub fn plays(&self, effect: SoundEffect) -> u64 {
        self.plays[effect as usize]
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.plays[effect as usize] += 1;
        log::debug!("sfx {} at volume {:.2}", effect.asset_name(), vol);
    }
}
