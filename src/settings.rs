//! Runtime settings and preferences
//!
//! Gameplay constants are fixed in `consts`; this only covers how a run is
//! presented and driven. Loaded from an optional JSON file, with every field
//! falling back to its default.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Visuals ===
    /// Draw missile trails
    pub trails: bool,

    // === Loop ===
    /// Pace the loop at the fixed tick rate instead of running flat out
    pub throttle: bool,
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
    /// Frames the autopilot keeps the game open after it is lost
    pub linger_frames: u64,
    /// Log a progress line every this many frames (0 disables)
    pub report_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            trails: true,

            throttle: true,
            max_frames: None,
            linger_frames: 180,
            report_interval: 600,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid settings JSON")
    }

    /// Load settings from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };

        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Effective effects volume (respects mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }
}
