//! Session and host settings
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! defaults below.

use std::path::Path;

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Session ===
    /// Court half-extents; the ball leaving them costs a life
    pub court_half_extents: Vec2,
    /// Ball spawn point (also the respawn point)
    pub ball_start: Vec2,
    pub ball_start_velocity: Vec2,
    pub ball_radius: f32,
    pub lives: u8,

    // === Host ===
    /// Simulated seconds per frame
    pub frame_dt: f32,
    /// Stop the headless host after this many frames
    pub max_frames: u32,
    /// Virtual window size in pixels
    pub viewport: UVec2,
    /// Seed for the demo autopilot
    pub autopilot_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_half_extents: COURT_HALF_EXTENTS,
            ball_start: BALL_START,
            ball_start_velocity: BALL_START_VELOCITY,
            ball_radius: BALL_RADIUS,
            lives: STARTING_LIVES,

            frame_dt: 1.0 / 60.0,
            max_frames: 60 * 60 * 5,
            viewport: UVec2::new(1280, 720),
            autopilot_seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
