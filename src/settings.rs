//! Game settings and preferences
//!
//! Persisted as JSON next to the executable's working directory. Missing
//! fields fall back to defaults so old files keep loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BANNER_SECS, PLATE_RESET_SECS};
use crate::secs_to_ticks;
use crate::sim::Timing;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed order seed; a time-based seed is used when unset
    pub seed: Option<u64>,

    // === Timing ===
    /// Seconds a status banner or select prompt stays visible
    pub banner_secs: f32,
    /// Seconds between an order evaluation and the plates clearing
    pub plate_reset_secs: f32,
    /// Front-end frames per second
    pub frame_rate: u32,

    // === HUD ===
    /// Show hover descriptions for oven buttons
    pub show_descriptions: bool,
    /// Color banners and the sweetness line with ANSI escapes
    pub ansi_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            banner_secs: BANNER_SECS,
            plate_reset_secs: PLATE_RESET_SECS,
            frame_rate: 30,

            show_descriptions: true,
            ansi_colors: true,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "poly_oven_settings.json";

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Deferred action durations in simulation ticks
    pub fn timing(&self) -> Timing {
        Timing {
            banner_ticks: secs_to_ticks(self.banner_secs),
            plate_reset_ticks: secs_to_ticks(self.plate_reset_secs),
        }
    }

    /// Clamp values that would stall or break the game loop
    fn sanitized(mut self) -> Self {
        if !self.banner_secs.is_finite() || self.banner_secs < 0.0 {
            log::warn!("Invalid banner_secs {}, using default", self.banner_secs);
            self.banner_secs = BANNER_SECS;
        }
        if !self.plate_reset_secs.is_finite() || self.plate_reset_secs < 0.0 {
            log::warn!(
                "Invalid plate_reset_secs {}, using default",
                self.plate_reset_secs
            );
            self.plate_reset_secs = PLATE_RESET_SECS;
        }
        self.frame_rate = self.frame_rate.clamp(1, 240);
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::info!("No settings at {} ({}), using defaults", path.display(), e),
        }
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not save settings to {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}
