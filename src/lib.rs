//! Poly Oven - a first-person pastry baking minigame
//!
//! Core modules:
//! - `sim`: Deterministic simulation (oven, counter, orders, timers)
//! - `ui`: Display/effect sinks and HUD text
//! - `platform`: Terminal input parsing
//! - `settings`: JSON-backed preferences and timing

pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz)
    pub const SIM_DT: f32 = 1.0 / 50.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of plates on the counter (pastries per order)
    pub const PLATES: usize = 3;

    /// How long order status and select prompts stay on screen
    pub const BANNER_SECS: f32 = 2.0;
    /// Grace period before baked plates are cleared after an evaluation
    pub const PLATE_RESET_SECS: f32 = 1.0;
}

/// Convert a duration in seconds to whole simulation ticks (at least one)
#[inline]
pub fn secs_to_ticks(secs: f32) -> u32 {
    ((secs / consts::SIM_DT).round() as u32).max(1)
}

/// Convert simulation ticks back to milliseconds
#[inline]
pub fn ticks_to_millis(ticks: u32) -> u32 {
    (ticks as f32 * consts::SIM_DT * 1000.0).round() as u32
}
