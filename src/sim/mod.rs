//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, terminal or platform dependencies

pub mod button;
pub mod counter;
pub mod oven;
pub mod pastry;
pub mod state;
pub mod tick;
pub mod timers;

pub use button::ButtonId;
pub use counter::{Counter, Submission, Verdict};
pub use oven::{NoPastrySelected, Oven, OvenScreen, OvenState, TextColor};
pub use pastry::{Pastry, PastryKind, Plate};
pub use state::{Banner, BannerSlot, GameEvent, KitchenState, Timing};
pub use tick::{TickInput, press_button, tick};
pub use timers::{TimerKey, Timers};
