//! Kitchen state and the events it publishes
//!
//! The kitchen owns the oven, the counter, the deferred timers and the
//! seeded RNG. Nothing is reached through globals: `tick` receives the state
//! and hands each component the collaborators it needs.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::button::ButtonId;
use super::counter::{Counter, Verdict};
use super::oven::{Oven, OvenScreen, TextColor};
use super::pastry::{Pastry, Plate};
use super::timers::{TimerKey, Timers};
use crate::consts::*;
use crate::secs_to_ticks;

/// Transient on-screen messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    /// Result of an order evaluation
    OrderStatus { fulfilled: bool },
    /// The player pressed a pastry action with an empty oven
    SelectPastry,
}

/// Where a banner is drawn; one banner per slot at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BannerSlot {
    OrderStatus,
    SelectPastry,
}

impl Banner {
    pub fn text(&self) -> &'static str {
        match self {
            Banner::OrderStatus { fulfilled: true } => "Good job!",
            Banner::OrderStatus { fulfilled: false } => "Start over.",
            Banner::SelectPastry => "Select a pastry first!",
        }
    }

    pub fn color(&self) -> TextColor {
        match self {
            Banner::OrderStatus { fulfilled: true } => TextColor::Green,
            Banner::OrderStatus { fulfilled: false } => TextColor::Red,
            Banner::SelectPastry => TextColor::Black,
        }
    }

    pub fn slot(&self) -> BannerSlot {
        match self {
            Banner::OrderStatus { .. } => BannerSlot::OrderStatus,
            Banner::SelectPastry => BannerSlot::SelectPastry,
        }
    }
}

impl BannerSlot {
    /// Timer that dismisses this slot
    pub fn timer_key(&self) -> TimerKey {
        match self {
            BannerSlot::OrderStatus => TimerKey::StatusBanner,
            BannerSlot::SelectPastry => TimerKey::SelectPrompt,
        }
    }
}

/// Everything the simulation tells the display and effect layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new desired order is on the counter
    OrderPlaced { order: [Pastry; PLATES] },
    /// Baked plates changed (a pastry landed or the plates were cleared)
    BakedPlatesChanged { plates: [Plate; PLATES] },
    /// Oven icon or sweetness line changed
    OvenScreenChanged { screen: OvenScreen },
    BannerShown { banner: Banner, duration_ms: u32 },
    BannerHidden { slot: BannerSlot },
    /// Hovered button changed; `None` hides the description
    ButtonDescription { button: Option<ButtonId> },
    /// Play the press animation for a button
    ButtonPressed { button: ButtonId },
    /// Spawn the pastry visual on a plate
    PastryPlaced { slot: usize, pastry: Pastry },
    OrderEvaluated { verdict: Verdict },
    /// Remove every pastry visual from the plates
    PlatesCleared,
}

/// Durations of deferred actions, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub banner_ticks: u32,
    pub plate_reset_ticks: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            banner_ticks: secs_to_ticks(BANNER_SECS),
            plate_reset_ticks: secs_to_ticks(PLATE_RESET_SECS),
        }
    }
}

/// Complete kitchen state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct KitchenState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Order RNG
    pub(super) rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub oven: Oven,
    pub counter: Counter,
    pub timers: Timers,
    pub timing: Timing,
    /// Button under the reticle as of the last tick
    pub hovered: Option<ButtonId>,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
}

impl KitchenState {
    /// Create a new kitchen with the given seed and default timing
    pub fn new(seed: u64) -> Self {
        Self::with_timing(seed, Timing::default())
    }

    pub fn with_timing(seed: u64, timing: Timing) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let counter = Counter::new(&mut rng);
        let mut state = Self {
            seed,
            rng,
            time_ticks: 0,
            oven: Oven::new(),
            counter,
            timers: Timers::new(),
            timing,
            hovered: None,
            events: Vec::new(),
        };
        state.publish_all();
        state
    }

    /// Queue events describing the full current display, e.g. after the
    /// counter is replaced
    pub fn publish_all(&mut self) {
        self.events.push(GameEvent::OrderPlaced {
            order: *self.counter.desired_order(),
        });
        self.events.push(GameEvent::BakedPlatesChanged {
            plates: *self.counter.baked_plates(),
        });
        self.events.push(GameEvent::OvenScreenChanged {
            screen: self.oven.screen(),
        });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Show a banner and (re)arm its dismissal
    pub fn show_banner(&mut self, banner: Banner) {
        let due = self.time_ticks + self.timing.banner_ticks as u64;
        if self.timers.schedule(banner.slot().timer_key(), due) {
            log::debug!("{:?} banner re-shown, dismissal pushed to tick {}", banner.slot(), due);
        }
        self.events.push(GameEvent::BannerShown {
            banner,
            duration_ms: crate::ticks_to_millis(self.timing.banner_ticks),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_publishes_initial_display() {
        let mut state = KitchenState::new(42);
        let events = state.drain_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], GameEvent::OrderPlaced { .. }));
        assert_eq!(
            events[1],
            GameEvent::BakedPlatesChanged {
                plates: [None; PLATES]
            }
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = KitchenState::new(2020);
        let b = KitchenState::new(2020);
        assert_eq!(a.counter.desired_order(), b.counter.desired_order());
    }

    #[test]
    fn test_show_banner_schedules_dismissal() {
        let mut state = KitchenState::new(1);
        state.drain_events();
        state.time_ticks = 10;
        state.show_banner(Banner::SelectPastry);
        assert_eq!(
            state.timers.due_tick(TimerKey::SelectPrompt),
            Some(10 + state.timing.banner_ticks as u64)
        );
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::BannerShown {
                banner: Banner::SelectPastry,
                duration_ms: 2000
            }]
        );
    }

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::BannerHidden {
            slot: BannerSlot::OrderStatus,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"banner_hidden","slot":"OrderStatus"}"#);
    }
}
