//! Display and visual-effect layers
//!
//! The simulation only produces [`GameEvent`]s. [`dispatch`] turns them into
//! calls on a [`DisplaySink`] (text on screen) and an [`EffectSink`]
//! (animations and spawned pastry visuals).

pub mod hud;
pub mod stream;

pub use hud::{Hud, format_baked_list, format_order_list};
pub use stream::EventStream;

use crate::sim::{BannerSlot, ButtonId, GameEvent, OvenScreen, Pastry, Plate, TextColor};

/// Receives text updates for the player's screen
pub trait DisplaySink {
    fn show_order_list(&mut self, order: &[Pastry]);
    fn show_baked_list(&mut self, plates: &[Plate]);
    fn show_oven_screen(&mut self, screen: &OvenScreen);
    fn show_banner(&mut self, slot: BannerSlot, text: &str, color: TextColor, duration_ms: u32);
    fn hide_banner(&mut self, slot: BannerSlot);
    /// `None` hides the description
    fn show_button_description(&mut self, text: Option<&str>);
}

/// Receives fire-and-forget visual cues
pub trait EffectSink {
    fn spawn_pastry(&mut self, slot: usize, pastry: &Pastry);
    fn clear_pastries(&mut self);
    fn press_button(&mut self, button: ButtonId);
}

/// Effect sink that only logs cues (headless front ends)
#[derive(Debug, Default)]
pub struct LogEffects;

impl EffectSink for LogEffects {
    fn spawn_pastry(&mut self, slot: usize, pastry: &Pastry) {
        log::debug!("Pastry rises on plate {}: {}", slot + 1, pastry);
    }

    fn clear_pastries(&mut self) {
        log::debug!("Plates cleared");
    }

    fn press_button(&mut self, button: ButtonId) {
        log::debug!("Button press animation: {:?}", button);
    }
}

/// Route simulation events to the display and effect sinks
pub fn dispatch<D, E>(events: &[GameEvent], display: &mut D, effects: &mut E)
where
    D: DisplaySink + ?Sized,
    E: EffectSink + ?Sized,
{
    for event in events {
        match event {
            GameEvent::OrderPlaced { order } => display.show_order_list(order),
            GameEvent::BakedPlatesChanged { plates } => display.show_baked_list(plates),
            GameEvent::OvenScreenChanged { screen } => display.show_oven_screen(screen),
            GameEvent::BannerShown {
                banner,
                duration_ms,
            } => display.show_banner(banner.slot(), banner.text(), banner.color(), *duration_ms),
            GameEvent::BannerHidden { slot } => display.hide_banner(*slot),
            GameEvent::ButtonDescription { button } => {
                display.show_button_description(button.map(|b| b.description()))
            }
            GameEvent::ButtonPressed { button } => effects.press_button(*button),
            GameEvent::PastryPlaced { slot, pastry } => effects.spawn_pastry(*slot, pastry),
            GameEvent::OrderEvaluated { verdict } => {
                log::debug!("Order evaluated: {:?}", verdict)
            }
            GameEvent::PlatesCleared => effects.clear_pastries(),
        }
    }
}
