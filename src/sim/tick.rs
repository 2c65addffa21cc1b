//! Fixed timestep simulation tick
//!
//! Fires due timers, tracks the hovered button and dispatches presses to the
//! oven and counter.

use super::button::ButtonId;
use super::oven::NoPastrySelected;
use super::pastry::Pastry;
use super::state::{Banner, BannerSlot, GameEvent, KitchenState};
use super::timers::TimerKey;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Button under the reticle (sticky, sampled every tick)
    pub hovered: Option<ButtonId>,
    /// Button activated this tick (one-shot)
    pub pressed: Option<ButtonId>,
}

/// Advance the kitchen by one fixed timestep
pub fn tick(state: &mut KitchenState, input: &TickInput) {
    state.time_ticks += 1;

    for key in state.timers.pop_due(state.time_ticks) {
        fire_timer(state, key);
    }

    if input.hovered != state.hovered {
        state.hovered = input.hovered;
        state.events.push(GameEvent::ButtonDescription {
            button: input.hovered,
        });
    }

    if let Some(button) = input.pressed {
        press_button(state, button);
    }
}

fn fire_timer(state: &mut KitchenState, key: TimerKey) {
    match key {
        TimerKey::StatusBanner => state.events.push(GameEvent::BannerHidden {
            slot: BannerSlot::OrderStatus,
        }),
        TimerKey::SelectPrompt => state.events.push(GameEvent::BannerHidden {
            slot: BannerSlot::SelectPastry,
        }),
        TimerKey::PlateReset => {
            state.counter.reset_plates();
            state.events.push(GameEvent::PlatesCleared);
            state.events.push(GameEvent::BakedPlatesChanged {
                plates: *state.counter.baked_plates(),
            });
        }
    }
}

/// Run the oven action bound to `button`
pub fn press_button(state: &mut KitchenState, button: ButtonId) {
    log::debug!("Pressed {:?} at tick {}", button, state.time_ticks);
    state.events.push(GameEvent::ButtonPressed { button });

    let result = match button {
        ButtonId::Cake | ButtonId::Cookie | ButtonId::IceCream => {
            if let Some(kind) = button.pastry_kind() {
                state.oven.select(kind);
            }
            Ok(())
        }
        ButtonId::Special => state.oven.add_special_technique(),
        ButtonId::Bake => state.oven.bake().map(|pastry| submit_pastry(state, pastry)),
        ButtonId::Clear => state.oven.clear_selection(),
    };

    match result {
        Ok(()) => state.events.push(GameEvent::OvenScreenChanged {
            screen: state.oven.screen(),
        }),
        Err(NoPastrySelected) => state.show_banner(Banner::SelectPastry),
    }
}

/// Hand a baked pastry to the counter and publish the consequences
fn submit_pastry(state: &mut KitchenState, pastry: Pastry) {
    let submission = state.counter.submit_pastry(pastry, &mut state.rng);

    state.events.push(GameEvent::PastryPlaced {
        slot: submission.slot,
        pastry,
    });
    state.events.push(GameEvent::BakedPlatesChanged {
        plates: *state.counter.baked_plates(),
    });

    let Some(verdict) = submission.verdict else {
        return;
    };

    state.events.push(GameEvent::OrderEvaluated { verdict });
    state.show_banner(Banner::OrderStatus {
        fulfilled: verdict.is_fulfilled(),
    });

    let reset_at = state.time_ticks + state.timing.plate_reset_ticks as u64;
    if state.timers.schedule(TimerKey::PlateReset, reset_at) {
        log::debug!("Plate reset already pending, moved to tick {}", reset_at);
    }

    if verdict.is_fulfilled() {
        state.events.push(GameEvent::OrderPlaced {
            order: *state.counter.desired_order(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLATES;
    use crate::sim::counter::{Counter, Verdict};
    use crate::sim::oven::OvenState;
    use crate::sim::pastry::PastryKind;

    fn press(state: &mut KitchenState, button: ButtonId) {
        tick(
            state,
            &TickInput {
                pressed: Some(button),
                ..Default::default()
            },
        );
    }

    fn idle(state: &mut KitchenState, ticks: u32) {
        for _ in 0..ticks {
            tick(state, &TickInput::default());
        }
    }

    fn known_order() -> [Pastry; PLATES] {
        [
            Pastry::new(PastryKind::Cake),
            Pastry::new(PastryKind::Cookie),
            Pastry::new(PastryKind::IceCream),
        ]
    }

    #[test]
    fn test_select_and_bake_submits_base_pastry() {
        let mut state = KitchenState::new(12345);
        state.drain_events();

        press(&mut state, ButtonId::Cookie);
        press(&mut state, ButtonId::Bake);

        assert_eq!(state.oven.state(), OvenState::Empty);
        assert_eq!(
            state.counter.baked_plates()[0],
            Some(Pastry::new(PastryKind::Cookie))
        );
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::PastryPlaced {
            slot: 0,
            pastry: Pastry::new(PastryKind::Cookie)
        }));
    }

    #[test]
    fn test_bake_empty_shows_prompt_without_submitting() {
        let mut state = KitchenState::new(1);
        state.drain_events();

        press(&mut state, ButtonId::Bake);

        assert_eq!(state.counter.next_slot(), 0);
        assert_eq!(state.counter.baked_plates(), &[None; PLATES]);
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::ButtonPressed {
                    button: ButtonId::Bake
                },
                GameEvent::BannerShown {
                    banner: Banner::SelectPastry,
                    duration_ms: 2000
                },
            ]
        );
    }

    #[test]
    fn test_clear_empty_shows_prompt() {
        let mut state = KitchenState::new(1);
        state.drain_events();
        press(&mut state, ButtonId::Clear);
        assert!(state.timers.is_pending(TimerKey::SelectPrompt));
    }

    #[test]
    fn test_full_cycle_success() {
        let mut state = KitchenState::new(7);
        state.counter = Counter::with_order(known_order());
        state.drain_events();

        // Plate order differs from desired order
        for button in [ButtonId::IceCream, ButtonId::Cake, ButtonId::Cookie] {
            press(&mut state, button);
            press(&mut state, ButtonId::Bake);
        }

        let events = state.drain_events();
        let evaluations: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::OrderEvaluated { .. }))
            .collect();
        assert_eq!(
            evaluations,
            vec![&GameEvent::OrderEvaluated {
                verdict: Verdict::Fulfilled
            }]
        );
        assert!(events.contains(&GameEvent::BannerShown {
            banner: Banner::OrderStatus { fulfilled: true },
            duration_ms: 2000
        }));

        // New order published immediately, plates still full
        assert_eq!(state.counter.orders_generated(), 2);
        assert!(events.iter().any(|e| matches!(e, GameEvent::OrderPlaced { .. })));
        assert!(state.counter.baked_plates().iter().all(|p| p.is_some()));

        // Plates clear after the grace delay
        let reset_ticks = state.timing.plate_reset_ticks;
        idle(&mut state, reset_ticks - 1);
        assert!(state.counter.baked_plates().iter().all(|p| p.is_some()));
        idle(&mut state, 1);
        assert_eq!(state.counter.baked_plates(), &[None; PLATES]);
        assert_eq!(state.counter.next_slot(), 0);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::PlatesCleared));
    }

    #[test]
    fn test_rebake_during_reset_grace_period() {
        let mut state = KitchenState::new(7);
        state.counter = Counter::with_order(known_order());
        for button in [ButtonId::IceCream, ButtonId::Cake, ButtonId::Cookie] {
            press(&mut state, button);
            press(&mut state, ButtonId::Bake);
        }
        state.drain_events();
        let first_deadline = state.timers.due_tick(TimerKey::PlateReset);

        // Overwrites the last plate and evaluates again
        press(&mut state, ButtonId::Cake);
        press(&mut state, ButtonId::Bake);
        assert_eq!(state.counter.next_slot(), PLATES - 1);
        assert_eq!(
            state.counter.baked_plates()[PLATES - 1],
            Some(Pastry::new(PastryKind::Cake))
        );
        let events = state.drain_events();
        let evaluations = events
            .iter()
            .filter(|e| matches!(e, GameEvent::OrderEvaluated { .. }))
            .count();
        assert_eq!(evaluations, 1);

        // Single pending reset, moved to the later deadline
        assert_eq!(
            state.timers.due_tick(TimerKey::PlateReset),
            first_deadline.map(|due| due + 2)
        );

        let reset_ticks = state.timing.plate_reset_ticks;
        idle(&mut state, reset_ticks - 2);
        assert_eq!(Some(state.time_ticks), first_deadline);
        assert!(state.counter.baked_plates().iter().all(|p| p.is_some()));

        idle(&mut state, 2);
        assert_eq!(state.counter.baked_plates(), &[None; PLATES]);
        assert_eq!(state.counter.next_slot(), 0);
        let cleared = state
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::PlatesCleared)
            .count();
        assert_eq!(cleared, 1);
    }

    #[test]
    fn test_full_cycle_failure_keeps_order() {
        let mut state = KitchenState::new(7);
        state.counter = Counter::with_order(known_order());
        state.drain_events();

        for _ in 0..PLATES {
            press(&mut state, ButtonId::Cake);
            press(&mut state, ButtonId::Special);
            press(&mut state, ButtonId::Bake);
        }

        assert_eq!(state.counter.desired_order(), &known_order());
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::BannerShown {
            banner: Banner::OrderStatus { fulfilled: false },
            duration_ms: 2000
        }));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::OrderPlaced { .. })));
        assert!(state.timers.is_pending(TimerKey::PlateReset));
    }

    #[test]
    fn test_banner_reshow_extends_dismissal() {
        let mut state = KitchenState::new(3);
        state.drain_events();
        let banner_ticks = state.timing.banner_ticks;

        press(&mut state, ButtonId::Bake);
        idle(&mut state, banner_ticks / 2);
        press(&mut state, ButtonId::Bake);
        state.drain_events();

        // First deadline passes without hiding
        idle(&mut state, banner_ticks / 2 + 1);
        assert!(state.drain_events().is_empty());

        idle(&mut state, banner_ticks);
        let hidden: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::BannerHidden { .. }))
            .collect();
        assert_eq!(
            hidden,
            vec![GameEvent::BannerHidden {
                slot: BannerSlot::SelectPastry
            }]
        );
    }

    #[test]
    fn test_hover_changes_description() {
        let mut state = KitchenState::new(3);
        state.drain_events();
        let hover = TickInput {
            hovered: Some(ButtonId::Special),
            pressed: None,
        };
        tick(&mut state, &hover);
        tick(&mut state, &hover);
        tick(&mut state, &TickInput::default());
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::ButtonDescription {
                    button: Some(ButtonId::Special)
                },
                GameEvent::ButtonDescription { button: None },
            ]
        );
    }

    #[test]
    fn test_determinism() {
        let mut state1 = KitchenState::new(99999);
        let mut state2 = KitchenState::new(99999);

        let inputs = [
            ButtonId::Cake,
            ButtonId::Bake,
            ButtonId::IceCream,
            ButtonId::Special,
            ButtonId::Bake,
            ButtonId::Cookie,
            ButtonId::Bake,
        ];
        for button in inputs {
            press(&mut state1, button);
            press(&mut state2, button);
        }
        idle(&mut state1, 200);
        idle(&mut state2, 200);

        assert_eq!(state1.drain_events(), state2.drain_events());
        assert_eq!(
            state1.counter.desired_order(),
            state2.counter.desired_order()
        );
    }
}
