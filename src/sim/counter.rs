//! Counter: random orders, plate filling and order evaluation

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pastry::{Pastry, PastryKind, Plate};
use crate::consts::PLATES;

/// Result of comparing the baked plates against the desired order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every desired pastry was found on some plate
    Fulfilled,
    /// The first desired pastry with no match on any plate
    Rejected { missing: Pastry },
}

impl Verdict {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Verdict::Fulfilled)
    }
}

/// What happened when a pastry landed on the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// Plate the pastry was placed on
    pub slot: usize,
    /// Set when this pastry filled the last plate
    pub verdict: Option<Verdict>,
}

/// Order manager for the counter plates
#[derive(Debug, Clone)]
pub struct Counter {
    desired: [Pastry; PLATES],
    baked: [Plate; PLATES],
    next_slot: usize,
    /// Orders generated so far (including the current one)
    orders_generated: u32,
}

impl Counter {
    /// Create a counter with a freshly generated order
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut counter = Self {
            desired: [Pastry::new(PastryKind::Cake); PLATES],
            baked: [None; PLATES],
            next_slot: 0,
            orders_generated: 0,
        };
        counter.generate_order(rng);
        counter
    }

    /// Create a counter with a known order (for replays and tests)
    pub fn with_order(desired: [Pastry; PLATES]) -> Self {
        Self {
            desired,
            baked: [None; PLATES],
            next_slot: 0,
            orders_generated: 1,
        }
    }

    pub fn desired_order(&self) -> &[Pastry; PLATES] {
        &self.desired
    }

    pub fn baked_plates(&self) -> &[Plate; PLATES] {
        &self.baked
    }

    pub fn next_slot(&self) -> usize {
        self.next_slot
    }

    pub fn orders_generated(&self) -> u32 {
        self.orders_generated
    }

    /// Replace the whole desired order with independently drawn pastries
    pub fn generate_order<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in self.desired.iter_mut() {
            *slot = Pastry::random(rng);
        }
        self.orders_generated += 1;
        log::info!(
            "Order #{}: {}",
            self.orders_generated,
            self.desired
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        );
    }

    /// Place a pastry on the next plate.
    ///
    /// Filling the last plate evaluates the order; a fulfilled order is
    /// replaced right away. The plate index stays on the last plate until
    /// [`Counter::reset_plates`] runs.
    pub fn submit_pastry<R: Rng + ?Sized>(&mut self, pastry: Pastry, rng: &mut R) -> Submission {
        let slot = self.next_slot;
        self.baked[slot] = Some(pastry);

        if slot == PLATES - 1 {
            let verdict = self.evaluate_order();
            match verdict {
                Verdict::Fulfilled => {
                    log::info!("Order #{} fulfilled", self.orders_generated);
                    self.generate_order(rng);
                }
                Verdict::Rejected { missing } => {
                    log::info!(
                        "Order #{} rejected, missing {}",
                        self.orders_generated,
                        missing
                    );
                }
            }
            Submission {
                slot,
                verdict: Some(verdict),
            }
        } else {
            self.next_slot += 1;
            Submission {
                slot,
                verdict: None,
            }
        }
    }

    /// Check that every desired pastry appears on at least one plate.
    ///
    /// Position and multiplicity are ignored: a single baked pastry satisfies
    /// every desired entry equal to it.
    pub fn evaluate_order(&self) -> Verdict {
        for desired in &self.desired {
            if !self.baked.contains(&Some(*desired)) {
                return Verdict::Rejected { missing: *desired };
            }
        }
        Verdict::Fulfilled
    }

    /// Empty every plate and start filling from the first one again
    pub fn reset_plates(&mut self) {
        self.baked = [None; PLATES];
        self.next_slot = 0;
    }
}
