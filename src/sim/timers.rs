//! Keyed deferred actions measured in simulation ticks
//!
//! Each key has at most one pending entry. Scheduling a key again replaces
//! the pending entry, so a banner shown twice is hidden once, at the later
//! deadline.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Deferred actions the kitchen knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKey {
    /// Hide the "Good job!" / "Start over." banner
    StatusBanner,
    /// Hide the "select a pastry" prompt
    SelectPrompt,
    /// Clear the counter plates once placement effects are done
    PlateReset,
}

#[derive(Debug, Clone)]
struct Scheduled {
    due_tick: u64,
    sequence: u64,
    key: TimerKey,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.due_tick == other.due_tick && self.sequence == other.sequence
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the earliest first
        other
            .due_tick
            .cmp(&self.due_tick)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    queue: BinaryHeap<Scheduled>,
    next_sequence: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire at `due_tick`. Returns true if a pending entry
    /// for the same key was replaced.
    pub fn schedule(&mut self, key: TimerKey, due_tick: u64) -> bool {
        let replaced = self.cancel(key);
        self.queue.push(Scheduled {
            due_tick,
            sequence: self.next_sequence,
            key,
        });
        self.next_sequence += 1;
        replaced
    }

    /// Drop the pending entry for `key`, if any
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        let before = self.queue.len();
        self.queue.retain(|s| s.key != key);
        self.queue.len() != before
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.queue.iter().any(|s| s.key == key)
    }

    /// Tick at which `key` fires, if pending
    pub fn due_tick(&self, key: TimerKey) -> Option<u64> {
        self.queue.iter().find(|s| s.key == key).map(|s| s.due_tick)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remove and return every key due at or before `now`, earliest first
    pub fn pop_due(&mut self, now: u64) -> Vec<TimerKey> {
        let mut fired = Vec::new();
        while let Some(next) = self.queue.peek() {
            if next.due_tick > now {
                break;
            }
            if let Some(scheduled) = self.queue.pop() {
                fired.push(scheduled.key);
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_due_in_order() {
        let mut timers = Timers::new();
        timers.schedule(TimerKey::StatusBanner, 100);
        timers.schedule(TimerKey::PlateReset, 50);
        timers.schedule(TimerKey::SelectPrompt, 50);

        assert!(timers.pop_due(49).is_empty());
        assert_eq!(
            timers.pop_due(50),
            vec![TimerKey::PlateReset, TimerKey::SelectPrompt]
        );
        assert!(timers.is_pending(TimerKey::StatusBanner));
        assert_eq!(timers.pop_due(500), vec![TimerKey::StatusBanner]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut timers = Timers::new();
        assert!(!timers.schedule(TimerKey::SelectPrompt, 100));
        assert!(timers.schedule(TimerKey::SelectPrompt, 160));

        assert!(timers.pop_due(100).is_empty());
        assert_eq!(timers.due_tick(TimerKey::SelectPrompt), Some(160));
        assert_eq!(timers.pop_due(160), vec![TimerKey::SelectPrompt]);
        assert!(timers.pop_due(1000).is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut timers = Timers::new();
        timers.schedule(TimerKey::PlateReset, 10);
        assert!(timers.cancel(TimerKey::PlateReset));
        assert!(!timers.cancel(TimerKey::PlateReset));
        assert!(timers.pop_due(10).is_empty());
    }
}
