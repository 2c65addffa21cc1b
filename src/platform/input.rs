//! Terminal commands and the per-tick input queue

use std::collections::VecDeque;
use std::fmt;

use crate::sim::{ButtonId, TickInput};

/// A player command typed at the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Look at a button and click it
    Press(ButtonId),
    /// Rest the reticle on a button, or on nothing
    Look(Option<ButtonId>),
    Help,
    Quit,
}

/// A word that is not a known command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command '{}' (try 'help')", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

/// Help text listing every command
pub const HELP: &str = "\
Commands (separate several with ';'):
  cake | c          select cake
  cookie | k        select cookie
  icecream | i      select ice-cream
  special | s       add special technique (sweetness +1)
  bake | b          bake the selected pastry onto the next plate
  clear | x         clear the selection
  look <button>     rest the reticle on a button (shows its description)
  look away         look away from the oven
  help | ?          show this help
  quit | q          leave the kitchen";

impl Command {
    pub fn parse(s: &str) -> Result<Self, UnknownCommand> {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return Err(UnknownCommand(String::new()));
        };
        let rest: Vec<&str> = words.collect();

        let command = match (first.to_lowercase().as_str(), rest.as_slice()) {
            ("c", []) => Command::Press(ButtonId::Cake),
            ("k", []) => Command::Press(ButtonId::Cookie),
            ("i", []) => Command::Press(ButtonId::IceCream),
            ("s", []) => Command::Press(ButtonId::Special),
            ("b", []) => Command::Press(ButtonId::Bake),
            ("x", []) => Command::Press(ButtonId::Clear),
            ("help" | "?", []) => Command::Help,
            ("quit" | "q" | "exit", []) => Command::Quit,
            ("look", ["away"]) => Command::Look(None),
            ("look", [target]) => match ButtonId::from_str(target) {
                Some(button) => Command::Look(Some(button)),
                None => return Err(UnknownCommand(s.trim().to_string())),
            },
            ("ice", ["cream"]) => Command::Press(ButtonId::IceCream),
            (word, []) => match ButtonId::from_str(word) {
                Some(button) => Command::Press(button),
                None => return Err(UnknownCommand(s.trim().to_string())),
            },
            _ => return Err(UnknownCommand(s.trim().to_string())),
        };
        Ok(command)
    }
}

/// Parse a line of ';'-separated commands, skipping blanks
pub fn parse_line(line: &str) -> Vec<Result<Command, UnknownCommand>> {
    line.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Command::parse)
        .collect()
}

/// Buffers commands and hands out one press per tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    hovered: Option<ButtonId>,
    pending: VecDeque<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a look or press command; other commands are ignored
    pub fn push(&mut self, command: Command) {
        match command {
            Command::Press(_) | Command::Look(_) => self.pending.push_back(command),
            Command::Help | Command::Quit => {}
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Input for the next tick. Looks apply immediately; at most one press is
    /// consumed, and pressing a button also rests the reticle on it.
    pub fn next_input(&mut self) -> TickInput {
        while let Some(command) = self.pending.pop_front() {
            match command {
                Command::Look(target) => self.hovered = target,
                Command::Press(button) => {
                    self.hovered = Some(button);
                    return TickInput {
                        hovered: self.hovered,
                        pressed: Some(button),
                    };
                }
                Command::Help | Command::Quit => {}
            }
        }
        TickInput {
            hovered: self.hovered,
            pressed: None,
        }
    }
}
